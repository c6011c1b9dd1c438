// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::model;

/// The identifier of an entity within its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Id {
    /// A numeric identifier, typically allocated by the service.
    Id(i64),
    /// A name chosen by the application.
    Name(String),
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// A (kind, identifier) pair in a key path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathElement {
    kind: String,
    id: Option<Id>,
}

impl PathElement {
    /// Creates a new path element with the given kind and identifier.
    pub fn new<K: Into<String>, I: Into<Id>>(kind: K, id: I) -> Self {
        Self {
            kind: kind.into(),
            id: Some(id.into()),
        }
    }

    /// Creates an incomplete path element, with a kind but no identifier.
    pub fn incomplete<K: Into<String>>(kind: K) -> Self {
        Self {
            kind: kind.into(),
            id: None,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn id(&self) -> Option<i64> {
        match &self.id {
            Some(Id::Id(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match &self.id {
            Some(Id::Name(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns the identifier, if any.
    pub fn name_or_id(&self) -> Option<&Id> {
        self.id.as_ref()
    }
}

impl From<&model::key::PathElement> for PathElement {
    fn from(value: &model::key::PathElement) -> Self {
        let id = match (value.id, &value.name) {
            (Some(id), _) => Some(Id::Id(id)),
            (None, Some(name)) => Some(Id::Name(name.clone())),
            (None, None) => None,
        };
        Self {
            kind: value.kind.clone(),
            id,
        }
    }
}

impl From<&PathElement> for model::key::PathElement {
    fn from(value: &PathElement) -> Self {
        let element = model::key::PathElement::default().set_kind(value.kind.as_str());
        match &value.id {
            Some(Id::Id(v)) => element.set_id(*v),
            Some(Id::Name(v)) => element.set_name(v.as_str()),
            None => element,
        }
    }
}

/// The key of a Datastore entity.
///
/// A key identifies an entity within a project, database and namespace. The
/// path starts at the root ancestor and ends with the entity itself. Keys
/// returned by the service are always complete, that is, their last path
/// element has an id or a name.
///
/// # Example
/// ```
/// # use google_cloud_datastore::Key;
/// let key = Key::builder("my-project", "Task")
///     .namespace("prod")
///     .ancestor(("TaskList", "default"))
///     .name("sample-task")
///     .build();
/// assert_eq!(key.kind(), Some("Task"));
/// assert_eq!(key.name(), Some("sample-task"));
/// assert_eq!(key.ancestors().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Key {
    project_id: String,
    database_id: String,
    namespace: String,
    path: Vec<PathElement>,
}

impl Key {
    /// Returns a builder for a key of the given kind.
    pub fn builder<P: Into<String>, K: Into<String>>(project_id: P, kind: K) -> KeyBuilder {
        KeyBuilder {
            project_id: project_id.into(),
            database_id: String::new(),
            namespace: String::new(),
            ancestors: Vec::new(),
            kind: kind.into(),
            id: None,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// The database of the key. Empty for the default database.
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// The namespace of the key. Empty for the default namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The full path, from the root ancestor to this key.
    pub fn path(&self) -> &[PathElement] {
        &self.path
    }

    /// The path elements preceding the last one.
    pub fn ancestors(&self) -> &[PathElement] {
        match self.path.split_last() {
            Some((_, ancestors)) => ancestors,
            None => &[],
        }
    }

    /// The kind of the entity. `None` only for empty keys.
    pub fn kind(&self) -> Option<&str> {
        self.path.last().map(PathElement::kind)
    }

    pub fn id(&self) -> Option<i64> {
        self.path.last().and_then(PathElement::id)
    }

    pub fn name(&self) -> Option<&str> {
        self.path.last().and_then(PathElement::name)
    }

    /// Returns true if the last path element has an id or a name.
    pub fn is_complete(&self) -> bool {
        self.path.last().is_some_and(|e| e.id.is_some())
    }

    /// Returns the key of the parent entity, if any.
    pub fn parent(&self) -> Option<Key> {
        match self.ancestors() {
            [] => None,
            ancestors => Some(Key {
                project_id: self.project_id.clone(),
                database_id: self.database_id.clone(),
                namespace: self.namespace.clone(),
                path: ancestors.to_vec(),
            }),
        }
    }
}

impl From<&model::Key> for Key {
    fn from(value: &model::Key) -> Self {
        let (project_id, database_id, namespace) = value
            .partition_id
            .as_ref()
            .map(|p| {
                (
                    p.project_id.clone(),
                    p.database_id.clone().unwrap_or_default(),
                    p.namespace_id.clone().unwrap_or_default(),
                )
            })
            .unwrap_or_default();
        Self {
            project_id,
            database_id,
            namespace,
            path: value.path.iter().map(PathElement::from).collect(),
        }
    }
}

impl From<&Key> for model::Key {
    fn from(value: &Key) -> Self {
        let mut partition_id = model::PartitionId::default().set_project_id(value.project_id());
        if !value.database_id.is_empty() {
            partition_id = partition_id.set_database_id(value.database_id());
        }
        if !value.namespace.is_empty() {
            partition_id = partition_id.set_namespace_id(value.namespace());
        }
        model::Key::default()
            .set_partition_id(partition_id)
            .set_path(value.path.iter().map(model::key::PathElement::from))
    }
}

/// A builder for [Key].
#[derive(Clone, Debug)]
pub struct KeyBuilder {
    project_id: String,
    database_id: String,
    namespace: String,
    ancestors: Vec<PathElement>,
    kind: String,
    id: Option<Id>,
}

impl KeyBuilder {
    /// Sets the database. Keys use the default database unless this is called.
    pub fn database_id<T: Into<String>>(mut self, v: T) -> Self {
        self.database_id = v.into();
        self
    }

    pub fn namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace = v.into();
        self
    }

    /// Appends an ancestor to the key path.
    pub fn ancestor<T: Into<PathElement>>(mut self, v: T) -> Self {
        self.ancestors.push(v.into());
        self
    }

    pub fn kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = v.into();
        self
    }

    pub fn id(mut self, v: i64) -> Self {
        self.id = Some(Id::Id(v));
        self
    }

    pub fn name<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(Id::Name(v.into()));
        self
    }

    pub fn build(self) -> Key {
        let mut path = self.ancestors;
        path.push(PathElement {
            kind: self.kind,
            id: self.id,
        });
        Key {
            project_id: self.project_id,
            database_id: self.database_id,
            namespace: self.namespace,
            path,
        }
    }
}

impl<K: Into<String>, I: Into<Id>> From<(K, I)> for PathElement {
    fn from(value: (K, I)) -> Self {
        PathElement::new(value.0, value.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder() {
        let key = Key::builder("p", "Task").id(42).build();
        assert_eq!(key.project_id(), "p");
        assert_eq!(key.database_id(), "");
        assert_eq!(key.namespace(), "");
        assert_eq!(key.kind(), Some("Task"));
        assert_eq!(key.id(), Some(42));
        assert_eq!(key.name(), None);
        assert!(key.is_complete());
        assert!(key.ancestors().is_empty());
        assert_eq!(key.parent(), None);
    }

    #[test]
    fn incomplete() {
        let key = Key::builder("p", "Task").build();
        assert!(!key.is_complete());
        assert_eq!(key.id(), None);
        assert_eq!(key.name(), None);
    }

    #[test]
    fn ancestors() {
        let key = Key::builder("p", "Task")
            .database_id("db")
            .namespace("ns")
            .ancestor(("List", "default"))
            .ancestor(PathElement::new("Bucket", 7_i64))
            .name("t1")
            .build();
        assert_eq!(key.path().len(), 3);
        assert_eq!(key.ancestors()[0].name(), Some("default"));
        assert_eq!(key.ancestors()[1].id(), Some(7));
        let parent = key.parent().expect("key has a parent");
        assert_eq!(parent.kind(), Some("Bucket"));
        assert_eq!(parent.database_id(), "db");
        assert_eq!(parent.namespace(), "ns");
        assert_eq!(parent.parent().and_then(|k| k.parent()), None);
    }

    #[test]
    fn empty() {
        let key = Key::default();
        assert_eq!(key.kind(), None);
        assert!(!key.is_complete());
        assert!(key.ancestors().is_empty());
    }

    #[test]
    fn from_wire() -> anyhow::Result<()> {
        let input = serde_json::from_value::<model::Key>(json!({
            "partitionId": {"projectId": "p", "namespaceId": "ns"},
            "path": [
                {"kind": "List", "name": "default"},
                {"kind": "Task", "id": "123"},
                {"kind": "Note"}
            ]
        }))?;
        let key = Key::from(&input);
        assert_eq!(key.project_id(), "p");
        assert_eq!(key.namespace(), "ns");
        assert_eq!(key.path()[0], PathElement::new("List", "default"));
        assert_eq!(key.path()[1], PathElement::new("Task", 123_i64));
        assert_eq!(key.path()[2], PathElement::incomplete("Note"));
        assert!(!key.is_complete());
        Ok(())
    }

    #[test]
    fn to_wire() -> anyhow::Result<()> {
        let key = Key::builder("p", "Task")
            .ancestor(("List", "default"))
            .id(123)
            .build();
        let got = serde_json::to_value(model::Key::from(&key))?;
        let want = json!({
            "partitionId": {"projectId": "p"},
            "path": [
                {"kind": "List", "name": "default"},
                {"kind": "Task", "id": "123"}
            ]
        });
        assert_eq!(got, want);
        assert_eq!(Key::from(&model::Key::from(&key)), key);
        Ok(())
    }

    #[test]
    fn named_database_round_trip() -> anyhow::Result<()> {
        let input = serde_json::from_value::<model::Key>(json!({
            "partitionId": {"projectId": "p", "databaseId": "db", "namespaceId": "ns"},
            "path": [{"kind": "Task", "name": "t1"}]
        }))?;
        let key = Key::from(&input);
        assert_eq!(key.database_id(), "db");
        assert_eq!(
            key,
            Key::builder("p", "Task")
                .database_id("db")
                .namespace("ns")
                .name("t1")
                .build()
        );
        assert_eq!(model::Key::from(&key), input);
        Ok(())
    }

    #[test]
    fn from_wire_missing_partition() {
        let key = Key::from(&model::Key::default());
        assert_eq!(key, Key::default());
    }
}
