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
use crate::{Key, Value, ValueOptions};
use std::collections::BTreeMap;

/// A Datastore entity: an optional key and a set of named properties.
///
/// Entities returned by full queries always have a key. Entities embedded as
/// property values may not.
///
/// # Example
/// ```
/// # use google_cloud_datastore::{Entity, Key};
/// let entity = Entity::new(Key::builder("my-project", "Task").name("t1").build())
///     .set_property("description", "buy milk")
///     .set_property("done", false);
/// assert_eq!(entity.get("done").and_then(|v| v.as_bool()), Some(false));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    key: Option<Key>,
    properties: BTreeMap<String, Value>,
    options: BTreeMap<String, ValueOptions>,
}

impl Entity {
    /// Creates an entity with the given key and no properties.
    pub fn new(key: Key) -> Self {
        Self {
            key: Some(key),
            ..Default::default()
        }
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    /// Returns the value of the named property.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns the index settings of the named property, if it has any.
    pub fn property_options(&self, name: &str) -> Option<&ValueOptions> {
        self.options.get(name)
    }

    pub fn is_excluded_from_indexes(&self, name: &str) -> bool {
        self.options
            .get(name)
            .is_some_and(ValueOptions::exclude_from_indexes)
    }

    /// Sets the key of the entity.
    pub fn set_key<T: Into<Key>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of a property, replacing any previous value.
    ///
    /// The index settings of the property are not changed.
    pub fn set_property<K: Into<String>, V: Into<Value>>(mut self, name: K, value: V) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Sets the index settings of a property. Empty settings are removed.
    pub fn set_property_options<K: Into<String>>(mut self, name: K, options: ValueOptions) -> Self {
        let name = name.into();
        if options.is_empty() {
            self.options.remove(&name);
        } else {
            self.options.insert(name, options);
        }
        self
    }

    /// Returns true if the entity has neither a key nor properties.
    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.properties.is_empty()
    }
}

impl From<&model::Entity> for Entity {
    fn from(value: &model::Entity) -> Self {
        let (key, properties, options) = from_wire(value);
        Self {
            key,
            properties,
            options,
        }
    }
}

impl From<&Entity> for model::Entity {
    fn from(value: &Entity) -> Self {
        to_wire(value.key.as_ref(), &value.properties, &value.options)
    }
}

/// An entity produced by a projection query.
///
/// Projection results only contain the projected properties. Their values may
/// differ in representation from the stored values, for example timestamps
/// are returned as integers. The key may be absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectionEntity {
    key: Option<Key>,
    properties: BTreeMap<String, Value>,
    options: BTreeMap<String, ValueOptions>,
}

impl ProjectionEntity {
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property_options(&self, name: &str) -> Option<&ValueOptions> {
        self.options.get(name)
    }

    pub fn is_excluded_from_indexes(&self, name: &str) -> bool {
        self.options
            .get(name)
            .is_some_and(ValueOptions::exclude_from_indexes)
    }
}

impl From<&model::Entity> for ProjectionEntity {
    fn from(value: &model::Entity) -> Self {
        let (key, properties, options) = from_wire(value);
        Self {
            key,
            properties,
            options,
        }
    }
}

impl From<&ProjectionEntity> for model::Entity {
    fn from(value: &ProjectionEntity) -> Self {
        to_wire(value.key.as_ref(), &value.properties, &value.options)
    }
}

type Properties = (
    Option<Key>,
    BTreeMap<String, Value>,
    BTreeMap<String, ValueOptions>,
);

fn from_wire(value: &model::Entity) -> Properties {
    let key = value.key.as_ref().map(Key::from);
    let properties = value
        .properties
        .iter()
        .map(|(k, v)| (k.clone(), Value::from(v)))
        .collect();
    let options = value
        .properties
        .iter()
        .map(|(k, v)| (k.clone(), ValueOptions::from_wire(v)))
        .filter(|(_, o)| !o.is_empty())
        .collect();
    (key, properties, options)
}

fn to_wire(
    key: Option<&Key>,
    properties: &BTreeMap<String, Value>,
    options: &BTreeMap<String, ValueOptions>,
) -> model::Entity {
    let mut wire = model::Entity::default().set_properties(properties.iter().map(|(k, v)| {
        let mut value = model::Value::from(v);
        if let Some(o) = options.get(k) {
            o.apply(&mut value);
        }
        (k.as_str(), value)
    }));
    wire.key = key.map(model::Key::from);
    wire
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn wire_entity() -> anyhow::Result<model::Entity> {
        let entity = serde_json::from_value(json!({
            "key": {
                "partitionId": {"projectId": "p"},
                "path": [{"kind": "Task", "name": "t1"}]
            },
            "properties": {
                "description": {"stringValue": "buy milk"},
                "priority": {"integerValue": "4"},
                "done": {"booleanValue": false}
            }
        }))?;
        Ok(entity)
    }

    #[test]
    fn entity_from_wire() -> anyhow::Result<()> {
        let got = Entity::from(&wire_entity()?);
        let want = Entity::new(Key::builder("p", "Task").name("t1").build())
            .set_property("description", "buy milk")
            .set_property("priority", 4)
            .set_property("done", false);
        assert_eq!(got, want);
        assert!(got.contains("priority"));
        assert!(!got.contains("missing"));
        assert_eq!(got.get("missing"), None);
        Ok(())
    }

    #[test]
    fn entity_to_wire() -> anyhow::Result<()> {
        let wire = wire_entity()?;
        let got = model::Entity::from(&Entity::from(&wire));
        assert_eq!(got, wire);
        Ok(())
    }

    #[test]
    fn projection_from_wire() -> anyhow::Result<()> {
        let mut wire = wire_entity()?;
        wire.key = None;
        let got = ProjectionEntity::from(&wire);
        assert_eq!(got.key(), None);
        assert_eq!(got.properties().len(), 3);
        assert_eq!(got.get("priority").and_then(Value::as_i64), Some(4));
        assert_eq!(model::Entity::from(&got), wire);
        Ok(())
    }

    #[test]
    fn index_options_round_trip() -> anyhow::Result<()> {
        let wire = serde_json::from_value::<model::Entity>(json!({
            "key": {
                "partitionId": {"projectId": "p"},
                "path": [{"kind": "Task", "name": "t1"}]
            },
            "properties": {
                "a": {"excludeFromIndexes": true, "meaning": 22, "stringValue": "x"},
                "b": {"integerValue": "1"},
                "tags": {"arrayValue": {"values": [
                    {"stringValue": "home"},
                    {"stringValue": "work", "excludeFromIndexes": true}
                ]}}
            }
        }))?;

        let entity = Entity::from(&wire);
        assert!(entity.is_excluded_from_indexes("a"));
        assert_eq!(
            entity.property_options("a").and_then(ValueOptions::meaning),
            Some(22)
        );
        assert!(!entity.is_excluded_from_indexes("b"));
        assert_eq!(entity.property_options("b"), None);
        assert_eq!(
            entity.property_options("tags").map(|o| o.elements().len()),
            Some(2)
        );
        assert_eq!(model::Entity::from(&entity), wire);

        let projection = ProjectionEntity::from(&wire);
        assert!(projection.is_excluded_from_indexes("a"));
        assert_eq!(model::Entity::from(&projection), wire);
        Ok(())
    }

    #[test]
    fn set_property_options() -> anyhow::Result<()> {
        let entity = Entity::default()
            .set_property("a", "x")
            .set_property_options("a", ValueOptions::new().set_exclude_from_indexes(true));
        assert!(entity.is_excluded_from_indexes("a"));
        let got = serde_json::to_value(model::Entity::from(&entity))?;
        assert_eq!(
            got,
            json!({"properties": {"a": {"stringValue": "x", "excludeFromIndexes": true}}})
        );

        let entity = entity
            .set_property("a", "y")
            .set_property_options("a", ValueOptions::new());
        assert_eq!(entity.property_options("a"), None);
        assert_eq!(entity, Entity::default().set_property("a", "y"));
        Ok(())
    }

    #[test]
    fn empty() {
        assert!(Entity::default().is_empty());
        assert!(!Entity::new(Key::default()).is_empty());
        assert!(!Entity::default().set_property("a", 1).is_empty());
    }
}
