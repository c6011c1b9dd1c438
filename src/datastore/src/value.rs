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
use crate::{Entity, Key};

/// A property value.
///
/// Datastore properties hold one of a fixed set of types. Arrays may contain
/// values of different types, and entities may be embedded as values.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Blob(bytes::Bytes),
    Key(Key),
    Entity(Entity),
    Array(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Blob(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&Key> {
        match self {
            Self::Key(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bytes::Bytes> for Value {
    fn from(value: bytes::Bytes) -> Self {
        Self::Blob(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        Self::Key(value)
    }
}

impl From<Entity> for Value {
    fn from(value: Entity) -> Self {
        Self::Entity(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<&model::Value> for Value {
    fn from(value: &model::Value) -> Self {
        if let Some(v) = value.boolean_value {
            return Self::Boolean(v);
        }
        if let Some(v) = value.integer_value {
            return Self::Integer(v);
        }
        if let Some(v) = value.double_value {
            return Self::Double(v);
        }
        if let Some(v) = &value.key_value {
            return Self::Key(Key::from(v));
        }
        if let Some(v) = &value.string_value {
            return Self::String(v.clone());
        }
        if let Some(v) = &value.blob_value {
            return Self::Blob(v.clone());
        }
        if let Some(v) = &value.entity_value {
            return Self::Entity(Entity::from(v.as_ref()));
        }
        if let Some(v) = &value.array_value {
            return Self::Array(v.values.iter().map(Value::from).collect());
        }
        Self::Null
    }
}

impl From<&Value> for model::Value {
    fn from(value: &Value) -> Self {
        let mut wire = model::Value::default();
        match value {
            Value::Null => {}
            Value::Boolean(v) => wire.boolean_value = Some(*v),
            Value::Integer(v) => wire.integer_value = Some(*v),
            Value::Double(v) => wire.double_value = Some(*v),
            Value::String(v) => wire.string_value = Some(v.clone()),
            Value::Blob(v) => wire.blob_value = Some(v.clone()),
            Value::Key(v) => wire.key_value = Some(model::Key::from(v)),
            Value::Entity(v) => wire.entity_value = Some(Box::new(model::Entity::from(v))),
            Value::Array(v) => {
                wire.array_value = Some(model::ArrayValue {
                    values: v.iter().map(model::Value::from).collect(),
                })
            }
        }
        wire
    }
}

impl From<Value> for model::Value {
    fn from(value: Value) -> Self {
        model::Value::from(&value)
    }
}

/// The index settings stored alongside a property value.
///
/// Datastore reports whether each value is excluded from indexes and, for
/// values written by older clients, its `meaning`. Array values carry the
/// settings of each element. Entities keep these settings per property so
/// writing them back does not change how they are indexed.
///
/// # Example
/// ```
/// # use google_cloud_datastore::{Entity, Key, ValueOptions};
/// let entity = Entity::new(Key::builder("my-project", "Task").name("t1").build())
///     .set_property("notes", "a long text")
///     .set_property_options("notes", ValueOptions::new().set_exclude_from_indexes(true));
/// assert!(entity.is_excluded_from_indexes("notes"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueOptions {
    exclude_from_indexes: Option<bool>,
    meaning: Option<i32>,
    elements: Vec<ValueOptions>,
}

impl ValueOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclude_from_indexes(&self) -> bool {
        self.exclude_from_indexes.unwrap_or(false)
    }

    pub fn meaning(&self) -> Option<i32> {
        self.meaning
    }

    /// The settings of each array element, in order. Empty when no element
    /// has settings.
    pub fn elements(&self) -> &[ValueOptions] {
        &self.elements
    }

    pub fn set_exclude_from_indexes(mut self, v: bool) -> Self {
        self.exclude_from_indexes = Some(v);
        self
    }

    pub fn set_meaning(mut self, v: i32) -> Self {
        self.meaning = Some(v);
        self
    }

    pub fn set_elements<T: IntoIterator<Item = ValueOptions>>(mut self, v: T) -> Self {
        self.elements = v.into_iter().collect();
        self
    }

    /// Returns true if there are no settings to carry.
    pub fn is_empty(&self) -> bool {
        self.exclude_from_indexes.is_none() && self.meaning.is_none() && self.elements.is_empty()
    }

    pub(crate) fn from_wire(value: &model::Value) -> Self {
        let elements: Vec<_> = value
            .array_value
            .iter()
            .flat_map(|a| a.values.iter().map(Self::from_wire))
            .collect();
        Self {
            exclude_from_indexes: value.exclude_from_indexes,
            meaning: value.meaning,
            elements: if elements.iter().all(Self::is_empty) {
                Vec::new()
            } else {
                elements
            },
        }
    }

    /// Copies the settings into `wire`, including those of array elements.
    pub(crate) fn apply(&self, wire: &mut model::Value) {
        wire.exclude_from_indexes = self.exclude_from_indexes;
        wire.meaning = self.meaning;
        if let Some(array) = wire.array_value.as_mut() {
            array
                .values
                .iter_mut()
                .zip(&self.elements)
                .for_each(|(v, o)| o.apply(v));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({}), Value::Null)]
    #[test_case(json!({"nullValue": null}), Value::Null)]
    #[test_case(json!({"booleanValue": true}), Value::Boolean(true))]
    #[test_case(json!({"integerValue": "-7"}), Value::Integer(-7))]
    #[test_case(json!({"doubleValue": 2.5}), Value::Double(2.5))]
    #[test_case(json!({"stringValue": "abc"}), Value::String("abc".into()))]
    #[test_case(json!({"blobValue": "AAEC"}), Value::Blob(bytes::Bytes::from_static(&[0, 1, 2])))]
    #[test_case(json!({"arrayValue": {"values": [{"integerValue": "1"}, {"stringValue": "x"}]}}), Value::from(vec![Value::from(1), Value::from("x")]))]
    #[test_case(json!({"arrayValue": {}}), Value::Array(Vec::new()))]
    fn from_wire(input: serde_json::Value, want: Value) -> anyhow::Result<()> {
        let wire = serde_json::from_value::<model::Value>(input)?;
        assert_eq!(Value::from(&wire), want);
        Ok(())
    }

    #[test]
    fn key_and_entity() -> anyhow::Result<()> {
        let wire = serde_json::from_value::<model::Value>(json!({
            "entityValue": {
                "properties": {
                    "ref": {"keyValue": {"partitionId": {"projectId": "p"}, "path": [{"kind": "K", "id": "1"}]}}
                }
            }
        }))?;
        let got = Value::from(&wire);
        let entity = got.as_entity().expect("value is an entity");
        assert_eq!(entity.key(), None);
        let key = entity
            .get("ref")
            .and_then(Value::as_key)
            .expect("property is a key");
        assert_eq!(key.id(), Some(1));
        assert_eq!(model::Value::from(&got), wire);
        Ok(())
    }

    #[test]
    fn accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(42).as_i64(), Some(42));
        assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert_eq!(Value::from("s").as_i64(), None);
        assert_eq!(
            Value::from(vec![true, false]).as_array(),
            Some([Value::Boolean(true), Value::Boolean(false)].as_slice())
        );
    }

    #[test]
    fn options_from_wire() -> anyhow::Result<()> {
        let wire = serde_json::from_value::<model::Value>(json!({
            "excludeFromIndexes": true,
            "meaning": 22,
            "stringValue": "x"
        }))?;
        let got = ValueOptions::from_wire(&wire);
        assert!(got.exclude_from_indexes());
        assert_eq!(got.meaning(), Some(22));
        assert!(got.elements().is_empty());

        let mut out = model::Value::from(&Value::from(&wire));
        assert_eq!(out.exclude_from_indexes, None);
        got.apply(&mut out);
        assert_eq!(out, wire);
        Ok(())
    }

    #[test]
    fn options_array_elements() -> anyhow::Result<()> {
        let wire = serde_json::from_value::<model::Value>(json!({"arrayValue": {"values": [
            {"stringValue": "a"},
            {"stringValue": "b", "excludeFromIndexes": true},
        ]}}))?;
        let got = ValueOptions::from_wire(&wire);
        assert!(!got.exclude_from_indexes());
        assert_eq!(
            got.elements(),
            [
                ValueOptions::new(),
                ValueOptions::new().set_exclude_from_indexes(true)
            ]
            .as_slice()
        );
        let mut out = model::Value::from(&Value::from(&wire));
        got.apply(&mut out);
        assert_eq!(out, wire);

        let plain = serde_json::from_value::<model::Value>(json!({"arrayValue": {"values": [
            {"stringValue": "a"},
        ]}}))?;
        assert!(ValueOptions::from_wire(&plain).is_empty());
        Ok(())
    }

    #[test]
    fn to_wire() -> anyhow::Result<()> {
        let got = serde_json::to_value(model::Value::from(Value::from(vec![
            Value::from(1_i64),
            Value::Null,
            Value::from(bytes::Bytes::from_static(b"abc")),
        ])))?;
        let want = json!({"arrayValue": {"values": [
            {"integerValue": "1"},
            {},
            {"blobValue": "YWJj"},
        ]}});
        assert_eq!(got, want);
        Ok(())
    }
}
