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

//! The Cloud Datastore wire messages.
//!
//! These types mirror the `google.datastore.v1` messages in their JSON
//! representation. They are produced and consumed by the transport layer.
//! Applications typically use the domain types, such as
//! [Entity][crate::Entity] and [Key][crate::Key], instead.

use std::collections::HashMap;

/// An unknown value for an enumeration.
///
/// The service may return enum values unknown to this version of the client
/// library. These are preserved, either as their numeric value or as their
/// name, depending on how they were received.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnknownEnumValue {
    Integer(i32),
    String(String),
}

impl UnknownEnumValue {
    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Integer(x) => Some(*x),
            Self::String(_) => None,
        }
    }
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(x) => Some(x.as_str()),
        }
    }
}

struct EnumVisitor<T> {
    name: &'static str,
    _unused: std::marker::PhantomData<T>,
}

impl<T> EnumVisitor<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            _unused: std::marker::PhantomData,
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<T>
where
    T: From<i32> + for<'a> From<&'a str>,
{
    type Value = T;
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(T::from)
            .map_err(|_| E::custom(format!("out of range enum value {value} for {}", self.name)))
    }
    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(T::from)
            .map_err(|_| E::custom(format!("out of range enum value {value} for {}", self.name)))
    }
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} enum value in string or integer format", self.name)
    }
}

fn serialize_enum<S>(
    serializer: S,
    name: Option<&str>,
    value: Option<i32>,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match (name, value) {
        (Some(n), _) => serializer.serialize_str(n),
        (None, Some(v)) => serializer.serialize_i32(v),
        (None, None) => unreachable!("enums must have a numeric or string value"),
    }
}

/// A partition ID identifies a grouping of entities.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartitionId {
    /// The ID of the project to which the entities belong.
    pub project_id: String,
    /// If not empty, the ID of the database to which the entities belong.
    pub database_id: Option<String>,
    /// If not empty, the ID of the namespace to which the entities belong.
    pub namespace_id: Option<String>,
}

impl PartitionId {
    /// Sets the value of [project_id][PartitionId::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [database_id][PartitionId::database_id].
    pub fn set_database_id<T: Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [namespace_id][PartitionId::namespace_id].
    pub fn set_namespace_id<T: Into<String>>(mut self, v: T) -> Self {
        self.namespace_id = Some(v.into());
        self
    }
}

/// A unique identifier for an entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Key {
    /// Entities are partitioned into subsets, identified by a partition ID.
    pub partition_id: Option<PartitionId>,
    /// The entity path, from the root ancestor to the entity itself.
    pub path: Vec<key::PathElement>,
}

impl Key {
    /// Sets the value of [partition_id][Key::partition_id].
    pub fn set_partition_id<T: Into<PartitionId>>(mut self, v: T) -> Self {
        self.partition_id = Some(v.into());
        self
    }

    /// Sets the value of [path][Key::path].
    pub fn set_path<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<key::PathElement>,
    {
        self.path = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Defines additional types related to [Key].
pub mod key {
    /// A (kind, ID/name) pair used to construct a key path.
    ///
    /// At most one of `id` and `name` is set. If neither is set the element
    /// is incomplete.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct PathElement {
        /// The kind of the entity.
        pub kind: String,
        /// The auto-allocated ID of the entity.
        #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
        pub id: Option<i64>,
        /// The name of the entity.
        pub name: Option<String>,
    }

    impl PathElement {
        /// Sets the value of [kind][PathElement::kind].
        pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
            self.kind = v.into();
            self
        }

        /// Sets the value of [id][PathElement::id], clearing the name.
        pub fn set_id(mut self, v: i64) -> Self {
            self.id = Some(v);
            self.name = None;
            self
        }

        /// Sets the value of [name][PathElement::name], clearing the id.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.name = Some(v.into());
            self.id = None;
            self
        }
    }
}

/// An array value.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ArrayValue {
    /// Values in the array.
    pub values: Vec<Value>,
}

/// A message that can hold any of the supported value types.
///
/// At most one of the `*_value` fields is set. A value with none of them set
/// represents a null value.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Value {
    pub boolean_value: Option<bool>,
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub integer_value: Option<i64>,
    pub double_value: Option<f64>,
    pub key_value: Option<Key>,
    pub string_value: Option<String>,
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub blob_value: Option<bytes::Bytes>,
    pub entity_value: Option<Box<Entity>>,
    pub array_value: Option<ArrayValue>,
    /// The `meaning` field should only be populated for backwards
    /// compatibility.
    pub meaning: Option<i32>,
    /// If the value should be excluded from all indexes.
    pub exclude_from_indexes: Option<bool>,
}

/// A Datastore data object.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Entity {
    /// The entity's key. May be absent for embedded entities.
    pub key: Option<Key>,
    /// The entity's properties.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, Value>,
}

impl Entity {
    /// Sets the value of [key][Entity::key].
    pub fn set_key<T: Into<Key>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [properties][Entity::properties].
    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The result of fetching an entity from Datastore.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityResult {
    /// The resulting entity.
    pub entity: Option<Entity>,
    /// The version of the entity.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub version: Option<i64>,
    /// A cursor that points to the position after the result entity.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub cursor: Option<bytes::Bytes>,
}

/// Defines additional types related to [EntityResult].
pub mod entity_result {
    use super::{EnumVisitor, UnknownEnumValue, serialize_enum};

    /// Specifies what data the `entity` field contains.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may
    /// add additional enum variants at any time. The service may also return
    /// values unknown to this version of the client library; these are
    /// preserved in [ResultType::UnknownValue].
    #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum ResultType {
        /// Unspecified. This value is never used.
        #[default]
        Unspecified,
        /// The key and properties.
        Full,
        /// A projected subset of properties. The entity may have no key.
        Projection,
        /// Only the key.
        KeyOnly,
        /// An unknown value.
        UnknownValue(UnknownEnumValue),
    }

    impl ResultType {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the string representation of enums.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Unspecified => Some(0),
                Self::Full => Some(1),
                Self::Projection => Some(2),
                Self::KeyOnly => Some(3),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized
        /// from the integer representation of enums.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Unspecified => Some("RESULT_TYPE_UNSPECIFIED"),
                Self::Full => Some("FULL"),
                Self::Projection => Some("PROJECTION"),
                Self::KeyOnly => Some("KEY_ONLY"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for ResultType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match (self.name(), self.value()) {
                (Some(n), _) => f.write_str(n),
                (None, Some(v)) => write!(f, "{v}"),
                (None, None) => unreachable!("enums must have a numeric or string value"),
            }
        }
    }

    impl From<i32> for ResultType {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Full,
                2 => Self::Projection,
                3 => Self::KeyOnly,
                _ => Self::UnknownValue(UnknownEnumValue::Integer(value)),
            }
        }
    }

    impl From<&str> for ResultType {
        fn from(value: &str) -> Self {
            match value {
                "RESULT_TYPE_UNSPECIFIED" => Self::Unspecified,
                "FULL" => Self::Full,
                "PROJECTION" => Self::Projection,
                "KEY_ONLY" => Self::KeyOnly,
                _ => Self::UnknownValue(UnknownEnumValue::String(value.to_string())),
            }
        }
    }

    impl serde::ser::Serialize for ResultType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for ResultType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(EnumVisitor::<ResultType>::new(
                ".google.datastore.v1.EntityResult.ResultType",
            ))
        }
    }
}

/// A batch of results produced by a query.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryResultBatch {
    /// The number of results skipped, typically because of an offset.
    pub skipped_results: Option<i32>,
    /// A cursor that points to the position after the last skipped result.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub skipped_cursor: Option<bytes::Bytes>,
    /// The result type for every entity in `entity_results`.
    pub entity_result_type: entity_result::ResultType,
    /// The results for this batch.
    pub entity_results: Vec<EntityResult>,
    /// A cursor that points to the position after the last result in the
    /// batch.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub end_cursor: Option<bytes::Bytes>,
    /// The state of the query after the current batch.
    pub more_results: query_result_batch::MoreResultsType,
    /// The version number of the snapshot this batch was returned from.
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    pub snapshot_version: Option<i64>,
}

/// Defines additional types related to [QueryResultBatch].
pub mod query_result_batch {
    use super::{EnumVisitor, UnknownEnumValue, serialize_enum};

    /// The possible values for the `more_results` field.
    #[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[non_exhaustive]
    pub enum MoreResultsType {
        /// Unspecified. This value is never used.
        #[default]
        Unspecified,
        /// There may be additional batches to fetch from this query.
        NotFinished,
        /// The query is finished, but there may be more results after the limit.
        MoreResultsAfterLimit,
        /// The query is finished, but there may be more results after the end
        /// cursor.
        MoreResultsAfterCursor,
        /// The query is finished, and there are no more results.
        NoMoreResults,
        /// An unknown value.
        UnknownValue(UnknownEnumValue),
    }

    impl MoreResultsType {
        /// Gets the enum value.
        pub fn value(&self) -> Option<i32> {
            match self {
                Self::Unspecified => Some(0),
                Self::NotFinished => Some(1),
                Self::MoreResultsAfterLimit => Some(2),
                Self::MoreResultsAfterCursor => Some(4),
                Self::NoMoreResults => Some(3),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        pub fn name(&self) -> Option<&str> {
            match self {
                Self::Unspecified => Some("MORE_RESULTS_TYPE_UNSPECIFIED"),
                Self::NotFinished => Some("NOT_FINISHED"),
                Self::MoreResultsAfterLimit => Some("MORE_RESULTS_AFTER_LIMIT"),
                Self::MoreResultsAfterCursor => Some("MORE_RESULTS_AFTER_CURSOR"),
                Self::NoMoreResults => Some("NO_MORE_RESULTS"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl From<i32> for MoreResultsType {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::NotFinished,
                2 => Self::MoreResultsAfterLimit,
                3 => Self::NoMoreResults,
                4 => Self::MoreResultsAfterCursor,
                _ => Self::UnknownValue(UnknownEnumValue::Integer(value)),
            }
        }
    }

    impl From<&str> for MoreResultsType {
        fn from(value: &str) -> Self {
            match value {
                "MORE_RESULTS_TYPE_UNSPECIFIED" => Self::Unspecified,
                "NOT_FINISHED" => Self::NotFinished,
                "MORE_RESULTS_AFTER_LIMIT" => Self::MoreResultsAfterLimit,
                "MORE_RESULTS_AFTER_CURSOR" => Self::MoreResultsAfterCursor,
                "NO_MORE_RESULTS" => Self::NoMoreResults,
                _ => Self::UnknownValue(UnknownEnumValue::String(value.to_string())),
            }
        }
    }

    impl serde::ser::Serialize for MoreResultsType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for MoreResultsType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(EnumVisitor::<MoreResultsType>::new(
                ".google.datastore.v1.QueryResultBatch.MoreResultsType",
            ))
        }
    }
}

/// A reference to a property relative to the kind expressions.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyReference {
    /// The name of the property.
    pub name: String,
}

impl From<&str> for PropertyReference {
    fn from(value: &str) -> Self {
        Self {
            name: value.to_string(),
        }
    }
}

impl From<String> for PropertyReference {
    fn from(value: String) -> Self {
        Self { name: value }
    }
}

/// A representation of a kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KindExpression {
    /// The name of the kind.
    pub name: String,
}

/// A representation of a property in a projection.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Projection {
    /// The property to project.
    pub property: PropertyReference,
}

/// The desired order for a specific property.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyOrder {
    /// The property to order by.
    pub property: PropertyReference,
    /// The direction to order by.
    pub direction: property_order::Direction,
}

/// Defines additional types related to [PropertyOrder].
pub mod property_order {
    /// The sort direction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Direction {
        #[default]
        #[serde(rename = "DIRECTION_UNSPECIFIED")]
        Unspecified,
        Ascending,
        Descending,
    }
}

/// A holder for any type of filter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Filter {
    pub composite_filter: Option<CompositeFilter>,
    pub property_filter: Option<PropertyFilter>,
}

/// A filter that merges multiple other filters using the given operator.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompositeFilter {
    /// The operator for combining multiple filters.
    pub op: composite_filter::Operator,
    /// The list of filters to combine.
    pub filters: Vec<Filter>,
}

/// Defines additional types related to [CompositeFilter].
pub mod composite_filter {
    /// A composite filter operator.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Operator {
        #[default]
        #[serde(rename = "OPERATOR_UNSPECIFIED")]
        Unspecified,
        And,
        Or,
    }
}

/// A filter on a specific property.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyFilter {
    /// The property to filter by.
    pub property: PropertyReference,
    /// The operator to filter by.
    pub op: property_filter::Operator,
    /// The value to compare the property to.
    pub value: Option<Value>,
}

/// Defines additional types related to [PropertyFilter].
pub mod property_filter {
    /// A property filter operator.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Operator {
        #[default]
        #[serde(rename = "OPERATOR_UNSPECIFIED")]
        Unspecified,
        LessThan,
        LessThanOrEqual,
        GreaterThan,
        GreaterThanOrEqual,
        Equal,
        In,
        NotEqual,
        HasAncestor,
        NotIn,
    }
}

/// A structured query.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Query {
    /// The projection to return. Defaults to returning all properties.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projection: Vec<Projection>,
    /// The kinds to query (if empty, returns entities of all kinds).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kind: Vec<KindExpression>,
    /// The filter to apply.
    pub filter: Option<Filter>,
    /// The order to apply to the query results.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order: Vec<PropertyOrder>,
    /// The properties to make distinct.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub distinct_on: Vec<PropertyReference>,
    /// A starting point for the query results.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub start_cursor: Option<bytes::Bytes>,
    /// An ending point for the query results.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub end_cursor: Option<bytes::Bytes>,
    /// The number of results to skip.
    pub offset: Option<i32>,
    /// The maximum number of results to return.
    pub limit: Option<i32>,
}

/// A binding parameter for a GQL query.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GqlQueryParameter {
    /// A value parameter.
    pub value: Option<Value>,
    /// A query cursor.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub cursor: Option<bytes::Bytes>,
}

/// A GQL query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GqlQuery {
    /// A string of the format described in the GQL reference.
    pub query_string: String,
    /// When false, the query string must not contain any literals.
    pub allow_literals: Option<bool>,
    /// For each non-reserved named binding site in the query string, there
    /// must be a named parameter with that name.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub named_bindings: HashMap<String, GqlQueryParameter>,
    /// Numbered binding site `@1` references the first numbered parameter,
    /// effectively using 1-based indexing, rather than the usual 0.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positional_bindings: Vec<GqlQueryParameter>,
}

/// The request for `Datastore.RunQuery`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunQueryRequest {
    /// The ID of the project against which to make the request.
    pub project_id: String,
    /// The ID of the database against which to make the request.
    pub database_id: Option<String>,
    /// Entities are partitioned into subsets, identified by a partition ID.
    pub partition_id: Option<PartitionId>,
    /// The structured query to run.
    pub query: Option<Query>,
    /// The GQL query to run.
    pub gql_query: Option<GqlQuery>,
}
