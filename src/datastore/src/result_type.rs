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

//! Query result types.
//!
//! Every query declares the type of results it produces. The service reports
//! the type of the results in each [QueryResultBatch][crate::model::QueryResultBatch]
//! using a wire code. [ResultType] maps between the two and converts the raw
//! entities in a batch into the declared type.

use crate::model;
use crate::model::entity_result::ResultType as WireResultType;
use crate::{Entity, Key, ProjectionEntity};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// The class of values produced by a [ResultType].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultClass {
    /// Any of the other classes.
    Any,
    Entity,
    Key,
    ProjectionEntity,
}

/// A single query result, with its type determined at runtime.
///
/// Untyped queries, such as the queries returned by
/// [Query::gql_query_builder][crate::Query::gql_query_builder], produce
/// values of this type.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultValue {
    Entity(Entity),
    Key(Key),
    ProjectionEntity(ProjectionEntity),
}

impl ResultValue {
    /// The result type of this value.
    pub fn value_type(&self) -> ResultType {
        match self {
            Self::Entity(_) => ResultType::Entity,
            Self::Key(_) => ResultType::Key,
            Self::ProjectionEntity(_) => ResultType::ProjectionEntity,
        }
    }
}

/// The type of results produced by a query.
///
/// Two result types are equal if they produce the same [ResultClass].
///
/// # Example
/// ```
/// # use google_cloud_datastore::ResultType;
/// # use google_cloud_datastore::model::entity_result::ResultType as WireResultType;
/// let got = ResultType::from_wire_code(Some(&WireResultType::KeyOnly));
/// assert_eq!(got, ResultType::Key);
/// assert!(ResultType::Unknown.is_assignable_from(got));
/// assert!(!ResultType::Entity.is_assignable_from(got));
/// ```
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum ResultType {
    /// The result type could not be determined ahead of time. Results are
    /// classified by inspecting each entity.
    Unknown,
    /// Full entities, with a key and all their properties.
    Entity,
    /// Only keys.
    Key,
    /// Entities containing a subset of their properties.
    ProjectionEntity,
}

lazy_static::lazy_static! {
    static ref BY_WIRE_CODE: HashMap<i32, ResultType> = ResultType::ALL
        .iter()
        .filter_map(|t| t.wire_code().and_then(|c| c.value()).map(|v| (v, *t)))
        .collect();
}

impl ResultType {
    /// All the result types.
    pub const ALL: [ResultType; 4] = [
        ResultType::Unknown,
        ResultType::Entity,
        ResultType::Key,
        ResultType::ProjectionEntity,
    ];

    /// The class of values produced by this result type.
    pub fn result_class(&self) -> ResultClass {
        match self {
            Self::Unknown => ResultClass::Any,
            Self::Entity => ResultClass::Entity,
            Self::Key => ResultClass::Key,
            Self::ProjectionEntity => ResultClass::ProjectionEntity,
        }
    }

    /// The wire code for this result type. `Unknown` has no wire code.
    pub fn wire_code(&self) -> Option<WireResultType> {
        match self {
            Self::Unknown => None,
            Self::Entity => Some(WireResultType::Full),
            Self::Key => Some(WireResultType::KeyOnly),
            Self::ProjectionEntity => Some(WireResultType::Projection),
        }
    }

    /// Finds the result type for a wire code.
    ///
    /// Returns [ResultType::Unknown] for absent, unspecified, and
    /// unrecognized codes.
    pub fn from_wire_code(code: Option<&WireResultType>) -> Self {
        match code
            .and_then(WireResultType::value)
            .and_then(|v| BY_WIRE_CODE.get(&v))
        {
            Some(t) => *t,
            None => {
                tracing::debug!("no result type for wire code {code:?}, using Unknown");
                Self::Unknown
            }
        }
    }

    /// Returns true if results of type `other` can be used where results of
    /// this type are expected.
    pub fn is_assignable_from(&self, other: ResultType) -> bool {
        let class = self.result_class();
        class == ResultClass::Any || class == other.result_class()
    }

    /// Converts a raw entity into a result of this type.
    ///
    /// For [ResultType::Unknown] the result is classified by inspecting the
    /// entity: entities without properties are keys, entities with properties
    /// are projection entities. Returns `None` if the entity has neither
    /// properties nor a key.
    pub fn convert(&self, entity: &model::Entity) -> Option<ResultValue> {
        match self {
            Self::Unknown => match (entity.properties.is_empty(), &entity.key) {
                (true, None) => None,
                (true, Some(key)) => Some(ResultValue::Key(Key::from(key))),
                (false, _) => Some(ResultValue::ProjectionEntity(ProjectionEntity::from(
                    entity,
                ))),
            },
            Self::Entity => Some(ResultValue::Entity(Entity::from(entity))),
            Self::Key => Some(ResultValue::Key(
                entity.key.as_ref().map(Key::from).unwrap_or_default(),
            )),
            Self::ProjectionEntity => Some(ResultValue::ProjectionEntity(
                ProjectionEntity::from(entity),
            )),
        }
    }
}

impl PartialEq for ResultType {
    fn eq(&self, other: &Self) -> bool {
        self.result_class() == other.result_class()
    }
}

impl Eq for ResultType {}

impl Hash for ResultType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.result_class().hash(state);
    }
}

impl From<&WireResultType> for ResultType {
    fn from(value: &WireResultType) -> Self {
        Self::from_wire_code(Some(value))
    }
}

/// Types that can be produced by a query.
///
/// The library implements this trait for [Entity], [Key],
/// [ProjectionEntity], and [ResultValue]. The last one represents results
/// whose type is only known at runtime.
pub trait QueryResult: Sized + Clone + std::fmt::Debug + PartialEq + Send + Sync {
    /// The result type declared by queries producing `Self`.
    fn result_type() -> ResultType;

    /// Narrows a result value to `Self`.
    fn from_result_value(value: ResultValue) -> Option<Self>;
}

impl QueryResult for ResultValue {
    fn result_type() -> ResultType {
        ResultType::Unknown
    }
    fn from_result_value(value: ResultValue) -> Option<Self> {
        Some(value)
    }
}

impl QueryResult for Entity {
    fn result_type() -> ResultType {
        ResultType::Entity
    }
    fn from_result_value(value: ResultValue) -> Option<Self> {
        match value {
            ResultValue::Entity(v) => Some(v),
            _ => None,
        }
    }
}

impl QueryResult for Key {
    fn result_type() -> ResultType {
        ResultType::Key
    }
    fn from_result_value(value: ResultValue) -> Option<Self> {
        match value {
            ResultValue::Key(v) => Some(v),
            _ => None,
        }
    }
}

impl QueryResult for ProjectionEntity {
    fn result_type() -> ResultType {
        ResultType::ProjectionEntity
    }
    fn from_result_value(value: ResultValue) -> Option<Self> {
        match value {
            ResultValue::ProjectionEntity(v) => Some(v),
            _ => None,
        }
    }
}
