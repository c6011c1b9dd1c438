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
use crate::model::{composite_filter, property_filter, property_order};
use crate::query::KEY_PROPERTY_NAME;
use crate::{Key, Value};

/// A comparison operator for property filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PropertyOperator {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
    In,
    NotIn,
    HasAncestor,
}

impl From<PropertyOperator> for property_filter::Operator {
    fn from(value: PropertyOperator) -> Self {
        match value {
            PropertyOperator::LessThan => Self::LessThan,
            PropertyOperator::LessThanOrEqual => Self::LessThanOrEqual,
            PropertyOperator::GreaterThan => Self::GreaterThan,
            PropertyOperator::GreaterThanOrEqual => Self::GreaterThanOrEqual,
            PropertyOperator::Equal => Self::Equal,
            PropertyOperator::NotEqual => Self::NotEqual,
            PropertyOperator::In => Self::In,
            PropertyOperator::NotIn => Self::NotIn,
            PropertyOperator::HasAncestor => Self::HasAncestor,
        }
    }
}

/// The operator combining the filters in a composite filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositeOperator {
    And,
    Or,
}

/// A query filter.
///
/// # Example
/// ```
/// # use google_cloud_datastore::Filter;
/// let filter = Filter::and([
///     Filter::eq("done", false),
///     Filter::ge("priority", 4),
/// ]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Property {
        property: String,
        op: PropertyOperator,
        value: Value,
    },
    Composite {
        op: CompositeOperator,
        filters: Vec<Filter>,
    },
}

impl Filter {
    fn property<P: Into<String>, V: Into<Value>>(property: P, op: PropertyOperator, value: V) -> Self {
        Self::Property {
            property: property.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq<P: Into<String>, V: Into<Value>>(property: P, value: V) -> Self {
        Self::property(property, PropertyOperator::Equal, value)
    }

    pub fn ne<P: Into<String>, V: Into<Value>>(property: P, value: V) -> Self {
        Self::property(property, PropertyOperator::NotEqual, value)
    }

    pub fn lt<P: Into<String>, V: Into<Value>>(property: P, value: V) -> Self {
        Self::property(property, PropertyOperator::LessThan, value)
    }

    pub fn le<P: Into<String>, V: Into<Value>>(property: P, value: V) -> Self {
        Self::property(property, PropertyOperator::LessThanOrEqual, value)
    }

    pub fn gt<P: Into<String>, V: Into<Value>>(property: P, value: V) -> Self {
        Self::property(property, PropertyOperator::GreaterThan, value)
    }

    pub fn ge<P: Into<String>, V: Into<Value>>(property: P, value: V) -> Self {
        Self::property(property, PropertyOperator::GreaterThanOrEqual, value)
    }

    /// Matches entities where the property equals any of `values`.
    pub fn in_values<P, I, V>(property: P, values: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<Value>>();
        Self::property(property, PropertyOperator::In, values)
    }

    /// Matches entities where the property equals none of `values`.
    pub fn not_in_values<P, I, V>(property: P, values: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<Value>>();
        Self::property(property, PropertyOperator::NotIn, values)
    }

    /// Matches entities that are descendants of `key`.
    pub fn has_ancestor(key: Key) -> Self {
        Self::property(KEY_PROPERTY_NAME, PropertyOperator::HasAncestor, key)
    }

    pub fn and<I: IntoIterator<Item = Filter>>(filters: I) -> Self {
        Self::Composite {
            op: CompositeOperator::And,
            filters: filters.into_iter().collect(),
        }
    }

    pub fn or<I: IntoIterator<Item = Filter>>(filters: I) -> Self {
        Self::Composite {
            op: CompositeOperator::Or,
            filters: filters.into_iter().collect(),
        }
    }
}

impl From<&Filter> for model::Filter {
    fn from(value: &Filter) -> Self {
        let mut wire = model::Filter::default();
        match value {
            Filter::Property {
                property,
                op,
                value,
            } => {
                wire.property_filter = Some(model::PropertyFilter {
                    property: property.as_str().into(),
                    op: (*op).into(),
                    value: Some(value.into()),
                });
            }
            Filter::Composite { op, filters } => {
                let op = match op {
                    CompositeOperator::And => composite_filter::Operator::And,
                    CompositeOperator::Or => composite_filter::Operator::Or,
                };
                wire.composite_filter = Some(model::CompositeFilter {
                    op,
                    filters: filters.iter().map(model::Filter::from).collect(),
                });
            }
        }
        wire
    }
}

/// The sort direction of an [OrderBy].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A sort order for query results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderBy {
    property: String,
    direction: Direction,
}

impl OrderBy {
    pub fn asc<P: Into<String>>(property: P) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc<P: Into<String>>(property: P) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Descending,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl From<&OrderBy> for model::PropertyOrder {
    fn from(value: &OrderBy) -> Self {
        let direction = match value.direction {
            Direction::Ascending => property_order::Direction::Ascending,
            Direction::Descending => property_order::Direction::Descending,
        };
        model::PropertyOrder {
            property: value.property.as_str().into(),
            direction,
        }
    }
}
