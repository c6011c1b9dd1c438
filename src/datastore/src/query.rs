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

//! Datastore queries.
//!
//! Queries are either GQL queries or structured queries. Each query declares
//! the type of results it produces through its type parameter. Use the
//! builders in [Query] to create queries.
//!
//! # Example
//! ```
//! # use google_cloud_datastore::{Filter, OrderBy, Query};
//! # use google_cloud_datastore::model::RunQueryRequest;
//! # fn sample() -> google_cloud_datastore::Result<()> {
//! let query = Query::entity_query_builder()
//!     .namespace("prod")
//!     .kind("Task")
//!     .filter(Filter::eq("done", false))
//!     .order_by(OrderBy::desc("priority"))
//!     .limit(10)
//!     .build()?;
//! let mut request = RunQueryRequest::default();
//! Query::from(query).populate_request(&mut request);
//! # Ok(()) }
//! ```

use crate::error::QueryError;
use crate::model;
use crate::result_type::{QueryResult, ResultType, ResultValue};
use crate::{Cursor, Entity, Filter, Key, OrderBy, ProjectionEntity, Result, Value};
use gax::error::Error;
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// The name of the special property holding the entity key.
pub(crate) const KEY_PROPERTY_NAME: &str = "__key__";

/// A query producing results of type `V`.
#[derive(Clone, Debug, PartialEq)]
pub enum Query<V> {
    Gql(GqlQuery<V>),
    Structured(StructuredQuery<V>),
}

impl Query<ResultValue> {
    /// Returns a builder for a GQL query whose result type is only known at
    /// runtime.
    pub fn gql_query_builder<T: Into<String>>(gql: T) -> GqlQueryBuilder<ResultValue> {
        GqlQueryBuilder::new(gql.into())
    }
}

impl Query<Entity> {
    /// Returns a builder for a structured query returning full entities.
    pub fn entity_query_builder() -> StructuredQueryBuilder<Entity> {
        StructuredQueryBuilder::new()
    }
}

impl Query<Key> {
    /// Returns a builder for a structured query returning only keys.
    pub fn key_query_builder() -> StructuredQueryBuilder<Key> {
        StructuredQueryBuilder::new()
    }
}

impl Query<ProjectionEntity> {
    /// Returns a builder for a structured query returning projected entities.
    pub fn projection_entity_query_builder() -> StructuredQueryBuilder<ProjectionEntity> {
        StructuredQueryBuilder::new()
    }
}

impl<V: QueryResult> Query<V> {
    /// Returns a builder for a GQL query returning results of type `V`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_datastore::{Key, Query};
    /// let query = Query::<Key>::typed_gql_query_builder("SELECT __key__ FROM Task").build();
    /// ```
    pub fn typed_gql_query_builder<T: Into<String>>(gql: T) -> GqlQueryBuilder<V> {
        GqlQueryBuilder::new(gql.into())
    }

    /// The type of results produced by this query.
    pub fn result_type(&self) -> ResultType {
        V::result_type()
    }

    /// The namespace of the query, if set.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Self::Gql(q) => q.namespace(),
            Self::Structured(q) => q.namespace(),
        }
    }

    /// Sets the partition namespace and the query in `request`.
    ///
    /// Only one of the GQL and structured queries is set in the request.
    pub fn populate_request(&self, request: &mut model::RunQueryRequest) {
        if let Some(ns) = self.namespace() {
            request
                .partition_id
                .get_or_insert_with(model::PartitionId::default)
                .namespace_id = Some(ns.to_string());
        }
        match self {
            Self::Gql(q) => {
                request.gql_query = Some(q.to_wire());
                request.query = None;
            }
            Self::Structured(q) => {
                request.query = Some(q.to_wire());
                request.gql_query = None;
            }
        }
    }

    /// Decodes a batch of results for this query.
    ///
    /// See [decode_batch][crate::decode_batch].
    pub fn decode_batch(&self, batch: &model::QueryResultBatch) -> Result<Vec<V>> {
        crate::decode_batch::<V>(self.result_type(), batch)
    }
}

impl<V> From<GqlQuery<V>> for Query<V> {
    fn from(value: GqlQuery<V>) -> Self {
        Self::Gql(value)
    }
}

impl<V> From<StructuredQuery<V>> for Query<V> {
    fn from(value: StructuredQuery<V>) -> Self {
        Self::Structured(value)
    }
}

/// A binding for a GQL query parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    Value(Value),
    Cursor(Cursor),
}

impl From<&Binding> for model::GqlQueryParameter {
    fn from(value: &Binding) -> Self {
        let mut wire = model::GqlQueryParameter::default();
        match value {
            Binding::Value(v) => wire.value = Some(v.into()),
            Binding::Cursor(c) => wire.cursor = Some(c.as_bytes().clone()),
        }
        wire
    }
}

/// A GQL query.
///
/// See the [GQL reference] for the query syntax.
///
/// [GQL reference]: https://cloud.google.com/datastore/docs/reference/gql_reference
#[derive(Clone, Debug, PartialEq)]
pub struct GqlQuery<V> {
    query_string: String,
    namespace: Option<String>,
    allow_literals: bool,
    named_bindings: BTreeMap<String, Binding>,
    positional_bindings: Vec<Binding>,
    _result: PhantomData<fn() -> V>,
}

impl<V: QueryResult> GqlQuery<V> {
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn allow_literals(&self) -> bool {
        self.allow_literals
    }

    pub fn named_bindings(&self) -> &BTreeMap<String, Binding> {
        &self.named_bindings
    }

    pub fn positional_bindings(&self) -> &[Binding] {
        &self.positional_bindings
    }

    pub fn result_type(&self) -> ResultType {
        V::result_type()
    }

    fn to_wire(&self) -> model::GqlQuery {
        model::GqlQuery {
            query_string: self.query_string.clone(),
            allow_literals: Some(self.allow_literals),
            named_bindings: self
                .named_bindings
                .iter()
                .map(|(k, v)| (k.clone(), v.into()))
                .collect(),
            positional_bindings: self.positional_bindings.iter().map(Into::into).collect(),
        }
    }
}

/// A builder for [GqlQuery].
#[derive(Clone, Debug)]
pub struct GqlQueryBuilder<V> {
    inner: GqlQuery<V>,
}

impl<V: QueryResult> GqlQueryBuilder<V> {
    fn new(query_string: String) -> Self {
        Self {
            inner: GqlQuery {
                query_string,
                namespace: None,
                allow_literals: false,
                named_bindings: BTreeMap::new(),
                positional_bindings: Vec::new(),
                _result: PhantomData,
            },
        }
    }

    pub fn query_string<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.query_string = v.into();
        self
    }

    pub fn namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.namespace = Some(v.into());
        self
    }

    /// Allows literal values in the query string.
    pub fn allow_literals(mut self, v: bool) -> Self {
        self.inner.allow_literals = v;
        self
    }

    /// Binds a value to the named parameter `@name`.
    pub fn set_binding<K: Into<String>, T: Into<Value>>(mut self, name: K, value: T) -> Self {
        self.inner
            .named_bindings
            .insert(name.into(), Binding::Value(value.into()));
        self
    }

    /// Binds a cursor to the named parameter `@name`.
    pub fn set_cursor_binding<K: Into<String>>(mut self, name: K, cursor: Cursor) -> Self {
        self.inner
            .named_bindings
            .insert(name.into(), Binding::Cursor(cursor));
        self
    }

    /// Binds a value to the next positional parameter.
    pub fn add_binding<T: Into<Value>>(mut self, value: T) -> Self {
        self.inner
            .positional_bindings
            .push(Binding::Value(value.into()));
        self
    }

    /// Binds a cursor to the next positional parameter.
    pub fn add_cursor_binding(mut self, cursor: Cursor) -> Self {
        self.inner.positional_bindings.push(Binding::Cursor(cursor));
        self
    }

    /// Removes all the named and positional bindings.
    pub fn clear_bindings(mut self) -> Self {
        self.inner.named_bindings.clear();
        self.inner.positional_bindings.clear();
        self
    }

    pub fn build(self) -> GqlQuery<V> {
        self.inner
    }
}

/// A structured query.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredQuery<V> {
    namespace: Option<String>,
    kind: Option<String>,
    projection: Vec<String>,
    distinct_on: Vec<String>,
    filter: Option<Filter>,
    order_by: Vec<OrderBy>,
    start_cursor: Option<Cursor>,
    end_cursor: Option<Cursor>,
    offset: i32,
    limit: Option<i32>,
    _result: PhantomData<fn() -> V>,
}

impl<V: QueryResult> StructuredQuery<V> {
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn projection(&self) -> &[String] {
        &self.projection
    }

    pub fn distinct_on(&self) -> &[String] {
        &self.distinct_on
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn order_by(&self) -> &[OrderBy] {
        &self.order_by
    }

    pub fn start_cursor(&self) -> Option<&Cursor> {
        self.start_cursor.as_ref()
    }

    pub fn end_cursor(&self) -> Option<&Cursor> {
        self.end_cursor.as_ref()
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn limit(&self) -> Option<i32> {
        self.limit
    }

    pub fn result_type(&self) -> ResultType {
        V::result_type()
    }

    fn to_wire(&self) -> model::Query {
        model::Query {
            projection: self
                .projection
                .iter()
                .map(|p| model::Projection {
                    property: p.as_str().into(),
                })
                .collect(),
            kind: self
                .kind
                .iter()
                .map(|k| model::KindExpression { name: k.clone() })
                .collect(),
            filter: self.filter.as_ref().map(model::Filter::from),
            order: self.order_by.iter().map(model::PropertyOrder::from).collect(),
            distinct_on: self
                .distinct_on
                .iter()
                .map(|p| p.as_str().into())
                .collect(),
            start_cursor: self.start_cursor.as_ref().map(|c| c.as_bytes().clone()),
            end_cursor: self.end_cursor.as_ref().map(|c| c.as_bytes().clone()),
            offset: (self.offset != 0).then_some(self.offset),
            limit: self.limit,
        }
    }
}

/// A builder for [StructuredQuery].
///
/// Create one with [Query::entity_query_builder], [Query::key_query_builder],
/// or [Query::projection_entity_query_builder].
#[derive(Clone, Debug)]
pub struct StructuredQueryBuilder<V> {
    inner: StructuredQuery<V>,
}

impl<V: QueryResult> StructuredQueryBuilder<V> {
    fn new() -> Self {
        Self {
            inner: StructuredQuery {
                namespace: None,
                kind: None,
                projection: Vec::new(),
                distinct_on: Vec::new(),
                filter: None,
                order_by: Vec::new(),
                start_cursor: None,
                end_cursor: None,
                offset: 0,
                limit: None,
                _result: PhantomData,
            },
        }
    }

    pub fn namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.namespace = Some(v.into());
        self
    }

    pub fn kind<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.kind = Some(v.into());
        self
    }

    /// Sets the filter, replacing any previous filter.
    pub fn filter(mut self, v: Filter) -> Self {
        self.inner.filter = Some(v);
        self
    }

    /// Appends a sort order.
    pub fn order_by(mut self, v: OrderBy) -> Self {
        self.inner.order_by.push(v);
        self
    }

    /// Appends a property to the projection.
    ///
    /// Only projection entity queries support projections.
    pub fn projection<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.projection.push(v.into());
        self
    }

    /// Appends a property to the `distinct_on` list.
    ///
    /// Only projection entity queries support `distinct_on`.
    pub fn distinct_on<T: Into<String>>(mut self, v: T) -> Self {
        self.inner.distinct_on.push(v.into());
        self
    }

    pub fn start_cursor(mut self, v: Cursor) -> Self {
        self.inner.start_cursor = Some(v);
        self
    }

    pub fn end_cursor(mut self, v: Cursor) -> Self {
        self.inner.end_cursor = Some(v);
        self
    }

    pub fn offset(mut self, v: i32) -> Self {
        self.inner.offset = v;
        self
    }

    pub fn limit(mut self, v: i32) -> Self {
        self.inner.limit = Some(v);
        self
    }

    /// Builds the query.
    ///
    /// Fails with an invalid argument error if the offset is negative, the
    /// limit is not positive, or a projection or `distinct_on` is set on a
    /// query that does not return projection entities.
    pub fn build(self) -> Result<StructuredQuery<V>> {
        let mut query = self.inner;
        if query.offset < 0 {
            return Err(Error::invalid_argument(QueryError::NegativeOffset(
                query.offset,
            )));
        }
        if let Some(limit) = query.limit.filter(|l| *l <= 0) {
            return Err(Error::invalid_argument(QueryError::NonPositiveLimit(limit)));
        }
        let result_type = V::result_type();
        if result_type != ResultType::ProjectionEntity {
            if !query.projection.is_empty() {
                return Err(Error::invalid_argument(
                    QueryError::ProjectionNotSupported("projection"),
                ));
            }
            if !query.distinct_on.is_empty() {
                return Err(Error::invalid_argument(
                    QueryError::ProjectionNotSupported("distinct_on"),
                ));
            }
        }
        if result_type == ResultType::Key {
            query.projection = vec![KEY_PROPERTY_NAME.to_string()];
        }
        Ok(query)
    }
}
