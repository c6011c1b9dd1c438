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

//! Google Cloud Client Libraries for Rust - Datastore
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains the types used to build [Cloud Datastore] queries and
//! to decode their results. Queries declare the type of results they produce:
//! full [Entity] values, [Key] values, or [ProjectionEntity] values. GQL
//! queries may also produce [ResultValue]s, whose type is only known when the
//! results arrive.
//!
//! # Example
//! ```
//! # use google_cloud_datastore::{Entity, Query, model};
//! # fn sample(batch: &model::QueryResultBatch) -> google_cloud_datastore::Result<()> {
//! let query = Query::from(Query::entity_query_builder().kind("Task").build()?);
//! let mut request = model::RunQueryRequest::default();
//! query.populate_request(&mut request);
//! // ... send the request and receive `batch` ...
//! let tasks: Vec<Entity> = query.decode_batch(batch)?;
//! # Ok(()) }
//! ```
//!
//! [cloud datastore]: https://cloud.google.com/datastore

pub use gax::Result;
pub use gax::error::Error;

mod batch;
mod cursor;
mod entity;
pub mod error;
mod filter;
mod key;
pub mod model;
pub mod query;
pub mod result_type;
mod value;


pub use batch::decode_batch;
pub use cursor::Cursor;
pub use entity::{Entity, ProjectionEntity};
pub use filter::{CompositeOperator, Direction, Filter, OrderBy, PropertyOperator};
pub use key::{Id, Key, KeyBuilder, PathElement};
pub use query::Query;
pub use result_type::{QueryResult, ResultClass, ResultType, ResultValue};
pub use value::{Value, ValueOptions};
