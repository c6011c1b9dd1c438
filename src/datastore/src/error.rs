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

//! Custom errors for the Cloud Datastore client.
//!
//! These are often returned as the `source()` of an [Error][crate::Error].

use crate::result_type::ResultType;

/// A query result batch did not match the result type of the query.
///
/// Queries declare the type of results they produce. For example, a key query
/// produces [Key][crate::Key] values. The service reports the type of the
/// results in each batch, and the client library rejects batches that cannot
/// be represented as the query's declared type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unexpected result type {actual:?} for a query of type {expected:?}")]
#[non_exhaustive]
pub struct ResultTypeMismatch {
    /// The result type declared by the query.
    pub expected: ResultType,
    /// The result type reported by the service.
    pub actual: ResultType,
}

impl ResultTypeMismatch {
    pub(crate) fn new(expected: ResultType, actual: ResultType) -> Self {
        Self { expected, actual }
    }
}

/// A query could not be built from the builder's settings.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// The offset was negative.
    #[error("offset must be non-negative, got {0}")]
    NegativeOffset(i32),

    /// The limit was not positive.
    #[error("limit must be positive, got {0}")]
    NonPositiveLimit(i32),

    /// Only projection entity queries may set a projection or `distinct_on`.
    #[error("{0} is only supported in projection entity queries")]
    ProjectionNotSupported(&'static str),
}

/// A cursor could not be decoded from its URL-safe representation.
#[derive(thiserror::Error, Debug)]
#[error("cannot decode cursor: {0}")]
pub struct CursorError(#[source] pub(crate) base64::DecodeError);
