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

use crate::Result;
use crate::error::ResultTypeMismatch;
use crate::model;
use crate::result_type::{QueryResult, ResultType};
use gax::error::Error;

/// Converts the results in a batch into values of type `V`.
///
/// The batch reports the type of its results. If `expected` cannot hold
/// results of that type this function returns a deserialization error,
/// with [ResultTypeMismatch] as its source. Otherwise every result is
/// converted using the type reported by the batch. Results that cannot be
/// classified, that is, entities with neither properties nor a key in
/// batches of unknown type, are skipped.
///
/// # Example
/// ```
/// # use google_cloud_datastore::{decode_batch, Key, ResultType};
/// # use google_cloud_datastore::model::QueryResultBatch;
/// # fn sample(batch: &QueryResultBatch) -> google_cloud_datastore::Result<()> {
/// let keys = decode_batch::<Key>(ResultType::Key, batch)?;
/// for key in keys {
///     println!("{key:?}");
/// }
/// # Ok(()) }
/// ```
pub fn decode_batch<V: QueryResult>(
    expected: ResultType,
    batch: &model::QueryResultBatch,
) -> Result<Vec<V>> {
    let actual = ResultType::from_wire_code(Some(&batch.entity_result_type));
    if !expected.is_assignable_from(actual) {
        tracing::warn!(
            "query expects results of type {expected:?}, but the batch contains {actual:?} results"
        );
        return Err(Error::deser(ResultTypeMismatch::new(expected, actual)));
    }
    let mut results = Vec::with_capacity(batch.entity_results.len());
    for result in &batch.entity_results {
        let converted = match &result.entity {
            Some(entity) => actual.convert(entity),
            None => actual.convert(&model::Entity::default()),
        };
        let Some(value) = converted else {
            continue;
        };
        let found = value.value_type();
        match V::from_result_value(value) {
            Some(v) => results.push(v),
            None => {
                return Err(Error::deser(ResultTypeMismatch::new(
                    V::result_type(),
                    found,
                )));
            }
        }
    }
    Ok(results)
}
