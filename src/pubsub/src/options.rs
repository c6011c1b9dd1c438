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
//! Per-request options for the Pub/Sub client.
//!
//! Each family of options applies to one kind of request. Options from
//! different families never mix, even if they share a parameter name.
//!
//! # Example
//! ```
//! # use google_cloud_pubsub::options::{ListOption, ListOptions, list_query_parameters};
//! # fn sample() -> google_cloud_pubsub::Result<()> {
//! let options = ListOptions::from_options([
//!     ListOption::page_size(100),
//!     ListOption::page_token("next-page"),
//! ])?;
//! let params = list_query_parameters(&options)?;
//! assert_eq!(params[0], ("pageSize", "100".to_string()));
//! # Ok(()) }
//! ```

use crate::Result;
use gax::options::{OptionKind, OptionValue, RequestOption, RequestOptions};

/// The parameters accepted by `List*` requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ListOptionKind {
    /// The maximum number of results returned in a single page.
    PageSize,
    /// The token identifying the page of results to return.
    PageToken,
}

impl OptionKind for ListOptionKind {
    fn name(&self) -> &'static str {
        match self {
            Self::PageSize => "pageSize",
            Self::PageToken => "pageToken",
        }
    }
}

/// An option for `List*` requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListOption(RequestOption<ListOptionKind>);

impl ListOption {
    /// Sets the maximum number of results returned in a single page.
    pub fn page_size(v: i32) -> Self {
        Self(RequestOption::new(ListOptionKind::PageSize, OptionValue::from(v)))
    }

    /// Sets the token of the page of results to return.
    pub fn page_token<T: Into<String>>(v: T) -> Self {
        Self(RequestOption::new(
            ListOptionKind::PageToken,
            OptionValue::from(v.into()),
        ))
    }

    pub fn kind(&self) -> ListOptionKind {
        *self.0.kind()
    }

    pub fn value(&self) -> Option<&OptionValue> {
        self.0.value()
    }
}

impl From<ListOption> for RequestOption<ListOptionKind> {
    fn from(value: ListOption) -> Self {
        value.0
    }
}

impl AsRef<RequestOption<ListOptionKind>> for ListOption {
    fn as_ref(&self) -> &RequestOption<ListOptionKind> {
        &self.0
    }
}

/// The options for a single `List*` request.
pub type ListOptions = RequestOptions<ListOptionKind>;

/// Formats the options of a `List*` request as query parameters.
///
/// The parameters are sorted by name.
pub fn list_query_parameters(options: &ListOptions) -> Result<Vec<(&'static str, String)>> {
    gax::query_parameter::format_options(options)
}

/// The settings accepted by pull operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PullOptionKind {
    /// The maximum number of message callbacks queued, but not yet running.
    MaxQueuedCallbacks,
}

impl OptionKind for PullOptionKind {
    fn name(&self) -> &'static str {
        match self {
            Self::MaxQueuedCallbacks => "maxQueuedCallbacks",
        }
    }
}

/// An option for pull operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PullOption(RequestOption<PullOptionKind>);

impl PullOption {
    /// The default for [PullOption::max_queued_callbacks].
    pub const DEFAULT_MAX_QUEUED_CALLBACKS: i32 = 100;

    /// Sets the maximum number of message callbacks queued, but not yet
    /// running.
    pub fn max_queued_callbacks(v: i32) -> Self {
        Self(RequestOption::new(
            PullOptionKind::MaxQueuedCallbacks,
            OptionValue::from(v),
        ))
    }

    pub fn kind(&self) -> PullOptionKind {
        *self.0.kind()
    }

    pub fn value(&self) -> Option<&OptionValue> {
        self.0.value()
    }
}

impl From<PullOption> for RequestOption<PullOptionKind> {
    fn from(value: PullOption) -> Self {
        value.0
    }
}

impl AsRef<RequestOption<PullOptionKind>> for PullOption {
    fn as_ref(&self) -> &RequestOption<PullOptionKind> {
        &self.0
    }
}

/// The options for a single pull operation.
pub type PullOptions = RequestOptions<PullOptionKind>;

/// Returns the configured maximum number of queued callbacks, or the default.
pub fn max_queued_callbacks(options: &PullOptions) -> i32 {
    options
        .get_i64(&PullOptionKind::MaxQueuedCallbacks)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(PullOption::DEFAULT_MAX_QUEUED_CALLBACKS)
}
