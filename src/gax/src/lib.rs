// Copyright 2024 Google LLC
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

//! Google APIs helpers.
//!
//! This crate contains the types shared by the Google Cloud data-model crates:
//! the core error type, and the per-request options used to build request
//! parameters.
//!
//! <div class="warning">
//! All the types, traits, and functions defined in the <code>unstable-sdk-client</code>
//! feature are <b>not</b> intended for general use. The APIs enabled by this
//! feature will remain unstable for the foreseeable future, even if used in
//! stable SDKs.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Defines traits and helpers to serialize query parameters.
///
/// Request options are sent as query parameters. The values can be types
/// other than strings and integers, so we need a helper to serialize
/// parameters of different types uniformly.
#[cfg(feature = "unstable-sdk-client")]
#[doc(hidden)]
pub mod query_parameter;

/// Implementation details for [query_parameter](crate::query_parameter).
#[cfg(feature = "unstable-sdk-client")]
#[doc(hidden)]
pub mod request_parameter;

/// The core error types.
pub mod error;

pub mod options;
