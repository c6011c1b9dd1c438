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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all the data-model crates.
///
/// The client libraries report errors from a few sources. The application may
/// provide invalid inputs (e.g. an option without a kind, or a duplicate
/// option), a value may not have a valid representation as a request
/// parameter, or a decoded response may not convert to the type requested by
/// the application.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. Applications can query the error [source][std::error::Error::source]
/// for deeper information.
///
/// # Example
/// ```
/// use google_cloud_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_invalid_argument() => { println!("fix the input {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::invalid_argument("missing option kind"))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing an invalid application input.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::invalid_argument("the option kind is missing");
    /// assert!(error.is_invalid_argument());
    /// assert!(error.source().is_some());
    /// ```
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            source: Some(source.into()),
        }
    }

    /// The application provided an invalid input.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is built. The error is never transient: the same input fails in
    /// the same way every time.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application: an option was
    /// created without a kind, the same option kind was given twice for a
    /// single request, or a query builder received a value outside its valid
    /// range. The error message names the offending input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be converted to the requested type.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a mismatch between the type requested by the
    /// application and the type of results returned by the service. For
    /// example, a key-only query cannot consume full entities. Use the
    /// catch-all result type if the service may return different result types.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input
    /// data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidArgument, Some(e)) => write!(f, "invalid argument: {e}"),
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &dyn std::error::Error)
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    InvalidArgument,
    Serialization,
    Deserialization,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[derive(thiserror::Error, Debug)]
    #[error("test-only problem")]
    struct TestError;

    #[test]
    fn invalid_argument() {
        let error = Error::invalid_argument("missing kind");
        assert!(error.is_invalid_argument(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("missing kind"), "{error}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser(TestError);
        assert!(error.is_serialization(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestError>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("test-only problem"), "{error}");
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(TestError);
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_invalid_argument(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestError>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("cannot deserialize"), "{error}");
    }

    #[test]
    fn send_and_sync() {
        static_assertions::assert_impl_all!(Error: Send, Sync, StdError);
    }
}
