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
use crate::error::CursorError;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use gax::error::Error;

/// A position in the results of a query.
///
/// Cursors are opaque byte strings produced by the service. Applications can
/// save them, for example in a web page, using [Cursor::to_url_safe].
///
/// # Example
/// ```
/// # use google_cloud_datastore::Cursor;
/// # fn sample() -> google_cloud_datastore::Result<()> {
/// let cursor = Cursor::new(bytes::Bytes::from_static(b"\x01\x02\xff"));
/// let saved = cursor.to_url_safe();
/// assert_eq!(Cursor::from_url_safe(&saved)?, cursor);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor(bytes::Bytes);

impl Cursor {
    pub fn new<T: Into<bytes::Bytes>>(v: T) -> Self {
        Self(v.into())
    }

    pub fn as_bytes(&self) -> &bytes::Bytes {
        &self.0
    }

    /// Encodes the cursor as URL-safe base64.
    pub fn to_url_safe(&self) -> String {
        URL_SAFE.encode(&self.0)
    }

    /// Decodes a cursor created by [Cursor::to_url_safe].
    ///
    /// Returns an invalid argument error if `encoded` is not valid URL-safe
    /// base64.
    pub fn from_url_safe(encoded: &str) -> Result<Self> {
        let decoded = URL_SAFE
            .decode(encoded)
            .map_err(|e| Error::invalid_argument(CursorError(e)))?;
        Ok(Self(decoded.into()))
    }
}

impl From<bytes::Bytes> for Cursor {
    fn from(value: bytes::Bytes) -> Self {
        Self(value)
    }
}

impl From<Cursor> for bytes::Bytes {
    fn from(value: Cursor) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"", "")]
    #[test_case(b"abc", "YWJj")]
    #[test_case(b"\xfb\xff", "-_8=")]
    fn url_safe(input: &'static [u8], want: &str) -> anyhow::Result<()> {
        let cursor = Cursor::new(bytes::Bytes::from_static(input));
        assert_eq!(cursor.to_url_safe(), want);
        assert_eq!(Cursor::from_url_safe(want)?, cursor);
        Ok(())
    }

    #[test]
    fn bad_input() {
        let got = Cursor::from_url_safe("not base64!");
        assert!(matches!(&got, Err(e) if e.is_invalid_argument()), "{got:?}");
    }
}
