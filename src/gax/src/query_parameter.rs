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

use crate::error::Error;
use crate::options::{OptionKind, RequestOptions};
use crate::request_parameter::RequestParameter;

type Result<T> = std::result::Result<T, crate::request_parameter::Error>;

/// Formats a query parameter.
///
/// - [Option] fields that do not contain a value are not included in the HTTP
///   query.
/// - Simple scalars are formatted as usual.
/// - Bytes are formatted using URL-safe base64, without padding.
pub fn format<T>(name: &'static str, parameter: &T) -> Result<Option<(&'static str, String)>>
where
    T: QueryParameter,
{
    QueryParameter::format(parameter)
        .map(|result| result.map(|s| (name, s)))
        .transpose()
}

/// Formats all the options in `options` as query parameters.
///
/// Options without a value are skipped. The parameters are sorted by name,
/// so the resulting query string is deterministic.
pub fn format_options<K, V>(
    options: &RequestOptions<K, V>,
) -> crate::Result<Vec<(&'static str, String)>>
where
    K: OptionKind,
    V: RequestParameter,
{
    let mut params = Vec::with_capacity(options.len());
    for (kind, value) in options.iter() {
        if let Some(v) = value {
            let s = RequestParameter::format(v).map_err(Error::ser)?;
            params.push((kind.name(), s));
        }
    }
    params.sort_by(|a, b| a.0.cmp(b.0));
    Ok(params)
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn format(&self) -> Option<Result<String>>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn format(&self) -> Option<Result<String>> {
        self.as_ref().and_then(|v| QueryParameter::format(v))
    }
}

impl<T: RequestParameter> QueryParameter for T {
    fn format(&self) -> Option<Result<String>> {
        Some(RequestParameter::format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionValue, RequestOption};
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum ListKind {
        PageSize,
        PageToken,
        ShowDeleted,
    }

    impl OptionKind for ListKind {
        fn name(&self) -> &'static str {
            match self {
                Self::PageSize => "pageSize",
                Self::PageToken => "pageToken",
                Self::ShowDeleted => "showDeleted",
            }
        }
    }

    #[test]
    fn none() -> TestResult {
        assert_eq!(None, QueryParameter::format(&None::<i32>).transpose()?);
        assert_eq!(None, QueryParameter::format(&None::<i64>).transpose()?);
        assert_eq!(None, QueryParameter::format(&None::<u32>).transpose()?);
        assert_eq!(None, QueryParameter::format(&None::<u64>).transpose()?);
        assert_eq!(None, QueryParameter::format(&None::<f64>).transpose()?);
        Ok(())
    }

    #[test]
    fn with_value() -> TestResult {
        let want = Some("42".to_string());
        assert_eq!(want, QueryParameter::format(&Some(42_i32)).transpose()?);
        assert_eq!(want, QueryParameter::format(&Some(42_i64)).transpose()?);
        assert_eq!(want, QueryParameter::format(&Some(42_u32)).transpose()?);
        assert_eq!(want, QueryParameter::format(&Some(42_u64)).transpose()?);
        assert_eq!(want, QueryParameter::format(&Some(42_f64)).transpose()?);
        Ok(())
    }

    #[test]
    fn named() -> TestResult {
        assert_eq!(
            Some(("pageSize", "42".to_string())),
            format("pageSize", &Some(42_i32))?
        );
        assert_eq!(None, format("pageSize", &None::<i32>)?);
        Ok(())
    }

    #[test]
    fn options() -> TestResult {
        let options = RequestOptions::from_options([
            RequestOption::new(ListKind::ShowDeleted, OptionValue::from(true)),
            RequestOption::new(ListKind::PageToken, OptionValue::from("abc")),
            RequestOption::new(ListKind::PageSize, OptionValue::from(100)),
        ])?;
        let got = format_options(&options)?;
        assert_eq!(
            got,
            vec![
                ("pageSize", "100".to_string()),
                ("pageToken", "abc".to_string()),
                ("showDeleted", "true".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn options_skip_absent() -> TestResult {
        let options = RequestOptions::from_options([
            RequestOption::new(ListKind::PageToken, None),
            RequestOption::new(ListKind::PageSize, OptionValue::from(10)),
        ])?;
        let got = format_options(&options)?;
        assert_eq!(got, vec![("pageSize", "10".to_string())]);
        Ok(())
    }

    #[test]
    fn options_format_error() -> TestResult {
        let options =
            RequestOptions::from_options([RequestOption::new(ListKind::PageSize, f64::NAN)])?;
        let got = format_options(&options);
        assert!(matches!(&got, Err(e) if e.is_serialization()), "{got:?}");
        Ok(())
    }
}
