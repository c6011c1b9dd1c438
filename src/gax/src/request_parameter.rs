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

use base64::Engine;

type Result = std::result::Result<String, Error>;

/// Types that can be formatted as the value of a request parameter.
pub trait RequestParameter {
    fn format(&self) -> Result;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot format as request parameter {0:?}")]
    Format(Box<dyn std::error::Error + Send + Sync>),
}

impl RequestParameter for i32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for i64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for u32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for u64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for f64 {
    fn format(&self) -> Result {
        if !self.is_finite() {
            return Err(Error::Format(
                format!("{self} cannot be sent as a query parameter").into(),
            ));
        }
        Ok(format!("{self}"))
    }
}
impl RequestParameter for String {
    fn format(&self) -> Result {
        Ok(self.clone())
    }
}
impl RequestParameter for bool {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}

impl RequestParameter for bytes::Bytes {
    fn format(&self) -> Result {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;
        Ok(URL_SAFE_NO_PAD.encode(self.iter()))
    }
}

impl RequestParameter for crate::options::OptionValue {
    fn format(&self) -> Result {
        Ok(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn with_value() -> TestResult {
        let want = "42".to_string();
        assert_eq!(want, RequestParameter::format(&42_i32)?);
        assert_eq!(want, RequestParameter::format(&42_i64)?);
        assert_eq!(want, RequestParameter::format(&42_u32)?);
        assert_eq!(want, RequestParameter::format(&42_u64)?);
        assert_eq!(want, RequestParameter::format(&42_f64)?);
        assert_eq!("true", RequestParameter::format(&true)?);
        assert_eq!("abc", RequestParameter::format(&"abc".to_string())?);
        Ok(())
    }

    #[test]
    fn non_finite() {
        let got = RequestParameter::format(&f64::NAN);
        assert!(matches!(got, Err(Error::Format(_))), "{got:?}");
        let got = RequestParameter::format(&f64::INFINITY);
        assert!(matches!(got, Err(Error::Format(_))), "{got:?}");
    }

    #[test]
    fn bytes() -> TestResult {
        let b = bytes::Bytes::from_static(b"the quick brown fox");
        let f = RequestParameter::format(&b)?;
        assert_eq!("dGhlIHF1aWNrIGJyb3duIGZveA", f);
        Ok(())
    }

    #[test]
    fn option_value() -> TestResult {
        assert_eq!("100", RequestParameter::format(&OptionValue::from(100))?);
        assert_eq!("false", RequestParameter::format(&OptionValue::from(false))?);
        assert_eq!("token", RequestParameter::format(&OptionValue::from("token"))?);
        Ok(())
    }
}
