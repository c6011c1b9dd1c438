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

use google_cloud_gax::options::{OptionKind, OptionValue, RequestOption, RequestOptions};
use google_cloud_gax::query_parameter;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

// Two families sharing the same parameter names, to verify options from
// different families never mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum ListKind {
    PageSize,
    PageToken,
}

impl OptionKind for ListKind {
    fn name(&self) -> &'static str {
        match self {
            Self::PageSize => "pageSize",
            Self::PageToken => "pageToken",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ListOption(RequestOption<ListKind>);

impl ListOption {
    fn page_size(v: i32) -> Self {
        Self(RequestOption::new(ListKind::PageSize, OptionValue::from(v)))
    }
    fn page_token<V: Into<String>>(v: V) -> Self {
        Self(RequestOption::new(
            ListKind::PageToken,
            OptionValue::from(v.into()),
        ))
    }
}

impl From<ListOption> for RequestOption<ListKind> {
    fn from(value: ListOption) -> Self {
        value.0
    }
}

#[test]
fn family_equality_is_option_equality() {
    let a = ListOption::page_size(10);
    let b = RequestOption::new(ListKind::PageSize, OptionValue::from(10));
    assert_eq!(RequestOption::from(a.clone()), b);
    assert_eq!(a, ListOption::page_size(10));
    assert_ne!(a, ListOption::page_size(20));
}

#[test]
fn family_into_bag() -> Result<()> {
    let options = RequestOptions::from_options([
        ListOption::page_size(25),
        ListOption::page_token("next-page"),
    ])?;
    assert_eq!(options.get_i64(&ListKind::PageSize), Some(25));
    assert_eq!(options.get_str(&ListKind::PageToken), Some("next-page"));

    let params = query_parameter::format_options(&options)?;
    assert_eq!(
        params,
        vec![
            ("pageSize", "25".to_string()),
            ("pageToken", "next-page".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn family_duplicate() {
    let got = RequestOptions::from_options([ListOption::page_size(25), ListOption::page_size(50)]);
    assert!(
        matches!(&got, Err(e) if e.is_invalid_argument()),
        "{got:?}"
    );
}

#[test]
fn missing_kind() {
    let got = RequestOption::<ListKind>::try_new(None, Some(OptionValue::from("some value")));
    assert!(
        matches!(&got, Err(e) if e.is_invalid_argument()),
        "{got:?}"
    );
}
