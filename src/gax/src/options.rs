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

//! Per request options.
//!
//! Many RPCs accept a small set of optional parameters, such as the page size
//! or the page token in `List*` RPCs. The client libraries represent each of
//! these parameters as a [RequestOption]: an immutable pair of an option kind
//! and a (possibly absent) value.
//!
//! Each service defines one or more option *families*, typically one per
//! request type. A family is an enum implementing [OptionKind], and (often) a
//! newtype around `RequestOption<FamilyKind>` with typed constructors.
//!
//! The options for a single request are collected in a [RequestOptions] bag,
//! which rejects duplicate kinds.
//!
//! # Example
//! ```
//! use google_cloud_gax::options::{OptionKind, OptionValue, RequestOption, RequestOptions};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum ListKind { PageSize, PageToken }
//! impl OptionKind for ListKind {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Self::PageSize => "pageSize",
//!             Self::PageToken => "pageToken",
//!         }
//!     }
//! }
//!
//! let options = RequestOptions::from_options([
//!     RequestOption::new(ListKind::PageSize, OptionValue::from(100)),
//!     RequestOption::new(ListKind::PageToken, OptionValue::from("abc")),
//! ])?;
//! assert_eq!(options.get_i64(&ListKind::PageSize), Some(100));
//! assert_eq!(options.get_str(&ListKind::PageToken), Some("abc"));
//! # Ok::<(), google_cloud_gax::error::Error>(())
//! ```

use crate::Result;
use crate::error::Error;
use std::collections::HashMap;
use std::hash::Hash;

/// The kind of a [RequestOption].
///
/// Each option family is a (usually small) enum implementing this trait. The
/// [name][OptionKind::name] is the request parameter name used when the
/// options are sent as query parameters.
pub trait OptionKind: Clone + std::fmt::Debug + Eq + Hash {
    /// The name of the request parameter for this kind.
    fn name(&self) -> &'static str;
}

/// The value stored in most request options.
///
/// Option values are small scalars. Families that need a richer value can use
/// their own type as the second parameter of [RequestOption].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl OptionValue {
    /// Returns the value as an integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// An immutable `(kind, value)` pair configuring one request parameter.
///
/// The kind is always present. The value may be absent, for example, to
/// explicitly request the service default.
///
/// Two options are equal if and only if their kinds and their values are
/// equal. Option families wrapping a `RequestOption` compare through the
/// wrapped option, so equality never depends on which family constructor
/// created the option.
///
/// # Example
/// ```
/// # use google_cloud_gax::options::{OptionKind, OptionValue, RequestOption};
/// # #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// # enum ListKind { PageSize }
/// # impl OptionKind for ListKind {
/// #     fn name(&self) -> &'static str { "pageSize" }
/// # }
/// let option = RequestOption::new(ListKind::PageSize, OptionValue::from(10));
/// assert_eq!(option.kind(), &ListKind::PageSize);
/// assert_eq!(option.value(), Some(&OptionValue::Int(10)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestOption<K, V = OptionValue> {
    kind: K,
    value: Option<V>,
}

impl<K, V> RequestOption<K, V> {
    /// Creates a new option.
    pub fn new<T: Into<Option<V>>>(kind: K, value: T) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Creates a new option from parts that may be missing.
    ///
    /// Fails with an [invalid argument][Error::is_invalid_argument] error if
    /// `kind` is `None`. An absent `value` is valid.
    pub fn try_new(kind: Option<K>, value: Option<V>) -> Result<Self> {
        let kind = kind.ok_or_else(|| Error::invalid_argument("the option kind is required"))?;
        Ok(Self { kind, value })
    }

    /// The option kind.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// The option value, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Consumes the option, returning its parts.
    pub fn into_parts(self) -> (K, Option<V>) {
        (self.kind, self.value)
    }
}

/// The options configuring a single request.
///
/// Each option kind appears at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions<K, V = OptionValue>
where
    K: OptionKind,
{
    options: HashMap<K, Option<V>>,
}

impl<K, V> Default for RequestOptions<K, V>
where
    K: OptionKind,
{
    fn default() -> Self {
        Self {
            options: HashMap::new(),
        }
    }
}

impl<K, V> RequestOptions<K, V>
where
    K: OptionKind,
{
    /// Collects `options` into a new bag.
    ///
    /// Fails with an [invalid argument][Error::is_invalid_argument] error if
    /// the same kind appears more than once, even if both options carry the
    /// same value.
    pub fn from_options<I, O>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = O>,
        O: Into<RequestOption<K, V>>,
    {
        let mut map = HashMap::new();
        for option in options {
            let (kind, value) = option.into().into_parts();
            if map.contains_key(&kind) {
                return Err(Error::invalid_argument(format!(
                    "duplicate option {kind:?}"
                )));
            }
            map.insert(kind, value);
        }
        Ok(Self { options: map })
    }

    /// Returns true if an option of this kind is present, even if its value
    /// is absent.
    pub fn contains(&self, kind: &K) -> bool {
        self.options.contains_key(kind)
    }

    /// The value for `kind`, if the option is present and has a value.
    pub fn get(&self, kind: &K) -> Option<&V> {
        self.options.get(kind).and_then(Option::as_ref)
    }

    /// The number of options in the bag.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the bag has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over the options, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<&V>)> {
        self.options.iter().map(|(k, v)| (k, v.as_ref()))
    }
}

impl<K> RequestOptions<K, OptionValue>
where
    K: OptionKind,
{
    /// The value for `kind` as an integer.
    pub fn get_i64(&self, kind: &K) -> Option<i64> {
        self.get(kind).and_then(OptionValue::as_i64)
    }

    /// The value for `kind` as a string slice.
    pub fn get_str(&self, kind: &K) -> Option<&str> {
        self.get(kind).and_then(OptionValue::as_str)
    }

    /// The value for `kind` as a boolean.
    pub fn get_bool(&self, kind: &K) -> Option<bool> {
        self.get(kind).and_then(OptionValue::as_bool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;
    use test_case::test_case;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum TestKind {
        PageSize,
        PageToken,
    }

    impl OptionKind for TestKind {
        fn name(&self) -> &'static str {
            match self {
                Self::PageSize => "pageSize",
                Self::PageToken => "pageToken",
            }
        }
    }

    type TestOption = RequestOption<TestKind>;

    fn hash<T: Hash>(t: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn constructor() {
        let option = TestOption::new(TestKind::PageSize, OptionValue::from("some value"));
        assert_eq!(option.kind(), &TestKind::PageSize);
        assert_eq!(option.value(), Some(&OptionValue::from("some value")));

        let option = TestOption::new(TestKind::PageSize, None);
        assert_eq!(option.kind(), &TestKind::PageSize);
        assert_eq!(option.value(), None);
    }

    #[test_case(Some(OptionValue::from("some value")))]
    #[test_case(None)]
    fn try_new(value: Option<OptionValue>) -> anyhow::Result<()> {
        let option = TestOption::try_new(Some(TestKind::PageToken), value.clone())?;
        assert_eq!(option.kind(), &TestKind::PageToken);
        assert_eq!(option.value(), value.as_ref());
        Ok(())
    }

    #[test_case(Some(OptionValue::from("some value")))]
    #[test_case(None)]
    fn try_new_missing_kind(value: Option<OptionValue>) {
        let got = TestOption::try_new(None, value);
        assert!(
            matches!(&got, Err(e) if e.is_invalid_argument()),
            "{got:?}"
        );
    }

    #[test]
    fn equality() {
        let option = TestOption::new(TestKind::PageSize, OptionValue::from("some value"));
        let equals = TestOption::new(TestKind::PageSize, OptionValue::from("some value"));
        let other_kind_and_value =
            TestOption::new(TestKind::PageToken, OptionValue::from("another value"));
        let other_kind = TestOption::new(TestKind::PageToken, OptionValue::from("some value"));
        let other_value = TestOption::new(TestKind::PageSize, OptionValue::from("another value"));
        let absent = TestOption::new(TestKind::PageSize, None);

        assert_eq!(option, option.clone());
        assert_eq!(option, equals);
        assert_eq!(equals, option);
        assert_ne!(option, other_kind_and_value);
        assert_ne!(option, other_kind);
        assert_ne!(option, other_value);
        assert_ne!(option, absent);
        assert_eq!(absent, TestOption::new(TestKind::PageSize, None));
    }

    #[test]
    fn hash_consistent_with_eq() {
        let option = TestOption::new(TestKind::PageSize, OptionValue::from(42));
        let equals = TestOption::new(TestKind::PageSize, OptionValue::from(42_i64));
        assert_eq!(option, equals);
        assert_eq!(hash(&option), hash(&equals));

        let absent = TestOption::new(TestKind::PageSize, None);
        assert_eq!(hash(&absent), hash(&absent.clone()));
    }

    #[test]
    fn custom_value_type() {
        let option = RequestOption::<TestKind, u8>::new(TestKind::PageSize, 42_u8);
        assert_eq!(option.value(), Some(&42_u8));
        assert_eq!(option.into_parts(), (TestKind::PageSize, Some(42_u8)));
    }

    #[test]
    fn option_values() {
        assert_eq!(OptionValue::from(42).as_i64(), Some(42));
        assert_eq!(OptionValue::from(42_u32).as_i64(), Some(42));
        assert_eq!(OptionValue::from(42).as_str(), None);
        assert_eq!(OptionValue::from("abc").as_str(), Some("abc"));
        assert_eq!(OptionValue::from(String::from("abc")).as_bool(), None);
        assert_eq!(OptionValue::from(true).as_bool(), Some(true));
        assert_eq!(OptionValue::from(true).to_string(), "true");
        assert_eq!(OptionValue::from(-7).to_string(), "-7");
        assert_eq!(OptionValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn bag() -> anyhow::Result<()> {
        let options = RequestOptions::from_options([
            TestOption::new(TestKind::PageSize, OptionValue::from(100)),
            TestOption::new(TestKind::PageToken, OptionValue::from("token")),
        ])?;
        assert_eq!(options.len(), 2);
        assert!(!options.is_empty());
        assert_eq!(options.get_i64(&TestKind::PageSize), Some(100));
        assert_eq!(options.get_str(&TestKind::PageToken), Some("token"));
        assert_eq!(options.get_str(&TestKind::PageSize), None);
        assert_eq!(options.get_bool(&TestKind::PageSize), None);
        let mut kinds = options.iter().map(|(k, _)| k.name()).collect::<Vec<_>>();
        kinds.sort();
        assert_eq!(kinds, vec!["pageSize", "pageToken"]);
        Ok(())
    }

    #[test]
    fn bag_absent_value() -> anyhow::Result<()> {
        let options =
            RequestOptions::from_options([TestOption::new(TestKind::PageToken, None)])?;
        assert!(options.contains(&TestKind::PageToken));
        assert!(!options.contains(&TestKind::PageSize));
        assert_eq!(options.get(&TestKind::PageToken), None);
        Ok(())
    }

    #[test]
    fn bag_empty() {
        let options = RequestOptions::<TestKind>::default();
        assert!(options.is_empty());
        assert_eq!(options.len(), 0);
    }

    #[test_case(OptionValue::from(10), OptionValue::from(20); "different values")]
    #[test_case(OptionValue::from(10), OptionValue::from(10); "same value")]
    fn bag_duplicate(first: OptionValue, second: OptionValue) {
        let got = RequestOptions::from_options([
            TestOption::new(TestKind::PageSize, first),
            TestOption::new(TestKind::PageSize, second),
        ]);
        assert!(
            matches!(&got, Err(e) if e.is_invalid_argument()),
            "{got:?}"
        );
        let msg = format!("{:?}", got.err());
        assert!(msg.contains("PageSize"), "{msg}");
    }

    #[test]
    fn bag_duplicate_absent_values() {
        let got = RequestOptions::from_options([
            TestOption::new(TestKind::PageToken, None),
            TestOption::new(TestKind::PageToken, None),
        ]);
        assert!(
            matches!(&got, Err(e) if e.is_invalid_argument()),
            "{got:?}"
        );
    }

    #[test]
    fn send_and_sync() {
        static_assertions::assert_impl_all!(RequestOption<TestKind>: Send, Sync);
        static_assertions::assert_impl_all!(RequestOptions<TestKind>: Send, Sync);
    }
}
