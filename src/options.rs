//! Query options and filters.
//!
//! Every service call takes a slice of [`QueryOption`] directives. They are applied in order to a
//! fresh [`Options`] accumulator, which is then encoded into the query string (or form body) the
//! API expects:
//!
//! | Directive | Encoded as |
//! |-----------|------------|
//! | [`QueryOption::fields`] | `fields=name,slug` |
//! | [`QueryOption::filter`] | `filter[popularity][gt]=75` |
//! | [`QueryOption::order`] | `order=popularity:desc` |
//! | [`QueryOption::limit`] | `limit=20` |
//! | [`QueryOption::offset`] | `offset=40` |
//! | [`QueryOption::scroll`] | `scroll=1` |
//!
//! Applying stops at the first invalid directive. Directives writing the same key overwrite
//! earlier ones.
//!
//! # Example
//!
//! ```
//! use igdb_client::options::{Direction, Operator, Options, QueryOption};
//!
//! # fn example() -> igdb_client::Result<()> {
//! let options = Options::new(&[
//!     QueryOption::fields(["name", "rating"]),
//!     QueryOption::filter("rating", Operator::GreaterThanEqual, [80]),
//!     QueryOption::order("rating", Direction::Desc),
//!     QueryOption::limit(10),
//! ])?;
//!
//! assert_eq!(options.get("fields"), Some("name,rating"));
//! assert_eq!(options.get("filter[rating][gte]"), Some("80"));
//! # Ok(())
//! # }
//! ```
#![allow(
    clippy::module_name_repetitions,
    reason = "Options and QueryOption read better than Set and Query at call sites"
)]

use std::collections::BTreeMap;

use serde::Serialize;

use crate::Result;
use crate::error::InvalidArgument;

/// Smallest page size the API accepts.
pub const LIMIT_MIN: i64 = 1;
/// Largest page size the API accepts.
pub const LIMIT_MAX: i64 = 50;
/// Smallest offset the API accepts.
pub const OFFSET_MIN: i64 = 0;
/// Largest offset the API accepts.
pub const OFFSET_MAX: i64 = 5000;

const FIELDS: &str = "fields";
const ORDER: &str = "order";
const LIMIT: &str = "limit";
const OFFSET: &str = "offset";
const SEARCH: &str = "search";
const SCROLL: &str = "scroll";

/// Comparison applied by a [`Filter`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Operator {
    #[strum(serialize = "eq")]
    Equals,
    #[strum(serialize = "not_eq")]
    NotEquals,
    #[strum(serialize = "gt")]
    GreaterThan,
    #[strum(serialize = "gte")]
    GreaterThanEqual,
    #[strum(serialize = "lt")]
    LessThan,
    #[strum(serialize = "lte")]
    LessThanEqual,
    /// Field value starts with the given string.
    #[strum(serialize = "prefix")]
    Prefix,
    #[strum(serialize = "exists")]
    Exists,
    #[strum(serialize = "not_exists")]
    NotExists,
    /// Array field contains every given value.
    #[strum(serialize = "all")]
    ContainsAll,
    /// Array field contains at least one of the given values.
    #[strum(serialize = "any")]
    ContainsAtLeast,
    /// Field value is exactly one of the given values.
    #[strum(serialize = "in")]
    ContainsExactly,
    /// Field value is none of the given values.
    #[strum(serialize = "not_in")]
    NotContainsExactly,
}

impl Operator {
    const ALL: [Operator; 13] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterThan,
        Operator::GreaterThanEqual,
        Operator::LessThan,
        Operator::LessThanEqual,
        Operator::Prefix,
        Operator::Exists,
        Operator::NotExists,
        Operator::ContainsAll,
        Operator::ContainsAtLeast,
        Operator::ContainsExactly,
        Operator::NotContainsExactly,
    ];

    /// Looks up an operator by its wire code, e.g. `gte`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.to_string() == code)
    }
}

/// Sort direction for [`QueryOption::order`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// A `(field, operator, values)` triple, encoded as `filter[field][op]=v1,v2`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub operator: Operator,
    pub values: Vec<String>,
}

impl Filter {
    pub fn new<F, I, V>(field: F, operator: Operator, values: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        Self {
            field: field.into(),
            operator,
            values: values.into_iter().map(|v| v.to_string()).collect(),
        }
    }

    /// The query key, e.g. `filter[popularity][gt]`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("filter[{}][{}]", self.field, self.operator)
    }

    /// The comma-separated query value.
    #[must_use]
    pub fn value(&self) -> String {
        self.values.join(",")
    }

    /// Parses a decoded `filter[field][op]` key and its value back into a [`Filter`].
    ///
    /// Returns `None` when the key is not a filter key or names an unknown operator.
    #[must_use]
    pub fn from_pair(key: &str, value: &str) -> Option<Self> {
        let inner = key.strip_prefix("filter[")?.strip_suffix(']')?;
        let (field, code) = inner.split_once("][")?;
        if field.is_empty() {
            return None;
        }
        let operator = Operator::from_code(code)?;
        let values = if value.is_empty() {
            Vec::new()
        } else {
            value.split(',').map(str::to_owned).collect()
        };

        Some(Self {
            field: field.to_owned(),
            operator,
            values,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Fields(Vec<String>),
    Filter(Filter),
    Order { field: String, direction: Direction },
    Limit(i64),
    Offset(i64),
    Search(String),
    Scroll(i64),
}

/// One configuration directive for a request. Build with the associated functions and pass a
/// slice of them to any service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOption(Directive);

impl QueryOption {
    /// Restricts the response to the named fields. `*` selects every field. An empty list is a
    /// no-op.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(Directive::Fields(names.into_iter().map(Into::into).collect()))
    }

    /// Filters results on `field` using `operator` against `values`.
    pub fn filter<F, I, V>(field: F, operator: Operator, values: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        Self(Directive::Filter(Filter::new(field, operator, values)))
    }

    /// Sorts results on `field`.
    pub fn order<F: Into<String>>(field: F, direction: Direction) -> Self {
        Self(Directive::Order {
            field: field.into(),
            direction,
        })
    }

    /// Page size, within [`LIMIT_MIN`]..=[`LIMIT_MAX`].
    #[must_use]
    pub fn limit(limit: i64) -> Self {
        Self(Directive::Limit(limit))
    }

    /// Number of results to skip, within [`OFFSET_MIN`]..=[`OFFSET_MAX`].
    #[must_use]
    pub fn offset(offset: i64) -> Self {
        Self(Directive::Offset(offset))
    }

    /// Requests a scroll cursor for the given page.
    #[must_use]
    pub fn scroll(page: i64) -> Self {
        Self(Directive::Scroll(page))
    }

    /// Full-text search. Only reachable through `Service::search`, which validates the query.
    pub(crate) fn search<Q: Into<String>>(query: Q) -> Self {
        Self(Directive::Search(query.into()))
    }

    fn apply(&self, values: &mut BTreeMap<String, String>) -> Result<()> {
        match &self.0 {
            Directive::Fields(names) => {
                if !names.is_empty() {
                    values.insert(FIELDS.to_owned(), names.join(","));
                }
            }
            Directive::Filter(filter) => {
                values.insert(filter.key(), filter.value());
            }
            Directive::Order { field, direction } => {
                values.insert(ORDER.to_owned(), format!("{field}:{direction}"));
            }
            Directive::Limit(limit) => {
                check_range(LIMIT, *limit, LIMIT_MIN, LIMIT_MAX)?;
                values.insert(LIMIT.to_owned(), limit.to_string());
            }
            Directive::Offset(offset) => {
                check_range(OFFSET, *offset, OFFSET_MIN, OFFSET_MAX)?;
                values.insert(OFFSET.to_owned(), offset.to_string());
            }
            Directive::Search(query) => {
                values.insert(SEARCH.to_owned(), query.clone());
            }
            Directive::Scroll(page) => {
                values.insert(SCROLL.to_owned(), page.to_string());
            }
        }

        Ok(())
    }
}

fn check_range(option: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InvalidArgument::OutOfRange {
            option,
            value,
            min,
            max,
        }
        .into())
    }
}

/// The accumulated query parameters for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options {
    values: BTreeMap<String, String>,
}

impl Options {
    /// Applies `options` in order, stopping at the first one that fails validation.
    pub fn new(options: &[QueryOption]) -> Result<Self> {
        let mut values = BTreeMap::new();
        for option in options {
            option.apply(&mut values)?;
        }

        Ok(Self { values })
    }

    /// Returns the raw (unencoded) value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Every filter currently set.
    pub fn filters(&self) -> impl Iterator<Item = Filter> + '_ {
        self.values
            .iter()
            .filter_map(|(k, v)| Filter::from_pair(k, v))
    }

    /// Form-encodes the options, e.g. `fields=name%2Cslug&limit=5`.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_html_form::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Kind};

    fn out_of_range(err: &Error) -> Option<(&'static str, i64)> {
        match err.downcast_ref::<InvalidArgument>()? {
            InvalidArgument::OutOfRange { option, value, .. } => Some((*option, *value)),
            _ => None,
        }
    }

    #[test]
    fn fields_should_join_names() {
        let options = Options::new(&[QueryOption::fields(["name", "slug", "url"])]).unwrap();

        assert_eq!(options.get("fields"), Some("name,slug,url"));
    }

    #[test]
    fn empty_fields_should_not_write_key() {
        let options = Options::new(&[QueryOption::fields(Vec::<String>::new())]).unwrap();

        assert!(options.is_empty());
    }

    #[test]
    fn filter_should_encode_key_and_csv() {
        let options = Options::new(&[QueryOption::filter(
            "platforms",
            Operator::ContainsAtLeast,
            [48, 49, 6],
        )])
        .unwrap();

        assert_eq!(options.get("filter[platforms][any]"), Some("48,49,6"));
    }

    #[test]
    fn order_should_render_direction() {
        let asc = Options::new(&[QueryOption::order("name", Direction::Asc)]).unwrap();
        let desc = Options::new(&[QueryOption::order("popularity", Direction::Desc)]).unwrap();

        assert_eq!(asc.get("order"), Some("name:asc"));
        assert_eq!(desc.get("order"), Some("popularity:desc"));
    }

    #[test]
    fn limit_bounds_are_inclusive() {
        for limit in [LIMIT_MIN, 25, LIMIT_MAX] {
            let options = Options::new(&[QueryOption::limit(limit)]).unwrap();
            assert_eq!(options.get("limit"), Some(limit.to_string().as_str()));
        }
    }

    #[test]
    fn limit_out_of_range_should_fail() {
        for limit in [-1, 0, 51, 500] {
            let err = Options::new(&[QueryOption::limit(limit)]).unwrap_err();

            assert_eq!(err.kind(), Kind::Validation);
            assert_eq!(out_of_range(&err), Some(("limit", limit)));
        }
    }

    #[test]
    fn offset_out_of_range_should_fail() {
        let err = Options::new(&[QueryOption::offset(-1)]).unwrap_err();
        assert_eq!(out_of_range(&err), Some(("offset", -1)));

        let err = Options::new(&[QueryOption::offset(OFFSET_MAX + 1)]).unwrap_err();
        assert_eq!(out_of_range(&err), Some(("offset", OFFSET_MAX + 1)));

        let options = Options::new(&[QueryOption::offset(0)]).unwrap();
        assert_eq!(options.get("offset"), Some("0"));
    }

    #[test]
    fn first_invalid_directive_should_stop_construction() {
        let err = Options::new(&[
            QueryOption::limit(0),
            QueryOption::offset(-5),
            QueryOption::fields(["name"]),
        ])
        .unwrap_err();

        assert_eq!(out_of_range(&err), Some(("limit", 0)));
    }

    #[test]
    fn later_directive_should_overwrite_same_key() {
        let options = Options::new(&[
            QueryOption::limit(5),
            QueryOption::fields(["name"]),
            QueryOption::limit(10),
            QueryOption::fields(["slug"]),
        ])
        .unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options.get("limit"), Some("10"));
        assert_eq!(options.get("fields"), Some("slug"));
    }

    #[test]
    fn filters_on_different_operators_should_coexist() {
        let options = Options::new(&[
            QueryOption::filter("rating", Operator::GreaterThan, [70]),
            QueryOption::filter("rating", Operator::LessThanEqual, [90]),
        ])
        .unwrap();

        let filters: Vec<Filter> = options.filters().collect();
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn search_and_scroll_should_set_keys() {
        let options = Options::new(&[QueryOption::search("zelda"), QueryOption::scroll(1)]).unwrap();

        assert_eq!(options.get("search"), Some("zelda"));
        assert_eq!(options.get("scroll"), Some("1"));
    }

    #[test]
    fn filter_should_survive_encoding_and_parsing() {
        let options = Options::new(&[QueryOption::filter(
            "popularity",
            Operator::GreaterThan,
            ["75"],
        )])
        .unwrap();

        let encoded = options.encode().unwrap();
        let pairs: Vec<(String, String)> = serde_html_form::from_str(&encoded).unwrap();
        assert_eq!(pairs.len(), 1);

        let filter = Filter::from_pair(&pairs[0].0, &pairs[0].1).unwrap();
        assert_eq!(
            filter,
            Filter::new("popularity", Operator::GreaterThan, ["75"])
        );
    }

    #[test]
    fn encode_should_escape_reserved_characters() {
        let options = Options::new(&[
            QueryOption::fields(["name", "slug"]),
            QueryOption::search("mario kart"),
        ])
        .unwrap();

        assert_eq!(
            options.encode().unwrap(),
            "fields=name%2Cslug&search=mario+kart"
        );
    }

    #[test]
    fn from_pair_should_reject_other_keys() {
        assert_eq!(Filter::from_pair("limit", "5"), None);
        assert_eq!(Filter::from_pair("filter[name][like]", "x"), None);
        assert_eq!(Filter::from_pair("filter[][eq]", "x"), None);
    }

    #[test]
    fn operator_codes_should_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_code(&op.to_string()), Some(op));
        }
    }
}
