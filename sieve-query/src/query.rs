//! Fluent filter expression builder.
//!
//! [`FilterBuilder`] is the entry point. Every comparison method appends one
//! `property operator value` condition, and the builder is passed along by
//! value so calls chain:
//!
//! ```rust
//! use sieve_query::FilterBuilder;
//!
//! let filter = FilterBuilder::new()
//!     .starts_with("City", "New")
//!     .and()
//!     .open_paren()
//!     .greater_than("Population", 1_000_000)
//!     .or()
//!     .equals("Country", "USA")
//!     .close_paren();
//!
//! assert_eq!(
//!     filter.build(),
//!     r#"City _= "New" && (Population > 1000000 || Country == "USA" )"#
//! );
//! ```
//!
//! Two terminal operations read the result without consuming the builder:
//!
//! - [`build`](FilterBuilder::build) returns the bare expression, for callers
//!   that serialize query parameters themselves.
//! - [`build_query`](FilterBuilder::build_query) returns the `Filters=`
//!   prefixed, percent-encoded form to append after `?` in a URL.
//!
//! Parenthesis balance is not checked.

use std::fmt;

use smol_str::SmolStr;

use crate::buffer::ExpressionBuffer;
use crate::config::{BuilderConfig, FILTER_PREFIX};
use crate::error::{FilterError, FilterResult};
use crate::operator::{Comparison, Connective, CountOperator, Group, Operator};
use crate::value::{FilterValue, Scalar};

/// One `property operator value` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    property: SmolStr,
    comparison: Comparison,
    value: FilterValue,
}

impl Condition {
    /// Create a condition.
    pub fn new(
        property: impl AsRef<str>,
        comparison: impl Into<Comparison>,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            property: SmolStr::new(property.as_ref()),
            comparison: comparison.into(),
            value: value.into(),
        }
    }

    /// Create a condition from a dynamically typed value.
    ///
    /// The `in` family needs an array of scalars, count operators need an
    /// integer, and every other operator needs a single text, number or
    /// boolean. Anything else is a `TypeMismatch`.
    pub fn try_new(
        property: impl AsRef<str>,
        comparison: impl Into<Comparison>,
        value: serde_json::Value,
    ) -> FilterResult<Self> {
        let property = property.as_ref();
        let comparison = comparison.into();
        let annotate = |err: FilterError| {
            err.with_property(property)
                .with_operator(comparison.token())
        };

        let value = FilterValue::try_from(value).map_err(annotate)?;
        check_operand(comparison, &value).map_err(annotate)?;

        Ok(Self::new(property, comparison, value))
    }

    /// The property name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The comparison operator.
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// The operand.
    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// Write `property token literal` to a buffer.
    pub fn write_to(&self, buf: &mut String) {
        buf.push_str(&self.property);
        buf.push(' ');
        buf.push_str(self.comparison.token());
        buf.push(' ');
        self.value.write_literal(buf, self.comparison.is_text_match());
    }
}

fn check_operand(comparison: Comparison, value: &FilterValue) -> FilterResult<()> {
    if comparison.is_list() {
        return match value {
            FilterValue::List(_) => Ok(()),
            other => Err(FilterError::type_mismatch("list", other.kind())),
        };
    }
    match value {
        FilterValue::List(_) => Err(FilterError::type_mismatch(
            "text, number or boolean",
            "list",
        )),
        FilterValue::Scalar(Scalar::Int(_)) => Ok(()),
        FilterValue::Scalar(other) if comparison.is_count() => {
            Err(FilterError::type_mismatch("integer", other.kind())
                .with_help("count operators compare the number of elements"))
        }
        FilterValue::Scalar(_) => Ok(()),
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.write_to(&mut buf);
        f.write_str(&buf)
    }
}

/// Fluent builder for filter expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBuilder {
    buffer: ExpressionBuffer,
    config: BuilderConfig,
    /// Length of the seeded prefix, `0` when none was emitted.
    prefix_len: usize,
}

/// Generates one wrapper per scalar comparison.
macro_rules! scalar_comparisons {
    ($( $(#[$meta:meta])* $name:ident => $cmp:expr; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(self, property: impl AsRef<str>, value: impl Into<Scalar>) -> Self {
                self.compare(property.as_ref(), $cmp, FilterValue::Scalar(value.into()))
            }
        )*
    };
}

/// Generates one wrapper per count comparison.
macro_rules! count_comparisons {
    ($( $(#[$meta:meta])* $name:ident => $op:expr; )*) => {
        $(
            $(#[$meta])*
            pub fn $name(self, property: impl AsRef<str>, count: i64) -> Self {
                self.compare(
                    property.as_ref(),
                    Comparison::Count($op),
                    FilterValue::Scalar(Scalar::Int(count)),
                )
            }
        )*
    };
}

impl FilterBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create a builder with the given configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        let mut buffer = ExpressionBuffer::with_capacity(64);
        if config.add_filter_prefix {
            buffer.append_condition(FILTER_PREFIX);
        }
        let prefix_len = buffer.len();

        Self {
            buffer,
            config,
            prefix_len,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The accumulated text, prefix included, untrimmed.
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Whether nothing has been appended after the prefix.
    pub fn is_empty(&self) -> bool {
        self.expression().is_empty()
    }

    // ============== Generic entry points ==============

    /// Append a prepared condition.
    pub fn condition(mut self, condition: Condition) -> Self {
        let mut text = String::with_capacity(condition.property.len() + 16);
        condition.write_to(&mut text);
        crate::sieve_trace!(condition = %text, "appending condition");
        self.buffer.append_condition(&text);
        self
    }

    /// Append a condition whose value arrives as JSON.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use sieve_query::FilterBuilder;
    /// use sieve_query::operator::{Comparison, Operator};
    ///
    /// let filter = FilterBuilder::new()
    ///     .try_condition("Price", Comparison::Plain(Operator::In), json!([20, 30]))
    ///     .unwrap();
    /// assert_eq!(filter.build(), "Price ^^ [20, 30]");
    ///
    /// let err = FilterBuilder::new()
    ///     .try_condition("Price", Comparison::Plain(Operator::In), json!(20))
    ///     .unwrap_err();
    /// assert!(err.is_type_mismatch());
    /// ```
    pub fn try_condition(
        self,
        property: impl AsRef<str>,
        comparison: impl Into<Comparison>,
        value: serde_json::Value,
    ) -> FilterResult<Self> {
        let condition = Condition::try_new(property, comparison, value)?;
        Ok(self.condition(condition))
    }

    fn compare(self, property: &str, comparison: Comparison, value: FilterValue) -> Self {
        self.condition(Condition {
            property: SmolStr::new(property),
            comparison,
            value,
        })
    }

    // ============== Comparisons ==============

    scalar_comparisons! {
        /// `property == value`
        equals => Comparison::Plain(Operator::Equals);
        /// `property != value`
        not_equals => Comparison::Plain(Operator::NotEquals);
        /// `property > value`
        greater_than => Comparison::Plain(Operator::GreaterThan);
        /// `property < value`
        less_than => Comparison::Plain(Operator::LessThan);
        /// `property >= value`
        greater_than_or_equal => Comparison::Plain(Operator::GreaterThanOrEqual);
        /// `property <= value`
        less_than_or_equal => Comparison::Plain(Operator::LessThanOrEqual);
        /// `property _= "value"`
        starts_with => Comparison::Plain(Operator::StartsWith);
        /// `property !_= "value"`
        does_not_start_with => Comparison::Plain(Operator::DoesNotStartWith);
        /// `property _-= "value"`
        ends_with => Comparison::Plain(Operator::EndsWith);
        /// `property !_-= "value"`
        does_not_end_with => Comparison::Plain(Operator::DoesNotEndWith);
        /// `property @= "value"`
        contains => Comparison::Plain(Operator::Contains);
        /// `property !@= "value"`
        does_not_contain => Comparison::Plain(Operator::DoesNotContain);
        /// `property ~~ "value"`
        sounds_like => Comparison::Plain(Operator::SoundsLike);
        /// `property !~ "value"`
        does_not_sound_like => Comparison::Plain(Operator::DoesNotSoundLike);
        /// `property ^$ value`
        has => Comparison::Plain(Operator::Has);
        /// `property !^$ value`
        does_not_have => Comparison::Plain(Operator::DoesNotHave);
    }

    scalar_comparisons! {
        /// `property ==* value`
        equals_case_insensitive => Comparison::CaseInsensitive(Operator::Equals);
        /// `property !=* value`
        not_equals_case_insensitive => Comparison::CaseInsensitive(Operator::NotEquals);
        /// `property >* value`
        greater_than_case_insensitive => Comparison::CaseInsensitive(Operator::GreaterThan);
        /// `property <* value`
        less_than_case_insensitive => Comparison::CaseInsensitive(Operator::LessThan);
        /// `property >=* value`
        greater_than_or_equal_case_insensitive => Comparison::CaseInsensitive(Operator::GreaterThanOrEqual);
        /// `property <=* value`
        less_than_or_equal_case_insensitive => Comparison::CaseInsensitive(Operator::LessThanOrEqual);
        /// `property _=* "value"`
        starts_with_case_insensitive => Comparison::CaseInsensitive(Operator::StartsWith);
        /// `property !_=* "value"`
        does_not_start_with_case_insensitive => Comparison::CaseInsensitive(Operator::DoesNotStartWith);
        /// `property _-=* "value"`
        ends_with_case_insensitive => Comparison::CaseInsensitive(Operator::EndsWith);
        /// `property !_-=* "value"`
        does_not_end_with_case_insensitive => Comparison::CaseInsensitive(Operator::DoesNotEndWith);
        /// `property @=* "value"`
        contains_case_insensitive => Comparison::CaseInsensitive(Operator::Contains);
        /// `property !@=* "value"`
        does_not_contain_case_insensitive => Comparison::CaseInsensitive(Operator::DoesNotContain);
        /// `property ~~* "value"`
        sounds_like_case_insensitive => Comparison::CaseInsensitive(Operator::SoundsLike);
        /// `property !~* "value"`
        does_not_sound_like_case_insensitive => Comparison::CaseInsensitive(Operator::DoesNotSoundLike);
        /// `property ^$* value`
        has_case_insensitive => Comparison::CaseInsensitive(Operator::Has);
        /// `property !^$* value`
        does_not_have_case_insensitive => Comparison::CaseInsensitive(Operator::DoesNotHave);
    }

    /// `property ^^ [a, b, ...]`
    pub fn in_<I, V>(self, property: impl AsRef<str>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.compare(
            property.as_ref(),
            Comparison::Plain(Operator::In),
            FilterValue::list(values),
        )
    }

    /// `property ^^* [a, b, ...]`
    pub fn in_case_insensitive<I, V>(self, property: impl AsRef<str>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Scalar>,
    {
        self.compare(
            property.as_ref(),
            Comparison::CaseInsensitive(Operator::In),
            FilterValue::list(values),
        )
    }

    count_comparisons! {
        /// `property #> count`
        count_greater_than => CountOperator::GreaterThan;
        /// `property #< count`
        count_less_than => CountOperator::LessThan;
        /// `property #>= count`
        count_greater_than_or_equal => CountOperator::GreaterThanOrEqual;
        /// `property #<= count`
        count_less_than_or_equal => CountOperator::LessThanOrEqual;
        /// `property #== count`
        count_equals => CountOperator::Equals;
        /// `property #!= count`
        count_not_equals => CountOperator::NotEquals;
    }

    count_comparisons! {
        /// Same as [`count_equals`](Self::count_equals).
        equals_case_count => CountOperator::Equals;
        /// Same as [`count_not_equals`](Self::count_not_equals).
        not_equals_case_count => CountOperator::NotEquals;
        /// Same as [`count_greater_than`](Self::count_greater_than).
        greater_than_case_count => CountOperator::GreaterThan;
        /// Same as [`count_less_than`](Self::count_less_than).
        less_than_case_count => CountOperator::LessThan;
        /// Same as [`count_greater_than_or_equal`](Self::count_greater_than_or_equal).
        greater_than_or_equal_case_count => CountOperator::GreaterThanOrEqual;
        /// Same as [`count_less_than_or_equal`](Self::count_less_than_or_equal).
        less_than_or_equal_case_count => CountOperator::LessThanOrEqual;
    }

    // ============== Logical operators and grouping ==============

    /// Append a logical connective.
    pub fn connect(mut self, connective: Connective) -> Self {
        crate::sieve_trace!(token = connective.token(), "appending connective");
        self.buffer.append_operator(connective.token());
        self
    }

    /// Append `&&`.
    pub fn and(self) -> Self {
        self.connect(Connective::And)
    }

    /// Append `||`.
    pub fn or(self) -> Self {
        self.connect(Connective::Or)
    }

    /// Append a parenthesis.
    pub fn group(mut self, group: Group) -> Self {
        crate::sieve_trace!(token = group.token(), "appending group");
        self.buffer.append_raw(group.token());
        self
    }

    /// Append `(`.
    pub fn open_paren(self) -> Self {
        self.group(Group::Open)
    }

    /// Append `)`.
    pub fn close_paren(self) -> Self {
        self.group(Group::Close)
    }

    // ============== Terminal operations ==============

    fn expression(&self) -> &str {
        self.buffer
            .as_str()
            .get(self.prefix_len..)
            .unwrap_or_default()
            .trim()
    }

    /// The raw filter expression: no prefix marker, no encoding.
    pub fn build(&self) -> String {
        self.expression().to_string()
    }

    /// The form to append after `?` in a URL.
    ///
    /// Carries the `Filters= ` marker when `add_filter_prefix` is set and
    /// is percent-encoded when `url_encode` is set.
    pub fn build_query(&self) -> String {
        let query = self.buffer.finalize(self.config.url_encode);
        crate::sieve_debug!(
            len = query.len(),
            prefixed = self.config.add_filter_prefix,
            encoded = self.config.url_encode,
            "built filter query"
        );
        query
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FilterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expression())
    }
}
