//! # sieve-query
//!
//! Fluent builder for `Filters=` query expressions.
//!
//! This crate turns a chain of typed method calls into the textual filter
//! expression that Sieve-style list endpoints accept as a query parameter:
//! - One method per comparison operator, with case-insensitive and count
//!   variants
//! - `&&` / `||` connectives and explicit parenthesized groups
//! - Value literal formatting for text, numbers, booleans and lists
//! - Raw output, or `Filters=` prefixed and percent-encoded output
//!
//! The crate only produces strings. Sending the request is up to the caller.
//!
//! ## Building Filters
//!
//! ```rust
//! use sieve_query::FilterBuilder;
//!
//! let filter = FilterBuilder::new()
//!     .in_("Price", [20, 30, 40])
//!     .and()
//!     .open_paren()
//!     .equals("Category", "Electronics")
//!     .or()
//!     .equals("Category", "Appliances")
//!     .close_paren();
//!
//! assert_eq!(
//!     filter.build(),
//!     r#"Price ^^ [20, 30, 40] && (Category == "Electronics" || Category == "Appliances" )"#
//! );
//! ```
//!
//! ## Query Strings
//!
//! ```rust
//! use sieve_query::{BuilderConfig, FilterBuilder};
//!
//! // Default: prefixed and percent-encoded
//! let filter = FilterBuilder::new().count_greater_than("Tags", 2);
//! assert_eq!(filter.build_query(), "Filters%3D%20Tags%20%23%3E%202");
//!
//! // Prefixed only
//! let filter = FilterBuilder::with_config(BuilderConfig::new().url_encode(false))
//!     .equals_case_insensitive("ItemName", "widget");
//! assert_eq!(filter.build_query(), r#"Filters= ItemName ==* "widget""#);
//! ```
//!
//! ## Operators
//!
//! ```rust
//! use sieve_query::{Comparison, CountOperator, Operator};
//!
//! assert_eq!(Operator::DoesNotContain.token(), "!@=");
//! assert_eq!(Comparison::CaseInsensitive(Operator::StartsWith).token(), "_=*");
//! assert_eq!(CountOperator::LessThanOrEqual.token(), "#<=");
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use serde_json::json;
//! use sieve_query::{CountOperator, ErrorCode, FilterBuilder};
//!
//! let err = FilterBuilder::new()
//!     .try_condition("Tags", CountOperator::Equals, json!(true))
//!     .unwrap_err();
//! assert_eq!(err.code, ErrorCode::TypeMismatch);
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod logging;
pub mod operator;
pub mod query;
pub mod value;

pub use buffer::ExpressionBuffer;
pub use config::{BuilderConfig, FILTER_PREFIX};
pub use error::{ErrorCode, ErrorContext, FilterError, FilterResult};
pub use operator::{Comparison, Connective, CountOperator, Group, Operator};
pub use query::{Condition, FilterBuilder};
pub use value::{FilterValue, Scalar};
