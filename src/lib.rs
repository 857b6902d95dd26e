//! # Sieve
//!
//! Fluent builder for the `Filters=` query expressions understood by
//! Sieve-style list endpoints.
//!
//! Sieve provides:
//! - One typed method per filter operator, including case-insensitive and
//!   count variants
//! - `&&` / `||` connectives and parenthesized groups
//! - Raw expression output, or a prefixed and percent-encoded query string
//!
//! ## Quick Start
//!
//! ```rust
//! use sieve::prelude::*;
//!
//! let filter = FilterBuilder::new()
//!     .equals("firstname", "John")
//!     .and()
//!     .count_greater_than("Orders", 5);
//!
//! assert_eq!(filter.build(), r#"firstname == "John" && Orders #> 5"#);
//!
//! let url = format!("https://api.example.com/users?{}", filter.build_query());
//! assert!(url.ends_with("?Filters%3D%20firstname%20%3D%3D%20%22John%22%20%26%26%20Orders%20%23%3E%205"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Expression engine: operators, values, buffer and builder.
pub mod query {
    pub use sieve_query::*;
}

pub use sieve_query::logging;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::query::{
        BuilderConfig, Comparison, Condition, CountOperator, FilterBuilder, FilterError,
        FilterResult, FilterValue, Operator, Scalar,
    };
}

// Re-export key types at the crate root
pub use query::{BuilderConfig, FilterBuilder, FilterError, FilterResult};
