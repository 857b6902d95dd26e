//! Construction-time options for [`FilterBuilder`](crate::FilterBuilder).
//!
//! Options can be set in code or loaded from TOML:
//!
//! ```toml
//! url_encode = true
//! add_filter_prefix = false
//! ```
//!
//! `${VAR}` references in the TOML source are replaced with the value of the
//! environment variable before parsing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// The leading marker that names the payload as a filter expression.
pub const FILTER_PREFIX: &str = "Filters=";

/// Builder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Percent-encode the output of `build_query`.
    pub url_encode: bool,

    /// Seed the expression with [`FILTER_PREFIX`] and reinstate it in
    /// `build_query`.
    pub add_filter_prefix: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            url_encode: true,
            add_filter_prefix: true,
        }
    }
}

impl BuilderConfig {
    /// Create the default configuration (prefix and encoding enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// No prefix and no encoding.
    pub fn raw() -> Self {
        Self {
            url_encode: false,
            add_filter_prefix: false,
        }
    }

    /// Set whether `build_query` percent-encodes.
    pub fn url_encode(mut self, enabled: bool) -> Self {
        self.url_encode = enabled;
        self
    }

    /// Set whether the prefix marker is emitted.
    pub fn add_filter_prefix(mut self, enabled: bool) -> Self {
        self.add_filter_prefix = enabled;
        self
    }

    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> FilterResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FilterError::config_io(path.display(), e))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> FilterResult<Self> {
        let expanded = expand_env_vars(content);

        toml::from_str(&expanded).map_err(|e| {
            FilterError::invalid_config(format!("invalid builder configuration: {}", e.message()))
                .with_help("recognized keys are `url_encode` and `add_filter_prefix`")
                .with_source(e)
        })
    }
}

/// Expand `${VAR}` references. Unset variables are left as written.
fn expand_env_vars(content: &str) -> String {
    let Ok(re) = regex_lite::Regex::new(r"\$\{([^}]+)\}") else {
        return content.to_string();
    };

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        if let Ok(value) = std::env::var(&cap[1]) {
            result = result.replace(&cap[0], &value);
        }
    }

    result
}
