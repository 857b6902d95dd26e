//! Error types for filter construction.
//!
//! Well-typed builder calls never fail. Errors appear at the two dynamic
//! boundaries of the crate:
//!
//! - values arriving as `serde_json::Value`, which may not fit the operator
//!   they are paired with (`TypeMismatch`)
//! - configuration files that cannot be read or parsed
//!
//! ```rust
//! use sieve_query::{ErrorCode, FilterError};
//!
//! let err = FilterError::type_mismatch("number", "object");
//! assert_eq!(err.code, ErrorCode::TypeMismatch);
//! assert_eq!(err.to_string(), "[S1001] expected number, found object");
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for fallible filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Value errors (1xxx)
    /// Value kind not accepted by the operator (S1001).
    TypeMismatch = 1001,

    // Configuration errors (7xxx)
    /// Invalid configuration (S7001).
    InvalidConfiguration = 7001,
    /// Configuration file could not be read (S7002).
    ConfigIo = 7002,
}

impl ErrorCode {
    /// Get the error code string (e.g., "S1001").
    pub fn code(&self) -> String {
        format!("S{}", *self as u16)
    }

    /// Get a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "Type mismatch",
            Self::InvalidConfiguration => "Invalid configuration",
            Self::ConfigIo => "Configuration file unreadable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Additional context for an error.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The property the failing condition targeted.
    pub property: Option<String>,
    /// The operator token of the failing condition.
    pub operator: Option<String>,
    /// Help text.
    pub help: Option<String>,
}

/// Errors raised while building filters or loading builder configuration.
#[derive(Error, Debug)]
#[error("[{code}] {message}")]
pub struct FilterError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// Additional context.
    pub context: ErrorContext,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FilterError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Set the property.
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.context.property = Some(property.into());
        self
    }

    /// Set the operator token.
    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.context.operator = Some(operator.into());
        self
    }

    /// Add help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // ============== Constructor Functions ==============

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: impl fmt::Display, found: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::TypeMismatch,
            format!("expected {}, found {}", expected, found),
        )
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidConfiguration, message)
    }

    /// Create an error for a configuration file that could not be read.
    pub fn config_io(path: impl fmt::Display, source: std::io::Error) -> Self {
        Self::new(
            ErrorCode::ConfigIo,
            format!("failed to read configuration file {}", path),
        )
        .with_source(source)
    }

    /// Check if this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        self.code == ErrorCode::TypeMismatch
    }

    /// Display the error with its context on multiple lines.
    pub fn display_full(&self) -> String {
        let mut out = format!("Error [{}]: {}", self.code, self.message);
        if let Some(property) = &self.context.property {
            out.push_str(&format!("\n  property: {}", property));
        }
        if let Some(operator) = &self.context.operator {
            out.push_str(&format!("\n  operator: {}", operator));
        }
        if let Some(help) = &self.context.help {
            out.push_str(&format!("\n  help: {}", help));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::TypeMismatch.code(), "S1001");
        assert_eq!(ErrorCode::InvalidConfiguration.code(), "S7001");
        assert_eq!(ErrorCode::ConfigIo.to_string(), "S7002");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = FilterError::type_mismatch("list", "string");
        assert!(err.is_type_mismatch());
        assert_eq!(err.to_string(), "[S1001] expected list, found string");
    }

    #[test]
    fn test_display_full_includes_context() {
        let err = FilterError::type_mismatch("integer", "boolean")
            .with_property("Tags")
            .with_operator("#>")
            .with_help("count operators take whole numbers");

        let full = err.display_full();
        assert!(full.contains("property: Tags"));
        assert!(full.contains("operator: #>"));
        assert!(full.contains("help: count operators"));
    }

    #[test]
    fn test_config_io_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = FilterError::config_io("sieve.toml", io);
        assert_eq!(err.code, ErrorCode::ConfigIo);
        assert!(err.source().is_some());
    }
}
