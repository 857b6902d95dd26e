//! Logging infrastructure for sieve.
//!
//! Structured logging controlled by environment variables.
//!
//! # Environment Variables
//!
//! - `SIEVE_DEBUG=true` / `SIEVE_DEBUG=1` - Enable debug logging
//! - `SIEVE_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `SIEVE_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! # Usage
//!
//! ```rust,no_run
//! use sieve_query::logging;
//!
//! // Initialize logging (call once at startup)
//! logging::init();
//! ```
//!
//! With `SIEVE_DEBUG` set, the builder emits a `trace` event for every
//! token it appends and a `debug` event for every encoded build.

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `SIEVE_DEBUG`.
///
/// Returns `true` if `SIEVE_DEBUG` is set to "true", "1", or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("SIEVE_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `SIEVE_LOG_LEVEL`.
///
/// Defaults to "debug" if `SIEVE_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = || if is_debug_enabled() { "debug" } else { "warn" };

    match env::var("SIEVE_LOG_LEVEL") {
        Ok(level) => match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => fallback(),
        },
        Err(_) => fallback(),
    }
}

/// Get the configured log format from `SIEVE_LOG_FORMAT`.
///
/// Defaults to "json".
pub fn get_log_format() -> &'static str {
    env::var("SIEVE_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize the sieve logging system.
///
/// Subsequent calls are no-ops. Does nothing unless `SIEVE_DEBUG` or
/// `SIEVE_LOG_LEVEL` is set.
pub fn init() {
    if !is_debug_enabled() && env::var("SIEVE_LOG_LEVEL").is_err() {
        return;
    }
    install(get_log_level());
}

/// Initialize logging at an explicit level, ignoring the environment.
///
/// ```rust,no_run
/// use sieve_query::logging;
///
/// logging::init_with_level("trace");
/// ```
pub fn init_with_level(level: &str) {
    install(level);
}

fn install(level: &str) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter = EnvFilter::try_new(format!("sieve={},sieve_query={}", level, level))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let format = get_log_format();
            match format {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json())
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty())
                        .init();
                }
            }

            tracing::info!(level = level, format = format, "sieve logging initialized");
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        {
            // Silent unless the application installs its own subscriber.
            let _ = level;
        }
    });
}

/// Debug logging gated on `SIEVE_DEBUG` at runtime.
#[macro_export]
macro_rules! sieve_debug {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            tracing::debug!($($arg)*);
        }
    };
}

/// Trace logging gated on `SIEVE_DEBUG` at runtime.
#[macro_export]
macro_rules! sieve_trace {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            tracing::trace!($($arg)*);
        }
    };
}
