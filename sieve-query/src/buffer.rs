//! Append-only text buffer backing a filter expression.
//!
//! Three append modes cover every token the builder emits:
//!
//! | Method | Used for | Effect |
//! |--------|----------|--------|
//! | [`append_condition`](ExpressionBuffer::append_condition) | conditions | `text` + one space |
//! | [`append_operator`](ExpressionBuffer::append_operator) | `&&`, `\|\|` | trim end, then ` token ` |
//! | [`append_raw`](ExpressionBuffer::append_raw) | `(`, `)` | `token` as-is |
//!
//! [`finalize`](ExpressionBuffer::finalize) trims and optionally
//! percent-encodes without touching the buffer, so it can be called any
//! number of times.
//!
//! ```rust
//! use sieve_query::buffer::ExpressionBuffer;
//!
//! let mut buf = ExpressionBuffer::new();
//! buf.append_condition("a == 1").append_operator("||").append_condition("b == 2");
//! assert_eq!(buf.as_str(), "a == 1 || b == 2 ");
//! assert_eq!(buf.finalize(false), "a == 1 || b == 2");
//! assert_eq!(buf.finalize(true), "a%20%3D%3D%201%20%7C%7C%20b%20%3D%3D%202");
//! ```

use std::fmt;

/// Growing expression text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuffer {
    buffer: String,
}

impl ExpressionBuffer {
    /// Create an empty buffer.
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Create with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Append a condition followed by a single space.
    #[inline]
    pub fn append_condition(&mut self, text: &str) -> &mut Self {
        self.buffer.reserve(text.len() + 1);
        self.buffer.push_str(text);
        self.buffer.push(' ');
        self
    }

    /// Append a logical operator surrounded by single spaces.
    ///
    /// Trailing whitespace is trimmed first, so consecutive operators never
    /// double up their separators.
    pub fn append_operator(&mut self, token: &str) -> &mut Self {
        let trimmed = self.buffer.trim_end().len();
        self.buffer.truncate(trimmed);
        self.buffer.reserve(token.len() + 2);
        self.buffer.push(' ');
        self.buffer.push_str(token);
        self.buffer.push(' ');
        self
    }

    /// Append a token with no whitespace adjustment.
    #[inline]
    pub fn append_raw(&mut self, token: &str) -> &mut Self {
        self.buffer.push_str(token);
        self
    }

    /// The trimmed expression, percent-encoded when `url_encode` is set.
    ///
    /// Encoding escapes everything outside `A-Z a-z 0-9 - _ . ~`; space
    /// becomes `%20`.
    pub fn finalize(&self, url_encode: bool) -> String {
        let trimmed = self.buffer.trim();
        if url_encode {
            urlencoding::encode(trimmed).into_owned()
        } else {
            trimmed.to_string()
        }
    }

    /// Get the current content as a slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the current length.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the current capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

impl fmt::Display for ExpressionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

impl From<ExpressionBuffer> for String {
    fn from(buf: ExpressionBuffer) -> String {
        buf.buffer
    }
}
