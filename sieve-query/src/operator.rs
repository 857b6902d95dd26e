//! Operator catalog for filter expressions.
//!
//! Every token that can appear in a filter expression is reachable from one
//! of the enums in this module. Call sites name an operator by kind and ask
//! the catalog for its token, so a method name can never drift away from the
//! symbol it emits.
//!
//! | Kind | Token | Case-insensitive |
//! |------|-------|------------------|
//! | equals | `==` | `==*` |
//! | not equals | `!=` | `!=*` |
//! | greater than | `>` | `>*` |
//! | less than | `<` | `<*` |
//! | greater than or equal | `>=` | `>=*` |
//! | less than or equal | `<=` | `<=*` |
//! | starts with | `_=` | `_=*` |
//! | does not start with | `!_=` | `!_=*` |
//! | ends with | `_-=` | `_-=*` |
//! | does not end with | `!_-=` | `!_-=*` |
//! | contains | `@=` | `@=*` |
//! | does not contain | `!@=` | `!@=*` |
//! | sounds like | `~~` | `~~*` |
//! | does not sound like | `!~` | `!~*` |
//! | has | `^$` | `^$*` |
//! | does not have | `!^$` | `!^$*` |
//! | in | `^^` | `^^*` |
//!
//! Count operators compare the cardinality of a collection property and
//! prefix the relational tokens with `#`.
//!
//! # Example
//!
//! ```rust
//! use sieve_query::operator::{Comparison, CountOperator, Operator};
//!
//! assert_eq!(Operator::StartsWith.token(), "_=");
//! assert_eq!(Comparison::CaseInsensitive(Operator::In).token(), "^^*");
//! assert_eq!(Comparison::Count(CountOperator::GreaterThan).token(), "#>");
//! ```

use std::fmt;

/// A base comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `<=`
    LessThanOrEqual,
    /// `_=`
    StartsWith,
    /// `!_=`
    DoesNotStartWith,
    /// `_-=`
    EndsWith,
    /// `!_-=`
    DoesNotEndWith,
    /// `@=`
    Contains,
    /// `!@=`
    DoesNotContain,
    /// `~~`
    SoundsLike,
    /// `!~`
    DoesNotSoundLike,
    /// `^$`
    Has,
    /// `!^$`
    DoesNotHave,
    /// `^^`
    In,
}

impl Operator {
    /// Every base operator, in catalog order.
    pub const ALL: [Operator; 17] = [
        Self::Equals,
        Self::NotEquals,
        Self::GreaterThan,
        Self::LessThan,
        Self::GreaterThanOrEqual,
        Self::LessThanOrEqual,
        Self::StartsWith,
        Self::DoesNotStartWith,
        Self::EndsWith,
        Self::DoesNotEndWith,
        Self::Contains,
        Self::DoesNotContain,
        Self::SoundsLike,
        Self::DoesNotSoundLike,
        Self::Has,
        Self::DoesNotHave,
        Self::In,
    ];

    /// The case-sensitive token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::StartsWith => "_=",
            Self::DoesNotStartWith => "!_=",
            Self::EndsWith => "_-=",
            Self::DoesNotEndWith => "!_-=",
            Self::Contains => "@=",
            Self::DoesNotContain => "!@=",
            Self::SoundsLike => "~~",
            Self::DoesNotSoundLike => "!~",
            Self::Has => "^$",
            Self::DoesNotHave => "!^$",
            Self::In => "^^",
        }
    }

    /// The case-insensitive token (the base token followed by `*`).
    pub const fn case_insensitive_token(self) -> &'static str {
        match self {
            Self::Equals => "==*",
            Self::NotEquals => "!=*",
            Self::GreaterThan => ">*",
            Self::LessThan => "<*",
            Self::GreaterThanOrEqual => ">=*",
            Self::LessThanOrEqual => "<=*",
            Self::StartsWith => "_=*",
            Self::DoesNotStartWith => "!_=*",
            Self::EndsWith => "_-=*",
            Self::DoesNotEndWith => "!_-=*",
            Self::Contains => "@=*",
            Self::DoesNotContain => "!@=*",
            Self::SoundsLike => "~~*",
            Self::DoesNotSoundLike => "!~*",
            Self::Has => "^$*",
            Self::DoesNotHave => "!^$*",
            Self::In => "^^*",
        }
    }

    /// Whether the operand is a list literal.
    #[inline]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::In)
    }

    /// Whether this is a string-match operator.
    ///
    /// String-match operands are always written as quoted text.
    #[inline]
    pub const fn is_text_match(self) -> bool {
        matches!(
            self,
            Self::StartsWith
                | Self::DoesNotStartWith
                | Self::EndsWith
                | Self::DoesNotEndWith
                | Self::Contains
                | Self::DoesNotContain
                | Self::SoundsLike
                | Self::DoesNotSoundLike
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A count comparison: compares how many elements a collection holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountOperator {
    /// `#>`
    GreaterThan,
    /// `#<`
    LessThan,
    /// `#>=`
    GreaterThanOrEqual,
    /// `#<=`
    LessThanOrEqual,
    /// `#==`
    Equals,
    /// `#!=`
    NotEquals,
}

impl CountOperator {
    /// Every count operator, in catalog order.
    pub const ALL: [CountOperator; 6] = [
        Self::GreaterThan,
        Self::LessThan,
        Self::GreaterThanOrEqual,
        Self::LessThanOrEqual,
        Self::Equals,
        Self::NotEquals,
    ];

    /// The `#`-prefixed token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::GreaterThan => "#>",
            Self::LessThan => "#<",
            Self::GreaterThanOrEqual => "#>=",
            Self::LessThanOrEqual => "#<=",
            Self::Equals => "#==",
            Self::NotEquals => "#!=",
        }
    }
}

impl fmt::Display for CountOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Any operator that sits between a property and its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// A case-sensitive comparison.
    Plain(Operator),
    /// A case-insensitive comparison (`*` suffix).
    CaseInsensitive(Operator),
    /// A cardinality comparison (`#` prefix).
    Count(CountOperator),
}

impl Comparison {
    /// The token emitted into the expression.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Plain(op) => op.token(),
            Self::CaseInsensitive(op) => op.case_insensitive_token(),
            Self::Count(op) => op.token(),
        }
    }

    /// Whether the operand is a list literal.
    #[inline]
    pub const fn is_list(self) -> bool {
        match self {
            Self::Plain(op) | Self::CaseInsensitive(op) => op.is_list(),
            Self::Count(_) => false,
        }
    }

    /// Whether the operand is forced to a quoted text literal.
    #[inline]
    pub const fn is_text_match(self) -> bool {
        match self {
            Self::Plain(op) | Self::CaseInsensitive(op) => op.is_text_match(),
            Self::Count(_) => false,
        }
    }

    /// Whether this is a count comparison.
    #[inline]
    pub const fn is_count(self) -> bool {
        matches!(self, Self::Count(_))
    }
}

impl From<Operator> for Comparison {
    fn from(op: Operator) -> Self {
        Self::Plain(op)
    }
}

impl From<CountOperator> for Comparison {
    fn from(op: CountOperator) -> Self {
        Self::Count(op)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Logical connective between two groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// `&&`
    And,
    /// `||`
    Or,
}

impl Connective {
    /// The connective token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Grouping parenthesis. Takes no operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Group {
    /// The parenthesis token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Open => "(",
            Self::Close => ")",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
