//! Error types.
//!
//! No error-boilerplate crate (`thiserror`, `anyhow`, ...) is used here: no
//! repo in the reference pack takes one, so these follow the standard
//! library's own idiom for its parse errors (`std::num::ParseIntError`),
//! a plain struct/enum with hand-written `Display` and `Error` impls.

use std::fmt;

/// Failure reported by [`BigInt::from_str_radix`](crate::BigInt::from_str_radix)
/// and the `FromStr` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseBigIntError {
    pub(crate) kind: ParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseErrorKind {
    InvalidRadix,
    Empty,
    NoDigits,
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidRadix => "radix must be between 2 and 36",
            ParseErrorKind::Empty => "cannot parse integer from empty string",
            ParseErrorKind::NoDigits => "invalid digit found in string",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseBigIntError {}

/// Failure reported by a fallible [`BigInt`](crate::BigInt) operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigIntError {
    /// Division, remainder, or modular reduction by zero.
    DivisionByZero,
    /// An argument fell outside an operation's domain (e.g. a negative
    /// input to [`isqrt`](crate::BigInt::isqrt), a negative exponent to
    /// [`mod_pow`](crate::BigInt::mod_pow)).
    Domain(&'static str),
    /// `random_range` was asked for a half-open range with `lo >= hi`.
    InvalidRange,
    /// Rejection sampling exceeded its retry budget.
    SamplingExhausted,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::DivisionByZero => f.write_str("division by zero"),
            BigIntError::Domain(msg) => write!(f, "domain error: {msg}"),
            BigIntError::InvalidRange => f.write_str("invalid range: lo must be < hi"),
            BigIntError::SamplingExhausted => {
                f.write_str("rejection sampling exceeded its retry budget")
            }
        }
    }
}

impl std::error::Error for BigIntError {}

/// Failure reported by the `TryFrom<&BigInt>` conversions to native integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromBigIntError {
    pub(crate) target: &'static str,
}

impl fmt::Display for TryFromBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt value does not fit in {}", self.target)
    }
}

impl std::error::Error for TryFromBigIntError {}
