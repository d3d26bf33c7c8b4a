//! Numeric classification for bare lexemes.
//!
//! A bare lexeme containing `.` or an exponent marker is an
//! arbitrary-precision decimal; anything else is an integer, stored as `i64`
//! when it fits and promoted to a big integer otherwise. Classification is an
//! ordinary total function — a lexeme that fails it is reported by the parser
//! as an unexpected symbol, never routed through error control flow.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

/// A JSON number, classified by the lexical shape of its literal.
#[derive(Debug, Clone)]
pub enum Number {
    /// An integer literal that fits in an `i64`.
    Int(i64),
    /// An integer literal outside the `i64` range.
    BigInt(BigInt),
    /// A literal containing `.`, `e`, or `E`.
    Decimal(BigDecimal),
}

impl Number {
    /// Classifies a bare lexeme as a number.
    ///
    /// Returns `None` when the text is not numeric.
    #[must_use]
    pub fn classify(text: &str) -> Option<Self> {
        if text.contains(['.', 'e', 'E']) {
            return BigDecimal::from_str(text).ok().map(Self::Decimal);
        }
        if let Ok(n) = text.parse::<i64>() {
            return Some(Self::Int(n));
        }
        BigInt::from_str(text).ok().map(Self::BigInt)
    }

    /// Returns the value as an `i64` if it is an integer in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::BigInt(_) | Self::Decimal(_) => None,
        }
    }

    /// Returns `true` if the literal was classified as a decimal.
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal(_))
    }
}

// Numbers compare by numeric value across representations, so `1`, a big
// integer `1`, and `1.0` are three distinct classifications but `Int(1)` ==
// `BigInt(1)` == `Decimal(1)` holds.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::BigInt(a), Self::BigInt(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Int(a), Self::BigInt(b)) | (Self::BigInt(b), Self::Int(a)) => {
                BigInt::from(*a) == *b
            }
            (Self::Int(a), Self::Decimal(d)) | (Self::Decimal(d), Self::Int(a)) => {
                *d == BigDecimal::from(*a)
            }
            (Self::BigInt(a), Self::Decimal(d)) | (Self::Decimal(d), Self::BigInt(a)) => {
                *d == BigDecimal::from(a.clone())
            }
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Self {
        Self::BigInt(n)
    }
}

impl From<BigDecimal> for Number {
    fn from(n: BigDecimal) -> Self {
        Self::Decimal(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Number {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::BigInt(n) => serializer.collect_str(n),
            Self::Decimal(n) => serializer.collect_str(n),
        }
    }
}
