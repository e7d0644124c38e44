//! Comparable values
//!
//! Both sides of a comparison are reduced to [`SearchValue`]: entity
//! attributes by the extractor, raw criterion values by the resolver.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDateTime;
use smallvec::SmallVec;

/// A value that can be used in a search comparison
#[derive(Debug, Clone)]
pub enum SearchValue {
    /// Integer value, usually an id
    Int(i64),

    /// Floating point value
    Float(f64),

    /// String value, lowercased
    Text(String),

    /// Date value
    Date(NaiveDateTime),
}

/// Values extracted from one entity for one category. Almost always zero or
/// one element, so they stay inline.
pub type EntityValues = SmallVec<[SearchValue; 4]>;

impl SearchValue {
    /// Text rendering used for substring matching
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for SearchValue {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for SearchValue {
    /// Integers and floats compare numerically with each other; other
    /// pairings of different kinds are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Exact comparison of an integer with a float. Casting the integer would
/// round above 2^53.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, the first float above every i64
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= I64_END {
        return Some(Ordering::Less);
    }
    if float < -I64_END {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

impl fmt::Display for SearchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<i64> for SearchValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for SearchValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for SearchValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_lowercase())
    }
}

impl From<NaiveDateTime> for SearchValue {
    fn from(d: NaiveDateTime) -> Self {
        Self::Date(d)
    }
}
