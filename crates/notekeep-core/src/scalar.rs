//! Aggregate scalar returned by the note store.
//!
//! SQL aggregates come back loosely typed: `AVG` may be a real, an integer,
//! a textual or byte-encoded number depending on the driver, or NULL over an
//! empty table. [`AggregateScalar`] tags those shapes and
//! [`AggregateScalar::to_f64`] folds all of them into one number.

/// Raw aggregate value as decoded from a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateScalar {
    Float(f64),
    Integer(i64),
    Text(String),
    Bytes(Vec<u8>),
    Null,
    /// Driver returned a type we do not interpret. Carries the type name.
    Other(String),
}

impl AggregateScalar {
    /// Normalize to a finite, non-negative float.
    ///
    /// Never fails: NULL, unparseable text, unknown types and non-finite
    /// values all become `0.0`.
    pub fn to_f64(&self) -> f64 {
        let v = match self {
            AggregateScalar::Float(v) => *v,
            AggregateScalar::Integer(v) => *v as f64,
            AggregateScalar::Text(s) => parse_numeric(s),
            AggregateScalar::Bytes(b) => std::str::from_utf8(b).map(parse_numeric).unwrap_or(0.0),
            AggregateScalar::Null | AggregateScalar::Other(_) => 0.0,
        };
        if v.is_finite() && v > 0.0 {
            v
        } else {
            0.0
        }
    }
}

/// Longest leading decimal number, so `"8.5 chars"` reads as `8.5`.
fn parse_numeric(s: &str) -> f64 {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    (1..=end)
        .rev()
        .find_map(|i| s[..i].parse::<f64>().ok())
        .unwrap_or(0.0)
}
