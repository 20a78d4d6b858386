//! Aggregate scalar normalization.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use notekeep_core::scalar::AggregateScalar;

#[test]
fn numeric_variants_pass_through() {
    assert_eq!(AggregateScalar::Float(8.0).to_f64(), 8.0);
    assert_eq!(AggregateScalar::Integer(11).to_f64(), 11.0);
}

#[test]
fn textual_numbers_are_parsed() {
    assert_eq!(AggregateScalar::Text("8.5".into()).to_f64(), 8.5);
    assert_eq!(AggregateScalar::Text(" 3 ".into()).to_f64(), 3.0);
    assert_eq!(AggregateScalar::Bytes(b"8.0000".to_vec()).to_f64(), 8.0);
}

#[test]
fn null_and_garbage_fall_back_to_zero() {
    assert_eq!(AggregateScalar::Null.to_f64(), 0.0);
    assert_eq!(AggregateScalar::Text("eight".into()).to_f64(), 0.0);
    assert_eq!(AggregateScalar::Text("NaN".into()).to_f64(), 0.0);
    assert_eq!(AggregateScalar::Bytes(vec![0xff, 0xfe]).to_f64(), 0.0);
    assert_eq!(AggregateScalar::Other("DATETIME".into()).to_f64(), 0.0);
    assert_eq!(AggregateScalar::Float(f64::INFINITY).to_f64(), 0.0);
}

#[test]
fn leading_numeric_prefix_is_used() {
    assert_eq!(AggregateScalar::Text("8.5abc".into()).to_f64(), 8.5);
    assert_eq!(AggregateScalar::Text("12 chars".into()).to_f64(), 12.0);
    assert_eq!(AggregateScalar::Text("1e".into()).to_f64(), 1.0);
    assert_eq!(AggregateScalar::Bytes(b"4.25\0".to_vec()).to_f64(), 4.25);
    assert_eq!(AggregateScalar::Text("-".into()).to_f64(), 0.0);
}
