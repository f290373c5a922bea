//! Rejected input.

use crate::prelude::*;

#[test]
fn negative_milliseconds_are_invalid() {
    let err = durfmt_core::format(-MINUTE_MS, &LocaleContext::english()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidArgument { .. }));
    assert_eq!(err.to_string(), "invalid duration -60000: must not be negative");
}

#[test]
fn non_finite_milliseconds_are_invalid() {
    let err = durfmt_core::format_f64(f64::NAN, &LocaleContext::english()).unwrap_err();
    assert!(matches!(err, FormatError::InvalidArgument { .. }));
}

#[test]
fn fractional_milliseconds_are_floored() {
    let text = durfmt_core::format_f64(HOUR_MS as f64 - 0.25, &LocaleContext::english()).unwrap();
    similar_asserts::assert_eq!(text, "59 minutes");
}
