//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use durfmt_core::{DurationFormatter, FormatError, Locale, LocaleContext, NumeralSystem};

pub const MINUTE_MS: i64 = 60_000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Format with the English locale, panicking on rejected input.
pub fn duration(ms: i64) -> String {
    durfmt_core::format(ms, &LocaleContext::english()).unwrap()
}

/// Format with English labels and the given digits.
pub fn duration_with_digits(numerals: NumeralSystem, ms: i64) -> String {
    let ctx = LocaleContext::english().with_numerals(numerals);
    durfmt_core::format(ms, &ctx).unwrap()
}

/// Render a count in the given digits.
pub fn localize_number(numerals: NumeralSystem, value: u64) -> String {
    numerals.localize_number(value)
}
