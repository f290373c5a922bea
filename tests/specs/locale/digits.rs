//! Native digits under English unit labels.

use crate::prelude::*;
use similar_asserts::assert_eq;

fn check_digits(numerals: NumeralSystem) {
    assert_eq!(
        duration_with_digits(numerals, MINUTE_MS),
        localize_number(numerals, 1) + " minute"
    );
    assert_eq!(
        duration_with_digits(numerals, 2 * MINUTE_MS),
        localize_number(numerals, 2) + " minutes"
    );
    assert_eq!(
        duration_with_digits(numerals, 10 * HOUR_MS),
        localize_number(numerals, 10) + " hours"
    );
    assert_eq!(
        duration_with_digits(numerals, 23 * DAY_MS),
        localize_number(numerals, 23) + " days"
    );
}

#[test]
fn persian_digits() {
    check_digits(NumeralSystem::Persian);
    assert_eq!(duration_with_digits(NumeralSystem::Persian, 23 * DAY_MS), "۲۳ days");
}

#[test]
fn bengali_digits() {
    check_digits(NumeralSystem::Bengali);
    assert_eq!(duration_with_digits(NumeralSystem::Bengali, 10 * HOUR_MS), "১০ hours");
}

#[test]
fn digit_choice_does_not_leak_between_calls() {
    let _ = duration_with_digits(NumeralSystem::Persian, MINUTE_MS);
    assert_eq!(duration(MINUTE_MS), "1 minute");
}

#[test]
fn locale_defaults_supply_native_digits() {
    let ctx = LocaleContext::for_locale(Locale::Fa);
    assert_eq!(
        durfmt_core::format(10 * HOUR_MS, &ctx).unwrap(),
        "۱۰ ساعت"
    );
}
