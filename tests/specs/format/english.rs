//! English duration text, unit by unit.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn zero_minutes() {
    assert_eq!(duration(0), "0 minutes");
    assert_eq!(duration(MINUTE_MS - 1), "0 minutes");
}

#[test]
fn minutes() {
    assert_eq!(duration(MINUTE_MS), "1 minute");
    assert_eq!(duration(MINUTE_MS + 1), "1 minute");
    assert_eq!(duration(5 * MINUTE_MS), "5 minutes");
    assert_eq!(duration(45 * MINUTE_MS), "45 minutes");
}

#[test]
fn hours() {
    for (hours, label) in [(1, "1 hour"), (5, "5 hours"), (11, "11 hours")] {
        let base = hours * HOUR_MS;
        assert_eq!(duration(base), label);
        assert_eq!(duration(base + 1), label);
        assert_eq!(duration(base + MINUTE_MS), format!("{label} 1 minute"));
        assert_eq!(duration(base + 45 * MINUTE_MS), format!("{label} 45 minutes"));
    }
}

#[test]
fn days() {
    for (days, label) in [(1, "1 day"), (11, "11 days")] {
        let base = days * DAY_MS;
        assert_eq!(duration(base), label);
        assert_eq!(duration(base + 1), label);
        assert_eq!(duration(base + MINUTE_MS), format!("{label} 1 minute"));
        assert_eq!(duration(base + 45 * MINUTE_MS), format!("{label} 45 minutes"));
        assert_eq!(duration(base + HOUR_MS), format!("{label} 1 hour"));
        assert_eq!(duration(base + 11 * HOUR_MS), format!("{label} 11 hours"));
        assert_eq!(
            duration(base + HOUR_MS + MINUTE_MS),
            format!("{label} 1 hour 1 minute")
        );
        assert_eq!(
            duration(base + HOUR_MS + 45 * MINUTE_MS),
            format!("{label} 1 hour 45 minutes")
        );
        assert_eq!(
            duration(base + 11 * HOUR_MS + MINUTE_MS),
            format!("{label} 11 hours 1 minute")
        );
        assert_eq!(
            duration(base + 11 * HOUR_MS + 45 * MINUTE_MS),
            format!("{label} 11 hours 45 minutes")
        );
    }
}

#[test]
fn formatter_and_free_function_agree() {
    let formatter = DurationFormatter::new(LocaleContext::english());
    let ms = DAY_MS + 11 * HOUR_MS + 45 * MINUTE_MS;
    assert_eq!(formatter.format(ms).unwrap(), duration(ms));
}
