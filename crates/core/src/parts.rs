// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decomposition of a duration into day, hour and minute counts.

use durfmt_locale::{TimeUnit, MINUTE_MS};
use std::time::Duration;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Whole days, hours and minutes of a duration.
///
/// Anything below a minute is truncated. `hours` is always below 24 and
/// `minutes` below 60.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DurationParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl DurationParts {
    pub fn from_millis(ms: u64) -> Self {
        Self::from_minutes(ms / MINUTE_MS)
    }

    pub fn from_minutes(total_minutes: u64) -> Self {
        let remainder = total_minutes % MINUTES_PER_DAY;
        Self {
            days: total_minutes / MINUTES_PER_DAY,
            hours: remainder / MINUTES_PER_HOUR,
            minutes: remainder % MINUTES_PER_HOUR,
        }
    }

    pub fn get(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Day => self.days,
            TimeUnit::Hour => self.hours,
            TimeUnit::Minute => self.minutes,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0
    }

    /// The duration these parts describe, floored to the minute.
    ///
    /// Saturates for parts built from more than `u64::MAX` milliseconds
    /// worth of minutes.
    pub fn to_millis(&self) -> u64 {
        TimeUnit::ALL
            .into_iter()
            .map(|unit| self.get(unit).saturating_mul(unit.millis()))
            .fold(0, u64::saturating_add)
    }

    /// Non-zero `(unit, count)` terms, largest unit first.
    ///
    /// A zero duration yields a single zero-minute term so there is always
    /// something to render.
    pub fn terms(&self) -> Vec<(TimeUnit, u64)> {
        if self.is_zero() {
            return vec![(TimeUnit::Minute, 0)];
        }
        TimeUnit::ALL
            .into_iter()
            .map(|unit| (unit, self.get(unit)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl From<Duration> for DurationParts {
    fn from(duration: Duration) -> Self {
        Self::from_minutes(duration.as_secs() / 60)
    }
}

#[cfg(test)]
#[path = "parts_tests.rs"]
mod tests;
