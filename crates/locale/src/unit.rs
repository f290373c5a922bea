// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-free time units a duration is decomposed into.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MINUTE_MS: u64 = 60_000;
pub const HOUR_MS: u64 = 60 * MINUTE_MS;
pub const DAY_MS: u64 = 24 * HOUR_MS;

/// A unit of a rendered duration term.
///
/// Ordered from largest to smallest, so sorting a list of units yields the
/// order terms appear in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
}

impl TimeUnit {
    /// All units in descending magnitude.
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Day, TimeUnit::Hour, TimeUnit::Minute];

    /// Length of one unit in milliseconds.
    pub fn millis(self) -> u64 {
        match self {
            TimeUnit::Day => DAY_MS,
            TimeUnit::Hour => HOUR_MS,
            TimeUnit::Minute => MINUTE_MS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
