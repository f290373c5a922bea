// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cardinal plural rules.
//!
//! Each [`PluralRules`] variant covers a family of locales that share the
//! same CLDR cardinal rule for non-negative integers. Duration terms only
//! ever carry whole counts, so the fractional operands of the CLDR rules
//! (`v`, `f`, `t`) are always zero and drop out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical class selecting a word form for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cardinal plural rule for a family of locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluralRules {
    /// `one` for exactly 1, `other` otherwise (en, de, es).
    OneOther,
    /// `one` for 0 and 1, `other` otherwise (fr, fa, bn).
    ZeroOneSingular,
    /// `one`/`few`/`many` by the last two digits (ru).
    EastSlavic,
    /// All six categories (ar).
    Arabic,
    /// Every count is `other`.
    OtherOnly,
}

impl PluralRules {
    /// Select the category for `count`.
    pub fn select(self, count: u64) -> PluralCategory {
        match self {
            PluralRules::OneOther => {
                if count == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRules::ZeroOneSingular => {
                if count <= 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            PluralRules::EastSlavic => {
                let mod10 = count % 10;
                let mod100 = count % 100;
                if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            PluralRules::Arabic => match count {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ => match count % 100 {
                    3..=10 => PluralCategory::Few,
                    11..=99 => PluralCategory::Many,
                    _ => PluralCategory::Other,
                },
            },
            PluralRules::OtherOnly => PluralCategory::Other,
        }
    }

    /// Categories this rule can produce for whole counts, in canonical order.
    pub fn categories(self) -> &'static [PluralCategory] {
        use PluralCategory::*;
        match self {
            PluralRules::OneOther | PluralRules::ZeroOneSingular => &[One, Other],
            PluralRules::EastSlavic => &[One, Few, Many],
            PluralRules::Arabic => &[Zero, One, Two, Few, Many, Other],
            PluralRules::OtherOnly => &[Other],
        }
    }
}

#[cfg(test)]
#[path = "plural_tests.rs"]
mod tests;
