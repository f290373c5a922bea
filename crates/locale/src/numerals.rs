// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decimal numeral systems and digit localization.

use crate::LocaleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const LATN: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARAB: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const ARABEXT: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const BENG: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];
const DEVA: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];
const THAI: [char; 10] = ['๐', '๑', '๒', '๓', '๔', '๕', '๖', '๗', '๘', '๙'];

/// A decimal numeral system, named by its CLDR numbering system id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumeralSystem {
    /// ASCII digits.
    #[default]
    #[serde(rename = "latn")]
    Latin,
    /// Arabic-Indic digits.
    #[serde(rename = "arab")]
    ArabicIndic,
    /// Extended Arabic-Indic digits, as used for Persian.
    #[serde(rename = "arabext")]
    Persian,
    #[serde(rename = "beng")]
    Bengali,
    #[serde(rename = "deva")]
    Devanagari,
    #[serde(rename = "thai")]
    Thai,
}

impl NumeralSystem {
    pub const ALL: [NumeralSystem; 6] = [
        NumeralSystem::Latin,
        NumeralSystem::ArabicIndic,
        NumeralSystem::Persian,
        NumeralSystem::Bengali,
        NumeralSystem::Devanagari,
        NumeralSystem::Thai,
    ];

    /// Glyphs for the digits 0 through 9.
    pub fn digits(self) -> &'static [char; 10] {
        match self {
            NumeralSystem::Latin => &LATN,
            NumeralSystem::ArabicIndic => &ARAB,
            NumeralSystem::Persian => &ARABEXT,
            NumeralSystem::Bengali => &BENG,
            NumeralSystem::Devanagari => &DEVA,
            NumeralSystem::Thai => &THAI,
        }
    }

    /// CLDR numbering system id.
    pub fn id(self) -> &'static str {
        match self {
            NumeralSystem::Latin => "latn",
            NumeralSystem::ArabicIndic => "arab",
            NumeralSystem::Persian => "arabext",
            NumeralSystem::Bengali => "beng",
            NumeralSystem::Devanagari => "deva",
            NumeralSystem::Thai => "thai",
        }
    }

    /// Find the system whose zero glyph is `zero`.
    ///
    /// Locale symbol tables commonly describe their digits only by the zero
    /// digit; the remaining nine follow it contiguously.
    pub fn from_zero_digit(zero: char) -> Option<Self> {
        Self::ALL.into_iter().find(|system| system.digits()[0] == zero)
    }

    /// Replace each ASCII digit in `text` with this system's glyph.
    ///
    /// Every other character passes through untouched.
    pub fn localize_digits(self, text: &str) -> String {
        if self == NumeralSystem::Latin {
            return text.to_string();
        }
        let digits = self.digits();
        text.chars()
            .map(|ch| match ch.to_digit(10) {
                Some(d) => digits[d as usize],
                None => ch,
            })
            .collect()
    }

    /// Render a count in this system.
    pub fn localize_number(self, value: u64) -> String {
        self.localize_digits(&value.to_string())
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for NumeralSystem {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|system| system.id() == id)
            .ok_or_else(|| LocaleError::UnknownNumeralSystem(s.to_string()))
    }
}

#[cfg(test)]
#[path = "numerals_tests.rs"]
mod tests;
