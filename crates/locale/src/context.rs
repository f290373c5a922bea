// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in locales and the [`LocaleContext`] handed to formatters.

use crate::labels::UnitLabels;
use crate::numerals::NumeralSystem;
use crate::plural::{PluralCategory, PluralRules};
use crate::unit::TimeUnit;
use crate::LocaleError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A locale with built-in duration data, keyed by primary language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    De,
    Es,
    Ru,
    Ar,
    Fa,
    Bn,
}

impl Locale {
    pub const ALL: [Locale; 8] = [
        Locale::En,
        Locale::Fr,
        Locale::De,
        Locale::Es,
        Locale::Ru,
        Locale::Ar,
        Locale::Fa,
        Locale::Bn,
    ];

    /// Primary language subtag.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::Es => "es",
            Locale::Ru => "ru",
            Locale::Ar => "ar",
            Locale::Fa => "fa",
            Locale::Bn => "bn",
        }
    }

    pub fn plural_rules(self) -> PluralRules {
        match self {
            Locale::En | Locale::De | Locale::Es => PluralRules::OneOther,
            Locale::Fr | Locale::Fa | Locale::Bn => PluralRules::ZeroOneSingular,
            Locale::Ru => PluralRules::EastSlavic,
            Locale::Ar => PluralRules::Arabic,
        }
    }

    pub fn numerals(self) -> NumeralSystem {
        match self {
            Locale::Ar => NumeralSystem::ArabicIndic,
            Locale::Fa => NumeralSystem::Persian,
            Locale::Bn => NumeralSystem::Bengali,
            _ => NumeralSystem::Latin,
        }
    }

    pub fn labels(self) -> UnitLabels {
        match self {
            Locale::En => UnitLabels::english(),
            Locale::Fr => UnitLabels::french(),
            Locale::De => UnitLabels::german(),
            Locale::Es => UnitLabels::spanish(),
            Locale::Ru => UnitLabels::russian(),
            Locale::Ar => UnitLabels::arabic(),
            Locale::Fa => UnitLabels::persian(),
            Locale::Bn => UnitLabels::bengali(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses BCP-47 (`fa-IR`) and POSIX (`en_US`) style tags.
///
/// Only the primary language subtag is significant.
impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let lang = lower.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == lang)
            .ok_or_else(|| LocaleError::UnknownLocale(s.to_string()))
    }
}

/// Everything a formatter needs to render localized duration terms.
///
/// Immutable once built; pass it explicitly to each call instead of relying
/// on process-wide locale state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    locale: Locale,
    plural_rules: PluralRules,
    labels: UnitLabels,
    numerals: NumeralSystem,
    separator: String,
}

impl LocaleContext {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            plural_rules: locale.plural_rules(),
            labels: locale.labels(),
            numerals: locale.numerals(),
            separator: " ".to_string(),
        }
    }

    pub fn english() -> Self {
        Self::for_locale(Locale::En)
    }

    pub fn with_numerals(mut self, numerals: NumeralSystem) -> Self {
        self.numerals = numerals;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_labels(mut self, labels: UnitLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_plural_rules(mut self, plural_rules: PluralRules) -> Self {
        self.plural_rules = plural_rules;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn plural_rules(&self) -> PluralRules {
        self.plural_rules
    }

    pub fn labels(&self) -> &UnitLabels {
        &self.labels
    }

    pub fn numerals(&self) -> NumeralSystem {
        self.numerals
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub(crate) fn labels_mut(&mut self) -> &mut UnitLabels {
        &mut self.labels
    }

    /// Plural category for `count`.
    pub fn plural_form(&self, count: u64) -> PluralCategory {
        self.plural_rules.select(count)
    }

    /// Unit word for `count` units.
    pub fn unit_label(&self, unit: TimeUnit, count: u64) -> &str {
        self.labels.label(unit, self.plural_form(count))
    }

    /// Decimal rendering of `value` in this context's numeral system.
    pub fn localize_number(&self, value: u64) -> String {
        self.numerals.localize_number(value)
    }

    pub fn localize_digits(&self, text: &str) -> String {
        self.numerals.localize_digits(text)
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
