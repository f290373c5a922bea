// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Localized unit words, keyed by unit and plural category.

use crate::plural::PluralCategory;
use crate::unit::TimeUnit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word forms of a single unit, one per plural category.
///
/// Lookups for a missing category fall back to [`PluralCategory::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelForms(BTreeMap<PluralCategory, String>);

impl LabelForms {
    pub fn new<'a>(forms: impl IntoIterator<Item = (PluralCategory, &'a str)>) -> Self {
        Self(
            forms
                .into_iter()
                .map(|(category, label)| (category, label.to_string()))
                .collect(),
        )
    }

    /// Forms that do not inflect for number.
    pub fn invariant(label: &str) -> Self {
        Self::new([(PluralCategory::Other, label)])
    }

    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        self.0
            .get(&category)
            .or_else(|| self.0.get(&PluralCategory::Other))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Unit words for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitLabels(BTreeMap<TimeUnit, LabelForms>);

impl UnitLabels {
    pub fn new(day: LabelForms, hour: LabelForms, minute: LabelForms) -> Self {
        Self(BTreeMap::from([
            (TimeUnit::Day, day),
            (TimeUnit::Hour, hour),
            (TimeUnit::Minute, minute),
        ]))
    }

    /// Word for `count` units of `unit` in the given category.
    ///
    /// Falls back to the `other` form, then to the English unit name when
    /// the table has no entry at all.
    pub fn label(&self, unit: TimeUnit, category: PluralCategory) -> &str {
        self.0
            .get(&unit)
            .and_then(|forms| forms.get(category))
            .unwrap_or(unit.as_str())
    }

    pub fn forms(&self, unit: TimeUnit) -> Option<&LabelForms> {
        self.0.get(&unit)
    }

    /// Overlay `overrides` on top of these labels, category by category.
    pub fn merge(&mut self, overrides: UnitLabels) {
        for (unit, forms) in overrides.0 {
            self.0.entry(unit).or_default().0.extend(forms.0);
        }
    }

    pub fn english() -> Self {
        Self::new(
            one_other("day", "days"),
            one_other("hour", "hours"),
            one_other("minute", "minutes"),
        )
    }

    pub fn french() -> Self {
        Self::new(
            one_other("jour", "jours"),
            one_other("heure", "heures"),
            one_other("minute", "minutes"),
        )
    }

    pub fn german() -> Self {
        Self::new(
            one_other("Tag", "Tage"),
            one_other("Stunde", "Stunden"),
            one_other("Minute", "Minuten"),
        )
    }

    pub fn spanish() -> Self {
        Self::new(
            one_other("día", "días"),
            one_other("hora", "horas"),
            one_other("minuto", "minutos"),
        )
    }

    pub fn russian() -> Self {
        use PluralCategory::*;
        Self::new(
            LabelForms::new([(One, "день"), (Few, "дня"), (Many, "дней"), (Other, "дня")]),
            LabelForms::new([(One, "час"), (Few, "часа"), (Many, "часов"), (Other, "часа")]),
            LabelForms::new([
                (One, "минута"),
                (Few, "минуты"),
                (Many, "минут"),
                (Other, "минуты"),
            ]),
        )
    }

    pub fn arabic() -> Self {
        use PluralCategory::*;
        Self::new(
            LabelForms::new([(Two, "يومان"), (Few, "أيام"), (Many, "يومًا"), (Other, "يوم")]),
            LabelForms::new([(Two, "ساعتان"), (Few, "ساعات"), (Other, "ساعة")]),
            LabelForms::new([(Two, "دقيقتان"), (Few, "دقائق"), (Other, "دقيقة")]),
        )
    }

    pub fn persian() -> Self {
        Self::new(
            LabelForms::invariant("روز"),
            LabelForms::invariant("ساعت"),
            LabelForms::invariant("دقیقه"),
        )
    }

    pub fn bengali() -> Self {
        Self::new(
            LabelForms::invariant("দিন"),
            LabelForms::invariant("ঘণ্টা"),
            LabelForms::invariant("মিনিট"),
        )
    }
}

fn one_other(one: &str, other: &str) -> LabelForms {
    LabelForms::new([(PluralCategory::One, one), (PluralCategory::Other, other)])
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
