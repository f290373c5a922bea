// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durfmt-locale: plural rules, unit labels and numeral systems for
//! localized duration text

pub mod config;
pub mod context;
pub mod error;
pub mod labels;
pub mod numerals;
pub mod plural;
pub mod unit;

pub use config::LocaleConfig;
pub use context::{Locale, LocaleContext};
pub use error::LocaleError;
pub use labels::{LabelForms, UnitLabels};
pub use numerals::NumeralSystem;
pub use plural::{PluralCategory, PluralRules};
pub use unit::{TimeUnit, DAY_MS, HOUR_MS, MINUTE_MS};
