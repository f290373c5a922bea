// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! durfmt-core: localized human-readable duration formatting

pub mod error;
pub mod parts;
pub mod time_fmt;

pub use durfmt_locale::{Locale, LocaleContext, NumeralSystem};
pub use error::FormatError;
pub use parts::DurationParts;
pub use time_fmt::{format, format_f64, format_millis, format_parts, DurationFormatter};
