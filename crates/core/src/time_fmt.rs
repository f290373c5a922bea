// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Localized human-readable duration formatting.

use crate::parts::DurationParts;
use crate::FormatError;
use durfmt_locale::{LocaleContext, TimeUnit};
use std::time::Duration;

/// Format milliseconds as localized text: `"0 minutes"`, `"1 hour 45 minutes"`,
/// `"11 days 11 hours 45 minutes"`.
///
/// Units run from days down to minutes and zero units are left out. Anything
/// below a whole minute is dropped, so durations shorter than a minute render
/// as zero minutes.
///
/// Negative input is rejected with [`FormatError::InvalidArgument`].
pub fn format(duration_ms: i64, ctx: &LocaleContext) -> Result<String, FormatError> {
    let ms = u64::try_from(duration_ms).map_err(|_| {
        tracing::debug!(duration_ms, "rejecting negative duration");
        FormatError::negative(duration_ms)
    })?;
    Ok(format_millis(ms, ctx))
}

/// Format an unsigned count of milliseconds. Never fails.
pub fn format_millis(ms: u64, ctx: &LocaleContext) -> String {
    tracing::trace!(ms, locale = %ctx.locale(), "formatting duration");
    format_parts(&DurationParts::from_millis(ms), ctx)
}

/// Format fractional milliseconds, flooring to a whole millisecond first.
///
/// NaN, infinities, negative values and values past `u64::MAX` are rejected.
pub fn format_f64(duration_ms: f64, ctx: &LocaleContext) -> Result<String, FormatError> {
    if !duration_ms.is_finite() {
        tracing::debug!(duration_ms, "rejecting non-finite duration");
        return Err(FormatError::not_finite(duration_ms));
    }
    if duration_ms < 0.0 {
        tracing::debug!(duration_ms, "rejecting negative duration");
        return Err(FormatError::negative(duration_ms));
    }
    let floored = duration_ms.floor();
    // u64::MAX as f64 rounds up to 2^64, which is itself out of range
    if floored >= u64::MAX as f64 {
        tracing::debug!(duration_ms, "rejecting out-of-range duration");
        return Err(FormatError::out_of_range(duration_ms));
    }
    Ok(format_millis(floored as u64, ctx))
}

/// Render already-decomposed parts.
pub fn format_parts(parts: &DurationParts, ctx: &LocaleContext) -> String {
    parts
        .terms()
        .into_iter()
        .map(|(unit, count)| format_term(unit, count, ctx))
        .collect::<Vec<_>>()
        .join(ctx.separator())
}

/// Render one `"<numeral> <label>"` term.
pub fn format_term(unit: TimeUnit, count: u64, ctx: &LocaleContext) -> String {
    format!(
        "{} {}",
        ctx.localize_number(count),
        ctx.unit_label(unit, count)
    )
}

/// A [`LocaleContext`] bound to the free formatting functions.
#[derive(Debug, Clone, Default)]
pub struct DurationFormatter {
    ctx: LocaleContext,
}

impl DurationFormatter {
    pub fn new(ctx: LocaleContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &LocaleContext {
        &self.ctx
    }

    pub fn format(&self, duration_ms: i64) -> Result<String, FormatError> {
        format(duration_ms, &self.ctx)
    }

    pub fn format_millis(&self, ms: u64) -> String {
        format_millis(ms, &self.ctx)
    }

    pub fn format_f64(&self, duration_ms: f64) -> Result<String, FormatError> {
        format_f64(duration_ms, &self.ctx)
    }

    pub fn format_duration(&self, duration: Duration) -> String {
        format_parts(&DurationParts::from(duration), &self.ctx)
    }

    pub fn parts(&self, ms: u64) -> DurationParts {
        DurationParts::from_millis(ms)
    }
}

impl From<LocaleContext> for DurationFormatter {
    fn from(ctx: LocaleContext) -> Self {
        Self::new(ctx)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
