// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for duration formatting

use thiserror::Error;

/// Errors returned when a duration cannot be formatted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("invalid duration {value}: {reason}")]
    InvalidArgument { value: String, reason: &'static str },
}

impl FormatError {
    pub(crate) fn negative(value: impl ToString) -> Self {
        Self::InvalidArgument {
            value: value.to_string(),
            reason: "must not be negative",
        }
    }

    pub(crate) fn not_finite(value: f64) -> Self {
        Self::InvalidArgument {
            value: value.to_string(),
            reason: "must be a finite number",
        }
    }

    pub(crate) fn out_of_range(value: f64) -> Self {
        Self::InvalidArgument {
            value: value.to_string(),
            reason: "exceeds the representable range",
        }
    }
}
