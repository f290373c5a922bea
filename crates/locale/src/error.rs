// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for locale resolution and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a locale context
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
    #[error("unknown numeral system: {0}")]
    UnknownNumeralSystem(String),
    #[error("failed to read locale config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid locale config: {0}")]
    Parse(#[from] toml::de::Error),
}
