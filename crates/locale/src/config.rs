// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML locale configuration.
//!
//! ```toml
//! locale = "fa_IR"
//! numerals = "latn"
//! separator = " "
//!
//! [labels.minute]
//! one = "min"
//! other = "mins"
//! ```

use crate::context::{Locale, LocaleContext};
use crate::labels::UnitLabels;
use crate::numerals::NumeralSystem;
use crate::LocaleError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Locale selection plus optional overrides of its built-in data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleConfig {
    /// Locale tag, e.g. `en_US` or `fa-IR`.
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerals: Option<NumeralSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<UnitLabels>,
}

impl LocaleConfig {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            numerals: None,
            separator: None,
            labels: None,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LocaleError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, LocaleError> {
        tracing::debug!(path = %path.display(), "loading locale config");
        let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Resolve the locale tag and apply overrides.
    pub fn into_context(self) -> Result<LocaleContext, LocaleError> {
        let locale: Locale = self.locale.parse()?;
        let mut ctx = LocaleContext::for_locale(locale);
        if let Some(numerals) = self.numerals {
            ctx = ctx.with_numerals(numerals);
        }
        if let Some(separator) = self.separator {
            ctx = ctx.with_separator(separator);
        }
        if let Some(labels) = self.labels {
            ctx.labels_mut().merge(labels);
        }
        Ok(ctx)
    }
}

impl TryFrom<LocaleConfig> for LocaleContext {
    type Error = LocaleError;

    fn try_from(config: LocaleConfig) -> Result<Self, Self::Error> {
        config.into_context()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
