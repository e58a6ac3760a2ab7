//! Late configuration injected by a hosting environment.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Config, ConfigError, LoggingLevel, normalize_tool_names};

/// Settings a hosting platform may supply after startup, typically per
/// session.
///
/// Every present field replaces the resolved value; absent fields leave it
/// untouched. The source is trusted: nothing is re-validated.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brave_api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_tools: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_tools: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_level: Option<LoggingLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stateless: Option<bool>,
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field(
                "brave_api_key",
                &self.brave_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("enabled_tools", &self.enabled_tools)
            .field("disabled_tools", &self.disabled_tools)
            .field("logging_level", &self.logging_level)
            .field("stateless", &self.stateless)
            .finish()
    }
}

impl ConfigOverrides {
    /// Overrides that restrict registration to `names`.
    pub fn enabled_tools<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled_tools: Some(names.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Decode a base64 encoded JSON document, as passed in the HTTP
    /// transport's `config` query parameter.
    pub fn from_base64_json(encoded: &str) -> Result<Self, ConfigError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .or_else(|_| URL_SAFE_NO_PAD.decode(encoded.trim().trim_end_matches('=')))
            .map_err(|e| ConfigError::InvalidOverrides(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| ConfigError::InvalidOverrides(e.to_string()))
    }
}

impl Config {
    /// Derive a new configuration with `overrides` applied.
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Config {
        let mut config = self.clone();

        if let Some(key) = &overrides.brave_api_key {
            config.credentials.brave_api_key = Some(key.clone()).filter(|k| !k.is_empty());
        }
        if let Some(enabled) = &overrides.enabled_tools {
            config.tools.enabled = normalize_tool_names(enabled.clone());
        }
        if let Some(disabled) = &overrides.disabled_tools {
            config.tools.disabled = normalize_tool_names(disabled.clone());
        }
        if let Some(level) = overrides.logging_level {
            config.logging.level = level;
        }
        if let Some(stateless) = overrides.stateless {
            config.stateless = stateless;
        }

        debug!(?overrides, "Applied configuration overrides");
        config
    }
}
