#![forbid(unsafe_code)]

//! Delay configuration for [`DelayedVisibility`](crate::visibility::DelayedVisibility).
//!
//! # Environment Variables
//! - `TIPKIT_SHOW_DELAY_MS` (u64, at most [`MAX_DELAY_MS`])
//! - `TIPKIT_HIDE_DELAY_MS` (u64, at most [`MAX_DELAY_MS`])
//!
//! Rejected values are reported through [`ConfigParse::errors`] and the
//! default for that field is kept.

use std::env;
use std::fmt;

const ENV_SHOW_DELAY_MS: &str = "TIPKIT_SHOW_DELAY_MS";
const ENV_HIDE_DELAY_MS: &str = "TIPKIT_HIDE_DELAY_MS";

/// Default delay between hover start and the tooltip appearing.
pub const DEFAULT_SHOW_DELAY_MS: u64 = 500;
/// Default delay between hover end and the tooltip disappearing.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 100;
/// Largest accepted delay (one hour).
pub const MAX_DELAY_MS: u64 = 60 * 60 * 1_000;

/// Show/hide delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityConfig {
    /// Delay in milliseconds before showing (default: 500).
    pub show_delay_ms: u64,
    /// Delay in milliseconds before hiding (default: 100).
    pub hide_delay_ms: u64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: DEFAULT_SHOW_DELAY_MS,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }
}

impl VisibilityConfig {
    /// Set the show delay in milliseconds.
    #[must_use]
    pub fn show_delay_ms(mut self, ms: u64) -> Self {
        self.show_delay_ms = ms;
        self
    }

    /// Set the hide delay in milliseconds.
    #[must_use]
    pub fn hide_delay_ms(mut self, ms: u64) -> Self {
        self.hide_delay_ms = ms;
        self
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config from an arbitrary key lookup.
    pub fn from_env_with<F>(mut get: F) -> ConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_SHOW_DELAY_MS) {
            match parse_delay("show_delay_ms", &value) {
                Ok(ms) => config.show_delay_ms = ms,
                Err(err) => errors.push(err),
            }
        }

        if let Some(value) = get(ENV_HIDE_DELAY_MS) {
            match parse_delay("hide_delay_ms", &value) {
                Ok(ms) => config.hide_delay_ms = ms,
                Err(err) => errors.push(err),
            }
        }

        #[cfg(feature = "tracing")]
        for err in &errors {
            tracing::warn!(field = err.field, value = %err.value, "{}", err.message);
        }

        ConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        validate_delay("show_delay_ms", self.show_delay_ms, &mut errors);
        validate_delay("hide_delay_ms", self.hide_delay_ms, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: VisibilityConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

fn parse_delay(field: &'static str, value: &str) -> Result<u64, ConfigError> {
    let ms = value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::new(field, value, "expected non-negative integer (ms)"))?;
    let mut errors = Vec::new();
    validate_delay(field, ms, &mut errors);
    match errors.pop() {
        Some(err) => Err(err),
        None => Ok(ms),
    }
}

fn validate_delay(field: &'static str, value: u64, errors: &mut Vec<ConfigError>) {
    if value > MAX_DELAY_MS {
        errors.push(ConfigError::new(
            field,
            value.to_string(),
            format!("must be <= {MAX_DELAY_MS}"),
        ));
    }
}
