//! Site configuration loading.
//!
//! One `portfolio.toml` per site:
//!
//! ```toml
//! handle = "RowanTamer23"
//! title = "Rowan Tamer | Portfolio"
//!
//! [relay]
//! service-id = "service_x1grtje"
//! template-id = "template_xti489r"
//! public-key = "5QuNJT6JmgAADkXp8"
//! ```
//!
//! The `[relay]` table is optional; without it the contact form is left out
//! of the rendered page.

use crate::relay::RelayConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during configuration parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: Box<toml::de::Error>,
    },

    /// Validation error in the configuration.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },
}

/// Parsed `portfolio.toml` content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// GitHub handle whose public repositories fill the galleries.
    pub handle: String,

    /// Document title; defaults to "{handle} | Portfolio".
    #[serde(default)]
    pub title: Option<String>,

    /// Email relay settings; the contact form is disabled when absent.
    #[serde(default)]
    pub relay: Option<RelayConfig>,
}

impl SiteConfig {
    /// Loads and validates a site configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, invalid TOML, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading site configuration");

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: SiteConfig = toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        config.validate(path)?;

        info!(handle = %config.handle, relay = config.relay.is_some(), "Loaded site configuration");
        Ok(config)
    }

    /// Returns the document title, derived from the handle when unset.
    #[must_use]
    pub fn page_title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} | Portfolio", self.handle))
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.handle.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "handle must not be empty".to_string(),
            });
        }

        if let Some(relay) = &self.relay {
            if relay.service_id.trim().is_empty()
                || relay.template_id.trim().is_empty()
                || relay.public_key.trim().is_empty()
            {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: "relay requires service-id, template-id and public-key".to_string(),
                });
            }
        }

        Ok(())
    }
}
