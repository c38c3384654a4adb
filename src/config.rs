//! Engine configuration loaded from environment variables.
//!
//! Configuration is loaded once by the embedding application and validated
//! before any service is constructed.
//!
//! ## Variables
//!
//! - `ARTWORK_BASE_URL` - Base URL prefixed to relative artwork paths
//!   (default: `https://artworks.thetvdb.com/banners/`; must end with `/`)
//! - `PREFERRED_LANGUAGE` - Language code biasing artwork ranking
//!   (default: `en`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL prefixed to the relative artwork paths the remote source
    /// returns. Must end with a slash.
    pub artwork_base_url: String,
    /// Language code biasing artwork ranking toward the caller's locale.
    pub preferred_language: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let artwork_base_url = env::var("ARTWORK_BASE_URL")
            .unwrap_or_else(|_| "https://artworks.thetvdb.com/banners/".to_string());
        let preferred_language =
            env::var("PREFERRED_LANGUAGE").unwrap_or_else(|_| "en".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            artwork_base_url,
            preferred_language,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `artwork_base_url` is not an absolute HTTP(S) URL ending with `/`
    /// - `preferred_language` is empty or contains whitespace
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.artwork_base_url.starts_with("http://")
            && !self.artwork_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "ARTWORK_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.artwork_base_url
            );
        }

        if !self.artwork_base_url.ends_with('/') {
            anyhow::bail!(
                "ARTWORK_BASE_URL must end with '/', got '{}'",
                self.artwork_base_url
            );
        }

        if self.preferred_language.is_empty()
            || self.preferred_language.chars().any(char::is_whitespace)
        {
            anyhow::bail!(
                "PREFERRED_LANGUAGE must be a non-empty language code, got '{}'",
                self.preferred_language
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Artwork base URL: {}", self.artwork_base_url);
        tracing::info!("  Preferred language: {}", self.preferred_language);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

/// Installs the global tracing subscriber per the configured level/format.
///
/// # Errors
///
/// Returns an error if the log level is not a valid filter directive or a
/// subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| anyhow::anyhow!("invalid RUST_LOG directive '{}': {e}", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
