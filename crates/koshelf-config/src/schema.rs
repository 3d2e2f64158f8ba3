//! Configuration schema definitions using serde.

use koshelf_common::KoShelfError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Environment variable overriding [`ServerConfig::base_url`].
pub const ENV_BASE_URL: &str = "KOSHELF_BASE_URL";
/// Environment variable overriding [`I18nConfig::default_locale`].
pub const ENV_DEFAULT_LOCALE: &str = "KOSHELF_DEFAULT_LOCALE";
/// Environment variable overriding [`ServerConfig::timeout_seconds`].
pub const ENV_TIMEOUT_SECONDS: &str = "KOSHELF_TIMEOUT_SECONDS";

/// Main configuration structure for the KoShelf client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend server configuration.
    pub server: ServerConfig,
    /// Translation loading configuration.
    pub i18n: I18nConfig,
    /// Language preference persistence.
    pub preferences: PreferencesConfig,
}

/// Backend server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the KoShelf site, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

/// Translation loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Path of the locale descriptor relative to the base URL.
    pub descriptor_path: String,
    /// Locale used when the descriptor cannot be loaded.
    pub default_locale: String,
    /// Whether to append the `t=<millis>` cache-busting parameter.
    pub cache_bust: bool,
}

/// Language preference persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Name of the cookie holding the chosen language.
    pub language_cookie: String,
    /// Cookie lifetime in seconds.
    pub cookie_max_age_seconds: u64,
}

impl ServerConfig {
    /// Parses the base URL.
    pub fn base_url(&self) -> Result<Url, KoShelfError> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Request timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Applies `KOSHELF_*` overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), KoShelfError> {
        self.apply_overrides_with(|name| std::env::var(name).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn apply_overrides_with<F>(&mut self, lookup: F) -> Result<(), KoShelfError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.server.base_url = url;
        }

        if let Some(locale) = lookup(ENV_DEFAULT_LOCALE) {
            self.i18n.default_locale = locale;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECONDS) {
            self.server.timeout_seconds = raw.trim().parse().map_err(|_| {
                KoShelfError::Config(format!("{ENV_TIMEOUT_SECONDS} must be a number, got '{raw}'"))
            })?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), KoShelfError> {
        crate::validator::ConfigValidator::validate(self)
    }
}
