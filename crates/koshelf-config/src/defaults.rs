//! Default values for every configuration section.

use crate::schema::{Config, I18nConfig, PreferencesConfig, ServerConfig};
use koshelf_common::DEFAULT_LOCALE;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// Default location of the locale descriptor.
pub const DEFAULT_DESCRIPTOR_PATH: &str = "/assets/json/locales.json";
/// Default language cookie name.
pub const DEFAULT_LANGUAGE_COOKIE: &str = "koshelf_lang";
/// One year, in seconds.
pub const DEFAULT_COOKIE_MAX_AGE_SECONDS: u64 = 31_536_000;

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            i18n: I18nConfig::default(),
            preferences: PreferencesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: format!("koshelf-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            descriptor_path: DEFAULT_DESCRIPTOR_PATH.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            cache_bust: true,
        }
    }
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            language_cookie: DEFAULT_LANGUAGE_COOKIE.to_string(),
            cookie_max_age_seconds: DEFAULT_COOKIE_MAX_AGE_SECONDS,
        }
    }
}
