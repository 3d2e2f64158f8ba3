//! Runtime validation of loaded configuration.

use crate::schema::Config;
use koshelf_common::{KoShelfError, Result};
use unic_langid::LanguageIdentifier;
use url::Url;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        let base_url = Url::parse(&config.server.base_url).map_err(|e| {
            KoShelfError::Config(format!(
                "server.base_url '{}' is not a valid URL: {e}",
                config.server.base_url
            ))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(KoShelfError::Config(format!(
                "server.base_url must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        if config.server.timeout_seconds == 0 {
            return Err(KoShelfError::Config(
                "server.timeout_seconds must be greater than zero".to_string(),
            ));
        }

        if !config.i18n.descriptor_path.starts_with('/') {
            return Err(KoShelfError::Config(format!(
                "i18n.descriptor_path must be absolute, got '{}'",
                config.i18n.descriptor_path
            )));
        }

        config
            .i18n
            .default_locale
            .parse::<LanguageIdentifier>()
            .map_err(|_| {
                KoShelfError::Config(format!(
                    "i18n.default_locale '{}' is not a valid language identifier",
                    config.i18n.default_locale
                ))
            })?;

        let cookie = &config.preferences.language_cookie;
        if cookie.is_empty()
            || cookie
                .chars()
                .any(|c| c.is_whitespace() || c.is_control() || ";=,".contains(c))
        {
            return Err(KoShelfError::Config(format!(
                "preferences.language_cookie '{cookie}' is not a valid cookie name"
            )));
        }

        Ok(())
    }
}
