//! The `koshelf_lang` preference cookie.

use koshelf_config::{PreferencesConfig, DEFAULT_COOKIE_MAX_AGE_SECONDS, DEFAULT_LANGUAGE_COOKIE};

/// Writes and reads the language cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCookie {
    name: String,
    max_age_seconds: u64,
}

impl LanguageCookie {
    /// A cookie with the given name and lifetime.
    pub fn new(name: impl Into<String>, max_age_seconds: u64) -> Self {
        Self {
            name: name.into(),
            max_age_seconds,
        }
    }

    /// A cookie as configured.
    pub fn from_config(config: &PreferencesConfig) -> Self {
        Self::new(&config.language_cookie, config.cookie_max_age_seconds)
    }

    /// The `document.cookie` assignment persisting `code` site-wide.
    pub fn header_value(&self, code: &str) -> String {
        format!(
            "{}={code};path=/;max-age={};SameSite=Strict",
            self.name, self.max_age_seconds
        )
    }

    /// Extract the value from a `document.cookie` style string.
    ///
    /// Returns `None` when the cookie is absent, empty, or present more than once.
    pub fn read(&self, cookie_header: &str) -> Option<String> {
        let haystack = format!("; {cookie_header}");
        let needle = format!("; {}=", self.name);

        let mut parts = haystack.split(needle.as_str()).skip(1);
        let tail = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        tail.split(';')
            .next()
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
    }
}

impl Default for LanguageCookie {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE_COOKIE, DEFAULT_COOKIE_MAX_AGE_SECONDS)
    }
}
