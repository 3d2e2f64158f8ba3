//! Common type definitions shared by the KoShelf client crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale used whenever no translation bundle could be loaded.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Language code used when neither a cookie nor the document names one.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// A language offered by the backend's language list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Language code as stored in the cookie and settings (e.g. `pt`, `de_AT`).
    pub code: String,
    /// Human readable name shown in the selector.
    pub name: String,
}

impl LanguageInfo {
    /// Creates a new language entry.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for LanguageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.name)
    }
}

/// Common result type for the client crates.
pub type Result<T> = std::result::Result<T, KoShelfError>;

/// Client-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum KoShelfError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// Browser capability failure (cookies, caches, service workers, navigation).
    #[error("Browser error: {0}")]
    Browser(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for KoShelfError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for KoShelfError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(format!("invalid URL: {err}"))
    }
}
