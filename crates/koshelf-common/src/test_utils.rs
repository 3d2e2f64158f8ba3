//! Test utilities and shared test helpers for the KoShelf client.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Locale descriptor fixtures in the shape served at `/assets/json/locales.json`.
pub mod locale_fixtures {
    /// Brazilian Portuguese descriptor with a single message.
    pub fn pt_br_descriptor_json() -> &'static str {
        r#"{ "language": "pt-BR", "resources": ["greeting = Olá"] }"#
    }

    /// English descriptor exercising values, attributes and plurals.
    pub fn en_us_descriptor_json() -> &'static str {
        r#"{
  "language": "en-US",
  "resources": [
    "foo = Foo\n    .bar = Bar\nitems-count = { $count ->\n    [one] One item\n   *[other] { $count } items\n}\nwelcome = Welcome, { $name }!\nshare = Share\n    .recap-label = Share your recap\nsort-order =\n    .newest-first = Newest first\n    .oldest-first = Oldest first\nmy-reading-recap = My Reading Recap"
  ]
}"#
    }

    /// Resources that the server orders regional, base, then English.
    pub fn layered_resources() -> Vec<String> {
        vec![
            "color = Colour".to_string(),
            "color = Color\nbooks = Books".to_string(),
            "books = Livros\npages = Pages".to_string(),
        ]
    }
}

/// Language list fixtures in the shape served at `/api/languages`.
pub mod language_fixtures {
    use crate::LanguageInfo;

    /// A representative language list, sorted by display name.
    pub fn sample_languages() -> Vec<LanguageInfo> {
        vec![
            LanguageInfo::new("de", "Deutsch"),
            LanguageInfo::new("en", "English"),
            LanguageInfo::new("pt", "Português (Brasil)"),
        ]
    }
}
