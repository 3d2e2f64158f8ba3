//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur while loading or resolving translations.
///
/// None of these ever reach callers of [`crate::Translator`]; the translator
/// turns them into the fallback catalog or the raw key.
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// The descriptor URL could not be built
    #[error("Invalid locale descriptor URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A locale source could not provide a descriptor
    #[error("Locale source unavailable: {0}")]
    SourceUnavailable(String),

    /// Transport failure while fetching the locale descriptor
    #[error("Failed to fetch locale descriptor: {0}")]
    Http(#[from] reqwest::Error),

    /// The descriptor endpoint answered with a non-success status
    #[error("Locale descriptor request returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The descriptor body was not the expected JSON shape
    #[error("Malformed locale descriptor: {0}")]
    Decode(#[from] serde_json::Error),

    /// The descriptor decoded but failed validation
    #[error("Invalid locale descriptor: {0}")]
    InvalidDescriptor(String),

    /// Failed to parse a Fluent resource
    #[error("Failed to parse Fluent resource #{index}: {errors:?}")]
    FluentParseError {
        /// Position of the resource in the descriptor
        index: usize,
        /// Parser errors
        errors: Vec<String>,
    },

    /// Message not found in the bundle
    #[error("Message not found: {key}")]
    MessageNotFound {
        /// Requested key
        key: String,
    },

    /// Message exists but has no such attribute
    #[error("Attribute '{attribute}' not found on message '{key}'")]
    AttributeNotFound {
        /// Message identifier
        key: String,
        /// Requested attribute
        attribute: String,
    },

    /// Message exists but has no default value
    #[error("Message '{key}' has no value")]
    MissingValue {
        /// Requested key
        key: String,
    },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormatError {
        /// Requested key
        key: String,
        /// Formatter errors
        errors: Vec<String>,
    },
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
