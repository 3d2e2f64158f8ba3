//! Application-wide error types using thiserror.

use koshelf_common::KoShelfError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Configuration, HTTP or backend API error.
    #[error(transparent)]
    KoShelf(#[from] KoShelfError),

    /// The locale source could not be built.
    #[error("Translation setup error: {0}")]
    I18n(#[from] koshelf_i18n::I18nError),

    /// A command line value was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
