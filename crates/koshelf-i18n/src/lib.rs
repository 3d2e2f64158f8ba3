//! # KoShelf I18n
//!
//! Translation resolver for the KoShelf client, built on the Fluent
//! localization system.
//!
//! A [`Translator`] fetches the locale descriptor once, builds an immutable
//! [`Catalog`], and answers lookups synchronously. Lookups never fail: an
//! unknown key, a missing attribute, or a formatting error returns the key
//! itself, and a failed load falls back to an empty `en-US` catalog.
//!
//! # Example
//!
//! ```rust
//! use koshelf_i18n::{LocaleDescriptor, StaticLocaleSource, Translator};
//!
//! # tokio_test::block_on(async {
//! let source = StaticLocaleSource::new(LocaleDescriptor::new(
//!     "pt-BR",
//!     ["greeting = Olá\nbooks = { $count } livros"],
//! ));
//! let translator = Translator::new(source);
//! translator.init().await;
//!
//! assert_eq!(translator.language(), "pt-BR");
//! assert_eq!(translator.get("greeting"), "Olá");
//! assert_eq!(translator.get_with("books", 3), "3 livros");
//! assert_eq!(translator.get("missing"), "missing");
//! # });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod args;
pub mod catalog;
pub mod descriptor;
pub mod error;
pub mod key;
pub mod source;
pub mod translator;

pub use args::{ArgValue, TranslationArgs, COUNT_ARG};
pub use catalog::Catalog;
pub use descriptor::LocaleDescriptor;
pub use error::{I18nError, I18nResult};
pub use key::MessageKey;
pub use source::{HttpLocaleSource, LocaleSource, StaticLocaleSource, DESCRIPTOR_PATH};
pub use translator::Translator;
