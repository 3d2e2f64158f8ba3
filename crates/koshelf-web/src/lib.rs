//! # KoShelf Web
//!
//! Page behaviour for the KoShelf client, independent of any DOM binding.
//!
//! This crate provides the backend API client, the language selector and its
//! switch flow, recap sorting and navigation, share/download planning, and
//! the key-value preference store. Browser capabilities are reached through
//! the [`BrowserShell`] trait.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod cookie;
pub mod language;
pub mod recap;
pub mod share;
pub mod storage;

pub use api::*;
pub use cookie::*;
pub use language::*;
pub use recap::*;
pub use share::*;
pub use storage::*;
