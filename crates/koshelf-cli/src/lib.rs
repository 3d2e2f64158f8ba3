//! # KoShelf CLI
//!
//! Command line front end for the KoShelf client.
//!
//! Loads the client configuration, resolves translations through the same
//! translator the site uses, and talks to the backend language API.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
