//! Command-line argument definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "koshelf.toml";

/// koshelf - resolve KoShelf translations and manage the site language
#[derive(Parser, Debug)]
#[command(name = "koshelf")]
#[command(version)]
#[command(about = "Resolve KoShelf translations and manage the site language", long_about = None)]
pub struct Cli {
    /// Configuration file; defaults apply when it does not exist
    #[arg(long, env = "KOSHELF_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the site base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Action to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve one or more message keys (`id` or `id.attribute`)
    Translate {
        /// Keys to resolve
        #[arg(required = true)]
        keys: Vec<String>,

        /// Plural count passed as `$count`
        #[arg(long)]
        count: Option<f64>,

        /// Named variable, repeatable (e.g. --var name=Ana)
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },

    /// Print the locale of the loaded translations
    Language,

    /// List the languages offered by the backend
    Languages,
}

/// Split `NAME=VALUE`.
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}
