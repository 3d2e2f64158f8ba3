//! Configuration loading and persistence with atomic file operations.

use crate::schema::Config;
use koshelf_common::{KoShelfError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader with atomic file operations.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads configuration from file.
    pub async fn load(&self) -> Result<Config> {
        debug!(path = %self.path.display(), "Loading configuration");

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let config = Self::parse(&raw)?;

        info!(path = %self.path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Loads configuration from file, or the defaults when the file is absent.
    pub async fn load_or_default(&self) -> Result<Config> {
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => self.load().await,
            Ok(false) => {
                debug!(path = %self.path.display(), "No configuration file, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(raw: &str) -> Result<Config> {
        toml::from_str(raw).map_err(|e| KoShelfError::Config(format!("invalid TOML: {e}")))
    }

    /// Saves configuration to file atomically.
    pub async fn save(&self, config: &Config) -> Result<()> {
        let rendered = toml::to_string_pretty(config)
            .map_err(|e| KoShelfError::Serialization(e.to_string()))?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, rendered.as_bytes()))
            .await
            .map_err(|e| KoShelfError::Io(std::io::Error::other(e)))??;

        info!(path = %self.path.display(), "Configuration saved");
        Ok(())
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| KoShelfError::Io(e.error))?;
    Ok(())
}
