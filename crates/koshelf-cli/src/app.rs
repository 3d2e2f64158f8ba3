//! Wires configuration, the translator and the language API together.

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use koshelf_config::{Config, ConfigLoader};
use koshelf_i18n::{ArgValue, HttpLocaleSource, TranslationArgs, Translator};
use koshelf_web::{KoShelfApi, LanguageApi};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use unic_langid::LanguageIdentifier;

/// Load the config file, then apply environment and command line overrides.
pub async fn load_config(path: &Path, base_url: Option<&str>) -> CliResult<Config> {
    let mut config = ConfigLoader::new(path).load_or_default().await?;
    config.apply_env_overrides()?;

    if let Some(base_url) = base_url {
        config.server.base_url = base_url.to_string();
    }

    config.validate()?;
    debug!(base_url = %config.server.base_url, "Configuration ready");
    Ok(config)
}

/// Command line application state.
pub struct App {
    translator: Translator<HttpLocaleSource>,
    api: KoShelfApi,
}

impl App {
    /// Build the locale source and API client described by `config`.
    pub fn from_config(config: &Config) -> CliResult<Self> {
        let base_url = config.server.base_url()?;
        let default_locale: LanguageIdentifier =
            config.i18n.default_locale.parse().map_err(|_| {
                CliError::InvalidArgument(format!(
                    "invalid default locale '{}'",
                    config.i18n.default_locale
                ))
            })?;

        let source = HttpLocaleSource::new(&base_url, &config.i18n.descriptor_path)?
            .with_timeout(config.server.timeout(), &config.server.user_agent)?
            .with_cache_bust(config.i18n.cache_bust);

        Ok(Self {
            translator: Translator::new(source).with_default_locale(default_locale),
            api: KoShelfApi::from_config(config)?,
        })
    }

    /// Execute `command`, writing results to `out`.
    pub async fn run<W: Write>(&self, command: &Command, out: &mut W) -> CliResult<()> {
        match command {
            Command::Translate { keys, count, vars } => {
                self.translator.init().await;
                let args = translation_args(*count, vars);
                for key in keys {
                    writeln!(out, "{}", self.translator.get_with(key, args.clone()))?;
                }
            }
            Command::Language => {
                self.translator.init().await;
                writeln!(out, "{}", self.translator.language())?;
            }
            Command::Languages => {
                let languages = self.api.languages().await?;
                info!(count = languages.len(), "Languages fetched");
                for language in languages {
                    writeln!(out, "{language}")?;
                }
            }
        }
        Ok(())
    }
}

/// `--count` and `--var` as translation arguments. Numeric values stay numbers
/// so plural selectors see them.
pub fn translation_args(count: Option<f64>, vars: &[(String, String)]) -> TranslationArgs {
    let mut args = count.map_or_else(TranslationArgs::new, TranslationArgs::count);
    for (name, value) in vars {
        let value = value
            .parse::<f64>()
            .map_or_else(|_| ArgValue::String(value.clone()), ArgValue::Number);
        args.set(name.clone(), value);
    }
    args
}
