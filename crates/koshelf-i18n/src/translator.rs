//! Single-flight translation loading and best-effort lookup

use crate::args::TranslationArgs;
use crate::catalog::Catalog;
use crate::error::{I18nError, I18nResult};
use crate::source::{HttpLocaleSource, LocaleSource};
use koshelf_common::DEFAULT_LOCALE;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use unic_langid::LanguageIdentifier;

/// Loads a catalog once and resolves keys against it.
///
/// `init` fetches through the source at most once per translator, however
/// many callers await it concurrently. Lookups never fail: any miss or
/// formatting problem yields the key itself, and a failed load installs an
/// empty catalog for the default locale.
#[derive(Debug)]
pub struct Translator<S = HttpLocaleSource> {
    source: S,
    default_locale: LanguageIdentifier,
    catalog: OnceCell<Catalog>,
}

impl<S: LocaleSource> Translator<S> {
    /// Create an unloaded translator with `en-US` as the default locale
    pub fn new(source: S) -> Self {
        Self {
            source,
            default_locale: fallback_locale(),
            catalog: OnceCell::new(),
        }
    }

    /// Locale used before loading and after a failed load
    #[must_use]
    pub fn with_default_locale(mut self, locale: LanguageIdentifier) -> Self {
        self.default_locale = locale;
        self
    }

    /// Load translations; concurrent and repeated calls share one load
    pub async fn init(&self) {
        self.catalog.get_or_init(|| self.load()).await;
    }

    /// Whether a catalog (real or fallback) is installed
    pub fn is_ready(&self) -> bool {
        self.catalog.initialized()
    }

    /// Translate `key` without variables
    pub fn get(&self, key: &str) -> String {
        self.get_with(key, TranslationArgs::new())
    }

    /// Translate `key` with variables; a bare number means `count`
    pub fn get_with(&self, key: &str, args: impl Into<TranslationArgs>) -> String {
        let Some(catalog) = self.catalog.get() else {
            return key.to_string();
        };

        match catalog.format(key, &args.into()) {
            Ok(value) => value,
            Err(e @ I18nError::MessageFormatError { .. }) => {
                warn!(key, error = %e, "Formatting failed, showing key");
                key.to_string()
            }
            Err(e) => {
                debug!(key, error = %e, "Translation missing, showing key");
                key.to_string()
            }
        }
    }

    /// Primary locale of the loaded catalog, or the default locale
    pub fn language(&self) -> String {
        self.catalog
            .get()
            .map_or_else(|| self.default_locale.to_string(), Catalog::language)
    }

    async fn load(&self) -> Catalog {
        match self.try_load().await {
            Ok(catalog) => {
                info!(locale = %catalog.language(), "Translations loaded");
                catalog
            }
            Err(e) => {
                warn!(
                    error = %e,
                    fallback = %self.default_locale,
                    "Failed to load translations"
                );
                Catalog::empty(self.default_locale.clone())
            }
        }
    }

    async fn try_load(&self) -> I18nResult<Catalog> {
        let descriptor = self.source.fetch().await?;
        Catalog::from_descriptor(&descriptor)
    }
}

fn fallback_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}
