//! Language selector options and the language switch flow.

use crate::api::LanguageApi;
use crate::cookie::LanguageCookie;
use async_trait::async_trait;
use koshelf_common::{epoch_millis, with_cache_buster, LanguageInfo, Result, DEFAULT_LANGUAGE_CODE};
use tracing::{error, info, warn};
use url::Url;

/// Browser capabilities the language switch needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrowserShell: Send + Sync {
    /// Assign `document.cookie`.
    fn set_cookie(&self, cookie: &str) -> Result<()>;

    /// Delete every Cache Storage entry, returning how many were removed.
    async fn clear_caches(&self) -> Result<usize>;

    /// Unregister every service worker, returning how many were removed.
    async fn unregister_service_workers(&self) -> Result<usize>;

    /// URL of the current page.
    fn current_url(&self) -> Url;

    /// Full navigation to `url`.
    fn navigate(&self, url: &Url) -> Result<()>;
}

/// One entry of the language `<select>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Value submitted on change.
    pub code: String,
    /// Visible label.
    pub name: String,
    /// Whether this entry matches the current language.
    pub selected: bool,
}

/// The language in effect: cookie, then document language, then `en`.
pub fn current_language(cookie_value: Option<&str>, document_lang: Option<&str>) -> String {
    cookie_value
        .filter(|value| !value.is_empty())
        .or_else(|| document_lang.filter(|value| !value.is_empty()))
        .unwrap_or(DEFAULT_LANGUAGE_CODE)
        .to_string()
}

/// Options in backend order.
///
/// A code matches when equal to `current`, or when `current` starts with it
/// and the code is longer than one character (`pt` matches `pt-BR`).
pub fn build_options(languages: &[LanguageInfo], current: &str) -> Vec<LanguageOption> {
    languages
        .iter()
        .map(|language| LanguageOption {
            code: language.code.clone(),
            name: language.name.clone(),
            selected: language.code == current
                || (current.starts_with(language.code.as_str()) && language.code.len() > 1),
        })
        .collect()
}

/// Fetch the language list and mark the current language.
pub async fn load_options<A>(
    api: &A,
    cookie: &LanguageCookie,
    cookie_header: &str,
    document_lang: Option<&str>,
) -> Result<Vec<LanguageOption>>
where
    A: LanguageApi + ?Sized,
{
    let languages = api.languages().await.map_err(|e| {
        error!(error = %e, "Language selector error");
        e
    })?;

    let stored = cookie.read(cookie_header);
    let current = current_language(stored.as_deref(), document_lang);
    Ok(build_options(&languages, &current))
}

/// Persist `code` and reload the site without stale caches.
///
/// Order: cookie, backend setting, cache purge, service worker removal,
/// then navigation to the current URL with a fresh `t` parameter. A failed
/// cache purge is logged and skipped; any other failure stops the flow and
/// nothing after it runs.
pub async fn switch_language<A, B>(
    api: &A,
    shell: &B,
    cookie: &LanguageCookie,
    code: &str,
) -> Result<Url>
where
    A: LanguageApi + ?Sized,
    B: BrowserShell + ?Sized,
{
    shell.set_cookie(&cookie.header_value(code))?;

    api.set_language(code).await.map_err(|e| {
        error!(lang = code, error = %e, "Server rejected language change");
        e
    })?;

    match shell.clear_caches().await {
        Ok(cleared) => info!(cleared, "PWA cache cleared"),
        Err(e) => warn!(error = %e, "Failed to clear caches"),
    }

    let unregistered = shell.unregister_service_workers().await?;
    info!(unregistered, "Service workers unregistered");

    let target = with_cache_buster(&shell.current_url(), epoch_millis());
    shell.navigate(&target)?;
    Ok(target)
}
