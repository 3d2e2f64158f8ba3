//! Backend language API client.

use async_trait::async_trait;
use koshelf_common::{join_path, KoShelfError, LanguageInfo, Result};
use koshelf_config::Config;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

/// Lists the languages the site can render.
pub const LANGUAGES_PATH: &str = "/api/languages";
/// Persists the site language.
pub const SET_LANGUAGE_PATH: &str = "/api/settings/language";

#[derive(Debug, Serialize)]
struct SetLanguageRequest<'a> {
    lang: &'a str,
}

/// Language endpoints of the KoShelf backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageApi: Send + Sync {
    /// `GET /api/languages`
    async fn languages(&self) -> Result<Vec<LanguageInfo>>;

    /// `POST /api/settings/language` with `{ "lang": code }`
    async fn set_language(&self, code: &str) -> Result<()>;
}

/// HTTP implementation of [`LanguageApi`].
#[derive(Debug, Clone)]
pub struct KoShelfApi {
    client: reqwest::Client,
    base_url: Url,
}

impl KoShelfApi {
    /// Creates a client with default HTTP settings.
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Creates a client using the configured base URL, timeout and user agent.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.server.timeout())
            .user_agent(&config.server.user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: config.server.base_url()?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(join_path(&self.base_url, path)?)
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(KoShelfError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl LanguageApi for KoShelfApi {
    async fn languages(&self) -> Result<Vec<LanguageInfo>> {
        let url = self.endpoint(LANGUAGES_PATH)?;
        debug!(url = %url, "Fetching language list");

        let response = ensure_success(self.client.get(url).send().await?).await?;
        let languages: Vec<LanguageInfo> = response.json().await?;

        debug!(count = languages.len(), "Language list loaded");
        Ok(languages)
    }

    async fn set_language(&self, code: &str) -> Result<()> {
        let url = self.endpoint(SET_LANGUAGE_PATH)?;

        let response = self
            .client
            .post(url)
            .json(&SetLanguageRequest { lang: code })
            .send()
            .await?;
        ensure_success(response).await?;

        info!(lang = code, "Language setting saved");
        Ok(())
    }
}
