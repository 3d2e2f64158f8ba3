//! Where locale descriptors come from

use crate::descriptor::LocaleDescriptor;
use crate::error::{I18nError, I18nResult};
use async_trait::async_trait;
use koshelf_common::{epoch_millis, with_cache_buster};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default location of the descriptor on a KoShelf site.
pub const DESCRIPTOR_PATH: &str = "/assets/json/locales.json";

/// Provides the locale descriptor for a translator.
#[async_trait]
pub trait LocaleSource: Send + Sync {
    /// Fetch and validate the descriptor.
    async fn fetch(&self) -> I18nResult<LocaleDescriptor>;
}

#[async_trait]
impl<T: LocaleSource + ?Sized> LocaleSource for Arc<T> {
    async fn fetch(&self) -> I18nResult<LocaleDescriptor> {
        (**self).fetch().await
    }
}

/// Fetches the descriptor over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLocaleSource {
    client: reqwest::Client,
    url: Url,
    cache_bust: bool,
}

impl HttpLocaleSource {
    /// Source for `descriptor_path` under `base_url`, with cache busting on.
    pub fn new(base_url: &Url, descriptor_path: &str) -> I18nResult<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            url: base_url.join(descriptor_path)?,
            cache_bust: true,
        })
    }

    /// Source for the default descriptor path under `base_url`.
    pub fn for_site(base_url: &Url) -> I18nResult<Self> {
        Self::new(base_url, DESCRIPTOR_PATH)
    }

    /// Build a client with the given timeout and user agent.
    pub fn with_timeout(mut self, timeout: Duration, user_agent: &str) -> I18nResult<Self> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(self)
    }

    /// Toggle the `t=<millis>` query parameter.
    #[must_use]
    pub fn with_cache_bust(mut self, enabled: bool) -> Self {
        self.cache_bust = enabled;
        self
    }

    /// URL for the next request.
    pub fn request_url(&self) -> Url {
        if self.cache_bust {
            with_cache_buster(&self.url, epoch_millis())
        } else {
            self.url.clone()
        }
    }
}

#[async_trait]
impl LocaleSource for HttpLocaleSource {
    async fn fetch(&self) -> I18nResult<LocaleDescriptor> {
        let url = self.request_url();
        debug!(url = %url, "Fetching locale descriptor");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(I18nError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        LocaleDescriptor::from_json(&body)
    }
}

/// Serves a fixed descriptor, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticLocaleSource {
    descriptor: Result<LocaleDescriptor, String>,
}

impl StaticLocaleSource {
    /// Always returns `descriptor`.
    pub fn new(descriptor: LocaleDescriptor) -> Self {
        Self {
            descriptor: Ok(descriptor),
        }
    }

    /// Always fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            descriptor: Err(reason.into()),
        }
    }
}

#[async_trait]
impl LocaleSource for StaticLocaleSource {
    async fn fetch(&self) -> I18nResult<LocaleDescriptor> {
        match &self.descriptor {
            Ok(descriptor) => {
                descriptor.validate()?;
                Ok(descriptor.clone())
            }
            Err(reason) => Err(I18nError::SourceUnavailable(reason.clone())),
        }
    }
}
