//! Rate-limited translation client with two-hop language fallback

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::Result;
use crate::core::extract::extract_translation;
use crate::core::language;
use crate::core::models::{LanguagePair, TranslationRequest, TranslationResult};
use crate::core::rate_limiter::RateLimiter;

/// Client for the translate web page
///
/// Cloning is cheap and clones share the same rate limiter.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
    rate_limiter: Arc<RateLimiter>,
}

impl GoogleTranslator {
    /// Create a new translator with its own rate limiter
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let rate_limiter = Arc::new(RateLimiter::with_enabled(
            config.rate_delay(),
            config.rate_control,
        ));
        Self::with_rate_limiter(config, rate_limiter)
    }

    /// Create a translator that counts its requests against `rate_limiter`
    ///
    /// Share one limiter between translators to make the limit process-wide.
    /// The limiter's own delay and enabled flag take precedence over the
    /// rate settings in `config`.
    pub fn with_rate_limiter(config: TranslatorConfig, rate_limiter: Arc<RateLimiter>) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::load()?;
        Self::new(config)
    }

    /// Configuration this translator was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Rate limiter shared by this translator and its clones
    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.rate_limiter
    }

    /// Are we throttling queries to avoid being blocked? Defaults to true.
    pub fn is_using_rate_control(&self) -> bool {
        self.rate_limiter.is_enabled()
    }

    /// Turn throttling on or off for every translator sharing the limiter
    pub fn set_using_rate_control(&self, enabled: bool) {
        self.rate_limiter.set_enabled(enabled);
    }

    /// Hops needed for `from -> to` with the configured intermediate language
    pub fn resolve_path(&self, from: &str, to: &str) -> Vec<LanguagePair> {
        language::resolve_path(from, to, &self.config.intermediate_language)
    }

    /// Build the request URL for a single hop
    pub fn build_url(&self, text: &str, from: &str, to: &str) -> String {
        format!(
            "{}?langpair={}|{}&text={}",
            self.config.endpoint,
            from,
            to,
            urlencoding::encode(text)
        )
    }

    /// Translate `text` with exactly one request to the service
    pub async fn fetch(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let url = self.build_url(text, from, to);

        let page = {
            let _permit = self.rate_limiter.acquire().await;
            debug!("Requesting translation {}|{} ({} chars)", from, to, text.chars().count());

            let response = self.client.get(&url).send().await?.error_for_status()?;
            let body = response.bytes().await?;
            String::from_utf8(body.to_vec())?
        };

        extract_translation(&page)
    }

    /// Translate `text`, going through the intermediate language if the
    /// pair is not supported directly
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String> {
        let path = self.resolve_path(from, to);
        self.translate_along(text, &path).await
    }

    /// Translate a single request, reporting the hops that were used
    pub async fn translate_request(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let path = self.resolve_path(&request.from, &request.to);
        let translation = self.translate_along(&request.text, &path).await?;
        Ok(TranslationResult::new(translation, path))
    }

    /// Batch translate multiple requests
    pub async fn translate_batch(
        &self,
        requests: Vec<TranslationRequest>,
    ) -> Vec<Result<TranslationResult>> {
        let mut results = Vec::new();

        for request in requests {
            let result = self.translate_request(&request).await;
            if let Err(e) = &result {
                warn!("Translation {}|{} failed: {}", request.from, request.to, e);
            }
            results.push(result);
        }

        results
    }

    async fn translate_along(&self, text: &str, path: &[LanguagePair]) -> Result<String> {
        if path.len() > 1 {
            info!(
                "No direct pair {}|{}, translating via {}",
                path[0].from,
                path[path.len() - 1].to,
                self.config.intermediate_language
            );
        }

        let mut current = text.to_string();
        for pair in path {
            current = self.fetch(&current, &pair.from, &pair.to).await?;
        }
        Ok(current)
    }
}
