use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use quiz_core::model::{GenerationRequest, QuestionRecord};
use quiz_core::normalize_with_shape;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::GenerationError;

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Fixed path of the generation endpoint, appended to the base URL.
pub const GENERATION_PATH: &str = "/ai/generation/request";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    base_url: String,
}

impl GenerationConfig {
    /// Build a config for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidEndpoint` unless the URL parses as http(s).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GenerationError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|err| GenerationError::InvalidEndpoint(format!("{base_url}: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GenerationError::InvalidEndpoint(base_url));
        }
        Ok(Self { base_url })
    }

    /// Read `QUIZ_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidEndpoint` if the variable holds an invalid URL.
    pub fn from_env() -> Result<Self, GenerationError> {
        Self::from_optional(env::var("QUIZ_API_URL").ok())
    }

    /// Like [`GenerationConfig::from_env`], with the raw value passed in.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::InvalidEndpoint` if `raw` holds an invalid URL.
    pub fn from_optional(raw: Option<String>) -> Result<Self, GenerationError> {
        match raw.filter(|value| !value.trim().is_empty()) {
            Some(value) => Self::new(value),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the generation endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{GENERATION_PATH}", self.base_url)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

//
// ─── SOURCES ───────────────────────────────────────────────────────────────────
//

/// Where raw generation payloads come from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Send one request and return the raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` on transport or status failures.
    async fn fetch(&self, request: &GenerationRequest) -> Result<Value, GenerationError>;
}

/// Question source backed by the HTTP generation service.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    config: GenerationConfig,
}

impl HttpQuestionSource {
    /// # Errors
    ///
    /// Returns `GenerationError::Http` if the HTTP client cannot be built.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch(&self, request: &GenerationRequest) -> Result<Value, GenerationError> {
        let response = self
            .client
            .post(self.config.endpoint())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Fetches a payload from a [`QuestionSource`] and normalizes it into questions.
#[derive(Clone)]
pub struct GenerationService {
    source: Arc<dyn QuestionSource>,
}

impl GenerationService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Build a service that talks to the HTTP endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Http` if the HTTP client cannot be built.
    pub fn http(config: GenerationConfig) -> Result<Self, GenerationError> {
        Ok(Self::new(Arc::new(HttpQuestionSource::new(config)?)))
    }

    /// Request questions and normalize the response.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::UnrecognizedPayload` when the payload has no questions,
    /// or the source's error when the request itself fails.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<QuestionRecord>, GenerationError> {
        let raw = self.source.fetch(request).await?;
        let (shape, questions) =
            normalize_with_shape(&raw).ok_or(GenerationError::UnrecognizedPayload)?;
        tracing::debug!(?shape, count = questions.len(), "normalized generation payload");
        Ok(questions)
    }
}
