//! Cohere tokenize client
//!
//! `POST {base_url}/tokenize`로 텍스트를 토큰화한다. 재시도와 캐시는 하지 않으며
//! `tokenize` 한 번에 요청 한 번이다.

use crate::config::CohereConfig;
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokenguard_foundation::{Tokenization, Tokenizer};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://api.cohere.ai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Cohere `/tokenize` API client
pub struct CohereClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: Option<String>,
}

impl CohereClient {
    /// Create a new Cohere client
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: build_http_client(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: None,
        }
    }

    /// Create from config (API 키 필수)
    pub fn from_config(config: &CohereConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::NotConfigured("Cohere API key is not set".to_string()))?;

        let mut client = Self::new(api_key);
        if let Some(base_url) = &config.base_url {
            client = client.with_base_url(base_url);
        }
        if let Some(model) = &config.model {
            client = client.with_model(model);
        }
        if let Some(secs) = config.timeout_secs {
            client = client.with_timeout(Duration::from_secs(secs));
        }
        Ok(client)
    }

    /// Create with custom base URL (proxy, self-hosted gateway 등)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// tokenize 요청에 모델 지정
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set custom timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_http_client(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    fn tokenize_url(&self) -> String {
        format!("{}/tokenize", self.base_url)
    }

    fn build_request<'a>(&'a self, text: &'a str) -> TokenizeRequest<'a> {
        TokenizeRequest {
            text,
            model: self.model.as_deref(),
        }
    }

    /// Tokenize text, returning provider-level errors
    pub async fn tokenize_text(&self, text: &str) -> Result<Tokenization, ProviderError> {
        let response = self
            .client
            .post(self.tokenize_url())
            .bearer_auth(&self.api_key)
            .json(&self.build_request(text))
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_http_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        let tokenization = parse_tokenize_response(&body)?;

        debug!(
            model = self.model.as_deref().unwrap_or("default"),
            chars = text.chars().count(),
            tokens = tokenization.len(),
            "Cohere tokenize"
        );
        Ok(tokenization)
    }
}

#[async_trait]
impl Tokenizer for CohereClient {
    async fn tokenize(&self, text: &str) -> tokenguard_foundation::Result<Tokenization> {
        Ok(self.tokenize_text(text).await?)
    }
}

fn build_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

fn parse_tokenize_response(body: &str) -> Result<Tokenization, ProviderError> {
    let data: TokenizeResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;
    Ok(Tokenization::new(data.tokens).with_token_strings(data.token_strings))
}

// ============================================================================
// API 요청/응답 타입
// ============================================================================

#[derive(Debug, Serialize)]
struct TokenizeRequest<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TokenizeResponse {
    tokens: Vec<u32>,
    #[serde(default)]
    token_strings: Vec<String>,
}
