//! Provider-specific error types
//!
//! ProviderError는 토크나이저 서비스 호출의 세부 에러를 관리합니다.
//! `Tokenizer` 경계에서 tokenguard_foundation::Error로 변환됩니다.

use thiserror::Error;
use tokenguard_foundation::Error as FoundationError;

/// Errors that can occur while calling a tokenizer service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// API key is missing or invalid
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded{}", .retry_after_ms.map(|ms| format!(", retry after {}ms", ms)).unwrap_or_default())]
    RateLimited { retry_after_ms: Option<u64> },

    /// Invalid request (bad parameters, text too long)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Model not found
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// Request failed (network, timeout, etc.)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid response from API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider not configured
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Unknown error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ProviderError {
    /// Create from HTTP status code and body
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ProviderError::Authentication(error_message(body)),
            429 => ProviderError::RateLimited {
                retry_after_ms: extract_retry_after(body),
            },
            400 => ProviderError::InvalidRequest(error_message(body)),
            404 => ProviderError::ModelNotFound(error_message(body)),
            500..=599 => ProviderError::ServerError(error_message(body)),
            _ => ProviderError::Unknown(format!("HTTP {}: {}", status, body)),
        }
    }
}

/// Cohere error body (`{"message": "..."}`)에서 메시지 추출
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Try to extract retry-after value from error body (in milliseconds)
fn extract_retry_after(body: &str) -> Option<u64> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let secs = json
        .get("retry_after")
        .or_else(|| json.get("error").and_then(|e| e.get("retry_after")))?
        .as_f64()?;
    Some((secs * 1000.0) as u64)
}

// ============================================================================
// tokenguard_foundation::Error 변환
// ============================================================================

impl From<ProviderError> for FoundationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Authentication(msg) => FoundationError::Authentication(msg),
            ProviderError::RateLimited { retry_after_ms } => {
                FoundationError::RateLimited { retry_after_ms }
            }
            ProviderError::InvalidRequest(msg) => {
                FoundationError::api("cohere", format!("Invalid request: {}", msg))
            }
            ProviderError::ModelNotFound(msg) => {
                FoundationError::api("cohere", format!("Model not found: {}", msg))
            }
            ProviderError::ServerError(message) => FoundationError::ServerError {
                provider: "cohere".to_string(),
                message,
            },
            ProviderError::RequestFailed(msg) => FoundationError::Http(msg),
            ProviderError::InvalidResponse(msg) => FoundationError::InvalidResponse(msg),
            ProviderError::NotConfigured(msg) => FoundationError::Config(msg),
            ProviderError::Unknown(msg) => FoundationError::api("cohere", msg),
        }
    }
}
