//! Error types for TokenGuard
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// TokenGuard 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 토큰 검증 관련
    // ========================================================================
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("This model's maximum context length is {limit} tokens, but the given text is {length} tokens long.")]
    TokenLimitExceeded {
        limit: usize,
        length: usize,
        overflow: usize,
    },

    // ========================================================================
    // Tokenizer 클라이언트 관련
    // ========================================================================
    #[error("API error: {provider} - {message}")]
    Api { provider: String, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited{}", .retry_after_ms.map(|ms| format!(", retry after {}ms", ms)).unwrap_or_default())]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Server error: {provider} - {message}")]
    ServerError { provider: String, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 재시도 가능한 에러인지 확인
    ///
    /// 이 crate는 재시도하지 않는다. 호출자가 판단할 수 있도록 분류만 제공.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::RateLimited { .. } | Error::ServerError { .. } | Error::Http(_)
        )
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::UnknownModel(_) | Error::TokenLimitExceeded { .. } | Error::Authentication(_)
        )
    }

    /// 토큰 초과량 (TokenLimitExceeded인 경우)
    pub fn token_overflow(&self) -> Option<usize> {
        match self {
            Error::TokenLimitExceeded { overflow, .. } => Some(*overflow),
            _ => None,
        }
    }

    /// API 에러 생성 헬퍼
    pub fn api(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Api {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// 재시도 전 대기 시간 (서비스가 알려준 경우)
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Error::RateLimited { retry_after_ms } => *retry_after_ms,
            _ => None,
        }
    }

    /// 토큰 초과 에러 생성 헬퍼
    pub fn limit_exceeded(limit: usize, length: usize) -> Self {
        Error::TokenLimitExceeded {
            limit,
            length,
            overflow: length.saturating_sub(limit),
        }
    }
}
