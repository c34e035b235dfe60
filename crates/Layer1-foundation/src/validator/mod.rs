//! Validator Module - 모델별 토큰 한도 검증
//!
//! - `limits.rs` - 정적 한도 테이블 트레이트 (조회, 별칭, 잔여 토큰)
//! - `length.rs` - Tokenizer 위임 길이 측정, 메시지 합계, 검증
//! - `cohere.rs` - Cohere 모델 테이블과 검증기
//!
//! ## 사용법
//!
//! ```ignore
//! use tokenguard_foundation::{CohereValidator, TokenLimits};
//!
//! assert_eq!(CohereValidator::token_limit("command"), Some(4096));
//!
//! let length = CohereValidator::token_length("Hello", "command", &client).await?;
//! let max_tokens = CohereValidator::validate_max_tokens("Hello", "command", &client).await?;
//! ```

mod cohere;
mod length;
mod limits;

pub use cohere::{CohereValidator, COHERE_MODEL_LIMITS};
pub use length::{
    token_length, token_length_from_messages, validate_max_tokens,
    validate_max_tokens_for_messages,
};
pub use limits::TokenLimits;
