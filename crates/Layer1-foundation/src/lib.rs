//! # tokenguard-foundation
//!
//! Foundation layer for TokenGuard:
//! - Tokenizer: 외부 토크나이저 클라이언트 추상화 (Tokenizer trait)
//! - Validator: 모델별 토큰 한도 테이블, 길이 측정, 메시지 합계, 검증
//! - Storage: JsonStore (설정 파일)
//!
//! ## 흐름
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  CohereValidator                             │
//! │  ├── token_limit / completion_token_limit    │
//! │  │       (정적 테이블 조회)                   │
//! │  └── token_length / ..._from_messages        │
//! │                │                             │
//! │                ▼                             │
//! │        Tokenizer (trait)                     │
//! │                │                             │
//! │                ▼                             │
//! │   CohereClient (tokenguard-provider)         │
//! │        POST /v1/tokenize                     │
//! └──────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod message;
pub mod storage;
pub mod tokenizer;
pub mod validator;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Message
// ============================================================================
pub use message::{Message, MessageRole};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::JsonStore;

// ============================================================================
// Tokenizer (외부 토크나이저)
// ============================================================================
pub use tokenizer::{Tokenization, Tokenizer};

// ============================================================================
// Validator (토큰 한도 검증)
// ============================================================================
pub use validator::{CohereValidator, TokenLimits, COHERE_MODEL_LIMITS};
