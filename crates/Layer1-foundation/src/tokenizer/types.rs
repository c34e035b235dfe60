//! Tokenizer 타입 정의

use serde::{Deserialize, Serialize};

/// 토큰화 결과
///
/// 외부 토크나이저 서비스가 돌려준 토큰 목록. 토큰 수는 `tokens`의 길이.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tokenization {
    /// 토큰 ID 목록
    pub tokens: Vec<u32>,
    /// 토큰 문자열 목록 (서비스가 제공하는 경우, 디버깅용)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_strings: Vec<String>,
}

impl Tokenization {
    pub fn new(tokens: Vec<u32>) -> Self {
        Self {
            tokens,
            token_strings: Vec::new(),
        }
    }

    pub fn with_token_strings(mut self, token_strings: Vec<String>) -> Self {
        self.token_strings = token_strings;
        self
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// 토큰 수
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
