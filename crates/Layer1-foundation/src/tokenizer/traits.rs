//! Tokenizer Trait 정의

use super::types::Tokenization;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// 토크나이저 트레이트
///
/// 텍스트를 토큰 목록으로 변환하는 외부 서비스 클라이언트가 구현하는 인터페이스입니다.
/// 검증기는 이 트레이트에만 의존하며 구체 클라이언트 타입을 알지 못합니다.
///
/// 구현체의 에러는 검증기를 그대로 통과해 호출자에게 전달됩니다.
#[async_trait]
pub trait Tokenizer: Send + Sync {
    /// 텍스트를 토큰화
    async fn tokenize(&self, text: &str) -> Result<Tokenization>;
}

#[async_trait]
impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    async fn tokenize(&self, text: &str) -> Result<Tokenization> {
        (**self).tokenize(text).await
    }
}

#[async_trait]
impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    async fn tokenize(&self, text: &str) -> Result<Tokenization> {
        (**self).tokenize(text).await
    }
}
