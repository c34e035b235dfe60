//! Token limit 테이블 트레이트
//!
//! 제공자별 검증기는 정적 모델 → 최대 토큰 테이블만 제공하면 되고,
//! 조회/별칭/잔여 토큰 계산은 기본 구현을 공유한다.

use crate::{Error, Result};
use std::collections::HashMap;
use tracing::warn;

/// 모델별 최대 토큰 테이블을 가진 검증기
pub trait TokenLimits {
    /// 제공자 이름 (로그용)
    const PROVIDER: &'static str;

    /// 모델 ID → 최대 토큰 수 (프로세스 전역, 읽기 전용)
    fn token_limits() -> &'static HashMap<&'static str, usize>;

    /// 모델의 최대 토큰 수
    ///
    /// 정확한 문자열 일치로만 조회하며, 알 수 없는 모델이면 `None`.
    fn token_limit(model_name: &str) -> Option<usize> {
        Self::token_limits().get(model_name).copied()
    }

    /// 완성(completion) 토큰 제한
    ///
    /// 별도 완성 제한이 없는 제공자는 [`TokenLimits::token_limit`]과 같은 값을 돌려준다.
    fn completion_token_limit(model_name: &str) -> Option<usize> {
        Self::token_limit(model_name)
    }

    /// 프롬프트 길이를 뺀 뒤 완성에 쓸 수 있는 토큰 수
    ///
    /// `min(limit - length, completion_limit)`가 0 이하이면 [`Error::TokenLimitExceeded`].
    /// 프롬프트가 컨텍스트를 정확히 채우는 경우도 초과로 본다.
    fn leftover_tokens(model_name: &str, length: usize) -> Result<usize> {
        let limit = Self::token_limit(model_name)
            .ok_or_else(|| Error::UnknownModel(model_name.to_string()))?;
        let completion_limit = Self::completion_token_limit(model_name).unwrap_or(limit);

        let leftover = limit as i64 - length as i64;
        let max_tokens = leftover.min(completion_limit as i64);

        if max_tokens <= 0 {
            warn!(
                provider = Self::PROVIDER,
                model = model_name,
                limit,
                length,
                "Token limit exceeded"
            );
            return Err(Error::limit_exceeded(limit, length));
        }

        Ok(max_tokens as usize)
    }
}
