//! Token length 측정
//!
//! 모든 측정은 [`Tokenizer`]에 위임한다. 한 번의 측정마다 외부 호출이 정확히 한 번
//! 일어나며, 결과는 캐시하지 않는다.

use super::limits::TokenLimits;
use crate::tokenizer::Tokenizer;
use crate::{Error, Result};
use serde::Serialize;
use tracing::{debug, trace};

/// 텍스트의 토큰 수
///
/// `model_name`은 로그에만 쓰인다. 토큰화 방식은 클라이언트가 결정한다.
/// 클라이언트 에러는 감싸지 않고 그대로 돌려준다.
pub async fn token_length<C>(text: &str, model_name: &str, client: &C) -> Result<usize>
where
    C: Tokenizer + ?Sized,
{
    let tokenization = client.tokenize(text).await?;
    let length = tokenization.len();
    debug!(model = model_name, tokens = length, "Measured token length");
    Ok(length)
}

/// 메시지 목록의 토큰 수 합계
///
/// 각 메시지를 JSON으로 직렬화해 순서대로 하나씩 측정한다. 첫 실패에서 멈추고
/// 부분 합계는 돌려주지 않는다.
pub async fn token_length_from_messages<M, C>(
    messages: &[M],
    model_name: &str,
    client: &C,
) -> Result<usize>
where
    M: Serialize,
    C: Tokenizer + ?Sized,
{
    let mut total = 0;

    for (index, message) in messages.iter().enumerate() {
        let text = serde_json::to_string(message)?;
        let length = token_length(&text, model_name, client).await?;
        trace!(index, tokens = length, "Measured message");
        total += length;
    }

    debug!(
        model = model_name,
        messages = messages.len(),
        tokens = total,
        "Measured messages"
    );
    Ok(total)
}

/// 텍스트가 모델 컨텍스트에 들어가는지 검증하고, 완성에 쓸 수 있는 토큰 수를 반환
pub async fn validate_max_tokens<V, C>(text: &str, model_name: &str, client: &C) -> Result<usize>
where
    V: TokenLimits,
    C: Tokenizer + ?Sized,
{
    ensure_known::<V>(model_name)?;
    let length = token_length(text, model_name, client).await?;
    V::leftover_tokens(model_name, length)
}

/// 메시지 목록이 모델 컨텍스트에 들어가는지 검증하고, 완성에 쓸 수 있는 토큰 수를 반환
pub async fn validate_max_tokens_for_messages<V, M, C>(
    messages: &[M],
    model_name: &str,
    client: &C,
) -> Result<usize>
where
    V: TokenLimits,
    M: Serialize,
    C: Tokenizer + ?Sized,
{
    ensure_known::<V>(model_name)?;
    let length = token_length_from_messages(messages, model_name, client).await?;
    V::leftover_tokens(model_name, length)
}

/// 제한을 모르는 모델은 외부 호출 전에 거절
fn ensure_known<V: TokenLimits>(model_name: &str) -> Result<()> {
    match V::token_limit(model_name) {
        Some(_) => Ok(()),
        None => Err(Error::UnknownModel(model_name.to_string())),
    }
}
