//! Cohere Validator
//!
//! Cohere API 호출 전에 텍스트가 모델의 토큰 한도 안에 들어가는지 검증한다.
//! 토큰 수는 Cohere `/tokenize`를 감싼 [`Tokenizer`] 클라이언트로 측정한다.

use super::length;
use super::limits::TokenLimits;
use crate::tokenizer::Tokenizer;
use crate::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// 모델 ID → 최대 토큰 수
///
/// Source: https://docs.cohere.com/docs/models
pub const COHERE_MODEL_LIMITS: &[(&str, usize)] = &[
    ("command-light", 4096),
    ("command", 4096),
    ("base-light", 2048),
    ("base", 2048),
    ("embed-english-light-v2.0", 512),
    ("embed-english-v2.0", 512),
    ("embed-multilingual-v2.0", 256),
    ("summarize-medium", 2048),
    ("summarize-xlarge", 2048),
];

/// 전역 토큰 제한 테이블
static TOKEN_LIMITS: OnceLock<HashMap<&'static str, usize>> = OnceLock::new();

/// Cohere 모델용 토큰 길이 검증기
#[derive(Debug, Clone, Copy, Default)]
pub struct CohereValidator;

impl TokenLimits for CohereValidator {
    const PROVIDER: &'static str = "cohere";

    fn token_limits() -> &'static HashMap<&'static str, usize> {
        TOKEN_LIMITS.get_or_init(|| COHERE_MODEL_LIMITS.iter().copied().collect())
    }
}

impl CohereValidator {
    /// 텍스트의 토큰 수 (`model_name`은 토큰화에 영향을 주지 않음)
    pub async fn token_length<C>(text: &str, model_name: &str, client: &C) -> Result<usize>
    where
        C: Tokenizer + ?Sized,
    {
        length::token_length(text, model_name, client).await
    }

    /// 메시지 목록의 토큰 수 합계
    pub async fn token_length_from_messages<M, C>(
        messages: &[M],
        model_name: &str,
        client: &C,
    ) -> Result<usize>
    where
        M: Serialize,
        C: Tokenizer + ?Sized,
    {
        length::token_length_from_messages(messages, model_name, client).await
    }

    /// 텍스트를 검증하고 완성에 남은 토큰 수를 반환
    pub async fn validate_max_tokens<C>(text: &str, model_name: &str, client: &C) -> Result<usize>
    where
        C: Tokenizer + ?Sized,
    {
        length::validate_max_tokens::<Self, C>(text, model_name, client).await
    }

    /// 메시지 목록을 검증하고 완성에 남은 토큰 수를 반환
    pub async fn validate_max_tokens_for_messages<M, C>(
        messages: &[M],
        model_name: &str,
        client: &C,
    ) -> Result<usize>
    where
        M: Serialize,
        C: Tokenizer + ?Sized,
    {
        length::validate_max_tokens_for_messages::<Self, M, C>(messages, model_name, client).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use crate::tokenizer::Tokenization;
    use crate::Error;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// 입력과 무관하게 항상 같은 길이를 돌려주는 stub
    struct FixedTokenizer(usize);

    #[async_trait]
    impl Tokenizer for FixedTokenizer {
        async fn tokenize(&self, _text: &str) -> Result<Tokenization> {
            Ok(Tokenization::new(vec![7; self.0]))
        }
    }

    /// 호출 순서대로 미리 정한 응답을 돌려주는 stub
    struct ScriptedTokenizer {
        script: Mutex<Vec<std::result::Result<usize, String>>>,
        calls: AtomicUsize,
        seen: Mutex<Vec<String>>,
    }

    impl ScriptedTokenizer {
        fn new(mut script: Vec<std::result::Result<usize, String>>) -> Self {
            script.reverse();
            Self {
                script: Mutex::new(script),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Tokenizer for ScriptedTokenizer {
        async fn tokenize(&self, text: &str) -> Result<Tokenization> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(text.to_string());
            match self.script.lock().unwrap().pop() {
                Some(Ok(n)) => Ok(Tokenization::new(vec![0; n])),
                Some(Err(msg)) => Err(Error::Http(msg)),
                None => panic!("tokenizer called more times than scripted"),
            }
        }
    }

    #[test]
    fn test_token_limit_known_models() {
        let expected = [
            ("command-light", 4096),
            ("command", 4096),
            ("base-light", 2048),
            ("base", 2048),
            ("embed-english-light-v2.0", 512),
            ("embed-english-v2.0", 512),
            ("embed-multilingual-v2.0", 256),
            ("summarize-medium", 2048),
            ("summarize-xlarge", 2048),
        ];

        for (model, limit) in expected {
            assert_eq!(CohereValidator::token_limit(model), Some(limit), "{model}");
        }
        assert_eq!(CohereValidator::token_limits().len(), expected.len());
    }

    #[test]
    fn test_token_limit_unknown_model() {
        assert_eq!(CohereValidator::token_limit("no-such-model"), None);
        // 정확한 일치만 허용
        assert_eq!(CohereValidator::token_limit("Command"), None);
        assert_eq!(CohereValidator::token_limit(" command"), None);
        assert_eq!(CohereValidator::token_limit(""), None);
    }

    #[test]
    fn test_completion_token_limit_is_alias() {
        let inputs = COHERE_MODEL_LIMITS
            .iter()
            .map(|(model, _)| *model)
            .chain(["no-such-model", "", "COMMAND"]);

        for model in inputs {
            assert_eq!(
                CohereValidator::completion_token_limit(model),
                CohereValidator::token_limit(model),
                "{model}"
            );
        }
    }

    #[tokio::test]
    async fn test_token_length_ignores_text_and_model() {
        let client = FixedTokenizer(4);

        for (text, model) in [
            ("", "command"),
            ("a much longer piece of text", "base"),
            ("짧은 글", "no-such-model"),
        ] {
            let length = CohereValidator::token_length(text, model, &client)
                .await
                .unwrap();
            assert_eq!(length, 4);
        }
    }

    #[tokio::test]
    async fn test_token_length_propagates_client_error() {
        let client = ScriptedTokenizer::new(vec![Err("connection refused".into())]);

        let err = CohereValidator::token_length("hi", "command", &client)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(msg) if msg == "connection refused"));
    }

    #[tokio::test]
    async fn test_token_length_from_messages_sums() {
        let client = ScriptedTokenizer::new(vec![Ok(3), Ok(5), Ok(2)]);
        let messages = vec![
            Message::system("be brief"),
            Message::user("hello"),
            Message::assistant("hi"),
        ];

        let total = CohereValidator::token_length_from_messages(&messages, "command", &client)
            .await
            .unwrap();

        assert_eq!(total, 10);
        assert_eq!(client.calls(), 3);

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen[0], r#"{"role":"system","content":"be brief"}"#);
        assert_eq!(seen[2], r#"{"role":"assistant","content":"hi"}"#);
    }

    #[tokio::test]
    async fn test_token_length_from_messages_accepts_any_serialize() {
        let client = FixedTokenizer(2);
        let messages = vec![serde_json::json!({"text": "a"}), serde_json::json!(["b"])];

        let total = CohereValidator::token_length_from_messages(&messages, "command", &client)
            .await
            .unwrap();
        assert_eq!(total, 4);
    }

    #[tokio::test]
    async fn test_token_length_from_empty_messages() {
        let client = ScriptedTokenizer::new(vec![]);
        let messages: Vec<Message> = Vec::new();

        let total = CohereValidator::token_length_from_messages(&messages, "command", &client)
            .await
            .unwrap();

        assert_eq!(total, 0);
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_token_length_from_messages_fails_fast() {
        let client = ScriptedTokenizer::new(vec![Ok(3), Err("boom".into()), Ok(2)]);
        let messages = vec![
            Message::user("one"),
            Message::user("two"),
            Message::user("three"),
        ];

        let err = CohereValidator::token_length_from_messages(&messages, "command", &client)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http(msg) if msg == "boom"));
        // 세 번째 메시지는 측정되지 않음
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_validate_max_tokens_returns_leftover() {
        let client = FixedTokenizer(100);

        let max_tokens = CohereValidator::validate_max_tokens("prompt", "command", &client)
            .await
            .unwrap();
        assert_eq!(max_tokens, 4096 - 100);
    }

    #[tokio::test]
    async fn test_validate_max_tokens_rejects_exact_fill() {
        let client = FixedTokenizer(256);

        let err = CohereValidator::validate_max_tokens("prompt", "embed-multilingual-v2.0", &client)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::TokenLimitExceeded {
                limit: 256,
                length: 256,
                overflow: 0
            }
        ));
    }

    #[tokio::test]
    async fn test_validate_max_tokens_for_messages_overflow() {
        let client = ScriptedTokenizer::new(vec![Ok(300), Ok(300)]);
        let messages = vec![Message::user("a"), Message::user("b")];

        let err = CohereValidator::validate_max_tokens_for_messages(
            &messages,
            "embed-english-v2.0",
            &client,
        )
        .await
        .unwrap_err();

        assert_eq!(err.token_overflow(), Some(88));
        assert_eq!(
            err.to_string(),
            "This model's maximum context length is 512 tokens, but the given text is 600 tokens long."
        );
    }

    #[tokio::test]
    async fn test_validate_unknown_model_skips_tokenizer() {
        let client = ScriptedTokenizer::new(vec![]);

        let err = CohereValidator::validate_max_tokens("prompt", "no-such-model", &client)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UnknownModel(m) if m == "no-such-model"));
        assert_eq!(client.calls(), 0);
    }
}
