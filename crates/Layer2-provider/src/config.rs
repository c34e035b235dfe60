//! Cohere client 설정
//!
//! 로드 순서: 글로벌 `cohere.json` → 환경 변수 (나중 것이 우선)

use serde::{Deserialize, Serialize};
use tokenguard_foundation::{JsonStore, Result};
use tracing::debug;

/// 설정 파일명
pub const COHERE_CONFIG_FILE: &str = "cohere.json";

/// API 키 환경 변수
pub const ENV_COHERE_API_KEY: &str = "COHERE_API_KEY";

/// Base URL 환경 변수
pub const ENV_COHERE_BASE_URL: &str = "COHERE_BASE_URL";

/// Cohere tokenize 클라이언트 설정
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohereConfig {
    /// API 키
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL (기본: https://api.cohere.ai/v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// tokenize 요청에 실어 보낼 모델
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// 요청 타임아웃 (초)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl CohereConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 글로벌 설정 + 환경 변수
    ///
    /// 설정 디렉토리를 찾지 못하면 빈 설정에서 시작해 환경 변수만 적용한다.
    pub fn load() -> Result<Self> {
        let store = JsonStore::global().ok();
        Self::load_with(store.as_ref(), |key| std::env::var(key).ok())
    }

    /// 저장소(있으면) → 환경 변수 순서로 로드
    pub fn load_with<F>(store: Option<&JsonStore>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match store {
            Some(store) => Self::load_from(store)?,
            None => {
                debug!("No config directory, using environment only");
                Self::default()
            }
        };
        config.apply_env(lookup);
        Ok(config)
    }

    /// 지정한 저장소에서 로드 (파일이 없으면 기본값)
    pub fn load_from(store: &JsonStore) -> Result<Self> {
        let config = store
            .load_optional::<CohereConfig>(COHERE_CONFIG_FILE)?
            .unwrap_or_default();
        debug!(
            dir = %store.base_dir().display(),
            has_api_key = config.api_key.is_some(),
            "Loaded Cohere config"
        );
        Ok(config)
    }

    /// 저장
    pub fn save_to(&self, store: &JsonStore) -> Result<()> {
        store.save(COHERE_CONFIG_FILE, self)
    }

    /// 환경 변수로 덮어쓰기
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_COHERE_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_COHERE_BASE_URL).filter(|v| !v.is_empty()) {
            self.base_url = Some(url);
        }
    }

    /// 다른 설정 병합 (other의 값이 우선)
    pub fn merge(&mut self, other: CohereConfig) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
    }
}
