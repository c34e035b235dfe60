//! # tokenguard-provider
//!
//! Tokenizer service clients for TokenGuard.
//! Each client implements `tokenguard_foundation::Tokenizer`, so validators can
//! measure text without knowing which service does the tokenizing.
//!
//! ## Features
//! - Cohere `/tokenize` client
//! - Config from JSON file + environment variables
//! - HTTP status → error classification

pub mod config;
pub mod error;
pub mod providers;

pub use config::{CohereConfig, COHERE_CONFIG_FILE, ENV_COHERE_API_KEY, ENV_COHERE_BASE_URL};
pub use error::ProviderError;
pub use providers::cohere::CohereClient;
