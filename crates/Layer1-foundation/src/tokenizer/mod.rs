//! Tokenizer Module - 외부 토크나이저 추상화
//!
//! 토큰화는 로컬에서 하지 않습니다. 원격 서비스(Cohere `/tokenize` 등)를
//! 감싸는 클라이언트가 [`Tokenizer`]를 구현하고, 검증기는 그 결과의 길이만 셉니다.
//!
//! ## 사용법
//!
//! ```ignore
//! use tokenguard_foundation::tokenizer::Tokenizer;
//!
//! let tokenization = client.tokenize("Hello, world!").await?;
//! println!("Tokens: {}", tokenization.len());
//! ```

mod traits;
mod types;

pub use traits::Tokenizer;
pub use types::Tokenization;
