//! Tokenizer service clients

pub mod cohere;
