//! Core XML lexing primitives
//!
//! - Scanner: memchr-accelerated delimiter detection over `&str`
//! - Tokenizer: state machine for XML token extraction
//! - Entities: entity decoding with Cow (zero-copy when possible)
//! - Attributes: lenient attribute parsing
//! - Name: qualified names compared by local part

pub mod attributes;
pub mod entities;
pub mod name;
pub mod scanner;
pub mod tokenizer;
