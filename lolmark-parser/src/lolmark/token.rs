//! Core token types and helpers shared across the lexer, parser, and tooling.

pub mod formatting;
pub mod kinds;

pub use formatting::{detokenize, tokens_to_json, ToLolString};
pub use kinds::{Token, TokenKind};
