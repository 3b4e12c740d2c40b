//! Lexer
//!
//!     This module orchestrates tokenization for the lolmark dialect. Lexing happens in two
//!     steps, each receiving a token vector and returning a new one:
//!
//!         1. Base tokenization using logos. See [base_tokenization](base_tokenization).
//!            Every character of the input ends up in exactly one token, whitespace included,
//!            and the stream is terminated by a synthetic end-of-input token.
//!
//!         2. Whitespace filtering. See [filter](filter).
//!            Whitespace tokens only separate keywords and words. They are dropped before
//!            parsing; the byte spans of the remaining tokens are left untouched.
//!
//! Source Span Preservation
//!
//!     Logos tokens carry the byte range of their source text. The parser relies on these
//!     ranges to rebuild text payloads from the source, and the AST keeps them for error
//!     reporting, so no step may alter them.
//!
//! Totality
//!
//!     Lexing never fails. Input no pattern accepts becomes an `Unrecognized` token and is
//!     rejected later, by the parser, with a position.

pub mod base_tokenization;
pub mod filter;

pub use crate::lolmark::token::{Token, TokenKind};
pub use base_tokenization::tokenize;
pub use filter::filter_whitespace;

/// Tokenize and filter: the significant token stream consumed by the parser.
pub fn lex(source: &str) -> Vec<Token> {
    filter_whitespace(tokenize(source))
}
