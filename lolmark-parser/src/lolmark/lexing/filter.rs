//! Whitespace filter
//!
//! Drops whitespace-channel tokens, preserving order and source spans of everything else.
//! The filter is stateless; the `Eof` token always survives.

use crate::lolmark::token::Token;

pub fn filter_whitespace(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|token| token.kind.is_significant())
        .collect()
}
