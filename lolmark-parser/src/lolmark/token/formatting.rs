//! Detokenizer and token dumps
//!
//! Unlike the formats under [crate::lolmark::formats], which work on the AST `Document`, this
//! module works at the token level. It is used for:
//!
//! - Round-trip testing (source -> tokens -> source)
//! - Debugging and visualization of token streams
//!
//! Detokenizing the raw (unfiltered) token stream reproduces the source byte for byte, because
//! every token keeps the exact text it matched, whitespace included.

use super::kinds::{Token, TokenKind};

/// Trait for converting a token to its lolmark source representation
pub trait ToLolString {
    fn to_lol_string(&self) -> String;
}

impl ToLolString for Token {
    fn to_lol_string(&self) -> String {
        self.text.clone()
    }
}

impl ToLolString for TokenKind {
    /// Canonical spelling of the kind. Kinds without a fixed spelling (identifiers, text,
    /// whitespace) map to their most neutral form.
    fn to_lol_string(&self) -> String {
        match self {
            TokenKind::Ident | TokenKind::Text | TokenKind::Unrecognized | TokenKind::Eof => {
                String::new()
            }
            TokenKind::Whitespace => " ".to_string(),
            kind => kind.describe().to_string(),
        }
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.to_lol_string()).collect()
}

/// Serialize tokens for inspection, one object per token
pub fn tokens_to_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tokens)
}
