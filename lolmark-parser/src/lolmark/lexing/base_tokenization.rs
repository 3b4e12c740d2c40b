//! Base tokenization implementation for the lolmark lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where source strings become token streams.

use crate::lolmark::token::{Token, TokenKind};
use logos::Logos;

/// Tokenize source code with location information
///
/// Returns every token, whitespace included, followed by an `Eof` token with an empty span at
/// the end of the source. Logos errors cannot normally occur (free text is a catch-all), but
/// should one surface it is kept as an `Unrecognized` token rather than dropped.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Unrecognized);
        tokens.push(Token::new(kind, lexer.slice(), lexer.span()));
    }

    tokens.push(Token::new(TokenKind::Eof, "", source.len()..source.len()));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("#HAI hello");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], Token::new(TokenKind::Hai, "#HAI", 0..4));
        assert_eq!(tokens[1], Token::new(TokenKind::Whitespace, " ", 4..5));
        assert_eq!(tokens[2], Token::new(TokenKind::Ident, "hello", 5..10));
        assert_eq!(tokens[3], Token::new(TokenKind::Eof, "", 10..10));
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::new(TokenKind::Eof, "", 0..0)]);
    }

    #[test]
    fn test_spans_cover_the_source() {
        let source = "#HAI\r\n\t#MAEK  paragraf é!#OIC #KTHXBYE";
        let tokens = tokenize(source);
        let mut cursor = 0;
        for token in &tokens {
            assert_eq!(token.span.start, cursor);
            assert_eq!(&source[token.span.clone()], token.text);
            cursor = token.span.end;
        }
        assert_eq!(cursor, source.len());
    }

    #[test]
    fn test_unicode_text() {
        let tokens = tokenize("héllo wörld");
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "héllo");
        assert_eq!(tokens[2].text, "wörld");
    }
}
