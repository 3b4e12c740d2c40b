//! Property-based tests for the lexer
//!
//! Lexing is total: every input, however malformed, becomes a token stream that ends with the
//! end-of-input token and reproduces the input exactly.

use lolmark_parser::lolmark::lexing::{filter_whitespace, tokenize};
use lolmark_parser::lolmark::token::{detokenize, TokenKind};
use proptest::prelude::*;

/// Inputs biased towards the dialect: keywords, stray hashes, words and whitespace
fn lolish_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("#HAI".to_string()),
        Just("#kthxbye".to_string()),
        Just("#GIMMEH".to_string()),
        Just("#MKAY".to_string()),
        Just("#I".to_string()),
        Just("#IT".to_string()),
        Just("#".to_string()),
        Just("BOLD".to_string()),
        Just("item".to_string()),
        "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
        "[!-~]{1,4}",
        "[ \t\r\n]{1,3}",
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn tokenize_reproduces_any_input(source in any::<String>()) {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn token_spans_tile_the_input(source in lolish_strategy()) {
        let tokens = tokenize(&source);
        let mut offset = 0;
        for token in &tokens {
            prop_assert_eq!(token.span.start, offset);
            prop_assert_eq!(&source[token.span.clone()], token.text.as_str());
            offset = token.span.end;
        }
        prop_assert_eq!(offset, source.len());
    }

    #[test]
    fn whitespace_is_never_content(source in lolish_strategy()) {
        let is_space = |c: char| matches!(c, ' ' | '\t' | '\r' | '\n');
        for token in tokenize(&source) {
            match token.kind {
                TokenKind::Whitespace => {
                    prop_assert!(token.text.chars().all(is_space));
                }
                TokenKind::Eof => {
                    prop_assert!(token.text.is_empty());
                }
                _ => {
                    prop_assert!(!token.text.chars().any(is_space));
                }
            }
        }
    }

    #[test]
    fn filter_keeps_order_of_significant_tokens(source in lolish_strategy()) {
        let raw = tokenize(&source);
        let expected: Vec<_> = raw
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .cloned()
            .collect();
        prop_assert_eq!(filter_whitespace(raw), expected);
    }
}
