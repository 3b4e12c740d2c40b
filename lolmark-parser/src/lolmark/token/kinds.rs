//! Token definitions for the lolmark dialect
//!
//! This module defines all the tokens that can be produced by the lolmark lexer.
//! The token kinds are defined using the logos derive macro, which evaluates every pattern at
//! the current position and keeps the longest match. Equal-length matches are settled by the
//! explicit priorities below:
//!
//!     hashed keywords (10) > plain keywords (6) > identifier (4) > free text (3) > unrecognized (1)
//!
//! Whitespace never competes with the others: free text excludes whitespace, so a run made only
//! of spaces, tabs and line breaks is always whitespace and separators between keywords are never
//! emitted as content.
//!
//! Free text stops at whitespace. A run of words like `My Doc` is therefore three tokens
//! (`My`, whitespace, `Doc`) and the parser rebuilds the run from the source span of its first
//! and last token, which keeps interior spacing intact.
//!
//! A `#` that does not start a keyword is not free text. It is consumed together with the
//! word characters that follow it as [TokenKind::Unrecognized], so that `#HAIX` never lexes as
//! `#HAI` + `X`. Punctuation is not a word character: in `#MKAY,` the keyword and the `#`-word
//! have the same length, the keyword wins on priority and `,` is free text.
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// All token kinds of the lolmark dialect
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Hashed structural keywords
    #[token("#HAI", priority = 10, ignore(ascii_case))]
    Hai,
    #[token("#KTHXBYE", priority = 10, ignore(ascii_case))]
    Kthxbye,
    #[token("#OBTW", priority = 10, ignore(ascii_case))]
    Obtw,
    #[token("#TLDR", priority = 10, ignore(ascii_case))]
    Tldr,
    #[token("#MAEK", priority = 10, ignore(ascii_case))]
    Maek,
    #[token("#GIMMEH", priority = 10, ignore(ascii_case))]
    Gimmeh,
    #[token("#OIC", priority = 10, ignore(ascii_case))]
    Oic,
    #[token("#MKAY", priority = 10, ignore(ascii_case))]
    Mkay,
    #[token("#I", priority = 10, ignore(ascii_case))]
    I,
    #[token("#IT", priority = 10, ignore(ascii_case))]
    It,
    #[token("#LEMME", priority = 10, ignore(ascii_case))]
    Lemme,

    // Plain-word keywords
    #[token("HEAD", priority = 6, ignore(ascii_case))]
    Head,
    #[token("TITLE", priority = 6, ignore(ascii_case))]
    Title,
    #[token("PARAGRAF", priority = 6, ignore(ascii_case))]
    Paragraf,
    #[token("LIST", priority = 6, ignore(ascii_case))]
    List,
    #[token("ITEM", priority = 6, ignore(ascii_case))]
    Item,
    #[token("BOLD", priority = 6, ignore(ascii_case))]
    Bold,
    #[token("ITALICS", priority = 6, ignore(ascii_case))]
    Italics,
    #[token("NEWLINE", priority = 6, ignore(ascii_case))]
    Newline,
    #[token("SOUNDZ", priority = 6, ignore(ascii_case))]
    Soundz,
    #[token("VIDZ", priority = 6, ignore(ascii_case))]
    Vidz,
    #[token("HAZ", priority = 6, ignore(ascii_case))]
    Haz,
    #[token("IZ", priority = 6, ignore(ascii_case))]
    Iz,
    #[token("SEE", priority = 6, ignore(ascii_case))]
    See,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 4)]
    Ident,

    // Catch-all for content: anything up to the next '#' or whitespace
    #[regex(r"[^# \t\r\n]+", priority = 3)]
    Text,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    // '#' plus the word it starts; punctuation after it is left to `Text`
    #[regex(r"#[A-Za-z0-9_]*", priority = 1)]
    Unrecognized,

    /// Synthetic end-of-input marker, appended by the tokenizer
    Eof,
}

impl TokenKind {
    /// Keywords spelled with a leading `#`
    pub fn is_hashed_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Hai
                | TokenKind::Kthxbye
                | TokenKind::Obtw
                | TokenKind::Tldr
                | TokenKind::Maek
                | TokenKind::Gimmeh
                | TokenKind::Oic
                | TokenKind::Mkay
                | TokenKind::I
                | TokenKind::It
                | TokenKind::Lemme
        )
    }

    /// Keywords spelled as a bare word
    pub fn is_plain_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Head
                | TokenKind::Title
                | TokenKind::Paragraf
                | TokenKind::List
                | TokenKind::Item
                | TokenKind::Bold
                | TokenKind::Italics
                | TokenKind::Newline
                | TokenKind::Soundz
                | TokenKind::Vidz
                | TokenKind::Haz
                | TokenKind::Iz
                | TokenKind::See
        )
    }

    /// Whether the token survives the whitespace filter
    pub fn is_significant(&self) -> bool {
        !matches!(self, TokenKind::Whitespace)
    }

    /// Tokens that may appear inside a text payload.
    ///
    /// Plain keywords are not reserved: outside of their keyword position they are just words.
    pub fn is_content(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Text) || self.is_plain_keyword()
    }

    /// Tokens that may name a variable
    pub fn is_identifier_like(&self) -> bool {
        matches!(self, TokenKind::Ident) || self.is_plain_keyword()
    }

    /// Closers of enclosing scopes. Finding one of these where a construct still expects its
    /// own tokens means the construct was left open.
    pub fn ends_enclosing_scope(&self) -> bool {
        matches!(self, TokenKind::Oic | TokenKind::Kthxbye | TokenKind::Eof)
    }

    /// Human readable name used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Hai => "#HAI",
            TokenKind::Kthxbye => "#KTHXBYE",
            TokenKind::Obtw => "#OBTW",
            TokenKind::Tldr => "#TLDR",
            TokenKind::Maek => "#MAEK",
            TokenKind::Gimmeh => "#GIMMEH",
            TokenKind::Oic => "#OIC",
            TokenKind::Mkay => "#MKAY",
            TokenKind::I => "#I",
            TokenKind::It => "#IT",
            TokenKind::Lemme => "#LEMME",
            TokenKind::Head => "HEAD",
            TokenKind::Title => "TITLE",
            TokenKind::Paragraf => "PARAGRAF",
            TokenKind::List => "LIST",
            TokenKind::Item => "ITEM",
            TokenKind::Bold => "BOLD",
            TokenKind::Italics => "ITALICS",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Soundz => "SOUNDZ",
            TokenKind::Vidz => "VIDZ",
            TokenKind::Haz => "HAZ",
            TokenKind::Iz => "IZ",
            TokenKind::See => "SEE",
            TokenKind::Ident => "identifier",
            TokenKind::Text => "text",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Unrecognized => "unrecognized input",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A lexed token: its kind, the exact source text it matched and the byte span of that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: ByteRange<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: ByteRange<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn offset(&self) -> usize {
        self.span.start
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "<{}>", self.kind),
            _ => write!(f, "{}({:?})", self.kind, self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .map(|result| result.unwrap_or(TokenKind::Unrecognized))
            .collect()
    }

    #[test]
    fn test_hashed_keywords_are_case_insensitive() {
        assert_eq!(kinds("#HAI"), vec![TokenKind::Hai]);
        assert_eq!(kinds("#hai"), vec![TokenKind::Hai]);
        assert_eq!(kinds("#kThXbYe"), vec![TokenKind::Kthxbye]);
    }

    #[test]
    fn test_longest_match_between_i_and_it() {
        assert_eq!(kinds("#I"), vec![TokenKind::I]);
        assert_eq!(kinds("#IT"), vec![TokenKind::It]);
        assert_eq!(
            kinds("#I HAZ"),
            vec![TokenKind::I, TokenKind::Whitespace, TokenKind::Haz]
        );
    }

    #[test]
    fn test_plain_keyword_beats_identifier() {
        assert_eq!(kinds("HEAD"), vec![TokenKind::Head]);
        assert_eq!(kinds("head"), vec![TokenKind::Head]);
        assert_eq!(kinds("HEADER"), vec![TokenKind::Ident]);
    }

    #[test]
    fn test_identifier_beats_text() {
        assert_eq!(kinds("hello_2"), vec![TokenKind::Ident]);
        assert_eq!(kinds("don't"), vec![TokenKind::Text]);
        assert_eq!(kinds("2cool"), vec![TokenKind::Text]);
    }

    #[test]
    fn test_whitespace_is_never_text() {
        assert_eq!(kinds(" \t\r\n "), vec![TokenKind::Whitespace]);
        assert_eq!(
            kinds("a b"),
            vec![TokenKind::Ident, TokenKind::Whitespace, TokenKind::Ident]
        );
    }

    #[test]
    fn test_stray_hash_is_unrecognized() {
        assert_eq!(kinds("#"), vec![TokenKind::Unrecognized]);
        assert_eq!(kinds("#HAIX"), vec![TokenKind::Unrecognized]);
        assert_eq!(kinds("#ITEM"), vec![TokenKind::Unrecognized]);
    }

    #[test]
    fn test_keyword_glued_to_text() {
        assert_eq!(
            kinds("hi#MKAY"),
            vec![TokenKind::Ident, TokenKind::Mkay]
        );
        assert_eq!(kinds("#MKAY#OIC"), vec![TokenKind::Mkay, TokenKind::Oic]);
    }

    #[test]
    fn test_punctuation_after_keyword_is_text() {
        assert_eq!(kinds("#MKAY,"), vec![TokenKind::Mkay, TokenKind::Text]);
        assert_eq!(kinds("#MKAY."), vec![TokenKind::Mkay, TokenKind::Text]);
        assert_eq!(kinds("#OIC."), vec![TokenKind::Oic, TokenKind::Text]);
        assert_eq!(
            kinds("hi#MKAY, friend."),
            vec![
                TokenKind::Ident,
                TokenKind::Mkay,
                TokenKind::Text,
                TokenKind::Whitespace,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn test_hash_before_punctuation_stays_alone() {
        assert_eq!(kinds("#,"), vec![TokenKind::Unrecognized, TokenKind::Text]);
        assert_eq!(kinds("#1st"), vec![TokenKind::Unrecognized]);
    }

    #[test]
    fn test_token_predicates() {
        assert!(TokenKind::Hai.is_hashed_keyword());
        assert!(!TokenKind::Head.is_hashed_keyword());
        assert!(TokenKind::See.is_plain_keyword());
        assert!(TokenKind::See.is_content());
        assert!(TokenKind::See.is_identifier_like());
        assert!(!TokenKind::Text.is_identifier_like());
        assert!(!TokenKind::Whitespace.is_significant());
        assert!(TokenKind::Eof.ends_enclosing_scope());
        assert!(!TokenKind::Mkay.ends_enclosing_scope());
    }
}
