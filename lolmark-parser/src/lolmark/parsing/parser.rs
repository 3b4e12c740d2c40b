//! Recursive descent parser
//!
//! One method per production. The parser works on the filtered token stream and never backtracks:
//! every decision is made on the current token, or on the current and next token right after a
//! `#MAEK` or `#GIMMEH`.
//!
//! Grammar
//!
//!     document   := #HAI comment* head? body #KTHXBYE <eof>
//!     head       := #MAEK HEAD comment* title comment* #OIC
//!     title      := #GIMMEH TITLE text #MKAY
//!     body       := (comment* body_elem)* comment*
//!     body_elem  := paragraph | list | inline | define
//!     paragraph  := #MAEK PARAGRAF (comment* (inline | define))* comment* #OIC
//!     list       := #MAEK LIST (comment* (item | define))* comment* #OIC
//!     item       := #GIMMEH ITEM (comment* item_elem)+ comment* #MKAY
//!     item_elem  := bold | italics | use | text
//!     inline     := bold | italics | audio | video | newline | use | text
//!     bold       := #GIMMEH BOLD text #MKAY          (italics, audio, video alike)
//!     newline    := #GIMMEH NEWLINE
//!     define     := #I HAZ ident #IT IZ text #MKAY
//!     use        := #LEMME SEE ident #MKAY
//!     comment    := #OBTW <anything> #TLDR
//!
//! A scope (body, paragraph, list) holds at most one define.
//!
//! Errors
//!
//!     The first error stops the parse. When a construct still expects one of its own tokens
//!     and finds `#OIC`, `#KTHXBYE` or the end of input instead, it was left open and the
//!     error is `UnterminatedBlock`, pointing back at where it was opened. Any other wrong token
//!     is an `UnexpectedToken` listing what would have been accepted.

use crate::lolmark::ast::error::{BlockKind, ParseError, ScopeKind};
use crate::lolmark::ast::{
    Audio, Body, BodyElement, Bold, Comment, Document, Head, InlineElement, ItemElement, Italics,
    List, ListItem, Newline, Paragraph, Range, RawText, SourceLocation, VariableDefine,
    VariableUse, Video,
};
use crate::lolmark::lexing::lex;
use crate::lolmark::token::{Token, TokenKind};
use std::ops::Range as ByteRange;
use tracing::{debug, trace};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokens that may start a body element
const BODY_STARTS: &[TokenKind] = &[
    TokenKind::Maek,
    TokenKind::Gimmeh,
    TokenKind::I,
    TokenKind::Lemme,
    TokenKind::Obtw,
    TokenKind::Kthxbye,
    TokenKind::Ident,
    TokenKind::Text,
];

const PARAGRAPH_STARTS: &[TokenKind] = &[
    TokenKind::Gimmeh,
    TokenKind::I,
    TokenKind::Lemme,
    TokenKind::Obtw,
    TokenKind::Oic,
    TokenKind::Ident,
    TokenKind::Text,
];

const LIST_STARTS: &[TokenKind] = &[
    TokenKind::Gimmeh,
    TokenKind::I,
    TokenKind::Obtw,
    TokenKind::Oic,
];

const ITEM_STARTS: &[TokenKind] = &[
    TokenKind::Gimmeh,
    TokenKind::Lemme,
    TokenKind::Obtw,
    TokenKind::Mkay,
    TokenKind::Ident,
    TokenKind::Text,
];

const INLINE_KINDS: &[TokenKind] = &[
    TokenKind::Bold,
    TokenKind::Italics,
    TokenKind::Newline,
    TokenKind::Soundz,
    TokenKind::Vidz,
];

const BLOCK_KINDS: &[TokenKind] = &[TokenKind::Paragraf, TokenKind::List];

const TEXT_KINDS: &[TokenKind] = &[TokenKind::Ident, TokenKind::Text];

/// Parser over the significant token stream of one source string
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    pos: usize,
    locations: SourceLocation,
}

impl<'a> Parser<'a> {
    /// Lex `source` and prepare to parse it
    pub fn new(source: &'a str) -> Self {
        Self::from_tokens(source, lex(source))
    }

    /// Parse an already lexed stream. Whitespace tokens are skipped; an end-of-input token is
    /// appended when missing.
    pub fn from_tokens(source: &'a str, tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind.is_significant())
            .collect();
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            tokens.push(Token::new(TokenKind::Eof, "", source.len()..source.len()));
        }
        Self {
            source,
            tokens,
            pos: 0,
            locations: SourceLocation::new(source),
        }
    }

    /// Parse the whole document. Variable uses are left unresolved.
    pub fn parse(mut self) -> ParseResult<Document> {
        debug!(tokens = self.tokens.len(), "parsing document");
        let document = self.parse_document()?;
        debug!(
            elements = document.body.len(),
            head = document.head.is_some(),
            "parsed document"
        );
        Ok(document)
    }

    // ------------------------------------------------------------------
    // Productions
    // ------------------------------------------------------------------

    fn parse_document(&mut self) -> ParseResult<Document> {
        if self.peek().kind != TokenKind::Hai {
            return Err(self.unexpected(&[TokenKind::Hai]));
        }
        let hai = self.advance();
        let opened_at = self.range(hai.span.clone());

        let comments = self.comment_run()?;
        let opens_head =
            self.peek().kind == TokenKind::Maek && self.peek_at(1).kind == TokenKind::Head;
        let head = if opens_head {
            Some(self.parse_head()?)
        } else {
            None
        };

        let body = self.parse_body(&opened_at)?;
        let kthxbye = self.advance();

        if self.peek().kind != TokenKind::Eof {
            return Err(self.unexpected(&[TokenKind::Eof]));
        }

        Ok(Document {
            head,
            body,
            comments,
            location: self.range(hai.span.start..kthxbye.span.end),
        })
    }

    fn parse_head(&mut self) -> ParseResult<Head> {
        let maek = self.advance();
        let head_kw = self.advance();
        let opened_at = self.range(maek.span.start..head_kw.span.end);

        let comments = self.comment_run()?;
        let (title, title_location) = match (self.peek().kind, self.peek_at(1).kind) {
            (TokenKind::Gimmeh, TokenKind::Title) => {
                self.parse_payload(BlockKind::Title)?
            }
            (TokenKind::Gimmeh, _) => return Err(self.unexpected_at(1, &[TokenKind::Title])),
            (TokenKind::Kthxbye | TokenKind::Eof, _) => {
                return Err(self.unterminated(BlockKind::Head, &opened_at))
            }
            _ => return Err(self.unexpected(&[TokenKind::Gimmeh, TokenKind::Obtw])),
        };
        let trailing_comments = self.comment_run()?;
        let oic = self.expect(TokenKind::Oic, BlockKind::Head, &opened_at)?;

        let location = self.range(maek.span.start..oic.span.end);
        trace!(title = %title, at = %location.start, "parsed head");
        Ok(Head {
            title,
            title_location,
            comments,
            trailing_comments,
            location,
        })
    }

    /// Body elements up to, not including, `#KTHXBYE`
    fn parse_body(&mut self, document_opened_at: &Range) -> ParseResult<Body> {
        let start = self.peek().span.start;
        let mut elements = Vec::new();
        let mut define_at: Option<Range> = None;

        let trailing_comments = loop {
            let comments = self.comment_run()?;
            match self.peek().kind {
                TokenKind::Kthxbye => break comments,
                TokenKind::Eof => {
                    return Err(self.unterminated(BlockKind::Document, document_opened_at))
                }
                TokenKind::Maek => {
                    let element = match self.peek_at(1).kind {
                        TokenKind::Paragraf => {
                            BodyElement::Paragraph(self.parse_paragraph(comments)?)
                        }
                        TokenKind::List => BodyElement::List(self.parse_list(comments)?),
                        _ => return Err(self.unexpected_at(1, BLOCK_KINDS)),
                    };
                    elements.push(element);
                }
                TokenKind::I => {
                    let define = self.parse_define(comments)?;
                    check_single_define(&mut define_at, &define, ScopeKind::Body)?;
                    elements.push(BodyElement::VariableDefine(define));
                }
                _ => match self.parse_inline(comments)? {
                    Some(inline) => elements.push(inline.into()),
                    None => return Err(self.unexpected(BODY_STARTS)),
                },
            }
        };

        let end = self.peek().span.start;
        Ok(Body {
            elements,
            trailing_comments,
            location: self.range(start..end.max(start)),
        })
    }

    fn parse_paragraph(&mut self, comments: Vec<Comment>) -> ParseResult<Paragraph> {
        let maek = self.advance();
        let kw = self.advance();
        let opened_at = self.range(maek.span.start..kw.span.end);

        let mut define: Option<VariableDefine> = None;
        let mut define_at: Option<Range> = None;
        let mut define_index = 0;
        let mut children = Vec::new();

        let (trailing_comments, oic) = loop {
            let leading = self.comment_run()?;
            match self.peek().kind {
                TokenKind::Oic => break (leading, self.advance()),
                TokenKind::Kthxbye | TokenKind::Eof => {
                    return Err(self.unterminated(BlockKind::Paragraph, &opened_at))
                }
                TokenKind::I => {
                    let parsed = self.parse_define(leading)?;
                    check_single_define(&mut define_at, &parsed, ScopeKind::Paragraph)?;
                    define_index = children.len();
                    define = Some(parsed);
                }
                _ => match self.parse_inline(leading)? {
                    Some(inline) => children.push(inline),
                    None => return Err(self.unexpected(PARAGRAPH_STARTS)),
                },
            }
        };

        let location = self.range(maek.span.start..oic.span.end);
        trace!(children = children.len(), at = %location.start, "parsed paragraph");
        Ok(Paragraph {
            define,
            define_index,
            children,
            comments,
            trailing_comments,
            location,
        })
    }

    fn parse_list(&mut self, comments: Vec<Comment>) -> ParseResult<List> {
        let maek = self.advance();
        let kw = self.advance();
        let opened_at = self.range(maek.span.start..kw.span.end);

        let mut define: Option<VariableDefine> = None;
        let mut define_at: Option<Range> = None;
        let mut define_index = 0;
        let mut items = Vec::new();

        let (trailing_comments, oic) = loop {
            let leading = self.comment_run()?;
            match self.peek().kind {
                TokenKind::Oic => break (leading, self.advance()),
                TokenKind::Kthxbye | TokenKind::Eof => {
                    return Err(self.unterminated(BlockKind::List, &opened_at))
                }
                TokenKind::I => {
                    let parsed = self.parse_define(leading)?;
                    check_single_define(&mut define_at, &parsed, ScopeKind::List)?;
                    define_index = items.len();
                    define = Some(parsed);
                }
                TokenKind::Gimmeh => {
                    if self.peek_at(1).kind != TokenKind::Item {
                        return Err(self.unexpected_at(1, &[TokenKind::Item]));
                    }
                    items.push(self.parse_item(leading)?);
                }
                _ => return Err(self.unexpected(LIST_STARTS)),
            }
        };

        let location = self.range(maek.span.start..oic.span.end);
        trace!(items = items.len(), at = %location.start, "parsed list");
        Ok(List {
            define,
            define_index,
            items,
            comments,
            trailing_comments,
            location,
        })
    }

    fn parse_item(&mut self, comments: Vec<Comment>) -> ParseResult<ListItem> {
        let gimmeh = self.advance();
        let kw = self.advance();
        let opened_at = self.range(gimmeh.span.start..kw.span.end);
        let mut children = Vec::new();

        let (trailing_comments, mkay) = loop {
            let leading = self.comment_run()?;
            match self.peek().kind {
                TokenKind::Mkay if children.is_empty() => return Err(self.unexpected(TEXT_KINDS)),
                TokenKind::Mkay => break (leading, self.advance()),
                TokenKind::Oic | TokenKind::Kthxbye | TokenKind::Eof => {
                    return Err(self.unterminated(BlockKind::ListItem, &opened_at))
                }
                TokenKind::Gimmeh => {
                    let child = match self.peek_at(1).kind {
                        TokenKind::Bold => {
                            let (text, location) = self.parse_payload(BlockKind::Bold)?;
                            ItemElement::Bold(Bold::new(text).at(location).with_comments(leading))
                        }
                        TokenKind::Italics => {
                            let (text, location) = self.parse_payload(BlockKind::Italics)?;
                            ItemElement::Italics(
                                Italics::new(text).at(location).with_comments(leading),
                            )
                        }
                        _ => {
                            return Err(
                                self.unexpected_at(1, &[TokenKind::Bold, TokenKind::Italics])
                            )
                        }
                    };
                    children.push(child);
                }
                TokenKind::Lemme => {
                    children.push(ItemElement::VariableUse(self.parse_use(leading)?))
                }
                kind if kind.is_content() => {
                    children.push(ItemElement::RawText(self.parse_raw_text(leading)))
                }
                _ => return Err(self.unexpected(ITEM_STARTS)),
            }
        };

        Ok(ListItem {
            children,
            comments,
            trailing_comments,
            location: self.range(gimmeh.span.start..mkay.span.end),
        })
    }

    /// Inline constructs shared by the body and paragraphs. Returns `None` when the current
    /// token does not start one.
    fn parse_inline(&mut self, comments: Vec<Comment>) -> ParseResult<Option<InlineElement>> {
        let element = match self.peek().kind {
            TokenKind::Gimmeh => match self.peek_at(1).kind {
                TokenKind::Bold => {
                    let (text, location) = self.parse_payload(BlockKind::Bold)?;
                    InlineElement::Bold(Bold::new(text).at(location).with_comments(comments))
                }
                TokenKind::Italics => {
                    let (text, location) = self.parse_payload(BlockKind::Italics)?;
                    InlineElement::Italics(Italics::new(text).at(location).with_comments(comments))
                }
                TokenKind::Soundz => {
                    let (source, location) = self.parse_payload(BlockKind::Audio)?;
                    InlineElement::Audio(Audio::new(source).at(location).with_comments(comments))
                }
                TokenKind::Vidz => {
                    let (source, location) = self.parse_payload(BlockKind::Video)?;
                    InlineElement::Video(Video::new(source).at(location).with_comments(comments))
                }
                TokenKind::Newline => {
                    let gimmeh = self.advance();
                    let kw = self.advance();
                    let location = self.range(gimmeh.span.start..kw.span.end);
                    InlineElement::Newline(Newline::new().at(location).with_comments(comments))
                }
                _ => return Err(self.unexpected_at(1, INLINE_KINDS)),
            },
            TokenKind::Lemme => InlineElement::VariableUse(self.parse_use(comments)?),
            kind if kind.is_content() => InlineElement::RawText(self.parse_raw_text(comments)),
            _ => return Ok(None),
        };
        Ok(Some(element))
    }

    /// `#GIMMEH <KIND> text #MKAY`, returning the text and the construct's location
    fn parse_payload(&mut self, block: BlockKind) -> ParseResult<(String, Range)> {
        let gimmeh = self.advance();
        let kw = self.advance();
        let opened_at = self.range(gimmeh.span.start..kw.span.end);

        let text = self.text_run(block, &opened_at)?;
        let mkay = self.expect(TokenKind::Mkay, block, &opened_at)?;
        Ok((text, self.range(gimmeh.span.start..mkay.span.end)))
    }

    fn parse_define(&mut self, comments: Vec<Comment>) -> ParseResult<VariableDefine> {
        let i = self.advance();
        let opened_at = self.range(i.span.clone());
        let block = BlockKind::VariableDefine;

        self.expect(TokenKind::Haz, block, &opened_at)?;
        let name = self.identifier(block, &opened_at)?;
        self.expect(TokenKind::It, block, &opened_at)?;
        self.expect(TokenKind::Iz, block, &opened_at)?;
        let value = self.text_run(block, &opened_at)?;
        let mkay = self.expect(TokenKind::Mkay, block, &opened_at)?;

        let location = self.range(i.span.start..mkay.span.end);
        trace!(name = %name, at = %location.start, "parsed variable define");
        Ok(VariableDefine::new(name, value)
            .at(location)
            .with_comments(comments))
    }

    fn parse_use(&mut self, comments: Vec<Comment>) -> ParseResult<VariableUse> {
        let lemme = self.advance();
        let opened_at = self.range(lemme.span.clone());
        let block = BlockKind::VariableUse;

        self.expect(TokenKind::See, block, &opened_at)?;
        let name = self.identifier(block, &opened_at)?;
        let mkay = self.expect(TokenKind::Mkay, block, &opened_at)?;

        Ok(VariableUse::new(name)
            .at(self.range(lemme.span.start..mkay.span.end))
            .with_comments(comments))
    }

    /// A maximal run of content tokens, rebuilt from the source
    fn parse_raw_text(&mut self, comments: Vec<Comment>) -> RawText {
        let start = self.peek().span.start;
        let mut end = start;
        while self.peek().kind.is_content() {
            end = self.advance().span.end;
        }
        RawText::new(&self.source[start..end])
            .at(self.range(start..end))
            .with_comments(comments)
    }

    fn comment_run(&mut self) -> ParseResult<Vec<Comment>> {
        let mut comments = Vec::new();
        while self.peek().kind == TokenKind::Obtw {
            comments.push(self.parse_comment()?);
        }
        Ok(comments)
    }

    /// `#OBTW … #TLDR`. Everything up to the first `#TLDR` is comment text, keywords included.
    fn parse_comment(&mut self) -> ParseResult<Comment> {
        let obtw = self.advance();
        loop {
            match self.peek().kind {
                TokenKind::Tldr => break,
                TokenKind::Eof => {
                    return Err(ParseError::IncompleteComment {
                        location: self.range(obtw.span.clone()),
                    })
                }
                _ => {
                    self.advance();
                }
            }
        }
        let tldr = self.advance();
        let text = self.source[obtw.span.end..tldr.span.start].trim();
        Ok(Comment::new(text).at(self.range(obtw.span.start..tldr.span.end)))
    }

    // ------------------------------------------------------------------
    // Token helpers
    // ------------------------------------------------------------------

    /// Text payload: one or more content tokens
    fn text_run(&mut self, block: BlockKind, opened_at: &Range) -> ParseResult<String> {
        if !self.peek().kind.is_content() {
            return Err(self.diverged(block, opened_at, TEXT_KINDS));
        }
        let start = self.peek().span.start;
        let mut end = start;
        while self.peek().kind.is_content() {
            end = self.advance().span.end;
        }
        Ok(self.source[start..end].to_string())
    }

    fn identifier(&mut self, block: BlockKind, opened_at: &Range) -> ParseResult<String> {
        if self.peek().kind.is_identifier_like() {
            Ok(self.advance().text)
        } else {
            Err(self.diverged(block, opened_at, &[TokenKind::Ident]))
        }
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        block: BlockKind,
        opened_at: &Range,
    ) -> ParseResult<Token> {
        if self.peek().kind == kind {
            Ok(self.advance())
        } else {
            Err(self.diverged(block, opened_at, &[kind]))
        }
    }

    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> &Token {
        let index = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consume the current token. The end-of-input token is never consumed.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn range(&self, span: ByteRange<usize>) -> Range {
        self.locations.byte_range_to_ast_range(&span)
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    fn unexpected(&self, expected: &[TokenKind]) -> ParseError {
        self.unexpected_at(0, expected)
    }

    fn unexpected_at(&self, offset: usize, expected: &[TokenKind]) -> ParseError {
        let token = self.peek_at(offset);
        ParseError::UnexpectedToken {
            found: token.kind,
            found_text: token.text.clone(),
            expected: expected.to_vec(),
            location: self.range(token.span.clone()),
        }
    }

    fn unterminated(&self, block: BlockKind, opened_at: &Range) -> ParseError {
        let token = self.peek();
        ParseError::UnterminatedBlock {
            block,
            opened_at: opened_at.clone(),
            found: token.kind,
            location: self.range(token.span.clone()),
        }
    }

    /// Error for a construct that did not get what it expected next
    fn diverged(
        &self,
        block: BlockKind,
        opened_at: &Range,
        expected: &[TokenKind],
    ) -> ParseError {
        if self.peek().kind.ends_enclosing_scope() {
            self.unterminated(block, opened_at)
        } else {
            self.unexpected(expected)
        }
    }
}

fn check_single_define(
    define_at: &mut Option<Range>,
    define: &VariableDefine,
    scope: ScopeKind,
) -> ParseResult<()> {
    match define_at {
        Some(first) => Err(ParseError::DuplicateVariableDefine {
            name: define.name.clone(),
            scope,
            first: first.clone(),
            location: define.location.clone(),
        }),
        None => {
            *define_at = Some(define.location.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lolmark::ast::ErrorKind;

    fn parse(source: &str) -> ParseResult<Document> {
        Parser::new(source).parse()
    }

    fn parse_ok(source: &str) -> Document {
        parse(source).expect("source should parse")
    }

    fn error_kind(source: &str) -> ErrorKind {
        parse(source).expect_err("source should fail").kind()
    }

    #[test]
    fn test_empty_document() {
        let doc = parse_ok("#HAI#KTHXBYE");
        assert!(doc.head.is_none());
        assert!(doc.body.is_empty());
        assert_eq!(doc.location.span, 0..12);
    }

    #[test]
    fn test_head_title_keeps_interior_spacing() {
        let doc = parse_ok("#HAI #MAEK HEAD #GIMMEH TITLE  My   Doc  #MKAY #OIC #KTHXBYE");
        let head = doc.head.expect("head");
        assert_eq!(head.title, "My   Doc");
        assert_eq!(head.title_location.span, 16..46);
    }

    #[test]
    fn test_plain_keywords_are_text_in_payloads() {
        let doc = parse_ok("#HAI #GIMMEH BOLD the LIST of HEAD items #MKAY #KTHXBYE");
        match &doc.elements()[0] {
            BodyElement::Bold(bold) => assert_eq!(bold.text, "the LIST of HEAD items"),
            other => panic!("expected bold, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_text_is_trimmed_and_swallows_keywords() {
        let doc = parse_ok("#HAI #OBTW  a #GIMMEH note #OIC  #TLDR #KTHXBYE");
        assert_eq!(doc.comments.len(), 1);
        assert_eq!(doc.comments[0].text, "a #GIMMEH note #OIC");
    }

    #[test]
    fn test_comments_attach_to_following_element() {
        let doc = parse_ok(
            "#HAI #GIMMEH NEWLINE #OBTW one #TLDR #OBTW two #TLDR #GIMMEH BOLD b #MKAY #OBTW end #TLDR #KTHXBYE",
        );
        let elements = doc.elements();
        assert_eq!(elements.len(), 2);
        let texts: Vec<_> = elements[1]
            .comments()
            .iter()
            .map(|c| c.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "two"]);
        assert_eq!(doc.body.trailing_comments[0].text, "end");
    }

    #[test]
    fn test_define_anywhere_in_paragraph() {
        let doc = parse_ok(
            "#HAI #MAEK PARAGRAF #LEMME SEE x #MKAY #I HAZ x #IT IZ late #MKAY #OIC #KTHXBYE",
        );
        let para = doc.elements()[0].as_paragraph().expect("paragraph");
        assert_eq!(para.define.as_ref().map(|d| d.value.as_str()), Some("late"));
        assert_eq!(para.children.len(), 1);
    }

    #[test]
    fn test_list_items_hold_mixed_content() {
        let doc = parse_ok(
            "#HAI #MAEK LIST #GIMMEH ITEM plain #GIMMEH BOLD b #MKAY #LEMME SEE v #MKAY #MKAY #OIC #KTHXBYE",
        );
        let list = doc.elements()[0].as_list().expect("list");
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].children.len(), 3);
    }

    #[test]
    fn test_keyword_can_name_a_variable() {
        let doc = parse_ok("#HAI #I HAZ title #IT IZ t #MKAY #LEMME SEE title #MKAY #KTHXBYE");
        let var = doc.elements()[1].as_variable_use().expect("use");
        assert_eq!(var.name, "title");
    }

    #[test]
    fn test_unterminated_paragraph() {
        let error = parse("#HAI#MAEK PARAGRAF hello#KTHXBYE").expect_err("should fail");
        match error {
            ParseError::UnterminatedBlock {
                block,
                opened_at,
                found,
                ..
            } => {
                assert_eq!(block, BlockKind::Paragraph);
                assert_eq!(opened_at.span, 4..18);
                assert_eq!(found, TokenKind::Kthxbye);
            }
            other => panic!("expected unterminated block, got {:?}", other),
        }
    }

    #[test]
    fn test_bold_closed_by_oic_is_unterminated() {
        let error = parse("#HAI #MAEK PARAGRAF #GIMMEH BOLD hi #OIC #KTHXBYE").expect_err("fail");
        assert!(matches!(
            error,
            ParseError::UnterminatedBlock {
                block: BlockKind::Bold,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_payload_is_unexpected_token() {
        let error = parse("#HAI #GIMMEH BOLD #MKAY #KTHXBYE").expect_err("fail");
        match error {
            ParseError::UnexpectedToken {
                found, expected, ..
            } => {
                assert_eq!(found, TokenKind::Mkay);
                assert_eq!(expected, vec![TokenKind::Ident, TokenKind::Text]);
            }
            other => panic!("expected unexpected token, got {:?}", other),
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(error_kind(""), ErrorKind::UnexpectedToken);
        assert_eq!(error_kind("#HAI"), ErrorKind::UnterminatedBlock);
        assert_eq!(error_kind("#HAI #OBTW never closed"), ErrorKind::LexicalIncompleteComment);
        assert_eq!(error_kind("#HAI #KTHXBYE trailing"), ErrorKind::UnexpectedToken);
        assert_eq!(error_kind("#HAI # #KTHXBYE"), ErrorKind::UnexpectedToken);
        assert_eq!(error_kind("#HAI #MAEK HEAD #OIC #KTHXBYE"), ErrorKind::UnexpectedToken);
        assert_eq!(
            error_kind("#HAI #MAEK PARAGRAF #MAEK LIST #OIC #OIC #KTHXBYE"),
            ErrorKind::UnexpectedToken
        );
        assert_eq!(
            error_kind("#HAI #MAEK LIST #GIMMEH ITEM #MKAY #OIC #KTHXBYE"),
            ErrorKind::UnexpectedToken
        );
        assert_eq!(
            error_kind("#HAI #I HAZ a #IT IZ 1 #MKAY #I HAZ b #IT IZ 2 #MKAY #KTHXBYE"),
            ErrorKind::DuplicateVariableDefine
        );
    }

    #[test]
    fn test_duplicate_define_in_list_reports_both_locations() {
        let source = "#HAI #MAEK LIST #I HAZ a #IT IZ 1 #MKAY #I HAZ a #IT IZ 2 #MKAY #OIC #KTHXBYE";
        match parse(source).expect_err("fail") {
            ParseError::DuplicateVariableDefine {
                name,
                scope,
                first,
                location,
            } => {
                assert_eq!(name, "a");
                assert_eq!(scope, ScopeKind::List);
                assert!(first.span.start < location.span.start);
            }
            other => panic!("expected duplicate define, got {:?}", other),
        }
    }

    #[test]
    fn test_same_name_in_different_scopes_is_allowed() {
        let source = "#HAI #I HAZ a #IT IZ 1 #MKAY #MAEK PARAGRAF #I HAZ a #IT IZ 2 #MKAY #OIC #KTHXBYE";
        assert!(parse(source).is_ok());
    }
}
