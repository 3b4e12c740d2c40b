//! Error types for parsing and variable resolution
//!
//! Parse errors are fatal: the parser stops at the first one and no document is produced.
//! Resolution errors are collected over the whole tree and returned together.
//!
//! Every error carries the source [Range] it refers to. Messages print positions 1-based;
//! [format_source_context] shows the offending line among its neighbours.

use crate::lolmark::ast::range::Range;
use crate::lolmark::token::TokenKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[cfg(test)]
use crate::lolmark::ast::range::Position;

/// The kinds of failure the pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// `#OBTW` never closed by `#TLDR`
    LexicalIncompleteComment,
    UnexpectedToken,
    UnterminatedBlock,
    DuplicateVariableDefine,
    UnresolvedVariable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::LexicalIncompleteComment => "LexicalIncompleteComment",
            ErrorKind::UnexpectedToken => "UnexpectedToken",
            ErrorKind::UnterminatedBlock => "UnterminatedBlock",
            ErrorKind::DuplicateVariableDefine => "DuplicateVariableDefine",
            ErrorKind::UnresolvedVariable => "UnresolvedVariable",
        };
        f.write_str(name)
    }
}

/// Constructs that are opened by one token and closed by another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Document,
    Head,
    Title,
    Paragraph,
    List,
    ListItem,
    Bold,
    Italics,
    Audio,
    Video,
    VariableDefine,
    VariableUse,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Document => "document (#HAI)",
            BlockKind::Head => "head (#MAEK HEAD)",
            BlockKind::Title => "title (#GIMMEH TITLE)",
            BlockKind::Paragraph => "paragraph (#MAEK PARAGRAF)",
            BlockKind::List => "list (#MAEK LIST)",
            BlockKind::ListItem => "list item (#GIMMEH ITEM)",
            BlockKind::Bold => "bold (#GIMMEH BOLD)",
            BlockKind::Italics => "italics (#GIMMEH ITALICS)",
            BlockKind::Audio => "audio (#GIMMEH SOUNDZ)",
            BlockKind::Video => "video (#GIMMEH VIDZ)",
            BlockKind::VariableDefine => "variable define (#I HAZ)",
            BlockKind::VariableUse => "variable use (#LEMME SEE)",
        };
        f.write_str(name)
    }
}

/// Nodes that own a variable scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScopeKind {
    Body,
    Paragraph,
    List,
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScopeKind::Body => "body",
            ScopeKind::Paragraph => "paragraph",
            ScopeKind::List => "list",
        };
        f.write_str(name)
    }
}

fn expected_list(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [single] => single.to_string(),
        many => format!(
            "one of {}",
            many.iter()
                .map(TokenKind::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Errors that stop the parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("comment opened at {} is never closed by #TLDR", .location.start.human())]
    IncompleteComment { location: Range },

    #[error(
        "unexpected {found} {found_text:?} at {}, expected {}",
        .location.start.human(),
        expected_list(.expected)
    )]
    UnexpectedToken {
        found: TokenKind,
        found_text: String,
        expected: Vec<TokenKind>,
        location: Range,
    },

    #[error(
        "unterminated {block} opened at {}: found {found} at {}",
        .opened_at.start.human(),
        .location.start.human()
    )]
    UnterminatedBlock {
        block: BlockKind,
        opened_at: Range,
        found: TokenKind,
        location: Range,
    },

    #[error(
        "second define `{name}` in the same {scope}: a scope holds one define (first at {}, again at {})",
        .first.start.human(),
        .location.start.human()
    )]
    DuplicateVariableDefine {
        name: String,
        scope: ScopeKind,
        first: Range,
        location: Range,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::IncompleteComment { .. } => ErrorKind::LexicalIncompleteComment,
            ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ParseError::UnterminatedBlock { .. } => ErrorKind::UnterminatedBlock,
            ParseError::DuplicateVariableDefine { .. } => ErrorKind::DuplicateVariableDefine,
        }
    }

    pub fn location(&self) -> &Range {
        match self {
            ParseError::IncompleteComment { location }
            | ParseError::UnexpectedToken { location, .. }
            | ParseError::UnterminatedBlock { location, .. }
            | ParseError::DuplicateVariableDefine { location, .. } => location,
        }
    }
}

/// Errors found while binding variable uses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(
        "variable `{name}` at {} is not defined in any enclosing scope",
        .location.start.human()
    )]
    UnresolvedVariable { name: String, location: Range },

    #[error(
        "second define `{name}` in the same {scope}: a scope holds one define (first at {}, again at {})",
        .first.start.human(),
        .location.start.human()
    )]
    DuplicateVariableDefine {
        name: String,
        scope: ScopeKind,
        first: Range,
        location: Range,
    },
}

impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::UnresolvedVariable { .. } => ErrorKind::UnresolvedVariable,
            ResolveError::DuplicateVariableDefine { .. } => ErrorKind::DuplicateVariableDefine,
        }
    }

    pub fn location(&self) -> &Range {
        match self {
            ResolveError::UnresolvedVariable { location, .. }
            | ResolveError::DuplicateVariableDefine { location, .. } => location,
        }
    }
}

/// Every resolution error of one document, in document order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} variable resolution error(s): {}", .0.len(), summarize(.0))]
pub struct ResolveErrors(pub Vec<ResolveError>);

fn summarize(errors: &[ResolveError]) -> String {
    errors
        .iter()
        .map(ResolveError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ResolveErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, ResolveError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Any failure of the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolve(#[from] ResolveErrors),
}

impl Error {
    /// Kind of the first reported failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(error) => error.kind(),
            Error::Resolve(errors) => errors
                .iter()
                .next()
                .map(ResolveError::kind)
                .unwrap_or(ErrorKind::UnresolvedVariable),
        }
    }

    /// Every kind reported, in order
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            Error::Parse(error) => vec![error.kind()],
            Error::Resolve(errors) => errors.iter().map(ResolveError::kind).collect(),
        }
    }

    pub fn location(&self) -> Option<&Range> {
        match self {
            Error::Parse(error) => Some(error.location()),
            Error::Resolve(errors) => errors.iter().next().map(ResolveError::location),
        }
    }

    /// Message and source context for every reported failure
    pub fn render(&self, source: &str) -> String {
        match self {
            Error::Parse(error) => {
                render_one(source, error.kind(), &error.to_string(), error.location())
            }
            Error::Resolve(errors) => errors
                .iter()
                .map(|error| {
                    render_one(source, error.kind(), &error.to_string(), error.location())
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn render_one(source: &str, kind: ErrorKind, message: &str, location: &Range) -> String {
    format!(
        "Error [{}]: {}\n\n{}",
        kind,
        message,
        format_source_context(source, location)
    )
}

/// Format source code context around an error location
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(source: &str, range: &Range) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = range.start.line;

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines
        .iter()
        .enumerate()
        .take(end_line)
        .skip(start_line)
    {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_at(line: usize, column: usize) -> Range {
        Range::new(0..0, Position::new(line, column), Position::new(line, column))
    }

    #[test]
    fn test_format_source_context() {
        let source = "line 1\nline 2\nline 3\nerror line\nline 5\nline 6\nline 7";
        let context = format_source_context(source, &range_at(3, 0));

        assert!(!context.contains("line 1"));
        assert!(context.contains("line 2"));
        assert!(context.contains(">>   4 | error line"));
        assert!(context.contains("line 5"));
        assert!(context.contains("line 6"));
        assert!(!context.contains("line 7"));
    }

    #[test]
    fn test_messages_use_one_based_positions() {
        let error = ParseError::UnterminatedBlock {
            block: BlockKind::Paragraph,
            opened_at: range_at(0, 4),
            found: TokenKind::Kthxbye,
            location: range_at(2, 0),
        };
        assert_eq!(
            error.to_string(),
            "unterminated paragraph (#MAEK PARAGRAF) opened at 1:5: found #KTHXBYE at 3:1"
        );
        assert_eq!(error.kind(), ErrorKind::UnterminatedBlock);
    }

    #[test]
    fn test_unexpected_token_lists_expectations() {
        let error = ParseError::UnexpectedToken {
            found: TokenKind::Mkay,
            found_text: "#MKAY".into(),
            expected: vec![TokenKind::Ident, TokenKind::Text],
            location: range_at(0, 0),
        };
        assert_eq!(
            error.to_string(),
            "unexpected #MKAY \"#MKAY\" at 1:1, expected one of identifier, text"
        );
    }

    #[test]
    fn test_error_kinds_and_render() {
        let errors = ResolveErrors(vec![
            ResolveError::UnresolvedVariable {
                name: "a".into(),
                location: range_at(0, 0),
            },
            ResolveError::UnresolvedVariable {
                name: "b".into(),
                location: range_at(1, 0),
            },
        ]);
        let error = Error::from(errors);
        assert_eq!(error.kind(), ErrorKind::UnresolvedVariable);
        assert_eq!(error.kinds().len(), 2);

        let rendered = error.render("first\nsecond");
        assert!(rendered.contains("Error [UnresolvedVariable]: variable `a`"));
        assert!(rendered.contains(">>   2 | second"));
    }
}
