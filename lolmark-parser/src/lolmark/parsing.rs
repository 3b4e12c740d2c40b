//! Parsing module for the lolmark dialect
//!
//!     This module turns source text into a document tree:
//!         1. Lexing: tokenization and whitespace filtering. See [lexing](crate::lolmark::lexing).
//!         2. Parsing: recursive descent over the filtered tokens. See [parser](parser).
//!         3. Resolution: binding of variable uses. See [resolution](crate::lolmark::resolution).
//!
//! Parsing End To End
//!
//!     The parser consumes the whole stream and either returns a complete `Document` or the
//!     first error it met. There is no recovery and no partial tree.
//!
//!     The tree it returns has every `VariableUse` unresolved. [parse_document] runs the full
//!     pipeline and returns a tree with every use bound; [parse_unresolved] stops after parsing.
//!
//! Terminology
//!
//!     - parse: Colloquial term for the entire process (lexing + parsing + resolution)
//!     - resolve: The variable binding pass specifically

pub mod parser;

pub use parser::{ParseResult, Parser};

pub use crate::lolmark::ast::{Document, Error, ParseError, Position, Range, SourceLocation};

/// Process source text through the complete pipeline: lex, parse and resolve.
///
/// # Example
///
/// ```rust,ignore
/// use lolmark_parser::lolmark::parsing::parse_document;
///
/// let document = parse_document("#HAI #GIMMEH BOLD hi #MKAY #KTHXBYE")?;
/// ```
pub fn parse_document(source: &str) -> Result<Document, Error> {
    crate::lolmark::pipeline::Pipeline::new().run(source)
}

/// Lex and parse only; variable uses stay unresolved
pub fn parse_unresolved(source: &str) -> Result<Document, ParseError> {
    Parser::new(source).parse()
}
