//! AST definitions and utilities for the lolmark dialect
//!
//!     This module provides the Abstract Syntax Tree (AST) definitions, along with utilities
//!     for tracking source positions, reporting errors and producing normalized snapshots.
//!
//! Document Structure
//!
//!     A lolmark document is wrapped in `#HAI … #KTHXBYE`. Inside it sits an optional head
//!     holding the title, then the body: a flat sequence of paragraphs, lists and inline
//!     constructs. Paragraphs and lists are the only blocks, and they do not nest.
//!
//!     Which element may appear where is enforced by the typed unions `BodyElement`,
//!     `InlineElement` and `ItemElement`, so invalid nesting cannot be built. See the
//!     [elements](elements) module.
//!
//! Immutability
//!
//!     The tree is built once by the parser and never mutated afterwards. Variable resolution
//!     produces a new tree with every use bound. All node types are plain owned data and
//!     therefore `Send + Sync`.
//!
//! ## How Location Tracking Works
//!
//! ```text
//! Source: "#HAI\n#KTHXBYE"
//! Lexer:  (Hai, 0..4) (Whitespace, 4..5) (Kthxbye, 5..13) (Eof, 13..13)
//! SourceLocation pre-computes line starts: [0, 5]
//! byte_to_position(5) → Position { line: 1, column: 0 }
//! ```
//!
//! The parser converts the span of each construct, from its opening token to its closer, into a
//! `Range` and stores it on the node.
//!
//! ## Modules
//!
//! - `range` - Position and Range types for source code locations
//! - `elements` - AST node type definitions organized by element type
//! - `traits` - Common traits for AST nodes (AstNode, Visitor)
//! - `snapshot` - Normalized intermediate representation for serialization
//! - `error` - Parse and resolution errors

pub mod elements;
pub mod error;
pub mod range;
pub mod snapshot;
pub mod traits;

// Re-export commonly used types at module root
pub use elements::{
    Audio, Body, BodyElement, Bold, Comment, Document, ElementRef, Head, InlineElement,
    ItemElement, Italics, List, ListItem, Newline, Paragraph, RawText, VariableDefine,
    VariableUse, Video,
};
pub use error::{
    format_source_context, BlockKind, Error, ErrorKind, ParseError, ResolveError, ResolveErrors,
    ScopeKind,
};
pub use range::{Position, Range, SourceLocation};
pub use snapshot::{
    snapshot_from_document, snapshot_from_document_with_options, snapshot_from_element,
    AstSnapshot, SnapshotOptions,
};
pub use traits::{AstNode, Visitor};
