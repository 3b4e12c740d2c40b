//! Raw text and line breaks
//!
//! `RawText` is a run of free text rebuilt from the source: words keep the spacing written
//! between them, surrounding whitespace is dropped. `Newline` is the payload-less
//! `#GIMMEH NEWLINE`.

use super::super::range::Range;
use super::super::traits::{visit_comments, AstNode, Visitor};
use super::comment::Comment;
use super::label_text;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    pub text: String,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            comments: Vec::new(),
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

impl AstNode for RawText {
    fn node_type(&self) -> &'static str {
        "RawText"
    }

    fn display_label(&self) -> String {
        label_text(&self.text)
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_raw_text(self);
        visitor.leave_raw_text(self);
    }
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawText('{}')", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Newline {
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl Newline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

impl AstNode for Newline {
    fn node_type(&self) -> &'static str {
        "Newline"
    }

    fn display_label(&self) -> String {
        String::new()
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_newline(self);
        visitor.leave_newline(self);
    }
}
