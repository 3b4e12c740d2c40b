//! Bold and italic text
//!
//!     #GIMMEH BOLD <text> #MKAY
//!     #GIMMEH ITALICS <text> #MKAY
//!
//! The payload is plain text; emphasis does not nest.

use super::super::range::Range;
use super::super::traits::{visit_comments, AstNode, Visitor};
use super::comment::Comment;
use super::label_text;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bold {
    pub text: String,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl Bold {
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

impl AstNode for Bold {
    fn node_type(&self) -> &'static str {
        "Bold"
    }

    fn display_label(&self) -> String {
        label_text(&self.text)
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_bold(self);
        visitor.leave_bold(self);
    }
}

impl fmt::Display for Bold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bold('{}')", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Italics {
    pub text: String,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl Italics {
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

impl AstNode for Italics {
    fn node_type(&self) -> &'static str {
        "Italics"
    }

    fn display_label(&self) -> String {
        label_text(&self.text)
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_italics(self);
        visitor.leave_italics(self);
    }
}

impl fmt::Display for Italics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Italics('{}')", self.text)
    }
}
