//! Comment element
//!
//! An `#OBTW … #TLDR` block. The text between the markers is kept trimmed of surrounding
//! whitespace. Comments carry no semantic weight: they are attached to the element they precede,
//! or kept as trailing comments of the enclosing block when no element follows.

use super::super::range::Range;
use super::super::traits::{AstNode, Visitor};
use super::label_text;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub location: Range,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: Range::default(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Comment {
    fn node_type(&self) -> &'static str {
        "Comment"
    }

    fn display_label(&self) -> String {
        label_text(&self.text)
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_comment(self);
        visitor.leave_comment(self);
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comment('{}')", self.text)
    }
}
