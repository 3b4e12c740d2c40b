//! Media references
//!
//!     #GIMMEH SOUNDZ <source> #MKAY
//!     #GIMMEH VIDZ <source> #MKAY
//!
//! The source is kept verbatim (trimmed). Nothing checks that it points anywhere.

use super::super::range::Range;
use super::super::traits::{visit_comments, AstNode, Visitor};
use super::comment::Comment;
use super::label_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Audio {
    pub source: String,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl Audio {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
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

impl AstNode for Audio {
    fn node_type(&self) -> &'static str {
        "Audio"
    }

    fn display_label(&self) -> String {
        label_text(&self.source)
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_audio(self);
        visitor.leave_audio(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub source: String,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl Video {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
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

impl AstNode for Video {
    fn node_type(&self) -> &'static str {
        "Video"
    }

    fn display_label(&self) -> String {
        label_text(&self.source)
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_video(self);
        visitor.leave_video(self);
    }
}
