//! Document element
//!
//!     The document is the root of the tree. A lolmark file is one document:
//!
//!         #HAI
//!             #OBTW leading comments #TLDR
//!             #MAEK HEAD
//!                 #GIMMEH TITLE My Doc #MKAY
//!             #OIC
//!             ...body...
//!         #KTHXBYE
//!
//!     The comment run directly after `#HAI` belongs to the document itself. The head is
//!     optional; when present it sits before any body element and holds exactly one title.
//!
//!     The body is every element between the head and `#KTHXBYE`. It is the outermost variable
//!     scope and may hold at most one define of its own. Comments left after the last body
//!     element are kept as the body's trailing comments.

use super::super::range::Range;
use super::super::traits::{visit_comments, AstNode, Visitor};
use super::comment::Comment;
use super::content::BodyElement;
use super::label_text;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub head: Option<Head>,
    pub body: Body,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(elements: Vec<BodyElement>) -> Self {
        Self {
            body: Body::new(elements),
            ..Default::default()
        }
    }

    pub fn with_head(mut self, head: Head) -> Self {
        self.head = Some(head);
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.head.as_ref().map(|head| head.title.as_str())
    }

    pub fn elements(&self) -> &[BodyElement] {
        &self.body.elements
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }

    fn display_label(&self) -> String {
        match self.title() {
            Some(title) => format!("{} ({} element(s))", label_text(title), self.body.len()),
            None => format!("({} element(s))", self.body.len()),
        }
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document(self);
        visit_comments(visitor, &self.comments);
        if let Some(head) = &self.head {
            head.accept(visitor);
        }
        for element in &self.body.elements {
            element.accept(visitor);
        }
        visit_comments(visitor, &self.body.trailing_comments);
        visitor.leave_document(self);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document(head: {}, {} elements)",
            self.head.is_some(),
            self.body.len()
        )
    }
}

/// The head block: a single required title
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Head {
    pub title: String,
    pub title_location: Range,
    /// Comments between `#MAEK HEAD` and the title
    pub comments: Vec<Comment>,
    /// Comments between the title and `#OIC`
    pub trailing_comments: Vec<Comment>,
    pub location: Range,
}

impl Head {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Head {
    fn node_type(&self) -> &'static str {
        "Head"
    }

    fn display_label(&self) -> String {
        label_text(&self.title)
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_head(self);
        visit_comments(visitor, &self.comments);
        visit_comments(visitor, &self.trailing_comments);
        visitor.leave_head(self);
    }
}

/// Ordered body content of a document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    pub elements: Vec<BodyElement>,
    pub trailing_comments: Vec<Comment>,
    pub location: Range,
}

impl Body {
    pub fn new(elements: Vec<BodyElement>) -> Self {
        Self {
            elements,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The body's own define, if any
    pub fn define(&self) -> Option<&super::VariableDefine> {
        self.elements.iter().find_map(|element| match element {
            BodyElement::VariableDefine(define) => Some(define),
            _ => None,
        })
    }
}
