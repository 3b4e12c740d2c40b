//! Paragraph element
//!
//! A paragraph is a block of inline content:
//!
//!     #MAEK PARAGRAF
//!         Some text #GIMMEH BOLD loud #MKAY and #LEMME SEE name #MKAY
//!     #OIC
//!
//! Parsing Structure:
//!
//! | Element   | Opener          | Content                           | Closer |
//! |-----------|-----------------|-----------------------------------|--------|
//! | Paragraph | `#MAEK PARAGRAF` | inline elements, comments, define | `#OIC` |
//!
//! A paragraph owns a variable scope. It may hold at most one define, written anywhere among its
//! children; the define is visible to every use in the paragraph. Paragraphs do not nest
//! paragraphs or lists.

use super::super::range::Range;
use super::super::traits::{visit_comments, AstNode, Visitor};
use super::comment::Comment;
use super::content::InlineElement;
use super::variable::VariableDefine;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub define: Option<VariableDefine>,
    /// Number of children written before the define in the source
    pub define_index: usize,
    pub children: Vec<InlineElement>,
    pub comments: Vec<Comment>,
    /// Comments after the last child, before `#OIC`
    pub trailing_comments: Vec<Comment>,
    pub location: Range,
}

impl Paragraph {
    pub fn new(children: Vec<InlineElement>) -> Self {
        Self {
            children,
            ..Default::default()
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn with_define(mut self, define: VariableDefine) -> Self {
        self.define = Some(define);
        self
    }

    /// Places the define after the first `index` children
    pub fn with_define_at(mut self, define: VariableDefine, index: usize) -> Self {
        self.define = Some(define);
        self.define_index = index;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_trailing_comments(mut self, comments: Vec<Comment>) -> Self {
        self.trailing_comments = comments;
        self
    }

    /// Concatenated text of the paragraph's text-bearing children, in order
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(InlineElement::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        format!("{} element(s)", self.children.len())
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_paragraph(self);
        if let Some(define) = &self.define {
            define.accept(visitor);
        }
        for child in &self.children {
            child.accept(visitor);
        }
        visit_comments(visitor, &self.trailing_comments);
        visitor.leave_paragraph(self);
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} elements)", self.children.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Bold, RawText};
    use super::*;

    #[test]
    fn test_paragraph_text() {
        let para = Paragraph::new(vec![
            InlineElement::RawText(RawText::new("hello")),
            InlineElement::Bold(Bold::new("world")),
        ]);
        assert_eq!(para.text(), "hello world");
        assert_eq!(para.display_label(), "2 element(s)");
    }
}
