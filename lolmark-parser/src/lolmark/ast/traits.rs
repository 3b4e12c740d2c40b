//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{
    Audio, Bold, Comment, Document, Head, Italics, List, ListItem, Newline, Paragraph, RawText,
    VariableDefine, VariableUse, Video,
};
use super::range::{Position, Range};

/// Visitor trait for traversing the AST
///
/// Implement this trait to walk the AST. Each visit method corresponds to a node type.
/// Default implementations are empty, so you only need to override the methods you care about.
///
/// Nodes are visited depth-first in document order. Comments attached to an element are visited
/// right before it; block defines are visited before the block's content.
///
/// # Example
///
/// ```ignore
/// struct MyVisitor;
///
/// impl Visitor for MyVisitor {
///     fn visit_bold(&mut self, bold: &Bold) {
///         println!("Found bold: {}", bold.text);
///     }
/// }
///
/// let mut visitor = MyVisitor;
/// document.accept(&mut visitor);
/// ```
pub trait Visitor {
    fn visit_document(&mut self, _document: &Document) {}
    fn leave_document(&mut self, _document: &Document) {}

    fn visit_head(&mut self, _head: &Head) {}
    fn leave_head(&mut self, _head: &Head) {}

    fn visit_comment(&mut self, _comment: &Comment) {}
    fn leave_comment(&mut self, _comment: &Comment) {}

    // Blocks
    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {}

    fn visit_list(&mut self, _list: &List) {}
    fn leave_list(&mut self, _list: &List) {}

    fn visit_list_item(&mut self, _list_item: &ListItem) {}
    fn leave_list_item(&mut self, _list_item: &ListItem) {}

    // Leaf nodes
    fn visit_bold(&mut self, _bold: &Bold) {}
    fn leave_bold(&mut self, _bold: &Bold) {}

    fn visit_italics(&mut self, _italics: &Italics) {}
    fn leave_italics(&mut self, _italics: &Italics) {}

    fn visit_audio(&mut self, _audio: &Audio) {}
    fn leave_audio(&mut self, _audio: &Audio) {}

    fn visit_video(&mut self, _video: &Video) {}
    fn leave_video(&mut self, _video: &Video) {}

    fn visit_newline(&mut self, _newline: &Newline) {}
    fn leave_newline(&mut self, _newline: &Newline) {}

    fn visit_variable_define(&mut self, _define: &VariableDefine) {}
    fn leave_variable_define(&mut self, _define: &VariableDefine) {}

    fn visit_variable_use(&mut self, _variable: &VariableUse) {}
    fn leave_variable_use(&mut self, _variable: &VariableUse) {}

    fn visit_raw_text(&mut self, _text: &RawText) {}
    fn leave_raw_text(&mut self, _text: &RawText) {}
}

/// Helper function to visit a run of comments
pub fn visit_comments(visitor: &mut dyn Visitor, comments: &[Comment]) {
    for comment in comments {
        comment.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn range(&self) -> &Range;
    fn start_position(&self) -> Position {
        self.range().start
    }

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}

#[cfg(test)]
mod tests {
    use super::super::elements::{BodyElement, InlineElement};
    use super::*;

    #[derive(Default)]
    struct RecordingVisitor {
        events: Vec<String>,
    }

    impl Visitor for RecordingVisitor {
        fn visit_document(&mut self, _: &Document) {
            self.events.push("document".into());
        }
        fn leave_document(&mut self, _: &Document) {
            self.events.push("/document".into());
        }
        fn visit_comment(&mut self, comment: &Comment) {
            self.events.push(format!("comment:{}", comment.text));
        }
        fn visit_paragraph(&mut self, _: &Paragraph) {
            self.events.push("paragraph".into());
        }
        fn leave_paragraph(&mut self, _: &Paragraph) {
            self.events.push("/paragraph".into());
        }
        fn visit_variable_define(&mut self, define: &VariableDefine) {
            self.events.push(format!("define:{}", define.name));
        }
        fn visit_bold(&mut self, bold: &Bold) {
            self.events.push(format!("bold:{}", bold.text));
        }
        fn visit_raw_text(&mut self, text: &RawText) {
            self.events.push(format!("text:{}", text.text));
        }
    }

    #[test]
    fn test_visitor_traversal_order() {
        let para = Paragraph::new(vec![
            InlineElement::Bold(Bold::new("b").with_comments(vec![Comment::new("before bold")])),
            InlineElement::RawText(RawText::new("t")),
        ])
        .with_define(VariableDefine::new("x", "1"))
        .with_comments(vec![Comment::new("before para")]);
        let doc = Document::with_body(vec![BodyElement::Paragraph(para)]);

        let mut visitor = RecordingVisitor::default();
        doc.accept(&mut visitor);

        assert_eq!(
            visitor.events,
            vec![
                "document",
                "comment:before para",
                "paragraph",
                "define:x",
                "comment:before bold",
                "bold:b",
                "text:t",
                "/paragraph",
                "/document",
            ]
        );
    }
}
