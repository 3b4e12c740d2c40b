//! Document-level assertions

use super::{assert_count, with_child};
use crate::lolmark::ast::{BodyElement, Document, ElementRef};
use crate::lolmark::testing::ast_assertions::ElementAssertion;
use crate::lolmark::testing::matchers::TextMatch;

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    fn elements(&self) -> Vec<ElementRef<'a>> {
        self.doc
            .body
            .elements
            .iter()
            .map(BodyElement::as_element)
            .collect()
    }

    /// Assert the document has a head with the given title
    pub fn title(self, expected: &str) -> Self {
        match self.doc.title() {
            Some(title) => TextMatch::Exact(expected.to_string()).assert(title, "head.title"),
            None => panic!("Expected title '{}', but the document has no head", expected),
        }
        self
    }

    pub fn no_head(self) -> Self {
        assert!(
            self.doc.head.is_none(),
            "Expected no head, found head titled {:?}",
            self.doc.title()
        );
        self
    }

    /// Assert the number of elements in the body
    pub fn element_count(self, expected: usize) -> Self {
        assert_count(&self.elements(), expected, "body", "elements");
        self
    }

    /// Assert on a specific body element by index
    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        with_child(&self.elements(), index, format!("body[{}]", index), assertion);
        self
    }

    /// Comments right after `#HAI`
    pub fn comment_count(self, expected: usize) -> Self {
        let actual = self.doc.comments.len();
        assert_eq!(
            actual, expected,
            "Expected {} document comments, found {}",
            expected, actual
        );
        self
    }

    /// Comments left before `#KTHXBYE`
    pub fn trailing_comment_count(self, expected: usize) -> Self {
        let actual = self.doc.body.trailing_comments.len();
        assert_eq!(
            actual, expected,
            "Expected {} trailing body comments, found {}",
            expected, actual
        );
        self
    }

    /// Assert the document location starts at the given line and column
    pub fn location_starts_at(self, line: usize, column: usize) -> Self {
        let start = self.doc.location.start;
        assert_eq!(
            (start.line, start.column),
            (line, column),
            "Expected document to start at {}:{}, found {}:{}",
            line,
            column,
            start.line,
            start.column
        );
        self
    }
}
