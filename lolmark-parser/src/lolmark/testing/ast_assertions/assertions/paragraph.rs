//! Paragraph assertions

use super::{assert_count, with_child};
use crate::lolmark::ast::{ElementRef, Paragraph};
use crate::lolmark::testing::ast_assertions::{ElementAssertion, VariableDefineAssertion};
use crate::lolmark::testing::matchers::TextMatch;

pub struct ParagraphAssertion<'a> {
    pub(crate) para: &'a Paragraph,
    pub(crate) context: String,
}

impl<'a> ParagraphAssertion<'a> {
    fn children(&self) -> Vec<ElementRef<'a>> {
        self.para.children.iter().map(|c| c.as_element()).collect()
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.para.text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Containing(substring.to_string()).assert(&self.para.text(), &self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_count(&self.children(), expected, &self.context, "children");
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ElementAssertion<'a>),
    {
        let context = format!("{}.children[{}]", self.context, index);
        with_child(&self.children(), index, context, assertion);
        self
    }

    pub fn define<F>(self, assertion: F) -> Self
    where
        F: FnOnce(VariableDefineAssertion<'a>),
    {
        match &self.para.define {
            Some(define) => assertion(VariableDefineAssertion {
                define,
                context: format!("{}.define", self.context),
            }),
            None => panic!("{}: Expected a define, found none", self.context),
        }
        self
    }

    pub fn no_define(self) -> Self {
        assert!(
            self.para.define.is_none(),
            "{}: Expected no define, found {:?}",
            self.context,
            self.para.define
        );
        self
    }

    pub fn trailing_comment_count(self, expected: usize) -> Self {
        let actual = self.para.trailing_comments.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} trailing comments, found {}",
            self.context, expected, actual
        );
        self
    }
}
