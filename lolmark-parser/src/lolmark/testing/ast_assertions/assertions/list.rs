//! List and list item assertions

use super::{assert_count, with_child};
use crate::lolmark::ast::{ElementRef, List, ListItem};
use crate::lolmark::testing::ast_assertions::{ElementAssertion, VariableDefineAssertion};
use crate::lolmark::testing::matchers::TextMatch;

pub struct ListAssertion<'a> {
    pub(crate) list: &'a List,
    pub(crate) context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} list items, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        assert!(
            index < self.list.items.len(),
            "{}: Item index {} out of bounds ({} items)",
            self.context,
            index,
            self.list.items.len()
        );
        assertion(ListItemAssertion {
            item: &self.list.items[index],
            context: format!("{}.items[{}]", self.context, index),
        });
        self
    }

    pub fn define<F>(self, assertion: F) -> Self
    where
        F: FnOnce(VariableDefineAssertion<'a>),
    {
        match &self.list.define {
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
            self.list.define.is_none(),
            "{}: Expected no define, found {:?}",
            self.context,
            self.list.define
        );
        self
    }
}

pub struct ListItemAssertion<'a> {
    pub(crate) item: &'a ListItem,
    pub(crate) context: String,
}

impl<'a> ListItemAssertion<'a> {
    fn children(&self) -> Vec<ElementRef<'a>> {
        self.item.children.iter().map(|c| c.as_element()).collect()
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.item.text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::Prefix(prefix.to_string()).assert(&self.item.text(), &self.context);
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

    pub fn comment_count(self, expected: usize) -> Self {
        let actual = self.item.comments.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} comments, found {}",
            self.context, expected, actual
        );
        self
    }
}
