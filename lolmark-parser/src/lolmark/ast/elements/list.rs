//! List element
//!
//!     #MAEK LIST
//!         #GIMMEH ITEM first #MKAY
//!         #GIMMEH ITEM second, #GIMMEH BOLD loud #MKAY #MKAY
//!     #OIC
//!
//! A list holds items only, plus an optional define scoped to the list. An item holds text,
//! bold, italics and variable uses; an item cannot be empty. A list with no items is valid.

use super::super::range::Range;
use super::super::traits::{visit_comments, AstNode, Visitor};
use super::comment::Comment;
use super::content::ItemElement;
use super::variable::VariableDefine;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct List {
    pub define: Option<VariableDefine>,
    /// Number of items written before the define in the source
    pub define_index: usize,
    pub items: Vec<ListItem>,
    pub comments: Vec<Comment>,
    pub trailing_comments: Vec<Comment>,
    pub location: Range,
}

impl List {
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            items,
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

    /// Places the define after the first `index` items
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
}

impl AstNode for List {
    fn node_type(&self) -> &'static str {
        "List"
    }

    fn display_label(&self) -> String {
        format!("{} item(s)", self.items.len())
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_list(self);
        if let Some(define) = &self.define {
            define.accept(visitor);
        }
        for item in &self.items {
            item.accept(visitor);
        }
        visit_comments(visitor, &self.trailing_comments);
        visitor.leave_list(self);
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({} items)", self.items.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListItem {
    pub children: Vec<ItemElement>,
    pub comments: Vec<Comment>,
    /// Comments after the last child, before the item's `#MKAY`
    pub trailing_comments: Vec<Comment>,
    pub location: Range,
}

impl ListItem {
    pub fn new(children: Vec<ItemElement>) -> Self {
        Self {
            children,
            ..Default::default()
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

    pub fn with_trailing_comments(mut self, comments: Vec<Comment>) -> Self {
        self.trailing_comments = comments;
        self
    }

    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(ItemElement::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        "ListItem"
    }

    fn display_label(&self) -> String {
        super::label_text(&self.text())
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_list_item(self);
        for child in &self.children {
            child.accept(visitor);
        }
        visit_comments(visitor, &self.trailing_comments);
        visitor.leave_list_item(self);
    }
}
