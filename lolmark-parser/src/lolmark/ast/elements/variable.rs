//! Variables
//!
//! A define binds a name to text in the scope that owns it (the body, a paragraph or a list):
//!
//!     #I HAZ <name> #IT IZ <value> #MKAY
//!
//! A use refers to the nearest visible binding:
//!
//!     #LEMME SEE <name> #MKAY
//!
//! Names are case-sensitive. The parser leaves every use unresolved; the resolver produces a new
//! tree where each use carries the bound text.

use super::super::range::Range;
use super::super::traits::{visit_comments, AstNode, Visitor};
use super::comment::Comment;
use super::label_text;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefine {
    pub name: String,
    pub value: String,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl VariableDefine {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
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

impl AstNode for VariableDefine {
    fn node_type(&self) -> &'static str {
        "VariableDefine"
    }

    fn display_label(&self) -> String {
        format!("{} = {}", self.name, label_text(&self.value))
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_variable_define(self);
        visitor.leave_variable_define(self);
    }
}

impl fmt::Display for VariableDefine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableDefine({} = '{}')", self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableUse {
    pub name: String,
    /// Bound text, filled in by the resolver
    pub resolved: Option<String>,
    pub comments: Vec<Comment>,
    pub location: Range,
}

impl VariableUse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolved: None,
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

    pub fn resolved_to(mut self, value: impl Into<String>) -> Self {
        self.resolved = Some(value.into());
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.resolved.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

impl AstNode for VariableUse {
    fn node_type(&self) -> &'static str {
        "VariableUse"
    }

    fn display_label(&self) -> String {
        match &self.resolved {
            Some(value) => format!("{} -> {}", self.name, label_text(value)),
            None => format!("{} (unresolved)", self.name),
        }
    }

    fn range(&self) -> &Range {
        &self.location
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visit_comments(visitor, &self.comments);
        visitor.visit_variable_use(self);
        visitor.leave_variable_use(self);
    }
}

impl fmt::Display for VariableUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VariableUse({})", self.name)
    }
}
