//! AST Assertion Modules
//!
//! This module contains element-specific assertion types organized by element type.

mod document;
mod leaf;
mod list;
mod paragraph;
mod variable;

pub use document::DocumentAssertion;
pub use leaf::LeafAssertion;
pub use list::{ListAssertion, ListItemAssertion};
pub use paragraph::ParagraphAssertion;
pub use variable::{VariableDefineAssertion, VariableUseAssertion};

use super::ElementAssertion;
use crate::lolmark::ast::ElementRef;

pub(super) fn summarize_elements(elements: &[ElementRef<'_>]) -> String {
    elements
        .iter()
        .map(|element| element.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Bounds-check `index` and hand the element to `assertion` with an extended context
pub(super) fn with_child<'a, F>(
    elements: &[ElementRef<'a>],
    index: usize,
    context: String,
    assertion: F,
) where
    F: FnOnce(ElementAssertion<'a>),
{
    assert!(
        index < elements.len(),
        "{}: Index {} out of bounds ({} elements: [{}])",
        context,
        index,
        elements.len(),
        summarize_elements(elements)
    );
    assertion(ElementAssertion {
        element: elements[index],
        context,
    });
}

pub(super) fn assert_count(
    elements: &[ElementRef<'_>],
    expected: usize,
    context: &str,
    what: &str,
) {
    assert_eq!(
        elements.len(),
        expected,
        "{}: Expected {} {}, found {}: [{}]",
        context,
        expected,
        what,
        elements.len(),
        summarize_elements(elements)
    );
}
