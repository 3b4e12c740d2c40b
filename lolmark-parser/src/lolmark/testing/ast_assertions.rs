//! Fluent assertion API for AST nodes
//!
//!     Tests that walk the tree by hand are verbose and break whenever a node changes shape.
//!     The assertions here hide the node layout behind semantic methods (`.text()`,
//!     `.item_count()`, `.resolved_to()`), so a change to the AST only touches this module.
//!
//!     Each step carries a context string such as `body[2].items[0].children[1]` that shows
//!     up in failure messages.
//!
//! Usage Example
//!
//!     ```rust,ignore
//!     assert_ast(&doc)
//!         .element_count(2)
//!         .element(0, |el| {
//!             el.assert_list()
//!                 .define(|d| {
//!                     d.name("cat").value("Tom");
//!                 })
//!                 .item(0, |item| {
//!                     item.text("Tom");
//!                 });
//!         })
//!         .element(1, |el| {
//!             el.assert_variable_use().unresolved();
//!         });
//!     ```

mod assertions;

pub use assertions::{
    DocumentAssertion, LeafAssertion, ListAssertion, ListItemAssertion, ParagraphAssertion,
    VariableDefineAssertion, VariableUseAssertion,
};

use crate::lolmark::ast::{Document, ElementRef};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

/// Assertions over any element, dispatching to the element-specific builders
pub struct ElementAssertion<'a> {
    pub(crate) element: ElementRef<'a>,
    pub(crate) context: String,
}

impl<'a> ElementAssertion<'a> {
    fn wrong_kind(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.element.node_type()
        )
    }

    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.element.node_type(),
            expected,
            "{}: Expected node type {}, found {}",
            self.context,
            expected,
            self.element.node_type()
        );
        self
    }

    /// Assert the number of comments attached in front of the element
    pub fn comment_count(self, expected: usize) -> Self {
        let actual = self.element.comments().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} comments, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn comment(self, index: usize, expected: &str) -> Self {
        let comments = self.element.comments();
        assert!(
            index < comments.len(),
            "{}: Comment index {} out of bounds ({} comments)",
            self.context,
            index,
            comments.len()
        );
        assert_eq!(
            comments[index].text, expected,
            "{}: comments[{}] text mismatch",
            self.context, index
        );
        self
    }

    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.element {
            ElementRef::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            _ => self.wrong_kind("Paragraph"),
        }
    }

    pub fn assert_list(self) -> ListAssertion<'a> {
        match self.element {
            ElementRef::List(list) => ListAssertion {
                list,
                context: self.context,
            },
            _ => self.wrong_kind("List"),
        }
    }

    pub fn assert_bold(self) -> LeafAssertion<'a> {
        self.leaf("Bold")
    }

    pub fn assert_italics(self) -> LeafAssertion<'a> {
        self.leaf("Italics")
    }

    pub fn assert_audio(self) -> LeafAssertion<'a> {
        self.leaf("Audio")
    }

    pub fn assert_video(self) -> LeafAssertion<'a> {
        self.leaf("Video")
    }

    pub fn assert_raw_text(self) -> LeafAssertion<'a> {
        self.leaf("RawText")
    }

    pub fn assert_newline(self) {
        if !matches!(self.element, ElementRef::Newline(_)) {
            self.wrong_kind("Newline");
        }
    }

    pub fn assert_variable_define(self) -> VariableDefineAssertion<'a> {
        match self.element {
            ElementRef::VariableDefine(define) => VariableDefineAssertion {
                define,
                context: self.context,
            },
            _ => self.wrong_kind("VariableDefine"),
        }
    }

    pub fn assert_variable_use(self) -> VariableUseAssertion<'a> {
        match self.element {
            ElementRef::VariableUse(usage) => VariableUseAssertion {
                usage,
                context: self.context,
            },
            _ => self.wrong_kind("VariableUse"),
        }
    }

    fn leaf(self, expected: &'static str) -> LeafAssertion<'a> {
        if self.element.node_type() != expected {
            self.wrong_kind(expected);
        }
        let text = self.element.text().unwrap_or_default();
        LeafAssertion {
            text,
            context: self.context,
        }
    }
}
