//! Testing utilities for AST assertions
//!
//!     This module provides the testing tools used across the lolmark parser tests.
//!
//! Why Testing is Different
//!
//!     lolmark is a small dialect with no body of real-world documents and no reference parser
//!     to compare against. A test source made up on the spot is easy to get slightly wrong
//!     (a missing `#MKAY`, a `#OIC` closing the wrong block), and a parser tuned against wrong
//!     sources ends up wrong itself.
//!
//!     Tests therefore follow two rules:
//!
//!         1. Use the verified sample files under `specs/v1/` (via [Lolplore](lolplore))
//!         2. Check trees with the fluent assertions (via [assert_ast](fn@assert_ast))
//!
//!     Inline sources are still fine for error cases and for sources generated by property
//!     tests, where the point is the malformed or arbitrary input itself.
//!
//! Example
//!
//!     ```rust,ignore
//!     use lolmark_parser::lolmark::testing::{assert_ast, lolplore::Lolplore};
//!
//!     let doc = Lolplore::paragraph(1).parse();
//!     assert_ast(&doc)
//!         .title("Kitteh Notes")
//!         .element(0, |el| {
//!             el.assert_paragraph()
//!                 .child_count(2)
//!                 .child(0, |child| {
//!                     child.assert_raw_text().text("can has");
//!                 });
//!         });
//!     ```

mod ast_assertions;
pub mod lolplore;
mod matchers;

pub use ast_assertions::{
    assert_ast, DocumentAssertion, ElementAssertion, LeafAssertion, ListAssertion,
    ListItemAssertion, ParagraphAssertion, VariableDefineAssertion, VariableUseAssertion,
};
pub use matchers::TextMatch;

/// Get a path relative to the workspace root for testing purposes.
///
/// `CARGO_MANIFEST_DIR` points to `lolmark-parser/`; fixtures live one level up.
pub fn workspace_path(relative_path: &str) -> std::path::PathBuf {
    let manifest_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .join(relative_path)
}
