//! # lolmark
//!
//! A parser for the lolmark document dialect.
//!
//! lolmark documents are plain text marked up with hashed, case-insensitive keywords borrowed
//! from LOLCODE: `#HAI` opens a document, `#MAEK PARAGRAF` opens a paragraph, `#GIMMEH BOLD`
//! emphasises a run of text, `#I HAZ x #IT IZ value #MKAY` binds a variable and
//! `#LEMME SEE x #MKAY` substitutes it.
//!
//! File Layout
//!
//! The crate follows the stages of the pipeline, leaf first:
//!
//! src/lolmark
//!   ├── token        Token kinds (logos) and token formatting
//!   ├── lexing       Base tokenization and the whitespace filter
//!   ├── parsing      Recursive descent parser, one procedure per production
//!   ├── resolution   Scope tables and variable substitution
//!   ├── ast          The document model, visitor, snapshots and errors
//!   ├── formats      Serializers (treeviz, json, lolmark source)
//!   ├── pipeline     Wires the stages together
//!   └── testing      Assertion API and fixture loader used by the test suites
//!
//! For comprehensive testing guidelines, see the [testing module](lolmark::testing).

pub mod lolmark;
