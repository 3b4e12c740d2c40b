//! Processing pipeline for the lolmark dialect
//!
//! The pipeline executes four sequential transformations. Each stage consumes the previous
//! stage's output and never modifies it:
//!
//! 1. **Base Tokenization** - Raw lexical analysis using logos
//! 2. **Whitespace Filtering** - Drop whitespace-channel tokens
//! 3. **Parsing** - Build the AST with the recursive descent parser
//! 4. **Resolution** - Bind every variable use to its innermost define
//!
//! # Usage
//!
//! ```rust,ignore
//! use lolmark_parser::lolmark::pipeline::Pipeline;
//!
//! let doc = Pipeline::new().run("#HAI #GIMMEH BOLD hi #MKAY #KTHXBYE")?;
//! ```
//!
//! Use [`PipelineExecutor`] when the result should be serialized, as the CLI does.
//!
//! A pipeline holds no state between runs; independent pipelines may run on separate threads.

use crate::lolmark::ast::{Document, Error};
use crate::lolmark::lexing::{filter_whitespace, tokenize};
use crate::lolmark::parsing::Parser;
use crate::lolmark::resolution::{resolve_with_options, ResolveOptions};
use crate::lolmark::token::Token;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod executor;
pub use executor::{ExecutionError, PipelineExecutor, TOKENS_FORMAT};

/// Behaviour switches for a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Stop resolution at the first error
    pub fail_fast: bool,
    /// Run the resolution stage; when off, uses are left unresolved
    pub resolve: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            fail_fast: false,
            resolve: true,
        }
    }
}

/// The core processing pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Raw token stream, whitespace included, ending with the end-of-input token
    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        tokenize(source)
    }

    /// Lex and parse, leaving uses unresolved
    pub fn parse_unresolved(&self, source: &str) -> Result<Document, Error> {
        let raw = tokenize(source);
        let raw_count = raw.len();
        let tokens = filter_whitespace(raw);
        debug!(
            raw = raw_count,
            significant = tokens.len(),
            "tokenized source"
        );
        Ok(Parser::from_tokens(source, tokens).parse()?)
    }

    /// Execute the complete pipeline on source text.
    pub fn run(&self, source: &str) -> Result<Document, Error> {
        let document = self.parse_unresolved(source)?;
        if !self.options.resolve {
            return Ok(document);
        }

        let options = ResolveOptions {
            fail_fast: self.options.fail_fast,
        };
        let resolved = resolve_with_options(&document, options)?;
        debug!(elements = resolved.body.len(), "resolved document");
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lolmark::ast::ErrorKind;

    #[test]
    fn test_run_resolves_uses() {
        let doc = Pipeline::new()
            .run("#HAI #I HAZ x #IT IZ world #MKAY #LEMME SEE x #MKAY #KTHXBYE")
            .expect("pipeline succeeds");
        let var = doc.elements()[1].as_variable_use().expect("use");
        assert_eq!(var.value(), Some("world"));
    }

    #[test]
    fn test_resolution_can_be_skipped() {
        let options = PipelineOptions {
            resolve: false,
            ..Default::default()
        };
        let doc = Pipeline::with_options(options)
            .run("#HAI #LEMME SEE nobody #MKAY #KTHXBYE")
            .expect("unresolved parse succeeds");
        let var = doc.elements()[0].as_variable_use().expect("use");
        assert!(!var.is_resolved());
    }

    #[test]
    fn test_parse_errors_come_before_resolution() {
        let error = Pipeline::new()
            .run("#HAI #LEMME SEE y #MKAY #MAEK PARAGRAF")
            .expect_err("fails");
        assert_eq!(error.kind(), ErrorKind::UnterminatedBlock);
    }

    #[test]
    fn test_fail_fast_reports_one_error() {
        let source = "#HAI #LEMME SEE a #MKAY #LEMME SEE b #MKAY #KTHXBYE";
        let all = Pipeline::new().run(source).expect_err("unbound");
        assert_eq!(all.kinds().len(), 2);

        let options = PipelineOptions {
            fail_fast: true,
            ..Default::default()
        };
        let first = Pipeline::with_options(options)
            .run(source)
            .expect_err("unbound");
        assert_eq!(first.kinds(), vec![ErrorKind::UnresolvedVariable]);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: PipelineOptions =
            serde_json::from_str(r#"{"fail_fast": true}"#).expect("valid options");
        assert!(options.fail_fast);
        assert!(options.resolve);
    }
}
