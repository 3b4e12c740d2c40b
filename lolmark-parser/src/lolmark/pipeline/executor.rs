//! Pipeline executor: run the pipeline and serialize the result

use super::{Pipeline, PipelineOptions};
use crate::lolmark::ast::{Document, Error};
use crate::lolmark::formats::{FormatError, FormatRegistry};
use crate::lolmark::token::tokens_to_json;
use std::collections::HashMap;
use thiserror::Error;

/// Name of the token dump output, served outside the AST format registry
pub const TOKENS_FORMAT: &str = "tokens";

/// Errors during pipeline execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Pipeline(#[from] Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("token serialization failed: {0}")]
    Tokens(#[from] serde_json::Error),
}

/// Runs a [Pipeline] and hands the document to a registered format
pub struct PipelineExecutor {
    pipeline: Pipeline,
    registry: FormatRegistry,
}

impl PipelineExecutor {
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        Self {
            pipeline: Pipeline::with_options(options),
            registry: FormatRegistry::with_defaults(),
        }
    }

    pub fn with_registry(mut self, registry: FormatRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn execute(&self, source: &str) -> Result<Document, Error> {
        self.pipeline.run(source)
    }

    /// Every output name accepted by [PipelineExecutor::execute_and_serialize]
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats = self.registry.list_formats();
        formats.push(TOKENS_FORMAT.to_string());
        formats.sort();
        formats
    }

    pub fn execute_and_serialize(
        &self,
        source: &str,
        format: &str,
    ) -> Result<String, ExecutionError> {
        self.execute_and_serialize_with_params(source, format, &HashMap::new())
    }

    /// Run the pipeline and serialize. The `tokens` format dumps the raw token stream and
    /// does not parse at all.
    pub fn execute_and_serialize_with_params(
        &self,
        source: &str,
        format: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, ExecutionError> {
        if format == TOKENS_FORMAT {
            return Ok(tokens_to_json(&self.pipeline.tokenize(source))?);
        }
        if !self.registry.has(format) {
            return Err(FormatError::FormatNotFound(format.to_string()).into());
        }
        let document = self.pipeline.run(source)?;
        Ok(self
            .registry
            .serialize_with_params(&document, format, params)?)
    }
}

impl Default for PipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lolmark::ast::ErrorKind;

    #[test]
    fn test_unknown_format_fails_before_parsing() {
        let executor = PipelineExecutor::new();
        let error = executor
            .execute_and_serialize("not even a document", "html")
            .expect_err("unknown format");
        assert!(matches!(
            error,
            ExecutionError::Format(FormatError::FormatNotFound(name)) if name == "html"
        ));
    }

    #[test]
    fn test_tokens_format_does_not_parse() {
        let executor = PipelineExecutor::new();
        let output = executor
            .execute_and_serialize("#HAI unterminated", "tokens")
            .expect("tokens never fail");
        assert!(output.contains("\"Hai\""));
    }

    #[test]
    fn test_pipeline_errors_pass_through() {
        let executor = PipelineExecutor::new();
        match executor.execute_and_serialize("#HAI #LEMME SEE y #MKAY #KTHXBYE", "treeviz") {
            Err(ExecutionError::Pipeline(error)) => {
                assert_eq!(error.kind(), ErrorKind::UnresolvedVariable)
            }
            other => panic!("expected a pipeline error, got {:?}", other),
        }
    }

    #[test]
    fn test_available_formats() {
        assert_eq!(
            PipelineExecutor::new().available_formats(),
            vec!["json", "lolmark", "tokens", "treeviz"]
        );
    }
}
