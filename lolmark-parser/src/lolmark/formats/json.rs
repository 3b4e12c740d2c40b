//! JSON output
//!
//! The document's [AstSnapshot](crate::lolmark::ast::AstSnapshot), pretty printed with
//! serde_json. Ranges are included so tools can map nodes back to the source.

use super::registry::{FormatError, Formatter};
use crate::lolmark::ast::{snapshot_from_document, Document};

pub fn to_json_str(doc: &Document) -> Result<String, FormatError> {
    serde_json::to_string_pretty(&snapshot_from_document(doc))
        .map_err(|err| FormatError::SerializationError(err.to_string()))
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json_str(doc)
    }

    fn description(&self) -> &str {
        "AST snapshot as pretty printed JSON"
    }
}
