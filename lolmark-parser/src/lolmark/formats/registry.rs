//! Named output formats
//!
//! Every serializer implements [Formatter] and is looked up by name in a [FormatRegistry].
//! The executor and the CLI only ever go through the registry, so adding a format means
//! registering it in [FormatRegistry::with_defaults].

use crate::lolmark::ast::Document;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// A document serializer
pub trait Formatter: Send + Sync {
    /// Registry key, also accepted by `--format`
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// Serialize with format specific parameters. Formats without parameters ignore them.
    fn serialize_with_params(
        &self,
        doc: &Document,
        _params: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.serialize(doc)
    }

    fn description(&self) -> &str {
        ""
    }
}

/// Formatters by name. Names iterate in sorted order.
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Treeviz, json and lolmark source
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::LolmarkFormatter);
        registry
    }

    /// Add a formatter, replacing any registered under the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        self.formatters.insert(name, Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(Box::as_ref)
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.serialize_with_params(doc, format, &HashMap::new())
    }

    pub fn serialize_with_params(
        &self,
        doc: &Document,
        format: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        match self.get(format) {
            Some(formatter) => formatter.serialize_with_params(doc, params),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    /// Registered names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        self.formatters.keys().cloned().collect()
    }

    /// `(name, description)` pairs, sorted by name
    pub fn describe(&self) -> Vec<(String, String)> {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.clone(), formatter.description().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    #[test]
    fn test_registry_register_and_serialize() {
        let mut registry = FormatRegistry::empty();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(
            registry.serialize(&Document::new(), "test"),
            Ok("test output".to_string())
        );
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::empty();
        assert_eq!(
            registry.serialize(&Document::new(), "nonexistent"),
            Err(FormatError::FormatNotFound("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_default_formats() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["json", "lolmark", "treeviz"]);
        assert!(registry
            .describe()
            .iter()
            .all(|(_, description)| !description.is_empty()));
    }
}
