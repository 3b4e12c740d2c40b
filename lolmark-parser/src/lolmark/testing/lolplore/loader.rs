//! File loading, parsing and tokenization for the sample corpus

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::specfile_finder::{self, DocumentType, ElementType, SpecFileError};
use crate::lolmark::ast::{Document, Error, List, Paragraph};
use crate::lolmark::pipeline::Pipeline;
use crate::lolmark::token::Token;

/// Errors that can occur when loading samples
#[derive(Debug, Clone, Error)]
pub enum ElementSourceError {
    #[error(transparent)]
    SpecFile(#[from] SpecFileError),
}

/// Fluent API builder for loading elements or documents
pub struct ElementLoader {
    source_type: SourceType,
    number: usize,
}

#[derive(Debug)]
enum SourceType {
    Element(ElementType),
    Document(DocumentType),
    Path(PathBuf),
}

impl ElementLoader {
    /// Get the file path for this loader
    pub fn path(&self) -> PathBuf {
        let found = match &self.source_type {
            SourceType::Element(element_type) => {
                specfile_finder::find_element_file(*element_type, self.number)
            }
            SourceType::Document(doc_type) => {
                specfile_finder::find_document_file(*doc_type, self.number)
            }
            SourceType::Path(path) => Ok(path.clone()),
        };
        found.unwrap_or_else(|e| {
            panic!(
                "Failed to find {:?} #{}: {}",
                self.source_type, self.number, e
            )
        })
    }

    /// Get the raw source string
    pub fn source(&self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Run the full pipeline, returning the outcome instead of panicking
    pub fn try_parse(&self) -> Result<Document, Error> {
        Pipeline::new().run(&self.source())
    }

    /// Parse and resolve the sample
    pub fn parse(&self) -> Document {
        self.try_parse()
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", self.path().display(), e))
    }

    /// Parse without the resolution pass
    pub fn parse_unresolved(&self) -> Document {
        Pipeline::new()
            .parse_unresolved(&self.source())
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", self.path().display(), e))
    }

    /// Raw token stream, whitespace included
    pub fn tokenize(&self) -> Vec<Token> {
        Pipeline::new().tokenize(&self.source())
    }
}

macro_rules! element_shortcuts {
    ($($name:ident => $variant:ident, $label:literal);* $(;)?) => {
        $(
            #[doc = concat!("Load a ", $label, " sample (fluent API for tokenization/parsing)")]
            pub fn $name(number: usize) -> ElementLoader {
                Self::load(ElementType::$variant, number)
            }
        )*
    };
}

macro_rules! document_shortcuts {
    ($($name:ident => $variant:ident, $label:literal);* $(;)?) => {
        $(
            #[doc = concat!("Load a ", $label, " document (fluent API)")]
            pub fn $name(number: usize) -> ElementLoader {
                Self::load_document(DocumentType::$variant, number)
            }
        )*
    };
}

/// Interface for loading verified lolmark samples
pub struct Lolplore;

impl Lolplore {
    pub fn load(element_type: ElementType, number: usize) -> ElementLoader {
        ElementLoader {
            source_type: SourceType::Element(element_type),
            number,
        }
    }

    pub fn load_document(doc_type: DocumentType, number: usize) -> ElementLoader {
        ElementLoader {
            source_type: SourceType::Document(doc_type),
            number,
        }
    }

    pub fn from_path<P: Into<PathBuf>>(path: P) -> ElementLoader {
        ElementLoader {
            source_type: SourceType::Path(path.into()),
            number: 0,
        }
    }

    element_shortcuts! {
        paragraph => Paragraph, "paragraph";
        list => List, "list";
        emphasis => Emphasis, "emphasis";
        media => Media, "media";
        variable => Variable, "variable";
        comment => Comment, "comment";
    }

    document_shortcuts! {
        scenario => Scenario, "scenario";
        invalid => Invalid, "invalid";
    }

    /// Load a paragraph sample and return its first paragraph
    pub fn get_paragraph(number: usize) -> &'static Paragraph {
        let doc: &'static Document = Box::leak(Box::new(Self::paragraph(number).parse()));
        doc.elements()
            .iter()
            .find_map(|element| element.as_paragraph())
            .unwrap_or_else(|| panic!("paragraph sample #{} holds no paragraph", number))
    }

    /// Load a list sample and return its first list
    pub fn get_list(number: usize) -> &'static List {
        let doc: &'static Document = Box::leak(Box::new(Self::list(number).parse()));
        doc.elements()
            .iter()
            .find_map(|element| element.as_list())
            .unwrap_or_else(|| panic!("list sample #{} holds no list", number))
    }

    pub fn list_numbers_for(element_type: ElementType) -> Result<Vec<usize>, ElementSourceError> {
        Ok(specfile_finder::list_element_numbers(element_type)?)
    }

    pub fn list_document_numbers(
        doc_type: DocumentType,
    ) -> Result<Vec<usize>, ElementSourceError> {
        Ok(specfile_finder::list_document_numbers(doc_type)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lolmark::testing::workspace_path;
    use crate::lolmark::token::TokenKind;

    #[test]
    fn test_list_numbers_for_paragraphs() {
        let numbers = Lolplore::list_numbers_for(ElementType::Paragraph).unwrap();
        assert!(numbers.contains(&1));
    }

    #[test]
    fn test_get_paragraph() {
        let paragraph = Lolplore::get_paragraph(1);
        assert!(!paragraph.children.is_empty());
    }

    #[test]
    fn test_get_list() {
        let list = Lolplore::get_list(1);
        assert!(!list.items.is_empty());
    }

    #[test]
    fn test_tokenize_sample() {
        let tokens = Lolplore::paragraph(1).tokenize();
        assert_eq!(tokens.first().map(|t| t.kind), Some(TokenKind::Hai));
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_every_scenario_parses() {
        for number in Lolplore::list_document_numbers(DocumentType::Scenario).unwrap() {
            Lolplore::scenario(number).parse();
        }
    }

    #[test]
    fn test_every_invalid_sample_fails() {
        for number in Lolplore::list_document_numbers(DocumentType::Invalid).unwrap() {
            assert!(
                Lolplore::invalid(number).try_parse().is_err(),
                "invalid sample #{} parsed",
                number
            );
        }
    }

    #[test]
    fn test_from_path_source() {
        let path = workspace_path("specs/v1/elements/paragraph/01-plain-text.lol");
        let source = Lolplore::from_path(path).source();
        assert!(source.starts_with("#HAI"));
    }
}
