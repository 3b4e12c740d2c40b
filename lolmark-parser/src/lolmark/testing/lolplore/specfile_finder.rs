//! Spec file finder.
//!
//! Resolves a conceptual description ("paragraph sample #3") to a file path under
//! `$WORKSPACE/specs/<version>/`.
//!
//! Sample files are prefixed by a number, which can take forms like `001-`, `01-` or `1-`.
//! The finder splits each file name on dashes and takes the first part that parses as a
//! number. Two files resolving to the same number in one directory is a broken corpus and
//! panics.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::lolmark::testing::workspace_path;

const SPEC_VERSION: &str = "v1";
const SPECS_ROOT: &str = "specs";
const SPEC_EXTENSION: &str = "lol";

/// Element types that can be loaded from the per-element library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Paragraph,
    List,
    Emphasis,
    Media,
    Variable,
    Comment,
}

/// Document collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    /// Complete documents exercising several constructs at once
    Scenario,
    /// Documents that must be rejected
    Invalid,
}

impl ElementType {
    pub fn dir_name(&self) -> &'static str {
        match self {
            ElementType::Paragraph => "paragraph",
            ElementType::List => "list",
            ElementType::Emphasis => "emphasis",
            ElementType::Media => "media",
            ElementType::Variable => "variable",
            ElementType::Comment => "comment",
        }
    }
}

impl DocumentType {
    pub fn dir_name(&self) -> &'static str {
        match self {
            DocumentType::Scenario => "scenarios",
            DocumentType::Invalid => "invalid",
        }
    }
}

/// Errors that can occur when finding spec files
#[derive(Debug, Clone, Error)]
pub enum SpecFileError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for SpecFileError {
    fn from(err: std::io::Error) -> Self {
        SpecFileError::IoError(err.to_string())
    }
}

/// Get the doc root path for a category and optional subcategory
///
/// ```ignore
/// get_doc_root("elements", Some("paragraph")) -> "specs/v1/elements/paragraph"
/// get_doc_root("scenarios", None) -> "specs/v1/scenarios"
/// ```
pub fn get_doc_root(category: &str, subcategory: Option<&str>) -> PathBuf {
    let mut path = workspace_path(SPECS_ROOT);
    path.push(SPEC_VERSION);
    path.push(category);
    if let Some(subcat) = subcategory {
        path.push(subcat);
    }
    path
}

/// List all sample files in a directory by their number prefix
///
/// # Panics
/// Panics if duplicate numbers are found (critical error in the sample corpus)
pub fn list_files_by_number(dir: &Path) -> Result<HashMap<usize, PathBuf>, SpecFileError> {
    let mut number_map: HashMap<usize, PathBuf> = HashMap::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SPEC_EXTENSION) {
            continue;
        }
        let Some(number) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|name| name.split('-').find_map(|part| part.parse::<usize>().ok()))
        else {
            continue;
        };
        if let Some(existing) = number_map.get(&number) {
            panic!(
                "Duplicate sample number {} in {}:\n- {}\n- {}",
                number,
                dir.display(),
                existing.display(),
                path.display()
            );
        }
        number_map.insert(number, path);
    }

    Ok(number_map)
}

/// Find a spec file by category, subcategory and number
pub fn find_specfile_by_number(
    category: &str,
    subcategory: Option<&str>,
    number: usize,
) -> Result<PathBuf, SpecFileError> {
    let dir = get_doc_root(category, subcategory);
    let mut number_map = list_files_by_number(&dir)?;

    number_map.remove(&number).ok_or_else(|| {
        SpecFileError::FileNotFound(format!(
            "No file with number {} found in {}",
            number,
            dir.display()
        ))
    })
}

/// List all available numbers for a given category/subcategory, sorted
pub fn list_available_numbers(
    category: &str,
    subcategory: Option<&str>,
) -> Result<Vec<usize>, SpecFileError> {
    let dir = get_doc_root(category, subcategory);
    let mut numbers: Vec<usize> = list_files_by_number(&dir)?.into_keys().collect();
    numbers.sort_unstable();
    Ok(numbers)
}

pub fn find_element_file(
    element_type: ElementType,
    number: usize,
) -> Result<PathBuf, SpecFileError> {
    find_specfile_by_number("elements", Some(element_type.dir_name()), number)
}

pub fn find_document_file(doc_type: DocumentType, number: usize) -> Result<PathBuf, SpecFileError> {
    find_specfile_by_number(doc_type.dir_name(), None, number)
}

pub fn list_element_numbers(element_type: ElementType) -> Result<Vec<usize>, SpecFileError> {
    list_available_numbers("elements", Some(element_type.dir_name()))
}

pub fn list_document_numbers(doc_type: DocumentType) -> Result<Vec<usize>, SpecFileError> {
    list_available_numbers(doc_type.dir_name(), None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_root_layout() {
        let root = get_doc_root("elements", Some("list"));
        assert!(root.ends_with("specs/v1/elements/list"));
    }

    #[test]
    fn test_every_element_directory_has_samples() {
        for element_type in [
            ElementType::Paragraph,
            ElementType::List,
            ElementType::Emphasis,
            ElementType::Media,
            ElementType::Variable,
            ElementType::Comment,
        ] {
            let numbers = list_element_numbers(element_type).unwrap();
            assert!(numbers.contains(&1), "{:?} has no sample #1", element_type);
        }
    }

    #[test]
    fn test_missing_number_is_reported() {
        let err = find_element_file(ElementType::Paragraph, 999).unwrap_err();
        assert!(matches!(err, SpecFileError::FileNotFound(_)));
    }
}
