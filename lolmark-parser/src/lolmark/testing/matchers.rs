//! Expectations on the text a node carries
//!
//! Raw text is sliced straight from the source, so a run that spans lines keeps its newlines
//! and indentation. [TextMatch::Words] compares word by word for those cases.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    Prefix(String),
    Containing(String),
    /// Same words in the same order, whatever whitespace separates them
    Words(String),
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_ascii_whitespace()
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::Prefix(prefix) => actual.starts_with(prefix.as_str()),
            TextMatch::Containing(needle) => actual.contains(needle.as_str()),
            TextMatch::Words(expected) => words(actual).eq(words(expected)),
        }
    }

    /// Panics naming the node at `path` when `actual` does not match
    pub fn assert(&self, actual: &str, path: &str) {
        assert!(
            self.matches(actual),
            "{path}: expected text {self}, got {actual:?}"
        );
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(expected) => write!(f, "{expected:?}"),
            TextMatch::Prefix(prefix) => write!(f, "starting with {prefix:?}"),
            TextMatch::Containing(needle) => write!(f, "containing {needle:?}"),
            TextMatch::Words(expected) => write!(f, "with the words {expected:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_ignore_source_layout() {
        let sliced = "can has\n    cheezburger";
        assert!(TextMatch::Words("can has cheezburger".into()).matches(sliced));
        assert!(!TextMatch::Exact("can has cheezburger".into()).matches(sliced));
        assert!(!TextMatch::Words("can has".into()).matches(sliced));
    }

    #[test]
    fn test_prefix_and_containing() {
        assert!(TextMatch::Prefix("oh".into()).matches("oh hai"));
        assert!(TextMatch::Containing("h h".into()).matches("oh hai"));
        assert!(!TextMatch::Prefix("hai".into()).matches("oh hai"));
    }

    #[test]
    #[should_panic(expected = "body[0]: expected text starting with \"kthx\", got \"oh hai\"")]
    fn test_assert_names_the_node() {
        TextMatch::Prefix("kthx".into()).assert("oh hai", "body[0]");
    }
}
