//! Assertions for payload constructs: bold, italics, audio, video and raw text

use crate::lolmark::testing::matchers::TextMatch;

pub struct LeafAssertion<'a> {
    pub(crate) text: &'a str,
    pub(crate) context: String,
}

impl LeafAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::Prefix(prefix.to_string()).assert(self.text, &self.context);
        self
    }

    /// Compares word by word, for raw text that was broken across source lines
    pub fn text_words(self, expected: &str) -> Self {
        TextMatch::Words(expected.to_string()).assert(self.text, &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Containing(substring.to_string()).assert(self.text, &self.context);
        self
    }
}
