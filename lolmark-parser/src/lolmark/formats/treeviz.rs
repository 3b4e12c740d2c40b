//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST. It features a one line per node format, which
//! enables quick scanning of the tree, with the nesting drawn by box connectors.
//!
//! So the format is :
//! <line number>? <connectors>(per level) <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//!     ⧉ My Doc (1 element(s))
//!     ├─ ⊤ My Doc
//!     ├─ " about the list
//!     └─ ☰ 1 item(s)
//!       ├─ ≔ x = world
//!       └─ • hello world
//!         ├─ ◦ hello
//!         └─ $ x -> world
//!
//! Icons
//!     Document: ⧉
//!     Head: ⊤
//!     Comment: "
//!     Paragraph: ¶
//!     List: ☰
//!     ListItem: •
//!     Bold: 𝐁
//!     Italics: 𝐼
//!     Audio: ♪
//!     Video: ▶
//!     Newline: ↵
//!     VariableDefine: ≔
//!     VariableUse: $
//!     RawText: ◦
//!
//! Parameters
//!     show-linum: prefix every node with the 1-based line it starts on.

use super::registry::{FormatError, Formatter};
use crate::lolmark::ast::{snapshot_from_document, AstSnapshot, Document};
use std::collections::HashMap;

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Head" => "⊤",
        "Comment" => "\"",
        "Paragraph" => "¶",
        "List" => "☰",
        "ListItem" => "•",
        "Bold" => "𝐁",
        "Italics" => "𝐼",
        "Audio" => "♪",
        "Video" => "▶",
        "Newline" => "↵",
        "VariableDefine" => "≔",
        "VariableUse" => "$",
        "RawText" => "◦",
        _ => "○",
    }
}

fn node_line(snapshot: &AstSnapshot) -> String {
    let line = format!(
        "{} {}",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, LABEL_WIDTH)
    );
    line.trim_end().to_string()
}

fn linum(snapshot: &AstSnapshot, show_linum: bool) -> String {
    match (&snapshot.range, show_linum) {
        (Some(range), true) => format!("{:02} ", range.start.line + 1),
        _ => String::new(),
    }
}

/// Build treeviz output from an AstSnapshot
fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{}{} {}\n",
        linum(snapshot, show_linum),
        prefix,
        connector,
        node_line(snapshot)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == child_count, show_linum, output);
    }
}

fn format_document_snapshot(snapshot: &AstSnapshot, show_linum: bool) -> String {
    let mut output = format!("{}{}\n", linum(snapshot, show_linum), node_line(snapshot));

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == child_count, show_linum, &mut output);
    }

    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

pub fn to_treeviz_str_with_params(doc: &Document, params: &HashMap<String, String>) -> String {
    let show_linum = params
        .get("show-linum")
        .map(|v| v != "false")
        .unwrap_or(false);

    let snapshot = snapshot_from_document(doc);
    format_document_snapshot(&snapshot, show_linum)
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_params(
        &self,
        doc: &Document,
        params: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_params(doc, params))
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors and Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lolmark::parsing::parse_document;

    #[test]
    fn test_treeviz_connectors() {
        let doc = parse_document(
            "#HAI #MAEK PARAGRAF hi #GIMMEH NEWLINE #OIC #GIMMEH BOLD loud #MKAY #KTHXBYE",
        )
        .expect("parses");

        assert_eq!(
            to_treeviz_str(&doc),
            "⧉ (2 element(s))\n├─ ¶ 2 element(s)\n│ ├─ ◦ hi\n│ └─ ↵\n└─ 𝐁 loud\n"
        );
    }

    #[test]
    fn test_treeviz_line_numbers() {
        let doc = parse_document("#HAI\n#GIMMEH BOLD hi #MKAY\n#KTHXBYE").expect("parses");
        let mut params = HashMap::new();
        params.insert("show-linum".to_string(), "true".to_string());

        assert_eq!(
            to_treeviz_str_with_params(&doc, &params),
            "01 ⧉ (1 element(s))\n02 └─ 𝐁 hi\n"
        );
    }

    #[test]
    fn test_long_labels_are_truncated() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
