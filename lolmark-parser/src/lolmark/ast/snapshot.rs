//! AST Snapshot - a normalized intermediate representation of the AST tree
//!
//! This module provides a canonical, format-agnostic representation of the AST
//! suitable for serialization to any output format (JSON, treeviz, etc.)
//!
//! The snapshot captures the complete tree structure with node types, labels,
//! attributes, and children - allowing each serializer to focus solely on
//! presentation without reimplementing AST traversal logic.
//!
//! ## Building Snapshots
//!
//! All serializers consume the output of `snapshot_from_document()` rather than walking the
//! tree themselves. Nodes appear in visitor order: attached comments come right before the
//! element they precede, block defines come before block content.
//!
//! Snapshots are also the unit of structural comparison: two documents are structurally equal
//! when their snapshots are equal with locations left out (see [SnapshotOptions]).

use super::elements::{Comment, Document, ElementRef};
use super::range::Range;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Paragraph", "Bold", "List")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,

    /// Child nodes in the tree
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            range: None,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, itself included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(AstSnapshot::node_count).sum::<usize>()
    }
}

/// What a snapshot records besides structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub include_comments: bool,
    pub include_locations: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            include_locations: true,
        }
    }
}

impl SnapshotOptions {
    /// Structure and payloads only
    pub fn structural() -> Self {
        Self {
            include_comments: false,
            include_locations: false,
        }
    }
}

// ============================================================================
// Snapshot Building Functions
// ============================================================================

/// Build a snapshot for the whole document
pub fn snapshot_from_document(doc: &Document) -> AstSnapshot {
    snapshot_from_document_with_options(doc, SnapshotOptions::default())
}

/// Build a snapshot for the whole document with options for controlling what's included
///
/// The body is flattened: its elements appear as direct children of the Document.
pub fn snapshot_from_document_with_options(
    doc: &Document,
    options: SnapshotOptions,
) -> AstSnapshot {
    let mut snapshot = base_snapshot(doc, options);

    push_comments(&mut snapshot.children, &doc.comments, options);
    if let Some(head) = &doc.head {
        push_element(&mut snapshot.children, ElementRef::Head(head), options);
    }
    for element in doc.elements() {
        push_element(&mut snapshot.children, element.as_element(), options);
    }
    push_comments(&mut snapshot.children, &doc.body.trailing_comments, options);

    snapshot
}

/// Build a snapshot of one element and its subtree. Attached comments are not included.
pub fn snapshot_from_element(element: ElementRef<'_>, options: SnapshotOptions) -> AstSnapshot {
    let mut snapshot = base_snapshot(element.node(), options);

    match element {
        ElementRef::Head(head) => {
            snapshot = snapshot.with_attribute("title", &head.title);
            push_comments(&mut snapshot.children, &head.comments, options);
        }
        ElementRef::Comment(comment) => snapshot = snapshot.with_attribute("text", &comment.text),
        ElementRef::Bold(bold) => snapshot = snapshot.with_attribute("text", &bold.text),
        ElementRef::Italics(italics) => {
            snapshot = snapshot.with_attribute("text", &italics.text)
        }
        ElementRef::Audio(audio) => snapshot = snapshot.with_attribute("source", &audio.source),
        ElementRef::Video(video) => snapshot = snapshot.with_attribute("source", &video.source),
        ElementRef::RawText(text) => snapshot = snapshot.with_attribute("text", &text.text),
        ElementRef::VariableDefine(define) => {
            snapshot = snapshot
                .with_attribute("name", &define.name)
                .with_attribute("value", &define.value)
        }
        ElementRef::VariableUse(var) => {
            snapshot = snapshot.with_attribute("name", &var.name);
            if let Some(value) = var.value() {
                snapshot = snapshot.with_attribute("resolved", value);
            }
        }
        ElementRef::Paragraph(_)
        | ElementRef::List(_)
        | ElementRef::ListItem(_)
        | ElementRef::Newline(_) => {}
    }

    for child in element.children() {
        push_element(&mut snapshot.children, child, options);
    }
    push_comments(&mut snapshot.children, element.trailing_comments(), options);

    snapshot
}

fn base_snapshot(node: &dyn AstNode, options: SnapshotOptions) -> AstSnapshot {
    let mut snapshot = AstSnapshot::new(node.node_type().to_string(), node.display_label());
    if options.include_locations {
        snapshot.range = Some(node.range().clone());
    }
    snapshot
}

fn push_element(out: &mut Vec<AstSnapshot>, element: ElementRef<'_>, options: SnapshotOptions) {
    push_comments(out, element.comments(), options);
    out.push(snapshot_from_element(element, options));
}

fn push_comments(out: &mut Vec<AstSnapshot>, comments: &[Comment], options: SnapshotOptions) {
    if !options.include_comments {
        return;
    }
    for comment in comments {
        out.push(snapshot_from_element(ElementRef::Comment(comment), options));
    }
}
