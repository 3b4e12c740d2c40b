//! Typed content unions
//!
//! Each container accepts a fixed set of children, and the set is encoded in the type of its
//! child vector so invalid nesting cannot be built:
//!
//! | Container | Child type      | Children                                                       |
//! |-----------|-----------------|----------------------------------------------------------------|
//! | Body      | `BodyElement`   | paragraph, list, bold, italics, audio, video, newline, define, use, text |
//! | Paragraph | `InlineElement` | bold, italics, audio, video, newline, use, text                |
//! | ListItem  | `ItemElement`   | bold, italics, use, text                                       |
//!
//! Paragraph and list defines live in their container's `define` field rather than among the
//! children. The body keeps its define in line, in document order.
//!
//! [ElementRef] is a borrowed view over any node below the document, used by the snapshot
//! builder and the assertion helpers to walk the tree without matching on three enums.

use super::super::range::Range;
use super::super::traits::{AstNode, Visitor};
use super::{
    Audio, Bold, Comment, Head, Italics, List, ListItem, Newline, Paragraph, RawText,
    VariableDefine, VariableUse, Video,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Bold(Bold),
    Italics(Italics),
    List(List),
    Audio(Audio),
    Video(Video),
    Newline(Newline),
    VariableDefine(VariableDefine),
    VariableUse(VariableUse),
    RawText(RawText),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineElement {
    Bold(Bold),
    Italics(Italics),
    Audio(Audio),
    Video(Video),
    Newline(Newline),
    VariableUse(VariableUse),
    RawText(RawText),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemElement {
    Bold(Bold),
    Italics(Italics),
    VariableUse(VariableUse),
    RawText(RawText),
}

/// Borrowed view over any node below the document
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    Head(&'a Head),
    Comment(&'a Comment),
    Paragraph(&'a Paragraph),
    List(&'a List),
    ListItem(&'a ListItem),
    Bold(&'a Bold),
    Italics(&'a Italics),
    Audio(&'a Audio),
    Video(&'a Video),
    Newline(&'a Newline),
    VariableDefine(&'a VariableDefine),
    VariableUse(&'a VariableUse),
    RawText(&'a RawText),
}

impl<'a> ElementRef<'a> {
    pub fn node(&self) -> &'a dyn AstNode {
        match *self {
            ElementRef::Head(node) => node,
            ElementRef::Comment(node) => node,
            ElementRef::Paragraph(node) => node,
            ElementRef::List(node) => node,
            ElementRef::ListItem(node) => node,
            ElementRef::Bold(node) => node,
            ElementRef::Italics(node) => node,
            ElementRef::Audio(node) => node,
            ElementRef::Video(node) => node,
            ElementRef::Newline(node) => node,
            ElementRef::VariableDefine(node) => node,
            ElementRef::VariableUse(node) => node,
            ElementRef::RawText(node) => node,
        }
    }

    pub fn node_type(&self) -> &'static str {
        self.node().node_type()
    }

    pub fn range(&self) -> &'a Range {
        self.node().range()
    }

    /// Comments attached in front of the element
    pub fn comments(&self) -> &'a [Comment] {
        match *self {
            ElementRef::Head(_) | ElementRef::Comment(_) => &[],
            ElementRef::Paragraph(node) => &node.comments,
            ElementRef::List(node) => &node.comments,
            ElementRef::ListItem(node) => &node.comments,
            ElementRef::Bold(node) => &node.comments,
            ElementRef::Italics(node) => &node.comments,
            ElementRef::Audio(node) => &node.comments,
            ElementRef::Video(node) => &node.comments,
            ElementRef::Newline(node) => &node.comments,
            ElementRef::VariableDefine(node) => &node.comments,
            ElementRef::VariableUse(node) => &node.comments,
            ElementRef::RawText(node) => &node.comments,
        }
    }

    /// Comments left after the last child of a block
    pub fn trailing_comments(&self) -> &'a [Comment] {
        match *self {
            ElementRef::Head(node) => &node.trailing_comments,
            ElementRef::Paragraph(node) => &node.trailing_comments,
            ElementRef::List(node) => &node.trailing_comments,
            ElementRef::ListItem(node) => &node.trailing_comments,
            _ => &[],
        }
    }

    /// Structural children in document order: the define first, then the content
    pub fn children(&self) -> Vec<ElementRef<'a>> {
        match *self {
            ElementRef::Paragraph(para) => para
                .define
                .iter()
                .map(ElementRef::VariableDefine)
                .chain(para.children.iter().map(InlineElement::as_element))
                .collect(),
            ElementRef::List(list) => list
                .define
                .iter()
                .map(ElementRef::VariableDefine)
                .chain(list.items.iter().map(ElementRef::ListItem))
                .collect(),
            ElementRef::ListItem(item) => item
                .children
                .iter()
                .map(ItemElement::as_element)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Payload text of leaf elements; resolved uses report their bound text
    pub fn text(&self) -> Option<&'a str> {
        match *self {
            ElementRef::Head(node) => Some(node.title.as_str()),
            ElementRef::Comment(node) => Some(node.text.as_str()),
            ElementRef::Bold(node) => Some(node.text.as_str()),
            ElementRef::Italics(node) => Some(node.text.as_str()),
            ElementRef::Audio(node) => Some(node.source.as_str()),
            ElementRef::Video(node) => Some(node.source.as_str()),
            ElementRef::VariableDefine(node) => Some(node.value.as_str()),
            ElementRef::VariableUse(node) => node.value(),
            ElementRef::RawText(node) => Some(node.text.as_str()),
            ElementRef::Paragraph(_) | ElementRef::List(_) | ElementRef::ListItem(_) => None,
            ElementRef::Newline(_) => None,
        }
    }
}

impl BodyElement {
    pub fn as_element(&self) -> ElementRef<'_> {
        match self {
            BodyElement::Paragraph(node) => ElementRef::Paragraph(node),
            BodyElement::Bold(node) => ElementRef::Bold(node),
            BodyElement::Italics(node) => ElementRef::Italics(node),
            BodyElement::List(node) => ElementRef::List(node),
            BodyElement::Audio(node) => ElementRef::Audio(node),
            BodyElement::Video(node) => ElementRef::Video(node),
            BodyElement::Newline(node) => ElementRef::Newline(node),
            BodyElement::VariableDefine(node) => ElementRef::VariableDefine(node),
            BodyElement::VariableUse(node) => ElementRef::VariableUse(node),
            BodyElement::RawText(node) => ElementRef::RawText(node),
        }
    }

    pub fn node_type(&self) -> &'static str {
        self.as_element().node_type()
    }

    pub fn comments(&self) -> &[Comment] {
        self.as_element().comments()
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        self.as_element().node().accept(visitor)
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            BodyElement::Paragraph(para) => Some(para),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            BodyElement::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_variable_use(&self) -> Option<&VariableUse> {
        match self {
            BodyElement::VariableUse(var) => Some(var),
            _ => None,
        }
    }
}

impl InlineElement {
    pub fn as_element(&self) -> ElementRef<'_> {
        match self {
            InlineElement::Bold(node) => ElementRef::Bold(node),
            InlineElement::Italics(node) => ElementRef::Italics(node),
            InlineElement::Audio(node) => ElementRef::Audio(node),
            InlineElement::Video(node) => ElementRef::Video(node),
            InlineElement::Newline(node) => ElementRef::Newline(node),
            InlineElement::VariableUse(node) => ElementRef::VariableUse(node),
            InlineElement::RawText(node) => ElementRef::RawText(node),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.as_element().text()
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        self.as_element().node().accept(visitor)
    }
}

impl ItemElement {
    pub fn as_element(&self) -> ElementRef<'_> {
        match self {
            ItemElement::Bold(node) => ElementRef::Bold(node),
            ItemElement::Italics(node) => ElementRef::Italics(node),
            ItemElement::VariableUse(node) => ElementRef::VariableUse(node),
            ItemElement::RawText(node) => ElementRef::RawText(node),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.as_element().text()
    }

    pub fn accept(&self, visitor: &mut dyn Visitor) {
        self.as_element().node().accept(visitor)
    }
}

impl From<InlineElement> for BodyElement {
    fn from(element: InlineElement) -> Self {
        match element {
            InlineElement::Bold(node) => BodyElement::Bold(node),
            InlineElement::Italics(node) => BodyElement::Italics(node),
            InlineElement::Audio(node) => BodyElement::Audio(node),
            InlineElement::Video(node) => BodyElement::Video(node),
            InlineElement::Newline(node) => BodyElement::Newline(node),
            InlineElement::VariableUse(node) => BodyElement::VariableUse(node),
            InlineElement::RawText(node) => BodyElement::RawText(node),
        }
    }
}
