//! Canonical lolmark source
//!
//! Writes a document back as dialect source that parses to the same tree. The output is
//! normalized: keywords in upper case, one block or construct per line, two spaces of
//! indentation per nesting level. List items are written on a single line.
//!
//! Variable uses are always written as `#LEMME SEE`, resolved or not, so the output resolves
//! the same way the input did. Comments are kept, in the position they were attached to. A
//! block's define is written between the same siblings it was read between: moving it would
//! join two text runs that it separated into one.

use super::registry::{FormatError, Formatter};
use crate::lolmark::ast::{
    BodyElement, Comment, Document, Head, InlineElement, ItemElement, List, ListItem, Paragraph,
    VariableDefine, VariableUse,
};
use crate::lolmark::token::{ToLolString, TokenKind};

const INDENT: &str = "  ";

fn kw(kind: TokenKind) -> String {
    kind.to_lol_string()
}

/// Serialize a document to canonical lolmark source
pub fn to_lolmark_str(doc: &Document) -> String {
    let mut writer = SourceWriter::default();
    writer.document(doc);
    writer.output
}

#[derive(Default)]
struct SourceWriter {
    output: String,
    depth: usize,
}

impl SourceWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn comments(&mut self, comments: &[Comment]) {
        for comment in comments {
            let line = comment_source(comment);
            self.line(&line);
        }
    }

    /// A block's define goes back where it was read, between the same two siblings
    fn define(&mut self, define: Option<&VariableDefine>) {
        if let Some(define) = define {
            self.comments(&define.comments);
            self.line(&define_source(define));
        }
    }

    fn document(&mut self, doc: &Document) {
        self.line(&kw(TokenKind::Hai));
        self.depth += 1;
        self.comments(&doc.comments);
        if let Some(head) = &doc.head {
            self.head(head);
        }
        for element in doc.elements() {
            self.body_element(element);
        }
        self.comments(&doc.body.trailing_comments);
        self.depth -= 1;
        self.line(&kw(TokenKind::Kthxbye));
    }

    fn head(&mut self, head: &Head) {
        self.line(&format!("{} {}", kw(TokenKind::Maek), kw(TokenKind::Head)));
        self.depth += 1;
        self.comments(&head.comments);
        self.line(&payload(TokenKind::Title, &head.title));
        self.comments(&head.trailing_comments);
        self.depth -= 1;
        self.line(&kw(TokenKind::Oic));
    }

    fn body_element(&mut self, element: &BodyElement) {
        self.comments(element.comments());
        match element {
            BodyElement::Paragraph(para) => self.paragraph(para),
            BodyElement::List(list) => self.list(list),
            BodyElement::VariableDefine(define) => self.line(&define_source(define)),
            BodyElement::Bold(bold) => self.line(&payload(TokenKind::Bold, &bold.text)),
            BodyElement::Italics(italics) => {
                self.line(&payload(TokenKind::Italics, &italics.text))
            }
            BodyElement::Audio(audio) => self.line(&payload(TokenKind::Soundz, &audio.source)),
            BodyElement::Video(video) => self.line(&payload(TokenKind::Vidz, &video.source)),
            BodyElement::Newline(_) => self.line(&newline_source()),
            BodyElement::VariableUse(var) => self.line(&use_source(var)),
            BodyElement::RawText(text) => self.line(&text.text),
        }
    }

    fn paragraph(&mut self, para: &Paragraph) {
        self.line(&format!("{} {}", kw(TokenKind::Maek), kw(TokenKind::Paragraf)));
        self.depth += 1;
        for (index, child) in para.children.iter().enumerate() {
            if index == para.define_index {
                self.define(para.define.as_ref());
            }
            self.comments(child.as_element().comments());
            self.line(&inline_source(child));
        }
        if para.define_index >= para.children.len() {
            self.define(para.define.as_ref());
        }
        self.comments(&para.trailing_comments);
        self.depth -= 1;
        self.line(&kw(TokenKind::Oic));
    }

    fn list(&mut self, list: &List) {
        self.line(&format!("{} {}", kw(TokenKind::Maek), kw(TokenKind::List)));
        self.depth += 1;
        for (index, item) in list.items.iter().enumerate() {
            if index == list.define_index {
                self.define(list.define.as_ref());
            }
            self.comments(&item.comments);
            self.line(&item_source(item));
        }
        if list.define_index >= list.items.len() {
            self.define(list.define.as_ref());
        }
        self.comments(&list.trailing_comments);
        self.depth -= 1;
        self.line(&kw(TokenKind::Oic));
    }
}

fn comment_source(comment: &Comment) -> String {
    if comment.text.is_empty() {
        format!("{} {}", kw(TokenKind::Obtw), kw(TokenKind::Tldr))
    } else {
        format!(
            "{} {} {}",
            kw(TokenKind::Obtw),
            comment.text,
            kw(TokenKind::Tldr)
        )
    }
}

fn payload(kind: TokenKind, text: &str) -> String {
    format!(
        "{} {} {} {}",
        kw(TokenKind::Gimmeh),
        kw(kind),
        text,
        kw(TokenKind::Mkay)
    )
}

fn newline_source() -> String {
    format!("{} {}", kw(TokenKind::Gimmeh), kw(TokenKind::Newline))
}

fn define_source(define: &VariableDefine) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        kw(TokenKind::I),
        kw(TokenKind::Haz),
        define.name,
        kw(TokenKind::It),
        kw(TokenKind::Iz),
        define.value,
        kw(TokenKind::Mkay)
    )
}

fn use_source(var: &VariableUse) -> String {
    format!(
        "{} {} {} {}",
        kw(TokenKind::Lemme),
        kw(TokenKind::See),
        var.name,
        kw(TokenKind::Mkay)
    )
}

fn inline_source(element: &InlineElement) -> String {
    match element {
        InlineElement::Bold(bold) => payload(TokenKind::Bold, &bold.text),
        InlineElement::Italics(italics) => payload(TokenKind::Italics, &italics.text),
        InlineElement::Audio(audio) => payload(TokenKind::Soundz, &audio.source),
        InlineElement::Video(video) => payload(TokenKind::Vidz, &video.source),
        InlineElement::Newline(_) => newline_source(),
        InlineElement::VariableUse(var) => use_source(var),
        InlineElement::RawText(text) => text.text.clone(),
    }
}

fn item_source(item: &ListItem) -> String {
    let mut parts = vec![format!("{} {}", kw(TokenKind::Gimmeh), kw(TokenKind::Item))];
    for child in &item.children {
        parts.extend(child.as_element().comments().iter().map(comment_source));
        parts.push(match child {
            ItemElement::Bold(bold) => payload(TokenKind::Bold, &bold.text),
            ItemElement::Italics(italics) => payload(TokenKind::Italics, &italics.text),
            ItemElement::VariableUse(var) => use_source(var),
            ItemElement::RawText(text) => text.text.clone(),
        });
    }
    parts.extend(item.trailing_comments.iter().map(comment_source));
    parts.push(kw(TokenKind::Mkay));
    parts.join(" ")
}

pub struct LolmarkFormatter;

impl Formatter for LolmarkFormatter {
    fn name(&self) -> &str {
        "lolmark"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_lolmark_str(doc))
    }

    fn description(&self) -> &str {
        "Canonical lolmark source"
    }
}
