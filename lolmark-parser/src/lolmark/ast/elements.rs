//! Element-specific AST node definitions for the lolmark dialect
//!
//!     This module defines all AST element types. Every element stores its source `location`
//!     and, except for comments themselves, the comments that preceded it.
//!
//! Element Types
//!
//!     Blocks:
//!         Opened by `#MAEK` and closed by `#OIC`. Blocks own a variable scope.
//!         See [paragraph](paragraph) and [list](list). The head block is part of the
//!         [document](document).
//!
//!     Payload constructs:
//!         Opened by `#GIMMEH <KIND>` and closed by `#MKAY`, carrying a text payload.
//!         See [emphasis](emphasis) and [media](media). `#GIMMEH NEWLINE` has no payload and no
//!         closer, see [text](text).
//!
//!     Variables:
//!         Defines and uses. See [variable](variable).
//!
//!     Comments:
//!         `#OBTW … #TLDR`. See [comment](comment).
//!
//!     Which element may appear where is encoded by the typed unions in [content](content).

pub mod comment;
pub mod content;
pub mod document;
pub mod emphasis;
pub mod list;
pub mod media;
pub mod paragraph;
pub mod text;
pub mod variable;

pub use comment::Comment;
pub use content::{BodyElement, ElementRef, InlineElement, ItemElement};
pub use document::{Body, Document, Head};
pub use emphasis::{Bold, Italics};
pub use list::{List, ListItem};
pub use media::{Audio, Video};
pub use paragraph::Paragraph;
pub use text::{Newline, RawText};
pub use variable::{VariableDefine, VariableUse};

const LABEL_LIMIT: usize = 50;

/// Text shortened for one-line displays
pub(crate) fn label_text(text: &str) -> String {
    if text.chars().count() > LABEL_LIMIT {
        format!("{}…", text.chars().take(LABEL_LIMIT).collect::<String>())
    } else {
        text.to_string()
    }
}
