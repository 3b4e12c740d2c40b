//! Output formats for lolmark documents
//!
//! Every AST format implements [Formatter] and is registered in [FormatRegistry] by name:
//!
//! - `treeviz`: one line per node with Unicode icons. See [treeviz](treeviz).
//! - `json`: the [AstSnapshot](crate::lolmark::ast::AstSnapshot) as pretty JSON. See [json](json).
//! - `lolmark`: canonical dialect source, parseable again. See [lolmark](lolmark).
//!
//! Token-level output (detokenizing, token dumps) lives in
//! [token::formatting](crate::lolmark::token::formatting) since it works below the AST.

pub mod json;
pub mod lolmark;
pub mod registry;
pub mod treeviz;

pub use json::{to_json_str, JsonFormatter};
pub use self::lolmark::{to_lolmark_str, LolmarkFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_params, TreevizFormatter};
