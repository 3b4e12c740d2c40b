//! Variable resolution
//!
//!     Variables are bound in two passes over a parsed document:
//!
//!         1. Collection. Every scope-owning node gets a [VariableTable] in document order:
//!            the body first, then each paragraph and list. A table records the scope's define
//!            and points at its parent (always the body, as blocks do not nest).
//!
//!         2. Substitution. The tree is rebuilt with each `VariableUse` bound to the text of the
//!            innermost visible define. Lookups walk from the use's own scope outward.
//!
//!     Collection completes before substitution starts, so a use may precede its define inside
//!     the same scope. The parsed tree is never modified: resolution returns a new `Document`.
//!
//!     Unbound uses are collected across the whole document and returned together, unless
//!     fail-fast was requested, in which case the first one stops the pass.

pub mod resolver;
pub mod scope;

pub use resolver::{resolve, resolve_with_options, ResolveOptions, Resolver};
pub use scope::{Binding, ScopeId, ScopeTree, VariableTable};
