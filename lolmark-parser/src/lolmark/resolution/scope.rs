//! Scope tables
//!
//! One [VariableTable] per scope-owning node, stored flat in a [ScopeTree] and addressed by
//! [ScopeId]. The body is always scope 0; paragraphs and lists follow in document order.

use crate::lolmark::ast::{Range, ScopeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub usize);

impl ScopeId {
    pub const BODY: ScopeId = ScopeId(0);
}

/// A name bound by a define
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub value: String,
    /// Location of the define
    pub location: Range,
}

/// The define slot of one scope. Every scope holds at most one define, whatever its name.
#[derive(Debug, Clone)]
pub struct VariableTable {
    pub scope: ScopeKind,
    pub parent: Option<ScopeId>,
    pub location: Range,
    define: Option<(String, Binding)>,
}

impl VariableTable {
    pub fn new(scope: ScopeKind, parent: Option<ScopeId>, location: Range) -> Self {
        Self {
            scope,
            parent,
            location,
            define: None,
        }
    }

    /// Fill the define slot. If it is already taken, by any name, the existing binding is
    /// returned and the table is left as it was.
    pub fn bind(&mut self, name: &str, binding: Binding) -> Result<(), Binding> {
        match &self.define {
            Some((_, existing)) => Err(existing.clone()),
            None => {
                self.define = Some((name.to_string(), binding));
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.define
            .as_ref()
            .filter(|(bound, _)| bound == name)
            .map(|(_, binding)| binding)
    }

    /// Name bound in this scope, if any
    pub fn name(&self) -> Option<&str> {
        self.define.as_ref().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        usize::from(self.define.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.define.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ScopeTree {
    tables: Vec<VariableTable>,
}

impl ScopeTree {
    /// A tree holding only the body scope
    pub fn new(body_location: Range) -> Self {
        Self {
            tables: vec![VariableTable::new(ScopeKind::Body, None, body_location)],
        }
    }

    pub fn push(&mut self, table: VariableTable) -> ScopeId {
        self.tables.push(table);
        ScopeId(self.tables.len() - 1)
    }

    pub fn table(&self, id: ScopeId) -> Option<&VariableTable> {
        self.tables.get(id.0)
    }

    pub fn table_mut(&mut self, id: ScopeId) -> Option<&mut VariableTable> {
        self.tables.get_mut(id.0)
    }

    /// Innermost binding of `name` visible from `scope`
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let table = self.table(id)?;
            if let Some(binding) = table.get(name) {
                return Some(binding);
            }
            current = table.parent;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &VariableTable)> {
        self.tables
            .iter()
            .enumerate()
            .map(|(index, table)| (ScopeId(index), table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(value: &str) -> Binding {
        Binding {
            value: value.to_string(),
            location: Range::default(),
        }
    }

    #[test]
    fn test_inner_scope_shadows_outer() {
        let mut tree = ScopeTree::new(Range::default());
        let inner = tree.push(VariableTable::new(
            ScopeKind::Paragraph,
            Some(ScopeId::BODY),
            Range::default(),
        ));
        let other = tree.push(VariableTable::new(
            ScopeKind::List,
            Some(ScopeId::BODY),
            Range::default(),
        ));

        tree.table_mut(ScopeId::BODY)
            .expect("body")
            .bind("x", binding("outer"))
            .expect("first bind");
        tree.table_mut(inner)
            .expect("inner")
            .bind("x", binding("inner"))
            .expect("first bind");
        tree.table_mut(other)
            .expect("other")
            .bind("y", binding("list only"))
            .expect("first bind");

        assert_eq!(tree.lookup(inner, "x").map(|b| b.value.as_str()), Some("inner"));
        assert_eq!(tree.lookup(ScopeId::BODY, "x").map(|b| b.value.as_str()), Some("outer"));
        assert_eq!(tree.lookup(other, "x").map(|b| b.value.as_str()), Some("outer"));
        assert!(tree.lookup(inner, "y").is_none());
        assert!(tree.lookup(inner, "z").is_none());
    }

    #[test]
    fn test_rebinding_in_same_table_is_rejected() {
        let mut table = VariableTable::new(ScopeKind::List, None, Range::default());
        assert!(table.bind("a", binding("1")).is_ok());
        assert_eq!(table.bind("a", binding("2")), Err(binding("1")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_second_define_with_another_name_is_rejected() {
        let mut table = VariableTable::new(ScopeKind::Body, None, Range::default());
        table.bind("a", binding("1")).expect("bind");
        assert_eq!(table.bind("b", binding("2")), Err(binding("1")));
        assert_eq!(table.name(), Some("a"));
        assert!(table.get("b").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut table = VariableTable::new(ScopeKind::Body, None, Range::default());
        table.bind("Name", binding("1")).expect("bind");
        assert!(table.get("name").is_none());
    }
}
