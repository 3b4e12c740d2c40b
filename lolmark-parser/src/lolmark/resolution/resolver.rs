//! Two-pass variable resolver

use super::scope::{Binding, ScopeId, ScopeTree, VariableTable};
use crate::lolmark::ast::{
    Body, BodyElement, Document, InlineElement, ItemElement, List, ListItem, Paragraph,
    ResolveError, ResolveErrors, ScopeKind, VariableDefine, VariableUse,
};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Stop at the first resolution error instead of collecting all of them
    pub fail_fast: bool,
}

/// Resolve every variable use, collecting all errors
pub fn resolve(document: &Document) -> Result<Document, ResolveErrors> {
    Resolver::new(ResolveOptions::default()).resolve(document)
}

pub fn resolve_with_options(
    document: &Document,
    options: ResolveOptions,
) -> Result<Document, ResolveErrors> {
    Resolver::new(options).resolve(document)
}

/// Raised internally when fail-fast stops the walk
struct Halt;

type Step<T> = Result<T, Halt>;

pub struct Resolver {
    options: ResolveOptions,
    errors: Vec<ResolveError>,
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
        }
    }

    /// Run both passes. Returns the new tree, or every error recorded.
    pub fn resolve(mut self, document: &Document) -> Result<Document, ResolveErrors> {
        let outcome = match self.collect(document) {
            Ok(tree) => self.substitute(document, &tree),
            Err(halt) => Err(halt),
        };

        match outcome {
            Ok(resolved) if self.errors.is_empty() => Ok(resolved),
            _ => {
                debug!(errors = self.errors.len(), "variable resolution failed");
                Err(ResolveErrors(self.errors))
            }
        }
    }

    /// Build the scope tree of `document` without substituting anything
    pub fn scopes(document: &Document) -> Result<ScopeTree, ResolveErrors> {
        let mut resolver = Resolver::new(ResolveOptions::default());
        match resolver.collect(document) {
            Ok(tree) if resolver.errors.is_empty() => Ok(tree),
            _ => Err(ResolveErrors(resolver.errors)),
        }
    }

    // ------------------------------------------------------------------
    // Collection pass
    // ------------------------------------------------------------------

    fn collect(&mut self, document: &Document) -> Step<ScopeTree> {
        let mut tree = ScopeTree::new(document.body.location.clone());

        for element in document.elements() {
            match element {
                BodyElement::VariableDefine(define) => {
                    self.bind(&mut tree, ScopeId::BODY, define)?
                }
                BodyElement::Paragraph(para) => {
                    let id = tree.push(VariableTable::new(
                        ScopeKind::Paragraph,
                        Some(ScopeId::BODY),
                        para.location.clone(),
                    ));
                    if let Some(define) = &para.define {
                        self.bind(&mut tree, id, define)?;
                    }
                }
                BodyElement::List(list) => {
                    let id = tree.push(VariableTable::new(
                        ScopeKind::List,
                        Some(ScopeId::BODY),
                        list.location.clone(),
                    ));
                    if let Some(define) = &list.define {
                        self.bind(&mut tree, id, define)?;
                    }
                }
                _ => {}
            }
        }

        debug!(scopes = tree.len(), "collected variable scopes");
        Ok(tree)
    }

    fn bind(
        &mut self,
        tree: &mut ScopeTree,
        scope: ScopeId,
        define: &VariableDefine,
    ) -> Step<()> {
        let binding = Binding {
            value: define.value.clone(),
            location: define.location.clone(),
        };
        let Some(table) = tree.table_mut(scope) else {
            return Ok(());
        };
        let kind = table.scope;
        if let Err(first) = table.bind(&define.name, binding) {
            self.record(ResolveError::DuplicateVariableDefine {
                name: define.name.clone(),
                scope: kind,
                first: first.location,
                location: define.location.clone(),
            })?;
        }
        trace!(name = %define.name, scope = %kind, "bound variable");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Substitution pass
    // ------------------------------------------------------------------

    /// Walks the body in the same order as [Resolver::collect], so the n-th block met is
    /// scope n.
    fn substitute(&mut self, document: &Document, tree: &ScopeTree) -> Step<Document> {
        let mut next_scope = 1;
        let mut elements = Vec::with_capacity(document.body.len());

        for element in document.elements() {
            let resolved = match element {
                BodyElement::Paragraph(para) => {
                    let scope = ScopeId(next_scope);
                    next_scope += 1;
                    BodyElement::Paragraph(self.paragraph(para, scope, tree)?)
                }
                BodyElement::List(list) => {
                    let scope = ScopeId(next_scope);
                    next_scope += 1;
                    BodyElement::List(self.list(list, scope, tree)?)
                }
                BodyElement::VariableUse(var) => {
                    BodyElement::VariableUse(self.bind_use(var, ScopeId::BODY, tree)?)
                }
                other => other.clone(),
            };
            elements.push(resolved);
        }

        Ok(Document {
            head: document.head.clone(),
            body: Body {
                elements,
                trailing_comments: document.body.trailing_comments.clone(),
                location: document.body.location.clone(),
            },
            comments: document.comments.clone(),
            location: document.location.clone(),
        })
    }

    fn paragraph(
        &mut self,
        para: &Paragraph,
        scope: ScopeId,
        tree: &ScopeTree,
    ) -> Step<Paragraph> {
        let children = para
            .children
            .iter()
            .map(|child| match child {
                InlineElement::VariableUse(var) => {
                    self.bind_use(var, scope, tree).map(InlineElement::VariableUse)
                }
                other => Ok(other.clone()),
            })
            .collect::<Step<Vec<_>>>()?;

        Ok(Paragraph {
            define: para.define.clone(),
            define_index: para.define_index,
            children,
            comments: para.comments.clone(),
            trailing_comments: para.trailing_comments.clone(),
            location: para.location.clone(),
        })
    }

    fn list(&mut self, list: &List, scope: ScopeId, tree: &ScopeTree) -> Step<List> {
        let items = list
            .items
            .iter()
            .map(|item| self.list_item(item, scope, tree))
            .collect::<Step<Vec<_>>>()?;

        Ok(List {
            define: list.define.clone(),
            define_index: list.define_index,
            items,
            comments: list.comments.clone(),
            trailing_comments: list.trailing_comments.clone(),
            location: list.location.clone(),
        })
    }

    fn list_item(
        &mut self,
        item: &ListItem,
        scope: ScopeId,
        tree: &ScopeTree,
    ) -> Step<ListItem> {
        let children = item
            .children
            .iter()
            .map(|child| match child {
                ItemElement::VariableUse(var) => {
                    self.bind_use(var, scope, tree).map(ItemElement::VariableUse)
                }
                other => Ok(other.clone()),
            })
            .collect::<Step<Vec<_>>>()?;

        Ok(ListItem {
            children,
            comments: item.comments.clone(),
            trailing_comments: item.trailing_comments.clone(),
            location: item.location.clone(),
        })
    }

    fn bind_use(
        &mut self,
        var: &VariableUse,
        scope: ScopeId,
        tree: &ScopeTree,
    ) -> Step<VariableUse> {
        match tree.lookup(scope, &var.name) {
            Some(binding) => {
                trace!(name = %var.name, at = %var.location.start, "resolved variable");
                Ok(var.clone().resolved_to(binding.value.clone()))
            }
            None => {
                debug!(name = %var.name, at = %var.location.start, "unresolved variable");
                self.record(ResolveError::UnresolvedVariable {
                    name: var.name.clone(),
                    location: var.location.clone(),
                })?;
                Ok(VariableUse {
                    resolved: None,
                    ..var.clone()
                })
            }
        }
    }

    fn record(&mut self, error: ResolveError) -> Step<()> {
        self.errors.push(error);
        if self.options.fail_fast {
            Err(Halt)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lolmark::ast::{Bold, ErrorKind, RawText};

    fn use_of(name: &str) -> InlineElement {
        InlineElement::VariableUse(VariableUse::new(name))
    }

    #[test]
    fn test_body_define_resolves_body_use() {
        let doc = Document::with_body(vec![
            BodyElement::VariableDefine(VariableDefine::new("x", "world")),
            BodyElement::VariableUse(VariableUse::new("x")),
        ]);
        let resolved = resolve(&doc).expect("resolves");
        let var = resolved.elements()[1].as_variable_use().expect("use");
        assert_eq!(var.value(), Some("world"));
        // the input tree is untouched
        assert!(!doc.elements()[1].as_variable_use().expect("use").is_resolved());
    }

    #[test]
    fn test_paragraph_define_shadows_body_define() {
        let para = Paragraph::new(vec![use_of("x"), use_of("y")])
            .with_define(VariableDefine::new("x", "inner"));
        let doc = Document::with_body(vec![
            BodyElement::VariableDefine(VariableDefine::new("x", "outer")),
            BodyElement::Paragraph(para),
        ]);

        let error = resolve(&doc).expect_err("y is unbound");
        assert_eq!(error.len(), 1);
        assert_eq!(error.0[0].kind(), ErrorKind::UnresolvedVariable);

        let doc = Document::with_body(vec![
            BodyElement::VariableDefine(VariableDefine::new("x", "outer")),
            BodyElement::Paragraph(
                Paragraph::new(vec![use_of("x")]).with_define(VariableDefine::new("x", "inner")),
            ),
            BodyElement::VariableUse(VariableUse::new("x")),
        ]);
        let resolved = resolve(&doc).expect("resolves");
        let para = resolved.elements()[1].as_paragraph().expect("paragraph");
        assert_eq!(para.children[0].text(), Some("inner"));
        let outer = resolved.elements()[2].as_variable_use().expect("use");
        assert_eq!(outer.value(), Some("outer"));
    }

    #[test]
    fn test_sibling_blocks_do_not_see_each_other() {
        let doc = Document::with_body(vec![
            BodyElement::Paragraph(
                Paragraph::new(vec![InlineElement::RawText(RawText::new("a"))])
                    .with_define(VariableDefine::new("p", "1")),
            ),
            BodyElement::List(List::new(vec![ListItem::new(vec![ItemElement::VariableUse(
                VariableUse::new("p"),
            )])])),
        ]);
        let errors = resolve(&doc).expect_err("p is not visible from the list");
        assert!(matches!(
            &errors.0[0],
            ResolveError::UnresolvedVariable { name, .. } if name == "p"
        ));
    }

    #[test]
    fn test_errors_accumulate_unless_fail_fast() {
        let doc = Document::with_body(vec![
            BodyElement::VariableUse(VariableUse::new("a")),
            BodyElement::Bold(Bold::new("between")),
            BodyElement::VariableUse(VariableUse::new("b")),
        ]);

        assert_eq!(resolve(&doc).expect_err("unbound").len(), 2);

        let fail_fast = ResolveOptions { fail_fast: true };
        assert_eq!(
            resolve_with_options(&doc, fail_fast).expect_err("unbound").len(),
            1
        );
    }

    #[test]
    fn test_duplicate_body_define_in_built_tree() {
        let doc = Document::with_body(vec![
            BodyElement::VariableDefine(VariableDefine::new("a", "1")),
            BodyElement::VariableDefine(VariableDefine::new("a", "2")),
        ]);
        let errors = resolve(&doc).expect_err("duplicate");
        assert_eq!(errors.0[0].kind(), ErrorKind::DuplicateVariableDefine);
    }

    #[test]
    fn test_two_body_defines_with_different_names_in_built_tree() {
        let doc = Document::with_body(vec![
            BodyElement::VariableDefine(VariableDefine::new("a", "1")),
            BodyElement::VariableDefine(VariableDefine::new("b", "2")),
            BodyElement::VariableUse(VariableUse::new("a")),
        ]);
        let errors = resolve(&doc).expect_err("one define per scope");
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors.0[0],
            ResolveError::DuplicateVariableDefine { name, scope: ScopeKind::Body, .. }
                if name == "b"
        ));

        let collected = Resolver::scopes(&doc).expect_err("one define per scope");
        assert_eq!(collected.0[0].kind(), ErrorKind::DuplicateVariableDefine);
    }

    #[test]
    fn test_scope_tree_order() {
        let doc = Document::with_body(vec![
            BodyElement::List(List::new(vec![])),
            BodyElement::Paragraph(Paragraph::new(vec![])),
        ]);
        let tree = Resolver::scopes(&doc).expect("scopes");
        let kinds: Vec<_> = tree.iter().map(|(_, table)| table.scope).collect();
        assert_eq!(
            kinds,
            vec![ScopeKind::Body, ScopeKind::List, ScopeKind::Paragraph]
        );
    }
}
