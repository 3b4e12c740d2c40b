//! Variable define and use assertions

use crate::lolmark::ast::{VariableDefine, VariableUse};

pub struct VariableDefineAssertion<'a> {
    pub(crate) define: &'a VariableDefine,
    pub(crate) context: String,
}

impl VariableDefineAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.define.name, expected,
            "{}: Expected define of '{}', found '{}'",
            self.context, expected, self.define.name
        );
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(
            self.define.value, expected,
            "{}: Expected value '{}', found '{}'",
            self.context, expected, self.define.value
        );
        self
    }
}

pub struct VariableUseAssertion<'a> {
    pub(crate) usage: &'a VariableUse,
    pub(crate) context: String,
}

impl VariableUseAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.usage.name, expected,
            "{}: Expected use of '{}', found '{}'",
            self.context, expected, self.usage.name
        );
        self
    }

    pub fn resolved_to(self, expected: &str) -> Self {
        assert_eq!(
            self.usage.value(),
            Some(expected),
            "{}: Expected '{}' to resolve to '{}'",
            self.context,
            self.usage.name,
            expected
        );
        self
    }

    pub fn unresolved(self) -> Self {
        assert!(
            !self.usage.is_resolved(),
            "{}: Expected '{}' to be unresolved, found {:?}",
            self.context,
            self.usage.name,
            self.usage.resolved
        );
        self
    }
}
