//! Rules
//!
//!     A rule is evaluated once per call expression of a file. It sees the call and the
//!     read-only comment index of the file, nothing else, and reports at most one diagnostic.
//!     Rules never keep state between call sites, so the order in which calls are visited does
//!     not change what is reported.

pub mod arrange_act_assert;

use crate::diagnostics::{Diagnostic, Severity};
use crate::js::ast::{CallExpression, CommentIndex};

/// Namespace of every rule id, as in `aaa/arrange-act-assert`
pub const PLUGIN_NAME: &str = "aaa";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    /// Code that is likely wrong or will confuse readers
    Problem,
}

/// Static description of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub name: &'static str,
    pub rule_type: RuleType,
    pub description: &'static str,
    /// Severity in the recommended preset
    pub recommended: Severity,
}

pub trait Rule {
    fn meta(&self) -> &RuleMeta;

    /// Check one call site. `severity` is never [Severity::Off].
    fn check(
        &self,
        call: &CallExpression,
        comments: &CommentIndex,
        severity: Severity,
    ) -> Option<Diagnostic>;
}

/// Every rule this crate ships
pub fn all() -> Vec<Box<dyn Rule + Send + Sync>> {
    vec![Box::new(arrange_act_assert::ArrangeActAssert)]
}

/// The recommended preset: rule id to severity
pub fn recommended() -> Vec<(String, Severity)> {
    all()
        .iter()
        .map(|rule| {
            let meta = rule.meta();
            (format!("{}/{}", PLUGIN_NAME, meta.name), meta.recommended)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommended_preset() {
        assert_eq!(
            recommended(),
            vec![("aaa/arrange-act-assert".to_string(), Severity::Error)]
        );
    }
}
