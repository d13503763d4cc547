//! arrange-act-assert
//!
//!     Enforce comments in the order of arrange, act, and assert inside every `test(...)` body:
//!
//!         test("adds one", () => {
//!           // arrange
//!           const a = 1;
//!           // act
//!           const result = a + 1;
//!           // assert
//!           expect(result).toBe(2);
//!         });
//!
//!     Evaluation of one call site:
//!         1. [selector] decides whether the call is a test and hands out its block body.
//!         2. Every comment inside the body, nested blocks included, is classified and run
//!            through the state machine in [markers].
//!         3. The length of the accepted chain picks the verdict. A failing verdict is
//!            anchored at the last accepted marker, i.e. where the chain stalled, or at the
//!            call itself when no marker was accepted.

pub mod markers;
pub mod selector;

use super::{Rule, RuleMeta, RuleType};
use crate::diagnostics::{Diagnostic, Severity};
use crate::js::ast::{CallExpression, CommentIndex, Range};
use markers::accepted_chain;

pub const RULE_NAME: &str = "arrange-act-assert";

pub const META: RuleMeta = RuleMeta {
    name: RULE_NAME,
    rule_type: RuleType::Problem,
    description: "Enforce comments in the order of arrange, act, and assert",
    recommended: Severity::Error,
};

/// The first structural violation of a test body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// No arrange marker could start the chain
    MissingAll,
    /// The chain stalled after arrange
    MissingAct,
    /// The chain stalled after act
    MissingAssert,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Violation::MissingAll => "`arrange`, `act`, and `assert` comments are missing",
            Violation::MissingAct => "`act` comment needs to appear after `arrange`",
            Violation::MissingAssert => "`assert` comment needs to appear after `act`",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Violation { violation: Violation, anchor: Range },
}

/// Evaluate one call site. `None` when the call is not a test.
pub fn evaluate(call: &CallExpression, comments: &CommentIndex) -> Option<Verdict> {
    let body = selector::test_body(call)?;
    let chain = accepted_chain(comments.comments_within(&body.range.span));

    let violation = match chain.len() {
        0 => Violation::MissingAll,
        1 => Violation::MissingAct,
        2 => Violation::MissingAssert,
        _ => return Some(Verdict::Valid),
    };
    let anchor = match chain.last() {
        Some(comment) => comment.range.clone(),
        None => call.range.clone(),
    };

    tracing::debug!(
        accepted = chain.len(),
        at = %anchor.start,
        "{}",
        violation.message()
    );
    Some(Verdict::Violation { violation, anchor })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrangeActAssert;

impl Rule for ArrangeActAssert {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check(
        &self,
        call: &CallExpression,
        comments: &CommentIndex,
        severity: Severity,
    ) -> Option<Diagnostic> {
        match evaluate(call, comments)? {
            Verdict::Valid => None,
            Verdict::Violation { violation, anchor } => {
                Some(Diagnostic::new(anchor, severity, violation.message()).with_code(RULE_NAME))
            }
        }
    }
}
