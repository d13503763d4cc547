//! # aaa-lint
//!
//! Checks that the body of every `test(...)` call in a JavaScript or TypeScript file is split
//! into three phases, each announced by a comment: `// arrange`, `// act` and `// assert`.
//!
//! File Layout
//!
//!     src/js          A tolerant front-end: logos lexer, bracket token tree, call-expression
//!                     extraction and the comment index. It recovers only what rules need.
//!     src/rules       The rules. Each rule is a pure function of one call site and the
//!                     read-only comment index of its file.
//!     src/linter      Runs the front-end and the rules over a source text or a file.
//!     src/diagnostics Structured findings with severity and location.
//!
//! The front-end is deliberately separate from the rules: a rule only sees
//! [CallExpression](js::ast::CallExpression) nodes and a [CommentIndex](js::ast::CommentIndex),
//! so another host that can provide those two things can drive the rules directly.

pub mod diagnostics;
pub mod js;
pub mod linter;
pub mod rules;

pub use diagnostics::{Diagnostic, Severity};
pub use linter::{FileReport, LintError, LintOptions, Linter};
