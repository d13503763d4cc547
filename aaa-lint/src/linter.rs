//! Linter
//!
//!     Drives one file through the front-end and every enabled rule:
//!
//!         source --parse--> Program { calls, comments } --rules, per call--> diagnostics
//!
//!     Each call site is checked on its own against the shared, read-only comment index, so a
//!     violation in one test never hides or changes the report for its siblings. Diagnostics come
//!     back sorted by position.

use crate::diagnostics::{Diagnostic, Severity};
use crate::js::ast::{Position, SourceLocation};
use crate::js::{self, ParseError};
use crate::rules::{self, Rule, PLUGIN_NAME};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{position}: parse error: {source}", path.display())]
    Parse {
        path: PathBuf,
        position: Position,
        #[source]
        source: ParseError,
    },
}

/// Severity per rule
///
/// Keys are plugin-qualified rule ids (`aaa/arrange-act-assert`); bare rule names are accepted
/// too. Rules without an entry run with their recommended severity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOptions {
    pub rules: BTreeMap<String, Severity>,
}

impl LintOptions {
    pub fn with_rule(mut self, rule: impl Into<String>, severity: Severity) -> Self {
        self.rules.insert(rule.into(), severity);
        self
    }

    fn severity_of(&self, rule: &dyn Rule) -> Severity {
        let meta = rule.meta();
        let qualified = format!("{}/{}", PLUGIN_NAME, meta.name);
        self.rules
            .get(&qualified)
            .or_else(|| self.rules.get(meta.name))
            .copied()
            .unwrap_or(meta.recommended)
    }
}

/// Diagnostics for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

pub struct Linter {
    rules: Vec<(Box<dyn Rule + Send + Sync>, Severity)>,
}

impl Linter {
    pub fn new(options: &LintOptions) -> Self {
        let rules = rules::all()
            .into_iter()
            .filter_map(|rule| {
                let severity = options.severity_of(rule.as_ref());
                (severity != Severity::Off).then_some((rule, severity))
            })
            .collect();
        Self { rules }
    }

    /// Number of enabled rules
    pub fn enabled(&self) -> usize {
        self.rules.len()
    }

    /// Lint a source text
    pub fn lint_source(&self, source: &str) -> Result<Vec<Diagnostic>, ParseError> {
        let program = js::parse(source)?;
        tracing::debug!(calls = program.calls.len(), comments = program.comments.len(), "parsed");

        let comments = &program.comments;
        let mut diagnostics: Vec<Diagnostic> = program
            .calls
            .iter()
            .flat_map(|call| {
                self.rules
                    .iter()
                    .filter_map(move |(rule, severity)| rule.check(call, comments, *severity))
            })
            .collect();
        diagnostics.sort_by(|a, b| {
            (a.range.start, &a.code, &a.message).cmp(&(b.range.start, &b.code, &b.message))
        });
        Ok(diagnostics)
    }

    /// Read and lint a file
    pub fn lint_file(&self, path: impl AsRef<Path>) -> Result<FileReport, LintError> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("lint_file", path = %path.display()).entered();

        let text = fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let diagnostics = self.lint_source(&text).map_err(|source| LintError::Parse {
            path: path.to_path_buf(),
            position: SourceLocation::new(&text).byte_to_position(source.offset()),
            source,
        })?;

        Ok(FileReport {
            path: path.to_path_buf(),
            diagnostics,
        })
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(&LintOptions::default())
    }
}
