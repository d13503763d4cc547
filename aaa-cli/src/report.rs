//! Report rendering
//!
//! Text output is one line per finding, `path:line:column: severity: message [rule]`, followed
//! by a summary. JSON output follows the shape of ESLint's `json` formatter so existing
//! tooling can read it.

use aaa_lint::{Diagnostic, FileReport, LintError, Severity};
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Result of linting one file
pub type Outcome = Result<FileReport, LintError>;

/// Totals over all outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    /// Files that could not be read or parsed
    pub failures: usize,
}

impl Summary {
    pub fn of(outcomes: &[Outcome], quiet: bool) -> Self {
        let mut summary = Summary::default();
        for outcome in outcomes {
            match outcome {
                Ok(report) => {
                    summary.errors += report.count(Severity::Error);
                    if !quiet {
                        summary.warnings += report.count(Severity::Warn);
                    }
                }
                Err(_) => summary.failures += 1,
            }
        }
        summary
    }

    pub fn problems(&self) -> usize {
        self.errors + self.warnings
    }
}

fn visible(diagnostic: &Diagnostic, quiet: bool) -> bool {
    !(quiet && diagnostic.severity == Severity::Warn)
}

pub fn render_text(outcomes: &[Outcome], quiet: bool) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        match outcome {
            Ok(report) => {
                for diagnostic in report.diagnostics.iter().filter(|d| visible(d, quiet)) {
                    let _ = writeln!(out, "{}:{}", report.path.display(), diagnostic);
                }
            }
            Err(err) => {
                let _ = writeln!(out, "{}", err);
            }
        }
    }

    let summary = Summary::of(outcomes, quiet);
    if summary.problems() > 0 {
        let _ = writeln!(
            out,
            "\n{} {} ({} {}, {} {})",
            summary.problems(),
            plural(summary.problems(), "problem"),
            summary.errors,
            plural(summary.errors, "error"),
            summary.warnings,
            plural(summary.warnings, "warning"),
        );
    }
    out
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFile {
    file_path: PathBuf,
    messages: Vec<JsonMessage>,
    error_count: usize,
    warning_count: usize,
    fatal_error_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMessage {
    rule_id: Option<String>,
    /// 1 = warning, 2 = error
    severity: u8,
    message: String,
    line: usize,
    column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_column: Option<usize>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    fatal: bool,
}

impl JsonMessage {
    fn from_diagnostic(diagnostic: &Diagnostic) -> Self {
        let (line, column) = diagnostic.range.start.one_based();
        let (end_line, end_column) = diagnostic.range.end.one_based();
        Self {
            rule_id: Some(diagnostic.rule_id()),
            severity: match diagnostic.severity {
                Severity::Error => 2,
                _ => 1,
            },
            message: diagnostic.message.clone(),
            line,
            column,
            end_line: Some(end_line),
            end_column: Some(end_column),
            fatal: false,
        }
    }

    fn from_error(err: &LintError) -> Self {
        let (line, column, message) = match err {
            LintError::Parse {
                position, source, ..
            } => {
                let (line, column) = position.one_based();
                (line, column, format!("Parsing error: {}", source))
            }
            LintError::Io { source, .. } => (0, 0, source.to_string()),
        };
        Self {
            rule_id: None,
            severity: 2,
            message,
            line,
            column,
            end_line: None,
            end_column: None,
            fatal: true,
        }
    }
}

pub fn render_json(outcomes: &[Outcome], quiet: bool) -> serde_json::Result<String> {
    let files: Vec<JsonFile> = outcomes
        .iter()
        .map(|outcome| match outcome {
            Ok(report) => {
                let messages: Vec<_> = report
                    .diagnostics
                    .iter()
                    .filter(|d| visible(d, quiet))
                    .map(JsonMessage::from_diagnostic)
                    .collect();
                JsonFile {
                    file_path: report.path.clone(),
                    error_count: messages.iter().filter(|m| m.severity == 2).count(),
                    warning_count: messages.iter().filter(|m| m.severity == 1).count(),
                    fatal_error_count: 0,
                    messages,
                }
            }
            Err(err) => JsonFile {
                file_path: match err {
                    LintError::Io { path, .. } | LintError::Parse { path, .. } => path.clone(),
                },
                messages: vec![JsonMessage::from_error(err)],
                error_count: 1,
                warning_count: 0,
                fatal_error_count: 1,
            },
        })
        .collect();
    serde_json::to_string_pretty(&files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aaa_lint::{LintOptions, Linter};

    fn outcome(path: &str, source: &str, options: &LintOptions) -> Outcome {
        let diagnostics = Linter::new(options).lint_source(source).unwrap();
        Ok(FileReport {
            path: PathBuf::from(path),
            diagnostics,
        })
    }

    fn sample() -> Vec<Outcome> {
        let warn = LintOptions::default().with_rule("arrange-act-assert", Severity::Warn);
        vec![
            outcome(
                "a.test.js",
                "test('a', () => {\n  // arrange\n});\n",
                &LintOptions::default(),
            ),
            outcome("b.test.js", "test('b', () => {});\n", &warn),
        ]
    }

    #[test]
    fn test_text_report() {
        insta::assert_snapshot!(render_text(&sample(), false), @r"
        a.test.js:2:3: error: `act` comment needs to appear after `arrange` [aaa/arrange-act-assert]
        b.test.js:1:1: warning: `arrange`, `act`, and `assert` comments are missing [aaa/arrange-act-assert]

        2 problems (1 error, 1 warning)
        ");
    }

    #[test]
    fn test_quiet_drops_warnings() {
        let text = render_text(&sample(), true);
        assert!(text.contains("a.test.js:2:3"));
        assert!(!text.contains("b.test.js"));
        assert!(text.ends_with("1 problem (1 error, 0 warnings)\n"));
    }

    #[test]
    fn test_clean_run_prints_nothing() {
        let clean = outcome(
            "c.test.js",
            "test('c', () => {\n// arrange\n// act\n// assert\n});",
            &LintOptions::default(),
        );
        assert_eq!(render_text(&[clean], false), "");
    }

    #[test]
    fn test_json_report() {
        let json = render_json(&sample(), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["filePath"], "a.test.js");
        assert_eq!(value[0]["errorCount"], 1);
        assert_eq!(value[0]["messages"][0]["ruleId"], "aaa/arrange-act-assert");
        assert_eq!(value[0]["messages"][0]["line"], 2);
        assert_eq!(value[0]["messages"][0]["column"], 3);
        assert!(value[0]["messages"][0].get("fatal").is_none());
        assert_eq!(value[1]["warningCount"], 1);
        assert_eq!(value[1]["messages"][0]["severity"], 1);
    }

    #[test]
    fn test_json_reports_parse_failures() {
        let err = aaa_lint::LintError::Parse {
            path: PathBuf::from("broken.js"),
            position: aaa_lint::js::ast::Position::new(0, 4),
            source: aaa_lint::js::ParseError::Unclosed {
                delimiter: '(',
                offset: 4,
            },
        };
        let json = render_json(&[Err(err)], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["fatalErrorCount"], 1);
        assert_eq!(value[0]["messages"][0]["fatal"], true);
        assert_eq!(value[0]["messages"][0]["message"], "Parsing error: unclosed `(`");
        assert_eq!(value[0]["messages"][0]["column"], 5);
        assert!(value[0]["messages"][0]["ruleId"].is_null());
    }
}
