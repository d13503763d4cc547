//! Diagnostics
//!
//! A [`Diagnostic`] is one finding of one rule at one location. Rules build them with the
//! severity the linter was configured with; the CLI renders them.

use crate::js::ast::Range;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a rule is enforced
///
/// `Off` disables the rule altogether; it never appears on a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Off => write!(f, "off"),
            Severity::Warn => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "0" => Ok(Severity::Off),
            "warn" | "warning" | "1" => Ok(Severity::Warn),
            "error" | "2" => Ok(Severity::Error),
            other => Err(format!(
                "unknown severity '{}' (expected off, warn or error)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub message: String,
    /// Rule identifier, e.g. `arrange-act-assert`
    pub code: String,
    pub source: String,
}

impl Diagnostic {
    pub fn new(range: Range, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            range,
            severity,
            message: message.into(),
            code: String::new(),
            source: crate::rules::PLUGIN_NAME.to_string(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// `aaa/arrange-act-assert`
    pub fn rule_id(&self) -> String {
        format!("{}/{}", self.source, self.code)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {} [{}]",
            self.range.start,
            self.severity,
            self.message,
            self.rule_id()
        )
    }
}
