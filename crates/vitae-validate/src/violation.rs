//! Validation findings
//!
//! A `Violation` is one problem found in a profile. Its `message` is the
//! human-readable text shown to the user; `code` identifies the rule family
//! so tooling can filter on it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single problem found while validating a profile
///
/// # Example
///
/// ```
/// use vitae_validate::Violation;
///
/// let violation = Violation::new("VIT201", "Invalid email format.")
///     .with_help("Expected something like name@example.com");
/// assert_eq!(violation.to_string(), "Invalid email format.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "VIT101")
    pub code: String,

    /// The message shown to the user
    pub message: String,

    /// Additional help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Where in the profile the problem was found
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Violation {
    /// Create a new violation
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            help: None,
            notes: Vec::new(),
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating one profile
///
/// Violations keep discovery order: required fields first, then contact,
/// then each section with entries in their original order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Create a report from collected violations
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// True when nothing was found
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations in discovery order
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The user-facing messages in discovery order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when there are no violations
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl From<Vec<Violation>> for ValidationReport {
    fn from(violations: Vec<Violation>) -> Self {
        Self::new(violations)
    }
}
