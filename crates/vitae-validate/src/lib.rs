//! vitae-validate - Profile validation engine
//!
//! This crate checks a loaded `Profile` for required fields and well-formed
//! values before anything is rendered.
//!
//! # Architecture
//!
//! Individual checks implement the `Rule` trait. The `ValidationEngine` runs
//! every registered rule in order and collects all violations; it never stops
//! at the first problem. When nothing is found, `ValidationEngine::accept`
//! turns the profile into a `Resume`, the only input the document renderer
//! takes.
//!
//! # Example
//!
//! ```
//! use vitae_model::Profile;
//! use vitae_validate::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&Profile::default());
//! assert!(!report.is_valid());
//! assert_eq!(report.messages()[0], "'name' is required and cannot be empty.");
//! ```

pub mod contact;
pub mod dates;
pub mod entries;
pub mod required;
pub mod resume;
pub mod skills;
pub mod violation;

use chrono::{Local, NaiveDate};
use tracing::debug;
use vitae_model::Profile;

pub use contact::ContactRule;
pub use dates::{is_valid_range, DateRange, DateRangeError, RangeEnd};
pub use entries::{EducationRule, ExperienceRule, ProjectsRule};
pub use required::RequiredFieldsRule;
pub use resume::{Dates, EducationEntry, ExperienceEntry, ProjectEntry, Resume, ResumeContact};
pub use skills::SkillsRule;
pub use violation::{ValidationReport, Violation};

/// Trait for profile rules
///
/// A rule inspects a profile and returns a violation for every problem it
/// finds. `today` is the date `Present` resolves to.
pub trait Rule: Send + Sync {
    /// Get the rule's code prefix (e.g., "VIT3" for education entries)
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this rule
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the profile and return any violations
    fn validate(&self, profile: &Profile, today: NaiveDate) -> Vec<Violation>;
}

/// True when a text field is absent or empty
pub(crate) fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Validation engine that runs rules in registration order
pub struct ValidationEngine {
    rules: Vec<Box<dyn Rule>>,
    today: NaiveDate,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ValidationEngine {
    /// Create an engine with no rules, resolving `Present` to the local date
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            today: Local::now().date_naive(),
        }
    }

    /// Create an engine with the standard rule set
    ///
    /// Rules run in the order required fields, contact, education,
    /// professional experience, projects, skills.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(RequiredFieldsRule));
        engine.add_rule(Box::new(ContactRule));
        engine.add_rule(Box::new(EducationRule));
        engine.add_rule(Box::new(ExperienceRule));
        engine.add_rule(Box::new(ProjectsRule));
        engine.add_rule(Box::new(SkillsRule));
        engine
    }

    /// Fix the date `Present` resolves to
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Add a rule to the engine
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get the number of registered rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Get the names of all registered rules
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule and collect all violations
    pub fn validate(&self, profile: &Profile) -> ValidationReport {
        let mut violations = Vec::new();

        for rule in &self.rules {
            let found = rule.validate(profile, self.today);
            debug!(rule = rule.name(), count = found.len(), "rule checked");
            violations.extend(found);
        }

        ValidationReport::new(violations)
    }

    /// Validate and, if nothing is wrong, produce the renderable `Resume`
    pub fn accept(&self, profile: Profile) -> Result<Resume, ValidationReport> {
        let report = self.validate(&profile);
        if !report.is_valid() {
            return Err(report);
        }

        Resume::from_checked(profile, self.today).ok_or_else(|| {
            ValidationReport::from(vec![Violation::new(
                "VIT001",
                "Profile is missing fields required for rendering.",
            )
            .with_help("Validate with the default rule set to see which ones.")])
        })
    }
}

/// Validate a profile with the default rules and today's date
pub fn validate(profile: &Profile) -> ValidationReport {
    ValidationEngine::with_defaults().validate(profile)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
