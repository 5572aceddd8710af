//! Per-entry checks for the list sections
//!
//! Each entry is checked on its own and every problem is reported, so a
//! profile with three broken entries yields at least three violations, in
//! entry order.

use chrono::NaiveDate;
use vitae_model::Profile;

use crate::dates::DateRange;
use crate::{is_missing, Rule, Violation};

/// Checks a `dates` field, pushing a violation when it is absent or invalid
fn check_dates(
    dates: &Option<String>,
    today: NaiveDate,
    section: &str,
    code: &str,
    note: &str,
    violations: &mut Vec<Violation>,
) {
    match dates.as_deref() {
        None | Some("") => violations.push(
            Violation::new(code, format!("Each {} entry must have dates.", section))
                .with_note(note),
        ),
        Some(text) => {
            if let Err(err) = DateRange::parse_ordered(text, today) {
                violations.push(
                    Violation::new(code, format!("Invalid dates in {}: {}", section, text))
                        .with_help(err.to_string())
                        .with_note(note),
                );
            }
        }
    }
}

/// Checks education entries
///
/// # Diagnostic Codes
///
/// - `VIT301`: missing institution or degree
/// - `VIT302`: missing or invalid dates
pub struct EducationRule;

impl Rule for EducationRule {
    fn code(&self) -> &'static str {
        "VIT3"
    }

    fn name(&self) -> &'static str {
        "education-entries"
    }

    fn validate(&self, profile: &Profile, today: NaiveDate) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (index, entry) in profile.education.iter().enumerate() {
            let note = format!("Found at education entry {}", index + 1);

            if is_missing(&entry.institution) {
                violations.push(
                    Violation::new(
                        "VIT301",
                        "Each education entry must have an institution name.",
                    )
                    .with_note(&note),
                );
            }
            if is_missing(&entry.degree) {
                violations.push(
                    Violation::new("VIT301", "Each education entry must have a degree.")
                        .with_note(&note),
                );
            }
            check_dates(
                &entry.dates,
                today,
                "education",
                "VIT302",
                &note,
                &mut violations,
            );
        }

        violations
    }
}

/// Checks professional experience entries
///
/// # Diagnostic Codes
///
/// - `VIT401`: missing role or organization
/// - `VIT402`: missing or invalid dates
pub struct ExperienceRule;

impl Rule for ExperienceRule {
    fn code(&self) -> &'static str {
        "VIT4"
    }

    fn name(&self) -> &'static str {
        "experience-entries"
    }

    fn validate(&self, profile: &Profile, today: NaiveDate) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (index, entry) in profile.professional_experience.iter().enumerate() {
            let note = format!("Found at professional experience entry {}", index + 1);

            if is_missing(&entry.role) {
                violations.push(
                    Violation::new(
                        "VIT401",
                        "Each professional experience entry must have a role.",
                    )
                    .with_note(&note),
                );
            }
            if is_missing(&entry.organization) {
                violations.push(
                    Violation::new(
                        "VIT401",
                        "Each professional experience entry must have an organization.",
                    )
                    .with_note(&note),
                );
            }
            check_dates(
                &entry.dates,
                today,
                "professional experience",
                "VIT402",
                &note,
                &mut violations,
            );
        }

        violations
    }
}

/// Checks project entries
///
/// # Diagnostic Codes
///
/// - `VIT501`: missing name or description
/// - `VIT502`: missing or empty tech stack
pub struct ProjectsRule;

impl Rule for ProjectsRule {
    fn code(&self) -> &'static str {
        "VIT5"
    }

    fn name(&self) -> &'static str {
        "project-entries"
    }

    fn validate(&self, profile: &Profile, _today: NaiveDate) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (index, project) in profile.projects.iter().enumerate() {
            let note = format!("Found at project entry {}", index + 1);

            if is_missing(&project.name) {
                violations.push(
                    Violation::new("VIT501", "Each project entry must have a name.")
                        .with_note(&note),
                );
            }
            if is_missing(&project.description) {
                violations.push(
                    Violation::new("VIT501", "Each project entry must have a description.")
                        .with_note(&note),
                );
            }
            if project.tech_stack.is_empty() {
                violations.push(
                    Violation::new(
                        "VIT502",
                        "Each project entry must have a tech stack as a list.",
                    )
                    .with_note(&note),
                );
            }
        }

        violations
    }
}
