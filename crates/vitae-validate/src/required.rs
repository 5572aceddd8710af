//! Required top-level fields

use chrono::NaiveDate;
use vitae_model::Profile;

use crate::{is_missing, Rule, Violation};

/// Checks that every top-level field is present and non-empty
///
/// # Diagnostic Codes
///
/// - `VIT101`: a required field is absent or empty
pub struct RequiredFieldsRule;

impl Rule for RequiredFieldsRule {
    fn code(&self) -> &'static str {
        "VIT1"
    }

    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn validate(&self, profile: &Profile, _today: NaiveDate) -> Vec<Violation> {
        let present = [
            ("name", !is_missing(&profile.name)),
            (
                "contact",
                profile.contact.as_ref().is_some_and(|c| !c.is_empty()),
            ),
            ("education", !profile.education.is_empty()),
            (
                "professional_experience",
                !profile.professional_experience.is_empty(),
            ),
            ("projects", !profile.projects.is_empty()),
            ("skills", !profile.skills.is_empty()),
        ];

        present
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(field, _)| {
                Violation::new("VIT101", format!("'{}' is required and cannot be empty.", field))
            })
            .collect()
    }
}
