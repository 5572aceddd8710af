//! Skill categories

use chrono::NaiveDate;
use vitae_model::Profile;

use crate::{Rule, Violation};

/// Checks that every skill category lists at least one skill
///
/// # Diagnostic Codes
///
/// - `VIT601`: empty skill category
pub struct SkillsRule;

impl Rule for SkillsRule {
    fn code(&self) -> &'static str {
        "VIT6"
    }

    fn name(&self) -> &'static str {
        "skill-categories"
    }

    fn validate(&self, profile: &Profile, _today: NaiveDate) -> Vec<Violation> {
        profile
            .skills
            .iter()
            .filter(|(_, skills)| skills.is_empty())
            .map(|(category, _)| {
                Violation::new(
                    "VIT601",
                    format!("Skills category '{}' must be a non-empty list.", category),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_categories_reported_in_order() {
        let profile = Profile::from_json_str(
            r#"{"skills": {"tools": [], "soft_skills": ["Communication"], "languages": []}}"#,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let messages: Vec<String> = SkillsRule
            .validate(&profile, today)
            .into_iter()
            .map(|v| v.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Skills category 'tools' must be a non-empty list.",
                "Skills category 'languages' must be a non-empty list.",
            ]
        );
    }
}
