//! Contact detail formats

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use vitae_model::Profile;

use crate::{Rule, Violation};

/// Checks the email, phone and LinkedIn fields of the contact record
///
/// Only runs when a contact record is present at all; its absence is
/// reported by the required-fields rule. Each of the three fields is required
/// on its own, and a missing field is a different violation from a malformed
/// one.
///
/// # Diagnostic Codes
///
/// - `VIT201`: email missing or malformed
/// - `VIT202`: phone missing or malformed
/// - `VIT203`: LinkedIn URL missing or malformed
pub struct ContactRule;

fn email_re() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").unwrap())
}

fn phone_re() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    // e.g. +91 9876543210
    PHONE_RE.get_or_init(|| Regex::new(r"^\+\d{1,3}\s\d{10}$").unwrap())
}

fn linkedin_re() -> &'static Regex {
    static LINKEDIN_RE: OnceLock<Regex> = OnceLock::new();
    LINKEDIN_RE.get_or_init(|| Regex::new(r"^https://(www\.)?linkedin\.com/.*").unwrap())
}

/// True when `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    email_re().is_match(email)
}

/// True when `phone` is `+<1-3 digit country code> <10 digits>`
pub fn is_valid_phone(phone: &str) -> bool {
    phone_re().is_match(phone)
}

/// True when `url` points at linkedin.com over https
pub fn is_valid_linkedin(url: &str) -> bool {
    linkedin_re().is_match(url)
}

impl Rule for ContactRule {
    fn code(&self) -> &'static str {
        "VIT2"
    }

    fn name(&self) -> &'static str {
        "contact-format"
    }

    fn validate(&self, profile: &Profile, _today: NaiveDate) -> Vec<Violation> {
        let Some(contact) = profile.contact.as_ref() else {
            return Vec::new();
        };
        let mut violations = Vec::new();

        match contact.email.as_deref() {
            Some(email) if !is_valid_email(email) => violations.push(
                Violation::new("VIT201", "Invalid email format.")
                    .with_help(format!("'{}' should look like name@example.com", email)),
            ),
            Some(_) => {}
            None => violations.push(Violation::new("VIT201", "Contact email is required.")),
        }

        match contact.phone.as_deref() {
            Some(phone) if !is_valid_phone(phone) => violations.push(
                Violation::new(
                    "VIT202",
                    "Invalid phone number format. Use '+<Country Code> <10 digits>'.",
                )
                .with_help(format!("'{}' should look like +91 9876543210", phone)),
            ),
            Some(_) => {}
            None => violations.push(Violation::new(
                "VIT202",
                "Contact phone number is required.",
            )),
        }

        match contact.linkedin.as_deref() {
            Some(url) if !is_valid_linkedin(url) => violations.push(
                Violation::new("VIT203", "Invalid LinkedIn URL.").with_help(format!(
                    "'{}' should start with https://linkedin.com/ or https://www.linkedin.com/",
                    url
                )),
            ),
            Some(_) => {}
            None => violations.push(Violation::new(
                "VIT203",
                "Contact LinkedIn profile is required.",
            )),
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_model::Contact;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn with_contact(contact: Contact) -> Profile {
        Profile {
            contact: Some(contact),
            ..Profile::default()
        }
    }

    fn messages(profile: &Profile) -> Vec<String> {
        ContactRule
            .validate(profile, today())
            .into_iter()
            .map(|v| v.message)
            .collect()
    }

    #[test]
    fn test_valid_contact() {
        let profile = with_contact(Contact {
            phone: Some("+91 9876543210".to_string()),
            email: Some("pranav@example.com".to_string()),
            location: None,
            linkedin: Some("https://linkedin.com/in/pranav".to_string()),
        });
        assert!(messages(&profile).is_empty());
    }

    #[test]
    fn test_absent_contact_is_skipped() {
        assert!(messages(&Profile::default()).is_empty());
    }

    #[test]
    fn test_empty_contact_reports_each_field_in_order() {
        assert_eq!(
            messages(&with_contact(Contact::default())),
            vec![
                "Contact email is required.",
                "Contact phone number is required.",
                "Contact LinkedIn profile is required.",
            ]
        );
    }

    #[test]
    fn test_email_formats() {
        assert!(is_valid_email("john@example.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("john.example.com"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_formats() {
        assert!(is_valid_phone("+91 9876543210"));
        assert!(is_valid_phone("+1 5551234567"));
        assert!(is_valid_phone("+358 0401234567"));
        assert!(!is_valid_phone("1234567890"));
        assert!(!is_valid_phone("+91 98765 43210"));
        assert!(!is_valid_phone("+91 987654321"));
        assert!(!is_valid_phone("+9123 9876543210"));
        assert!(!is_valid_phone("+91 98765432101"));
    }

    #[test]
    fn test_linkedin_formats() {
        assert!(is_valid_linkedin("https://linkedin.com/in/johndoe"));
        assert!(is_valid_linkedin("https://www.linkedin.com/in/johndoe"));
        assert!(!is_valid_linkedin("linkedin.com/in/johndoe"));
        assert!(!is_valid_linkedin("http://linkedin.com/in/johndoe"));
        assert!(!is_valid_linkedin("https://example.com/linkedin.com/"));
    }

    #[test]
    fn test_malformed_fields() {
        let profile = with_contact(Contact {
            phone: Some("1234567890".to_string()),
            email: Some("john.example.com".to_string()),
            location: Some("Somewhere".to_string()),
            linkedin: Some("linkedin.com/in/johndoe".to_string()),
        });
        assert_eq!(
            messages(&profile),
            vec![
                "Invalid email format.",
                "Invalid phone number format. Use '+<Country Code> <10 digits>'.",
                "Invalid LinkedIn URL.",
            ]
        );
    }
}
