//! Profile record types
//!
//! Every field is optional at the type level. Which fields are required is
//! decided by the validator, not by deserialization, so a partially filled
//! profile still loads and can be reported on field by field.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Skill categories in source order, each with its list of skills
pub type Skills = IndexMap<String, Vec<String>>;

/// A complete resume record as read from the data file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// Education entries, most recent first by convention
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    /// Work history entries
    #[serde(deserialize_with = "null_as_default")]
    pub professional_experience: Vec<Experience>,
    /// Project entries
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    /// Skills grouped by category
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Skills,
    /// Number of top-level keys in the source object, known or not
    #[serde(skip)]
    pub source_keys: usize,
}

/// `null` reads as the empty collection, like an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Profile {
    /// Parse a profile from JSON text
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let source_keys = value.as_object().map_or(0, |object| object.len());
        let mut profile: Self = serde_json::from_value(value)?;
        profile.source_keys = source_keys;
        Ok(profile)
    }

    /// True when the record carries no data at all
    ///
    /// A source object with any key, even an unknown or empty one, is not
    /// empty: it is a record with missing fields.
    pub fn is_empty(&self) -> bool {
        self.source_keys == 0
            && self.name.is_none()
            && self.contact.is_none()
            && self.education.is_empty()
            && self.professional_experience.is_empty()
            && self.projects.is_empty()
            && self.skills.is_empty()
    }

    /// Contact details, or an empty set when absent
    pub fn contact_or_default(&self) -> Contact {
        self.contact.clone().unwrap_or_default()
    }

    /// Skills listed under `category`, empty when the category is absent
    pub fn skills_in(&self, category: &str) -> &[String] {
        self.skills.get(category).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Contact sub-record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Older data files spell this key `Location`
    #[serde(alias = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl Contact {
    /// True when no contact field is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One education entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    /// Range string, e.g. `August 2023 - Present`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_courses: Option<Vec<String>>,
}

/// One professional experience entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
}

/// One project entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_profile() {
        let profile = Profile::from_json_str("{}").unwrap();
        assert!(profile.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let profile = Profile::from_json_str(r#"{"hobbies": ["chess"]}"#).unwrap();
        assert_eq!(profile.name, None);
        assert!(profile.skills.is_empty());
        // still a record, just one with every field missing
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_empty_section_is_not_an_empty_profile() {
        let profile = Profile::from_json_str(r#"{"education": []}"#).unwrap();
        assert!(profile.education.is_empty());
        assert_eq!(profile.source_keys, 1);
        assert!(!profile.is_empty());
    }

    #[test]
    fn test_null_sections_read_as_absent() {
        let json = r#"{
            "name": "Jane",
            "education": null,
            "professional_experience": null,
            "projects": [{"name": "A", "tech_stack": null}],
            "skills": null
        }"#;
        let profile = Profile::from_json_str(json).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Jane"));
        assert!(profile.education.is_empty());
        assert!(profile.professional_experience.is_empty());
        assert!(profile.projects[0].tech_stack.is_empty());
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_built_profile_with_data_is_not_empty() {
        let profile = Profile {
            name: Some("Jane".to_string()),
            ..Profile::default()
        };
        assert!(!profile.is_empty());
        assert!(Profile::default().is_empty());
    }

    #[test]
    fn test_location_alias() {
        let json = r#"{"contact": {"Location": "Somewhere, Earth"}}"#;
        let profile = Profile::from_json_str(json).unwrap();
        assert_eq!(
            profile.contact_or_default().location.as_deref(),
            Some("Somewhere, Earth")
        );
    }

    #[test]
    fn test_skill_categories_keep_source_order() {
        let json = r#"{"skills": {"zeta": ["z"], "alpha": ["a"], "mid": ["m"]}}"#;
        let profile = Profile::from_json_str(json).unwrap();
        let keys: Vec<&str> = profile.skills.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_skills_in_missing_category() {
        let profile = Profile::default();
        assert!(profile.skills_in("soft_skills").is_empty());
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let json = r#"{"projects": [{"name": "A", "tech_stack": "Python"}]}"#;
        assert!(Profile::from_json_str(json).is_err());
    }

    #[test]
    fn test_empty_contact_is_present_but_empty() {
        let profile = Profile::from_json_str(r#"{"contact": {}}"#).unwrap();
        let contact = profile.contact.as_ref().unwrap();
        assert!(contact.is_empty());
        assert!(!profile.is_empty());
    }
}
