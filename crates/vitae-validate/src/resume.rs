//! Validated resume
//!
//! `Resume` is what a `Profile` becomes once it has passed validation: every
//! field the document layout relies on is present and every date range is
//! parsed. It can only be obtained through `ValidationEngine::accept`.

use chrono::NaiveDate;
use vitae_model::{Profile, Skills};

use crate::dates::DateRange;

/// A range string together with its parsed form
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Dates {
    /// The text as written in the profile
    pub text: String,
    pub range: DateRange,
}

/// Contact details of a validated resume
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResumeContact {
    pub phone: String,
    pub email: String,
    pub location: Option<String>,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub dates: Dates,
    pub relevant_courses: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ExperienceEntry {
    pub organization: String,
    pub role: String,
    pub location: Option<String>,
    pub dates: Dates,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    /// Never empty
    pub tech_stack: Vec<String>,
}

/// A profile that passed validation
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Resume {
    pub name: String,
    pub contact: ResumeContact,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: Skills,
}

impl Resume {
    /// Skills listed under `category`, empty when the category is absent
    pub fn skills_in(&self, category: &str) -> &[String] {
        self.skills.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Convert a profile the default rules found no fault with
    ///
    /// Returns `None` if a field the layout needs is still missing, which
    /// only happens when the profile was checked with a reduced rule set.
    pub(crate) fn from_checked(profile: Profile, today: NaiveDate) -> Option<Self> {
        let contact = profile.contact?;
        let contact = ResumeContact {
            phone: contact.phone?,
            email: contact.email?,
            location: contact.location,
            linkedin: contact.linkedin?,
        };

        let education = profile
            .education
            .into_iter()
            .map(|entry| {
                Some(EducationEntry {
                    institution: present(entry.institution)?,
                    degree: present(entry.degree)?,
                    dates: dates(entry.dates, today)?,
                    relevant_courses: entry.relevant_courses,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        let experience = profile
            .professional_experience
            .into_iter()
            .map(|entry| {
                Some(ExperienceEntry {
                    organization: present(entry.organization)?,
                    role: present(entry.role)?,
                    location: entry.location,
                    dates: dates(entry.dates, today)?,
                    responsibilities: entry.responsibilities,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        let projects = profile
            .projects
            .into_iter()
            .map(|project| {
                if project.tech_stack.is_empty() {
                    return None;
                }
                Some(ProjectEntry {
                    name: present(project.name)?,
                    description: present(project.description)?,
                    tech_stack: project.tech_stack,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            name: present(profile.name)?,
            contact,
            education,
            experience,
            projects,
            skills: profile.skills,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn dates(value: Option<String>, today: NaiveDate) -> Option<Dates> {
    let text = present(value)?;
    let range = DateRange::parse_ordered(&text, today).ok()?;
    Some(Dates { text, range })
}
