//! Terminal summary
//!
//! Prints a profile as labeled lines. Works on any profile, validated or not:
//! a missing text field prints as `None` and a missing list prints empty, but
//! every label of every entry is always written.

use std::io::{self, Write};

use vitae_model::Profile;

/// Line written instead of a summary when the profile is empty
pub const NO_DATA: &str = "Error: No user data found";

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("None")
}

/// Write the summary of `profile` to `out`
pub fn write_summary<W: Write>(profile: &Profile, out: &mut W) -> io::Result<()> {
    if profile.is_empty() {
        writeln!(out, "{}", NO_DATA)?;
        return Ok(());
    }

    let contact = profile.contact_or_default();
    writeln!(out, "Name: {}", or_none(&profile.name))?;
    writeln!(out, "Phone: {}", or_none(&contact.phone))?;
    writeln!(out, "Email: {}", or_none(&contact.email))?;
    writeln!(out, "Location: {}", or_none(&contact.location))?;
    writeln!(out, "Linkedin: {}", or_none(&contact.linkedin))?;

    writeln!(out, "\nEducation:")?;
    for edu in &profile.education {
        writeln!(
            out,
            "  - {} from {} ({})",
            or_none(&edu.degree),
            or_none(&edu.institution),
            or_none(&edu.dates)
        )?;
        writeln!(
            out,
            "  Relevant Courses: {}",
            edu.relevant_courses.as_deref().unwrap_or_default().join(", ")
        )?;
    }

    writeln!(out, "\nProfessional Experience:")?;
    for exp in &profile.professional_experience {
        writeln!(
            out,
            "  - {} at {} ({})",
            or_none(&exp.role),
            or_none(&exp.organization),
            or_none(&exp.dates)
        )?;
        writeln!(out, "    Location: {}", or_none(&exp.location))?;
        writeln!(
            out,
            "    Responsibilities: {}",
            exp.responsibilities.join(", ")
        )?;
    }

    writeln!(out, "\nProjects:")?;
    for project in &profile.projects {
        writeln!(
            out,
            "  - {}: {}",
            or_none(&project.name),
            or_none(&project.description)
        )?;
        writeln!(out, "    Tech Stack: {}", project.tech_stack.join(", "))?;
    }

    writeln!(out, "\nSkills:")?;
    writeln!(
        out,
        "  Programming Languages & Frameworks: {}",
        profile
            .skills_in("programming_languages_and_frameworks")
            .join(", ")
    )?;
    writeln!(
        out,
        "  Soft Skills: {}",
        profile.skills_in("soft_skills").join(", ")
    )?;

    Ok(())
}

/// Print the summary of `profile` to stdout
pub fn print_summary(profile: &Profile) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summary(profile, &mut out)
}
