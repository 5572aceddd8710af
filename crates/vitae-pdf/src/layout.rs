//! Resume layout
//!
//! Maps a validated `Resume` onto a flat sequence of document blocks. The
//! block list says what goes on the page and in which order; turning it into
//! Typst markup is the transpiler's job.

use vitae_validate::{EducationEntry, ExperienceEntry, ProjectEntry, Resume};

/// Page geometry in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    /// Applied to all four sides
    pub margin: f32,
}

/// US Letter with half-inch margins
pub const LETTER: PageSetup = PageSetup {
    width: 612.0,
    height: 792.0,
    margin: 36.0,
};

/// Share of the usable width given to the left and right column of a row
pub const COLUMN_SPLIT: (f32, f32) = (0.7, 0.3);

/// Skill categories the template prints, with their labels
pub const SKILL_LINES: [(&str, &str); 2] = [
    (
        "programming_languages_and_frameworks",
        "Programming Languages & Frameworks:",
    ),
    ("soft_skills", "Soft Skills:"),
];

/// Inline text style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Bold,
    Italic,
}

/// A run of text in one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Bold,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Italic,
        }
    }
}

/// One row of a two-column table; the right cell is right-aligned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub left: Option<Span>,
    pub right: Option<Span>,
}

/// Block-level layout element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Large bold centered name
    Title(String),
    /// A centered line of plain text
    Centered(String),
    /// Vertical space in points
    Spacer(f32),
    /// Bold section heading
    SectionHeading(String),
    /// Full-width horizontal rule
    Rule,
    /// Two-column table split by `COLUMN_SPLIT`
    Columns(Vec<ColumnRow>),
    /// A paragraph of styled runs
    Paragraph(Vec<Span>),
    /// A bulleted list
    Bullets(Vec<String>),
}

/// Lay out a resume, top to bottom
pub fn lay_out(resume: &Resume) -> Vec<Block> {
    let mut blocks = Vec::new();

    blocks.push(Block::Title(resume.name.clone()));
    let contact = &resume.contact;
    blocks.push(Block::Centered(
        [
            contact.phone.as_str(),
            contact.email.as_str(),
            contact.location.as_deref().unwrap_or_default(),
            contact.linkedin.as_str(),
        ]
        .join(" | "),
    ));
    blocks.push(Block::Spacer(12.0));

    section(&mut blocks, "EDUCATION");
    for entry in &resume.education {
        education(&mut blocks, entry);
        blocks.push(Block::Spacer(10.0));
    }

    blocks.push(Block::Spacer(12.0));
    section(&mut blocks, "PROFESSIONAL EXPERIENCE");
    for entry in &resume.experience {
        experience(&mut blocks, entry);
        blocks.push(Block::Spacer(10.0));
    }

    blocks.push(Block::Spacer(12.0));
    section(&mut blocks, "PROJECTS");
    for entry in &resume.projects {
        project(&mut blocks, entry);
        blocks.push(Block::Spacer(10.0));
    }

    blocks.push(Block::Spacer(12.0));
    section(&mut blocks, "SKILLS");
    for (i, (category, label)) in SKILL_LINES.iter().enumerate() {
        if i > 0 {
            blocks.push(Block::Spacer(6.0));
        }
        blocks.push(Block::Paragraph(vec![
            Span::bold(*label),
            Span::plain(format!(" {}", resume.skills_in(category).join(", "))),
        ]));
    }

    blocks
}

fn section(blocks: &mut Vec<Block>, title: &str) {
    blocks.push(Block::SectionHeading(title.to_string()));
    blocks.push(Block::Rule);
}

fn education(blocks: &mut Vec<Block>, entry: &EducationEntry) {
    let mut rows = vec![
        ColumnRow {
            left: Some(Span::bold(&entry.institution)),
            right: Some(Span::bold(&entry.dates.text)),
        },
        ColumnRow {
            left: Some(Span::italic(&entry.degree)),
            right: None,
        },
    ];
    if let Some(courses) = &entry.relevant_courses {
        rows.push(ColumnRow {
            left: Some(Span::plain(format!(
                "Relevant Courses: {}",
                courses.join(", ")
            ))),
            right: None,
        });
    }
    blocks.push(Block::Columns(rows));
}

fn experience(blocks: &mut Vec<Block>, entry: &ExperienceEntry) {
    blocks.push(Block::Columns(vec![
        ColumnRow {
            left: Some(Span::bold(&entry.organization)),
            right: Some(Span::bold(&entry.dates.text)),
        },
        ColumnRow {
            left: Some(Span::italic(&entry.role)),
            right: None,
        },
    ]));
    if !entry.responsibilities.is_empty() {
        blocks.push(Block::Bullets(entry.responsibilities.clone()));
    }
}

fn project(blocks: &mut Vec<Block>, project: &ProjectEntry) {
    blocks.push(Block::Paragraph(vec![Span::bold(&project.name)]));
    blocks.push(Block::Bullets(vec![
        project.description.clone(),
        format!("Tech Stack: {}", project.tech_stack.join(", ")),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::resume;

    fn headings(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match b {
                Block::SectionHeading(title) => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_letter_geometry() {
        assert_eq!((LETTER.width, LETTER.height, LETTER.margin), (612.0, 792.0, 36.0));
    }

    #[test]
    fn test_title_block() {
        let blocks = lay_out(&resume());
        assert_eq!(blocks[0], Block::Title("John Doe".to_string()));
        assert_eq!(
            blocks[1],
            Block::Centered(
                "+1 5551234567 | john@example.com | Somewhere, Earth | https://linkedin.com/in/johndoe"
                    .to_string()
            )
        );
        assert_eq!(blocks[2], Block::Spacer(12.0));
    }

    #[test]
    fn test_sections_in_fixed_order_each_followed_by_rule() {
        let blocks = lay_out(&resume());
        assert_eq!(
            headings(&blocks),
            vec!["EDUCATION", "PROFESSIONAL EXPERIENCE", "PROJECTS", "SKILLS"]
        );
        for (i, block) in blocks.iter().enumerate() {
            if matches!(block, Block::SectionHeading(_)) {
                assert_eq!(blocks[i + 1], Block::Rule);
            }
        }
    }

    #[test]
    fn test_education_rows() {
        let blocks = lay_out(&resume());
        let Some(Block::Columns(rows)) = blocks.iter().find(|b| matches!(b, Block::Columns(_)))
        else {
            panic!("no education table");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].left, Some(Span::bold("University of Somewhere")));
        assert_eq!(rows[0].right, Some(Span::bold("August 2015 - May 2019")));
        assert_eq!(rows[1].left, Some(Span::italic("Bachelors in Science")));
        assert_eq!(
            rows[2].left,
            Some(Span::plain("Relevant Courses: Course 1, Course 2"))
        );
    }

    #[test]
    fn test_experience_bullets() {
        let blocks = lay_out(&resume());
        assert!(blocks.contains(&Block::Bullets(vec![
            "Developed software solutions".to_string(),
            "Collaborated with teams".to_string(),
        ])));
    }

    #[test]
    fn test_project_has_exactly_two_bullets() {
        let blocks = lay_out(&resume());
        let index = blocks
            .iter()
            .position(|b| *b == Block::Paragraph(vec![Span::bold("Project A")]))
            .unwrap();
        assert_eq!(
            blocks[index + 1],
            Block::Bullets(vec![
                "A project description".to_string(),
                "Tech Stack: Python, Django".to_string(),
            ])
        );
    }

    #[test]
    fn test_only_two_skill_lines() {
        let blocks = lay_out(&resume());
        let skills = blocks
            .iter()
            .skip_while(|b| **b != Block::SectionHeading("SKILLS".to_string()))
            .filter(|b| matches!(b, Block::Paragraph(_)))
            .count();
        assert_eq!(skills, 2);
        assert_eq!(
            blocks.last(),
            Some(&Block::Paragraph(vec![
                Span::bold("Soft Skills:"),
                Span::plain(" Communication, Problem Solving"),
            ]))
        );
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(lay_out(&resume()), lay_out(&resume()));
    }
}
