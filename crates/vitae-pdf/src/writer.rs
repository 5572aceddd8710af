//! Output files
//!
//! The PDF is named after the person, `<Full_Name>_resume.pdf`, and placed in
//! an output directory that is created on demand.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use vitae_validate::Resume;

use crate::error::Result;

/// Directory used when none is configured
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Options for writing a resume
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Font files handed to the typesetter
    pub fonts: Vec<PathBuf>,
}

/// File name for a person's resume
///
/// Spaces and path separators become underscores, so the file always lands
/// directly inside the output directory.
pub fn output_file_name(name: &str) -> String {
    format!("{}_resume.pdf", name.replace([' ', '/', '\\'], "_"))
}

/// Full output path for a person's resume inside `output_dir`
pub fn output_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(output_file_name(name))
}

/// Render a resume and write it into `output_dir`
///
/// Creates `output_dir` if needed and returns the written path.
pub fn write_resume(resume: &Resume, output_dir: &Path, options: &RenderOptions) -> Result<PathBuf> {
    let bytes = crate::render_pdf_with_fonts(resume, options.fonts.as_slice())?;

    fs::create_dir_all(output_dir)?;
    let path = output_path(output_dir, &resume.name);
    fs::write(&path, &bytes)?;

    info!(path = %path.display(), size = bytes.len(), "resume written");
    Ok(path)
}
