//! vitae-pdf - PDF resume generation via Typst
//!
//! This crate turns a validated `Resume` into a one-document PDF using Typst
//! as the typesetting backend.
//!
//! # Architecture
//!
//! The pipeline consists of three stages:
//!
//! 1. **Layout** - Maps the `Resume` to a sequence of document blocks
//! 2. **Transpiler** - Converts the blocks to Typst markup
//! 3. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! Only `Resume` is accepted, so everything the layout reads is known to be
//! present.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vitae_pdf::{write_resume, RenderOptions};
//!
//! let resume = engine.accept(profile)?;
//! let path = write_resume(&resume, Path::new("output"), &RenderOptions::default())?;
//! ```

mod compiler;
mod error;
pub mod layout;
mod transpiler;
mod writer;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use layout::{lay_out, Block, LETTER};
pub use transpiler::Transpiler;
pub use writer::{output_file_name, output_path, write_resume, RenderOptions, DEFAULT_OUTPUT_DIR};

use std::path::Path;

use tracing::debug;
use vitae_validate::Resume;

/// Typst markup for a resume
pub fn typst_markup(resume: &Resume) -> String {
    let blocks = lay_out(resume);
    debug!(blocks = blocks.len(), "resume laid out");
    Transpiler::transpile(&resume.name, &LETTER, &blocks)
}

/// Convenience function to render a resume to PDF
pub fn render_pdf(resume: &Resume) -> Result<Vec<u8>> {
    Compiler::compile(&typst_markup(resume))
}

/// Render with font files loaded from disk
pub fn render_pdf_with_fonts<P: AsRef<Path>>(resume: &Resume, font_paths: &[P]) -> Result<Vec<u8>> {
    Compiler::compile_with_fonts(&typst_markup(resume), font_paths)
}
