//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib. The fonts bundled
//! with Typst are always available; font files given by the caller are
//! loaded alongside them.

use std::path::Path;

use tracing::{debug, warn};
use typst_as_lib::TypstEngine;

use crate::error::{PdfError, Result};

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&Path>(markup, &[])
    }

    /// Compile with font files loaded from `font_paths`
    pub fn compile_with_fonts<P: AsRef<Path>>(markup: &str, font_paths: &[P]) -> Result<Vec<u8>> {
        let mut fonts: Vec<Vec<u8>> = typst_assets::fonts().map(<[u8]>::to_vec).collect();
        fonts.extend(load_fonts(font_paths)?);

        // fonts() replaces the list, so it is handed everything at once
        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .fonts(fonts)
            .build();

        // Warned<Result<Document, Error>>: output plus any warnings
        let compiled = engine.compile();
        for warning in &compiled.warnings {
            warn!("typst: {}", warning.message);
        }

        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        // No timestamp, so identical markup gives identical bytes
        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

/// Read every font file in order, failing on the first unreadable one
fn load_fonts<P: AsRef<Path>>(font_paths: &[P]) -> Result<Vec<Vec<u8>>> {
    font_paths
        .iter()
        .map(|font_path| {
            let font_path = font_path.as_ref();
            let bytes = std::fs::read(font_path).map_err(|e| {
                PdfError::Font(format!("Failed to read font {}: {}", font_path.display(), e))
            })?;
            debug!(font = %font_path.display(), "font loaded");
            Ok(bytes)
        })
        .collect()
}

#[cfg(test)]
pub(crate) fn has_embedded_font(pdf: &[u8]) -> bool {
    let contains = |needle: &[u8]| pdf.windows(needle.len()).any(|w| w == needle);
    contains(b"/FontFile") || contains(b"/BaseFont")
}
