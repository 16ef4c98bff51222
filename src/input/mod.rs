//! Input handling: turning resume and job posting files into plain text

pub mod text_extractor;

use crate::error::{JobMatcherError, Result};
use std::path::Path;
use text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};

/// Reads an input file and extracts plain text based on its extension.
pub struct InputManager;

impl InputManager {
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(JobMatcherError::InvalidInput(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .ok_or_else(|| {
                JobMatcherError::UnsupportedFormat(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        log::debug!("reading {} as {}", path.display(), extension);

        match extension.as_str() {
            "txt" => PlainTextExtractor.extract(path),
            "md" | "markdown" => MarkdownExtractor.extract(path),
            "pdf" => PdfExtractor.extract(path),
            other => Err(JobMatcherError::UnsupportedFormat(format!(
                "Unsupported file extension: .{}",
                other
            ))),
        }
    }
}
