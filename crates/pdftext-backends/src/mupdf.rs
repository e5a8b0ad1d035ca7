use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pdftext_core::registry::BACKEND_MUPDF;
use pdftext_core::{BackendError, PdfBackend, expand_ligatures, tables};

/// Layout-aware backend built on MuPDF structured text.
///
/// Each non-empty page's text goes under a `--- PAGE n ---` marker;
/// whitespace-only pages are skipped. Lines whose spacing still encodes
/// columns are additionally rendered as pipe-delimited rows under a
/// per-page tables marker. Typographic ligatures are expanded
/// (ﬁ → fi, ﬂ → fl, …).
#[derive(Debug, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn name(&self) -> &'static str {
        BACKEND_MUPDF
    }

    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut text = String::new();
        for (index, page_result) in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
            .enumerate()
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            // Block/line iteration keeps reading order stable
            let mut page_text = String::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    page_text.push_str(&line_text);
                    page_text.push('\n');
                }
            }

            if page_text.trim().is_empty() {
                continue;
            }
            text.push_str(&format!(
                "\n--- PAGE {} ---\n{}\n",
                index + 1,
                page_text.trim_end()
            ));

            let detected = tables::detect_tables(&page_text);
            if !detected.is_empty() {
                text.push_str(&format!("\n--- TABLES ON PAGE {} ---\n", index + 1));
                text.push_str(&tables::render_tables(&detected));
            }
        }

        Ok(expand_ligatures(text.trim()))
    }
}
