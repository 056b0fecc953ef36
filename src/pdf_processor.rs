use once_cell::sync::Lazy;
use pdf::content::{Content, Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use pdf::object::Resolve;
use regex::Regex;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::DocumentReadError;

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\u{a0}]+").expect("valid whitespace regex"));

pub struct PdfProcessor;

impl PdfProcessor {
    /// Reads a resume into memory. The bytes are never copied to a shared
    /// location.
    pub fn read_resume(path: &Path) -> Result<Vec<u8>, DocumentReadError> {
        Ok(std::fs::read(path)?)
    }

    /// Concatenated text of every page, in page order. Pages without text
    /// (scans, images) contribute nothing; only an unreadable document is an
    /// error.
    pub fn extract_text(bytes: &[u8], password: Option<&str>) -> Result<String, DocumentReadError> {
        if !bytes.windows(5).take(1024).any(|w| w == b"%PDF-") {
            return Err(DocumentReadError::Malformed("missing %PDF header".to_string()));
        }

        let options = FileOptions::cached();
        let options = match password {
            Some(password) => options.password(password.as_bytes()),
            None => options,
        };
        let file = options.load(bytes.to_vec())?;

        let total_pages = file.num_pages();
        debug!("PDF has {} pages", total_pages);

        let mut full_text = String::new();
        for page_num in 0..total_pages {
            let page = match file.get_page(page_num) {
                Ok(page) => page,
                Err(e) => {
                    warn!("Failed to get page {}: {}", page_num + 1, e);
                    continue;
                }
            };

            let mut page_text = String::new();
            if let Some(content) = &page.contents {
                if let Err(e) = Self::extract_text_from_content(&file, content, &mut page_text) {
                    warn!("Failed to extract text from page {}: {}", page_num + 1, e);
                }
            }

            let cleaned = Self::clean_extracted_text(&page_text);
            if cleaned.is_empty() {
                debug!("No text on page {}", page_num + 1);
                continue;
            }
            debug!("Page {} extracted {} chars", page_num + 1, cleaned.len());
            full_text.push_str(&cleaned);
            full_text.push('\n');
        }

        Ok(full_text)
    }

    /// Collapses runs of spaces inside each line and drops blank lines.
    /// Line structure is kept for the experience extractor.
    fn clean_extracted_text(raw_text: &str) -> String {
        raw_text
            .lines()
            .map(|line| SPACES_RE.replace_all(line.trim(), " ").into_owned())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn extract_text_from_content(
        resolver: &impl Resolve,
        content: &Content,
        text: &mut String,
    ) -> Result<(), DocumentReadError> {
        for op in content.operations(resolver)? {
            match op {
                Op::TextDraw { text: t } => {
                    text.push_str(&t.to_string_lossy());
                }
                Op::TextDrawAdjusted { array } => {
                    for item in array {
                        match item {
                            TextDrawAdjusted::Text(t) => text.push_str(&t.to_string_lossy()),
                            // Large negative kerning is how many producers encode a space.
                            TextDrawAdjusted::Spacing(gap) if gap < -200.0 => text.push(' '),
                            TextDrawAdjusted::Spacing(_) => {}
                        }
                    }
                }
                Op::TextNewline => text.push('\n'),
                Op::MoveTextPosition { translation } => {
                    if translation.y.abs() > 0.5 {
                        text.push('\n');
                    } else {
                        text.push(' ');
                    }
                }
                Op::EndText => text.push('\n'),
                _ => {}
            }
        }
        Ok(())
    }
}
