//! NIK (Indonesian national identity number) extraction.

use super::patterns::NIK_RUN;
use super::{FieldExtractor, LineMatch};

/// NIK field extractor.
///
/// The NIK is a run of 16 digits; bullets and other OCR noise around it are
/// ignored, and a longer digit run contributes its first 16 digits. Unlike
/// a tax number the NIK carries no checksum, so the run itself is the whole
/// anchor.
pub struct NikExtractor;

impl NikExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NikExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NikExtractor {
    type Output = LineMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.extract_all(lines).into_iter().next()
    }

    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            for caps in NIK_RUN.captures_iter(line) {
                results.push(LineMatch::new(caps[1].to_string(), index, *line));
            }
        }

        results
    }
}

/// Extract the first NIK from the lines.
pub fn extract_nik(lines: &[&str]) -> Option<String> {
    NikExtractor::new().extract(lines).map(|m| m.value)
}
