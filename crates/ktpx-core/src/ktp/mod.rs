//! KTP field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, RuleBasedParser};

/// Trait for KTP field extractors.
pub trait KtpExtractor {
    /// Extract fields from pre-split OCR lines.
    fn extract(&self, lines: &[&str]) -> ExtractionResult;

    /// Extract fields from raw OCR text, splitting it into lines first.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;
}
