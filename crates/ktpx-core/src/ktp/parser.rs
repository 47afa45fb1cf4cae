//! Rule-based KTP parser composing the per-field anchor extractors.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::record::KtpRecord;

use super::rules::{
    address::AddressExtractor,
    birth::BirthExtractor,
    name::{assemble_name, DEFAULT_NAME_WINDOW_SPAN},
    nik::NikExtractor,
    patterns::LINE_BREAK,
    FieldExtractor,
};
use super::KtpExtractor;

/// Result of a KTP extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record; any subset of its fields may be absent.
    pub record: KtpRecord,
    /// One entry per field that could not be extracted.
    pub warnings: Vec<String>,
    /// Record-level confidence (0.0 - 1.0), derived from completeness.
    pub confidence: f32,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Line indices of the anchors located so far, threaded between stages so
/// the positional coupling stays explicit.
#[derive(Debug, Clone, Copy, Default)]
struct ScanAnchors {
    nik_line: Option<usize>,
    date_line: Option<usize>,
}

/// Rule-based KTP parser.
///
/// The card layout is a fixed vertical order (NIK, then name, then
/// birthplace/date, then address), so each stage is a first-match-wins
/// scan and the name stage is bounded by the anchors around it. Every stage
/// degrades independently: a missing anchor leaves its field unset and
/// never blocks the others.
pub struct RuleBasedParser {
    /// Window height below the NIK line when no date anchor is found.
    name_window_span: usize,
    /// Extra ignore-vocabulary entries for the name window.
    extra_ignore_words: Vec<String>,
}

impl RuleBasedParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            name_window_span: DEFAULT_NAME_WINDOW_SPAN,
            extra_ignore_words: Vec::new(),
        }
    }

    /// Build a parser from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            name_window_span: config.name_window_span,
            extra_ignore_words: config.extra_ignore_words.clone(),
        }
    }

    /// Set the fallback name-window height.
    pub fn with_name_window_span(mut self, span: usize) -> Self {
        self.name_window_span = span;
        self
    }

    /// Append extra ignore-vocabulary entries for the name window.
    pub fn with_extra_ignore_words(mut self, words: Vec<String>) -> Self {
        self.extra_ignore_words.extend(words);
        self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl KtpExtractor for RuleBasedParser {
    fn extract(&self, lines: &[&str]) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing KTP fields from {} OCR lines", lines.len());

        let mut record = KtpRecord::default();
        let mut anchors = ScanAnchors::default();

        if let Some(found) = NikExtractor::new().extract(lines) {
            debug!("Found NIK {} on line {}", found.value, found.line);
            anchors.nik_line = Some(found.line);
            record.nik = Some(found.value);
        }

        if let Some(found) = BirthExtractor::new().extract(lines) {
            debug!(
                "Found birth date {} on line {}",
                found.value.date, found.line
            );
            anchors.date_line = Some(found.line);
            record.birth_date = Some(found.value.date);
            record.birthplace = Some(found.value.place);
        }

        // The name window opens below the NIK anchor and closes at the
        // date anchor, or after a fixed span when no date was found.
        if let Some(nik_line) = anchors.nik_line {
            let window_start = nik_line + 1;
            let window_end = anchors
                .date_line
                .unwrap_or(window_start + self.name_window_span);

            record.name = Some(assemble_name(
                lines,
                window_start..window_end,
                &self.extra_ignore_words,
            ));
        }

        if let Some(found) = AddressExtractor::new().extract(lines) {
            debug!("Found address on line {}", found.line);
            record.address = Some(found.value);
        }

        let warnings: Vec<String> = record
            .missing_fields()
            .iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        let confidence = score_confidence(&record);

        debug!(
            "Extraction finished with confidence {:.2} ({} fields missing)",
            confidence,
            warnings.len()
        );

        ExtractionResult {
            record,
            warnings,
            confidence,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        let lines: Vec<&str> = LINE_BREAK.split(text).collect();
        self.extract(&lines)
    }
}

/// Record-level confidence: fixed deduction per missing field, floored at
/// zero. The NIK weighs heaviest since every downstream consumer keys on it.
fn score_confidence(record: &KtpRecord) -> f32 {
    let mut confidence = 1.0f32;

    if record.nik.is_none() {
        confidence -= 0.3;
    }
    if record.name.is_none() {
        confidence -= 0.2;
    }
    if record.birth_date.is_none() {
        confidence -= 0.2;
    }
    if record.birthplace.is_none() {
        confidence -= 0.1;
    }
    if record.address.is_none() {
        confidence -= 0.2;
    }

    confidence.max(0.0)
}
