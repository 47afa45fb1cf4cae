//! Rule-based field extractors for KTP card text.

pub mod address;
pub mod birth;
pub mod name;
pub mod nik;
pub mod patterns;

pub use address::{extract_address, AddressExtractor};
pub use birth::{extract_birth, BirthAnchor, BirthExtractor};
pub use name::{assemble_name, DEFAULT_NAME_WINDOW_SPAN, IGNORE_WORDS};
pub use nik::{extract_nik, NikExtractor};
pub use patterns::*;

/// Trait for field extractors.
///
/// Extractors scan the ordered OCR lines rather than flat text: every
/// downstream decision on a KTP is positional, so a match must know which
/// line it came from.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from the ordered OCR lines.
    fn extract(&self, lines: &[&str]) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output>;
}

/// A value located on a specific input line.
#[derive(Debug, Clone)]
pub struct LineMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Index of the line the value was found on.
    pub line: usize,
    /// The source line as received.
    pub source: String,
}

impl<T> LineMatch<T> {
    pub fn new(value: T, line: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            line,
            source: source.into(),
        }
    }
}
