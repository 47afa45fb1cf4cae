//! Named regex patterns for KTP field extraction.
//!
//! Stage logic never embeds inline pattern strings; each anchor lives here
//! under a name so it can be tested and reasoned about on its own.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // NIK: a run of 16 digits, surrounding OCR noise ignored
    pub static ref NIK_RUN: Regex = Regex::new(r"(\d{16})").unwrap();

    // Loose date: day, month, 2-4 digit year, each pair optionally split
    // by a single space, hyphen or slash (OCR often drops separators)
    pub static ref DATE_LOOSE: Regex = Regex::new(
        r"(\d{2})[-/ ]?(\d{2})[-/ ]?(\d{2,4})"
    ).unwrap();

    // Printed labels around the birthplace/date line ("Tempal" is the
    // usual OCR misread of "Tempat")
    pub static ref BIRTH_LABELS: Regex = Regex::new(
        r"(?i)\b(Tempat|Tempal|Tgl|Lahir)\b"
    ).unwrap();

    // Labels that can leak into the name window
    pub static ref NAME_LABELS: Regex = Regex::new(
        r"(?i)\b(Nama|Tempat|Tempal|Tgl|Lahir)\b"
    ).unwrap();

    // Anything that cannot appear in a printed name
    pub static ref NON_NAME_CHARS: Regex = Regex::new(r"[^A-Za-z\s.]").unwrap();

    pub static ref ANY_DIGIT: Regex = Regex::new(r"\d").unwrap();

    // Address label, and what gets stripped from a labeled address line
    pub static ref ADDRESS_LABEL: Regex = Regex::new(r"(?i)Alamat").unwrap();

    pub static ref ADDRESS_STRIP: Regex = Regex::new(r"(?i)Alamat|:").unwrap();

    // Street keywords anchoring the unlabeled-address fallback
    pub static ref STREET_KEYWORDS: Regex = Regex::new(
        r"(?i)\b(Jalan|Jln|Jl\.|Dusun|Kmp|Blok|Mess|Perum)\b"
    ).unwrap();

    // OCR output may carry any of the three newline conventions
    pub static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nik_run_ignores_noise() {
        let caps = NIK_RUN.captures("••3302021201990001").unwrap();
        assert_eq!(&caps[1], "3302021201990001");
    }

    #[test]
    fn test_date_loose_separator_variants() {
        for line in ["12-05-1995", "12/05/1995", "12 05 1995", "120595"] {
            let caps = DATE_LOOSE.captures(line).unwrap();
            assert_eq!(&caps[1], "12");
            assert_eq!(&caps[2], "05");
        }
    }

    #[test]
    fn test_birth_labels_whole_word_only() {
        assert!(BIRTH_LABELS.is_match("Tempat/Tgl Lahir"));
        assert!(BIRTH_LABELS.is_match("TEMPAL"));
        // Embedded occurrences are not labels
        assert!(!BIRTH_LABELS.is_match("SITGLAHIRIN"));
    }

    #[test]
    fn test_street_keywords() {
        assert!(STREET_KEYWORDS.is_match("DUSUN KRAJAN RT 01"));
        assert!(STREET_KEYWORDS.is_match("PERUM GRIYA ASRI"));
        assert!(!STREET_KEYWORDS.is_match("JALANAN"));
    }

    #[test]
    fn test_line_break_variants() {
        let lines: Vec<&str> = LINE_BREAK.split("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }
}
