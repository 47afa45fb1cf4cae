//! Name extraction from the window between the NIK and birth-date anchors.
//!
//! The printed name sits between the NIK row and the birth row, but OCR
//! interleaves it with card chrome (labels, blood type, gender). The window
//! is filtered against a fixed boilerplate vocabulary and anything carrying
//! digits; whatever survives is joined and sieved down to name characters.

use super::patterns::{ANY_DIGIT, NAME_LABELS, NON_NAME_CHARS};

/// Default number of lines scanned below the NIK anchor when no date
/// anchor bounds the window.
pub const DEFAULT_NAME_WINDOW_SPAN: usize = 3;

/// Boilerplate vocabulary: a window line containing any of these
/// (case-insensitive substring match) is card chrome, not a name.
pub const IGNORE_WORDS: [&str; 11] = [
    "NIK",
    "PROVINSI",
    "KABUPATEN",
    "KOTA",
    "GOL. DARAH",
    "GOL",
    "DARAH",
    "LAKI-LAKI",
    "PEREMPUAN",
    "AGAMA",
    "KARYAWAN",
];

/// Check whether a candidate line is boilerplate.
pub fn is_ignored(line: &str, extra_ignore: &[String]) -> bool {
    let upper = line.to_uppercase();

    IGNORE_WORDS.iter().any(|word| upper.contains(word))
        || extra_ignore
            .iter()
            .any(|word| upper.contains(&word.to_uppercase()))
}

/// Assemble the name from the window lines.
///
/// Lines shorter than three characters, lines containing digits and
/// boilerplate lines are skipped. Survivors are joined with single spaces,
/// stripped of leaked labels and colons, and sieved down to letters,
/// whitespace and periods. The result may be empty when nothing survives.
pub fn assemble_name(
    lines: &[&str],
    window: std::ops::Range<usize>,
    extra_ignore: &[String],
) -> String {
    let mut candidates = Vec::new();

    for index in window {
        if let Some(line) = lines.get(index) {
            let line = line.trim();

            if line.len() < 3 {
                continue;
            }
            if is_ignored(line, extra_ignore) {
                continue;
            }
            if ANY_DIGIT.is_match(line) {
                continue;
            }

            candidates.push(line);
        }
    }

    let raw = candidates.join(" ");
    let without_labels = NAME_LABELS.replace_all(&raw, "");
    let without_colons = without_labels.replace(':', "");

    NON_NAME_CHARS
        .replace_all(&without_colons, "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_survives() {
        let lines = ["NIK", "3302021201990001", "JOHN DOE"];
        assert_eq!(assemble_name(&lines, 2..5, &[]), "JOHN DOE");
    }

    #[test]
    fn test_leaked_labels_are_stripped() {
        let lines = ["Nama", "JOHN DOE", "Tempat/Tgl Lahir"];
        assert_eq!(assemble_name(&lines, 0..3, &[]), "JOHN DOE");
    }

    #[test]
    fn test_boilerplate_lines_are_ignored() {
        let lines = ["GOL. DARAH : O", "LAKI-LAKI", "JOHN DOE", "AGAMA ISLAM"];
        let name = assemble_name(&lines, 0..4, &[]);
        assert_eq!(name, "JOHN DOE");
        assert!(!name.contains("DARAH"));
    }

    #[test]
    fn test_ignore_vocabulary_is_case_insensitive() {
        let lines = ["Gol. Darah AB", "perempuan", "SITI AMINAH"];
        assert_eq!(assemble_name(&lines, 0..3, &[]), "SITI AMINAH");
    }

    #[test]
    fn test_lines_with_digits_are_skipped() {
        let lines = ["JOHN DOE", "RT 003 RW 001"];
        assert_eq!(assemble_name(&lines, 0..2, &[]), "JOHN DOE");
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let lines = ["JO", "JOHN DOE"];
        assert_eq!(assemble_name(&lines, 0..2, &[]), "JOHN DOE");
    }

    #[test]
    fn test_titles_keep_periods() {
        let lines = ["DR. JOHN DOE S.KOM"];
        assert_eq!(assemble_name(&lines, 0..1, &[]), "DR. JOHN DOE S.KOM");
    }

    #[test]
    fn test_extra_ignore_words() {
        let extra = vec!["WIRASWASTA".to_string()];
        let lines = ["WIRASWASTA", "JOHN DOE"];
        assert_eq!(assemble_name(&lines, 0..2, &extra), "JOHN DOE");
    }

    #[test]
    fn test_empty_window_yields_empty_name() {
        let lines = ["JOHN DOE"];
        assert_eq!(assemble_name(&lines, 1..4, &[]), "");
    }
}
