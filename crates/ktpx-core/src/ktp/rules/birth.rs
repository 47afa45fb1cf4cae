//! Birth date and birthplace extraction.
//!
//! Both fields come from the same line: on a KTP they share the row under
//! the "Tempat/Tgl Lahir" label, so the first line whose leading date-like
//! digit group forms a calendar-valid date supplies the date, and whatever
//! text remains on that line after stripping the date and labels is the
//! birthplace.

use chrono::NaiveDate;

use super::patterns::{BIRTH_LABELS, DATE_LOOSE};
use super::{FieldExtractor, LineMatch};

/// Birth date plus the birthplace text sharing its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthAnchor {
    /// Calendar-validated birth date.
    pub date: NaiveDate,
    /// First comma-separated segment of the line once the date and labels
    /// are stripped. May be empty when the line held nothing but the date.
    pub place: String,
}

/// Birth date/place field extractor.
pub struct BirthExtractor;

impl BirthExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BirthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for BirthExtractor {
    type Output = LineMatch<BirthAnchor>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        self.extract_all(lines).into_iter().next()
    }

    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            // Only the first date-like group per line counts; a NIK line
            // would otherwise back-fill a bogus date from a later offset.
            if let Some(caps) = DATE_LOOSE.captures(line) {
                let day: u32 = caps[1].parse().unwrap_or(0);
                let month: u32 = caps[2].parse().unwrap_or(0);
                let year = normalize_year(&caps[3]);

                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                    let place = derive_birthplace(line, matched);
                    results.push(LineMatch::new(BirthAnchor { date, place }, index, *line));
                }
            }
        }

        results
    }
}

/// Extract the first calendar-valid birth anchor.
pub fn extract_birth(lines: &[&str]) -> Option<LineMatch<BirthAnchor>> {
    BirthExtractor::new().extract(lines)
}

/// Century completion for two-digit years: values above 50 read as 19xx,
/// the rest as 20xx.
fn normalize_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if s.len() == 2 {
        if year > 50 {
            1900 + year
        } else {
            2000 + year
        }
    } else {
        year
    }
}

/// Strip the matched date and the field labels from the line; the first
/// comma-separated segment of what remains is the birthplace.
fn derive_birthplace(line: &str, matched_date: &str) -> String {
    let without_date = line.replace(matched_date, "");
    let without_labels = BIRTH_LABELS.replace_all(&without_date, "");
    let cleaned: String = without_labels
        .chars()
        .filter(|c| !matches!(c, ':' | '/' | '-'))
        .collect();

    cleaned.split(',').next().unwrap_or("").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth_date(lines: &[&str]) -> Option<NaiveDate> {
        extract_birth(lines).map(|m| m.value.date)
    }

    #[test]
    fn test_extract_labeled_birth_line() {
        let found = extract_birth(&["Tempat/Tgl Lahir", "JAKARTA, 12-05-1995"]).unwrap();
        assert_eq!(found.line, 1);
        assert_eq!(found.value.date, NaiveDate::from_ymd_opt(1995, 5, 12).unwrap());
        assert_eq!(found.value.place, "JAKARTA");
    }

    #[test]
    fn test_label_on_same_line() {
        let found = extract_birth(&["Tempat/Tgl Lahir : BANDUNG, 03-08-2004"]).unwrap();
        assert_eq!(found.value.date, NaiveDate::from_ymd_opt(2004, 8, 3).unwrap());
        assert_eq!(found.value.place, "BANDUNG");
    }

    #[test]
    fn test_missing_separators() {
        assert_eq!(
            birth_date(&["SEMARANG 120595"]),
            NaiveDate::from_ymd_opt(1995, 5, 12)
        );
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(birth_date(&["01-01-04"]), NaiveDate::from_ymd_opt(2004, 1, 1));
        assert_eq!(birth_date(&["01-01-95"]), NaiveDate::from_ymd_opt(1995, 1, 1));
        // Boundary: 50 reads as 2050, 51 as 1951
        assert_eq!(birth_date(&["01-01-50"]), NaiveDate::from_ymd_opt(2050, 1, 1));
        assert_eq!(birth_date(&["01-01-51"]), NaiveDate::from_ymd_opt(1951, 1, 1));
    }

    #[test]
    fn test_calendar_validity() {
        assert_eq!(birth_date(&["32-13-99"]), None);
        assert_eq!(birth_date(&["30-02-1999"]), None);
        // Leap-year February 29
        assert_eq!(birth_date(&["29-02-2024"]), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(birth_date(&["29-02-2023"]), None);
    }

    #[test]
    fn test_nik_line_does_not_anchor_a_date() {
        // First digit group reads as day 33, which fails validation; later
        // offsets in the run must not be retried.
        assert_eq!(birth_date(&["••3302021201990001"]), None);
    }

    #[test]
    fn test_invalid_line_then_valid_line() {
        let found = extract_birth(&["••3302021201990001", "JAKARTA, 12-05-1995"]).unwrap();
        assert_eq!(found.line, 1);
        assert_eq!(found.value.date, NaiveDate::from_ymd_opt(1995, 5, 12).unwrap());
    }

    #[test]
    fn test_date_only_line_yields_empty_place() {
        let found = extract_birth(&["12-05-1995"]).unwrap();
        assert_eq!(found.value.place, "");
    }
}
