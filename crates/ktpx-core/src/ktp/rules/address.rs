//! Address extraction: labeled line first, street keywords as fallback.

use super::patterns::{ADDRESS_LABEL, ADDRESS_STRIP, STREET_KEYWORDS};
use super::{FieldExtractor, LineMatch};

/// Address field extractor.
///
/// The primary pass anchors on the printed "Alamat" label; the first
/// labeled line wins regardless of outcome, taking the rest of that line
/// or, when the label stands alone, the following line. Only when no
/// labeled line produced an address does the fallback pass look for a line
/// carrying a street keyword.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = LineMatch<String>;

    fn extract(&self, lines: &[&str]) -> Option<Self::Output> {
        labeled_address(lines).or_else(|| keyword_address(lines))
    }

    fn extract_all(&self, lines: &[&str]) -> Vec<Self::Output> {
        let mut results = Vec::new();

        if let Some(found) = labeled_address(lines) {
            results.push(found);
        }
        if let Some(found) = keyword_address(lines) {
            results.push(found);
        }

        results
    }
}

/// Extract the address from the lines.
pub fn extract_address(lines: &[&str]) -> Option<String> {
    AddressExtractor::new().extract(lines).map(|m| m.value)
}

/// Resolve the first "Alamat"-labeled line. The remainder of the line wins
/// when non-empty; otherwise the next line (if any) is taken, even when it
/// cleans to nothing.
fn labeled_address(lines: &[&str]) -> Option<LineMatch<String>> {
    let (index, line) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| ADDRESS_LABEL.is_match(line))?;

    let stripped = ADDRESS_STRIP.replace_all(line, "");
    let same_line = stripped.trim().trim_start_matches([':', '.', ' ']);

    if !same_line.is_empty() {
        return Some(LineMatch::new(same_line.to_string(), index, *line));
    }

    lines.get(index + 1).map(|next| {
        let value = next.trim().trim_start_matches([':', '.', ' ']).to_string();
        LineMatch::new(value, index + 1, *next)
    })
}

/// Fallback: the first line carrying a street keyword.
fn keyword_address(lines: &[&str]) -> Option<LineMatch<String>> {
    let (index, line) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| STREET_KEYWORDS.is_match(line))?;

    let value = ADDRESS_STRIP.replace_all(line, "").trim().to_string();
    Some(LineMatch::new(value, index, *line))
}
