//! Structured record extracted from a KTP card.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields extracted from the OCR text of a KTP card.
///
/// Every field is independently optional: the extractor leaves a field
/// unset when its anchor pattern is not found or fails validation, and the
/// absence of one field never blocks extraction of the others. The record
/// is a suggestion for a downstream review step, not a verified identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KtpRecord {
    /// National identity number (NIK), digits only, exactly 16 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<String>,

    /// Full name as printed on the card. Letters, spaces and periods only.
    /// May be an empty string when the name window survived nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Birthplace, free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,

    /// Birth date. Only set when the candidate passed calendar validation.
    /// Serializes as ISO `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    /// Residential address, free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl KtpRecord {
    /// Check whether no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.nik.is_none()
            && self.name.is_none()
            && self.birthplace.is_none()
            && self.birth_date.is_none()
            && self.address.is_none()
    }

    /// Names of the fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.nik.is_none() {
            missing.push("nik");
        }
        if self.name.is_none() {
            missing.push("name");
        }
        if self.birthplace.is_none() {
            missing.push("birthplace");
        }
        if self.birth_date.is_none() {
            missing.push("birth_date");
        }
        if self.address.is_none() {
            missing.push("address");
        }

        missing
    }
}
