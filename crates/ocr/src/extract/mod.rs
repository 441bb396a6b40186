//! Per-document field extractors.
//!
//! Each extractor scans the normalized line sequence with a handful of
//! regexes and positional rules. The first-match / last-match choice differs
//! between document types and fields; each module documents its own policy.

mod aadhaar;
mod dl;
mod pan;

pub use aadhaar::AadhaarExtractor;
pub use dl::DlExtractor;
pub use pan::PanExtractor;

use idscan_core::{DocumentType, ExtractedRecord};

re!(re_dob, r"\b(\d{2}/\d{2}/\d{4})\b");
re!(re_name_line, r"^[A-Za-z ]{3,}$");

/// One implementation per recognised document type.
pub trait FieldExtractor: Send + Sync {
    fn document_type(&self) -> DocumentType;

    /// Pull whatever fields can be found. Never fails: anything not found is
    /// `None` in the returned record.
    fn extract(&self, lines: &[String]) -> ExtractedRecord;
}

static PAN: PanExtractor = PanExtractor;
static AADHAAR: AadhaarExtractor = AadhaarExtractor;
static DL: DlExtractor = DlExtractor;

/// The extractor for `card`, or `None` for [`DocumentType::Unknown`].
pub fn extractor_for(card: DocumentType) -> Option<&'static dyn FieldExtractor> {
    match card {
        DocumentType::Pan => Some(&PAN),
        DocumentType::Aadhaar => Some(&AADHAAR),
        DocumentType::Dl => Some(&DL),
        DocumentType::Unknown => None,
    }
}

/// A `dd/dd/dddd` date anywhere in the line.
pub(crate) fn find_dob(line: &str) -> Option<String> {
    re_dob()
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Letters and spaces only, at least three characters.
pub(crate) fn is_name_line(line: &str) -> bool {
    re_name_line().is_match(line)
}

#[cfg(test)]
pub(crate) fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
