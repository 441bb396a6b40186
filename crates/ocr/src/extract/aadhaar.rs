use idscan_core::{DocumentType, ExtractedRecord};

use super::{find_dob, is_name_line, FieldExtractor};

// Groups may be split across OCR lines or by stray symbols.
re!(re_aadhaar_groups, r"(\d{4})\D+(\d{4})\D+(\d{4})");

/// Aadhaar card.
///
/// The number is searched on all lines joined with spaces. The first line
/// with a date is the DOB and scanning stops there; the name is one of the
/// two lines directly above it. Without a DOB line no name is reported.
pub struct AadhaarExtractor;

impl FieldExtractor for AadhaarExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Aadhaar
    }

    fn extract(&self, lines: &[String]) -> ExtractedRecord {
        let joined = lines.join(" ");
        let aadhaar = re_aadhaar_groups()
            .captures(&joined)
            .map(|c| format!("{}{}{}", &c[1], &c[2], &c[3]));

        let mut dob = None;
        let mut name = None;
        for (i, line) in lines.iter().enumerate() {
            if let Some(d) = find_dob(line) {
                dob = Some(d);
                name = lines[..i]
                    .iter()
                    .rev()
                    .take(2)
                    .find(|l| is_name_line(l))
                    .cloned();
                break;
            }
        }

        ExtractedRecord::Aadhaar { name, dob, aadhaar }
    }
}
