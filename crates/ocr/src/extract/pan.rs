use idscan_core::{DocumentType, ExtractedRecord};

use super::{find_dob, is_name_line, FieldExtractor};

// Tolerant shape: the middle four may be letters because OCR confuses 0/O and 1/I.
re!(re_pan, r"(?i)[A-Z]{5}[A-Z0-9]{4}[A-Z]");

/// PAN card.
///
/// * number: spaces removed per line, first hit in a line, last line wins
/// * dob: last line carrying a date
/// * name: first letters-only line
pub struct PanExtractor;

impl FieldExtractor for PanExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Pan
    }

    fn extract(&self, lines: &[String]) -> ExtractedRecord {
        let mut pan = None;
        let mut dob = None;

        for line in lines {
            let compact = line.replace(' ', "");
            if let Some(m) = re_pan().find(&compact) {
                pan = Some(m.as_str().to_string());
            }
            if let Some(d) = find_dob(line) {
                dob = Some(d);
            }
        }

        let name = lines.iter().find(|l| is_name_line(l)).cloned();

        ExtractedRecord::Pan { name, dob, pan }
    }
}
