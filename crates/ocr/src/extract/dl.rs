use idscan_core::{DocumentType, ExtractedRecord};

use super::{find_dob, is_name_line, FieldExtractor};

// Eight or more characters keeps ordinary name words out.
re!(re_dl_number, r"\b([A-Z0-9]{8,15})\b");
re!(re_fallback_name, r"^[A-Z][A-Za-z ]{3,}$");

const GUARDIAN_MARKERS: &[&str] = &["s/d/w", "son", "wife"];

/// Driving licence.
///
/// * number: first token per line, last line wins
/// * dob: first date wins
/// * name: the line above the first guardian-relation line ("S/D/W",
///   "son", "wife"), else the first capitalised letters-only line
pub struct DlExtractor;

impl FieldExtractor for DlExtractor {
    fn document_type(&self) -> DocumentType {
        DocumentType::Dl
    }

    fn extract(&self, lines: &[String]) -> ExtractedRecord {
        let mut dl_number = None;
        let mut dob = None;

        for line in lines {
            if let Some(c) = re_dl_number().captures(line) {
                dl_number = Some(c[1].to_string());
            }
            if dob.is_none() {
                dob = find_dob(line);
            }
        }

        let name = name_above_guardian(lines).or_else(|| {
            lines
                .iter()
                .find(|l| re_fallback_name().is_match(l))
                .cloned()
        });

        ExtractedRecord::DrivingLicence { name, dob, dl_number }
    }
}

/// Only the first marker line is considered.
fn name_above_guardian(lines: &[String]) -> Option<String> {
    let i = lines.iter().position(|l| has_guardian_marker(l))?;
    let prev = lines.get(i.checked_sub(1)?)?;
    is_name_line(prev).then(|| prev.clone())
}

fn has_guardian_marker(line: &str) -> bool {
    let lower = line.to_lowercase();
    GUARDIAN_MARKERS.iter().any(|m| lower.contains(m))
}
