use idscan_core::DocumentType;

re!(re_aadhaar_number, r"\b\d{4}\s?\d{4}\s?\d{4}\b");

const PAN_MARKERS: &[&str] = &["permanent account number", "income tax"];
const DL_MARKERS: &[&str] = &["driving licence", "driving license"];

/// Assign a document type to cleaned text. Rules are tried in order and the
/// first hit wins, so a scan carrying both PAN and DL wording is a PAN.
pub fn detect_card_type(cleaned_text: &str) -> DocumentType {
    let t = cleaned_text.to_lowercase();

    let card = if PAN_MARKERS.iter().any(|m| t.contains(m)) {
        DocumentType::Pan
    } else if DL_MARKERS.iter().any(|m| t.contains(m)) {
        DocumentType::Dl
    } else if re_aadhaar_number().is_match(&t) {
        DocumentType::Aadhaar
    } else {
        DocumentType::Unknown
    };

    tracing::trace!(%card, "classified transcript");
    card
}
