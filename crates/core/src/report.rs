use serde::Serialize;

use crate::document::{DocumentType, ExtractedRecord};
use crate::fraud::{FraudAssessment, FraudFlag};

/// The payload returned for one analyzed document. Built fresh per request
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub card_type: DocumentType,
    /// Normalized lines joined with `\n`.
    pub clean_text: String,
    pub extracted: ExtractedRecord,
    pub fraud_flags: Vec<FraudFlag>,
    pub fraud_score: u32,
    /// OCR fragments joined with `\n`, untouched.
    pub raw_text: String,
}

impl VerificationReport {
    pub fn new(
        card_type: DocumentType,
        clean_text: String,
        extracted: ExtractedRecord,
        assessment: FraudAssessment,
        raw_text: String,
    ) -> Self {
        Self {
            card_type,
            clean_text,
            extracted,
            fraud_flags: assessment.flags,
            fraud_score: assessment.score,
            raw_text,
        }
    }
}

/// camelCase projection of a report for browser front-ends.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyView {
    pub card_type: DocumentType,
    pub fraud_score: u32,
    pub fraud_flags: Vec<FraudFlag>,
    pub extracted: ExtractedRecord,
    pub raw_text: String,
    pub cleaned_text: String,
}

impl From<VerificationReport> for VerifyView {
    fn from(r: VerificationReport) -> Self {
        Self {
            card_type: r.card_type,
            fraud_score: r.fraud_score,
            fraud_flags: r.fraud_flags,
            extracted: r.extracted,
            raw_text: r.raw_text,
            cleaned_text: r.clean_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraud::fraud_check;
    use serde_json::json;

    fn unknown_report() -> VerificationReport {
        let extracted = ExtractedRecord::Unknown { text: "hello there".into() };
        let assessment = fraud_check(&extracted);
        VerificationReport::new(
            DocumentType::Unknown,
            "hello there".into(),
            extracted,
            assessment,
            "hello there".into(),
        )
    }

    #[test]
    fn report_wire_shape() {
        assert_eq!(
            serde_json::to_value(unknown_report()).unwrap(),
            json!({
                "card_type": "UNKNOWN",
                "clean_text": "hello there",
                "extracted": {"text": "hello there"},
                "fraud_flags": ["name_missing", "id_missing"],
                "fraud_score": 20,
                "raw_text": "hello there",
            })
        );
    }

    #[test]
    fn verify_view_uses_camel_case() {
        let v = serde_json::to_value(VerifyView::from(unknown_report())).unwrap();
        assert_eq!(v["cardType"], "UNKNOWN");
        assert_eq!(v["fraudScore"], 20);
        assert_eq!(v["cleanedText"], "hello there");
        assert_eq!(v["rawText"], "hello there");
        assert!(v.get("card_type").is_none());
    }
}
