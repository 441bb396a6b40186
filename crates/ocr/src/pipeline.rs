use std::sync::Arc;
use thiserror::Error;

use idscan_core::{fraud_check, ExtractedRecord, VerificationReport};

use crate::classify::detect_card_type;
use crate::extract::extractor_for;
use crate::normalize::{clean_text, normalize_lines};
use crate::recognizer::{OcrBackend, OcrError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("OCR task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Analyze a transcript already produced by an OCR engine.
pub fn analyze_transcript<S: AsRef<str>>(fragments: &[S]) -> VerificationReport {
    let raw = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    analyze_text(raw)
}

/// normalize → classify → extract → score. Total: any input, including an
/// empty one, produces a well-formed report.
pub fn analyze_text(raw: String) -> VerificationReport {
    let lines = normalize_lines(&raw);
    let cleaned = clean_text(&raw);

    let card = detect_card_type(&cleaned);
    let extracted = match extractor_for(card) {
        Some(extractor) => extractor.extract(&lines),
        None => ExtractedRecord::Unknown { text: cleaned },
    };

    let assessment = fraud_check(&extracted);

    tracing::debug!(
        %card,
        lines = lines.len(),
        flags = ?assessment.flags,
        score = assessment.score,
        "document analyzed"
    );

    VerificationReport::new(card, lines.join("\n"), extracted, assessment, raw)
}

/// Orchestrates: OCR → analyze. The recognizer is built once per process
/// and shared; the pipeline itself holds no per-request state.
#[derive(Clone)]
pub struct IdentityPipeline {
    recognizer: Arc<dyn OcrBackend>,
}

impl IdentityPipeline {
    pub fn new(recognizer: Arc<dyn OcrBackend>) -> Self {
        Self { recognizer }
    }

    pub fn backend_name(&self) -> &'static str {
        self.recognizer.name()
    }

    /// Run OCR and analysis on the current thread.
    pub fn process_bytes_blocking(&self, data: &[u8]) -> Result<VerificationReport, PipelineError> {
        let fragments = self.recognizer.recognize(data)?;
        Ok(analyze_transcript(&fragments))
    }

    /// Run OCR on the blocking pool so the engine never stalls the runtime.
    /// Dropping the returned future (e.g. on a caller timeout) discards the
    /// result; nothing is persisted.
    pub async fn process_bytes(&self, data: Vec<u8>) -> Result<VerificationReport, PipelineError> {
        let recognizer = Arc::clone(&self.recognizer);
        let fragments = tokio::task::spawn_blocking(move || recognizer.recognize(&data)).await??;
        Ok(analyze_transcript(&fragments))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::MockRecognizer;
    use idscan_core::{DocumentType, FraudFlag};
    use serde_json::json;

    struct FailingRecognizer;

    impl OcrBackend for FailingRecognizer {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn recognize(&self, _image_bytes: &[u8]) -> Result<Vec<String>, OcrError> {
            Err(OcrError::ImageDecode("not an image".into()))
        }
    }

    fn pipeline(fragments: &[&str]) -> IdentityPipeline {
        IdentityPipeline::new(Arc::new(MockRecognizer::from_fragments(fragments.to_vec())))
    }

    #[test]
    fn pan_card_end_to_end() {
        let r = analyze_transcript(&[
            "INCOME TAX DEPARTMENT",
            "GOVT. OF INDIA",
            "RAHUL SHARMA",
            "15/08/1990",
            "BNZPM2501F",
        ]);
        assert_eq!(r.card_type, DocumentType::Pan);
        assert_eq!(r.extracted.pan(), Some("BNZPM2501F"));
        assert!(r.fraud_flags.is_empty());
        assert_eq!(r.fraud_score, 0);
    }

    #[test]
    fn aadhaar_end_to_end() {
        let r = analyze_transcript(&[
            "भारत सरकार",
            "Government of India",
            "4821 7736 1059",
            "Priya Singh",
            "DOB: 23/04/1995",
        ]);
        assert_eq!(r.card_type, DocumentType::Aadhaar);
        assert_eq!(r.extracted.aadhaar(), Some("482177361059"));
        assert_eq!(r.extracted.name(), Some("Priya Singh"));
        assert_eq!(r.fraud_score, 0);
    }

    #[test]
    fn dl_end_to_end() {
        let r = analyze_transcript(&[
            "DRIVING LICENCE",
            "RAM KUMAR",
            "S/D/W OF SHYAM KUMAR",
            "DL1234567890",
        ]);
        assert_eq!(r.card_type, DocumentType::Dl);
        assert_eq!(r.extracted.name(), Some("RAM KUMAR"));
        assert_eq!(r.extracted.dl_number(), Some("DL1234567890"));
    }

    #[test]
    fn unknown_record_is_exactly_cleaned_text() {
        let r = analyze_transcript(&["Hello", "  world  ", "Hello"]);
        assert_eq!(r.card_type, DocumentType::Unknown);
        assert_eq!(
            serde_json::to_value(&r.extracted).unwrap(),
            json!({"text": "Hello world Hello"})
        );
        assert_eq!(r.clean_text, "Hello\nworld");
        assert_eq!(r.raw_text, "Hello\n  world  \nHello");
        assert_eq!(r.fraud_flags, vec![FraudFlag::NameMissing, FraudFlag::IdMissing]);
        assert_eq!(r.fraud_score, 20);
    }

    #[test]
    fn empty_transcript_is_well_formed() {
        let r = analyze_transcript::<&str>(&[]);
        assert_eq!(r.card_type, DocumentType::Unknown);
        assert_eq!(r.clean_text, "");
        assert_eq!(r.raw_text, "");
        assert_eq!(r.extracted, ExtractedRecord::Unknown { text: String::new() });
        assert_eq!(r.fraud_score, 20);
    }

    #[test]
    fn multiline_fragments_are_split_into_lines() {
        let r = analyze_transcript(&["DRIVING LICENCE\nRAM KUMAR", "Son of SHYAM"]);
        assert_eq!(r.clean_text, "DRIVING LICENCE\nRAM KUMAR\nSon of SHYAM");
        assert_eq!(r.extracted.name(), Some("RAM KUMAR"));
    }

    #[tokio::test]
    async fn blocking_and_async_agree() {
        let p = pipeline(&["INCOME TAX", "ABCDE1234F"]);
        let blocking = p.process_bytes_blocking(b"img").unwrap();
        let async_result = p.process_bytes(b"img".to_vec()).await.unwrap();
        assert_eq!(blocking, async_result);
    }

    #[tokio::test]
    async fn ocr_failure_surfaces_as_pipeline_error() {
        let p = IdentityPipeline::new(Arc::new(FailingRecognizer));
        let err = p.process_bytes(vec![1, 2, 3]).await.unwrap_err();
        assert!(matches!(err, PipelineError::Ocr(OcrError::ImageDecode(_))));
    }

    #[tokio::test]
    async fn backend_name_is_reported() {
        assert_eq!(pipeline(&[]).backend_name(), "mock");
    }
}
