use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
    #[error("Tesseract not available; build with `tesseract` feature")]
    NotAvailable,
}

/// Abstraction over an OCR backend.
/// Implementations accept raw PNG/JPEG image bytes and return recognized text
/// fragments in detection order. An unreadable image yields an empty vector
/// rather than an error.
pub trait OcrBackend: Send + Sync {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &'static str;

    fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<String>, OcrError>;
}

/// Which engine the service should construct at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackendKind {
    #[default]
    Mock,
    Tesseract,
}

impl std::str::FromStr for OcrBackendKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(OcrBackendKind::Mock),
            "tesseract" => Ok(OcrBackendKind::Tesseract),
            other => Err(format!("Unknown OCR backend: '{other}'")),
        }
    }
}

/// Construct the process-wide recognizer. Called once in `main`; the result
/// is shared by every request.
pub fn build_recognizer(
    kind: OcrBackendKind,
    tessdata_path: Option<&str>,
    lang: &str,
) -> Result<Arc<dyn OcrBackend>, OcrError> {
    match kind {
        OcrBackendKind::Mock => Ok(Arc::new(MockRecognizer::new(""))),
        #[cfg(feature = "tesseract")]
        OcrBackendKind::Tesseract => Ok(Arc::new(tesseract_backend::TesseractRecognizer::new(
            tessdata_path.map(str::to_string),
            lang,
        )?)),
        #[cfg(not(feature = "tesseract"))]
        OcrBackendKind::Tesseract => {
            let _ = (tessdata_path, lang);
            Err(OcrError::NotAvailable)
        }
    }
}

// ── Mock backend (always available, used for tests) ───────────────────────────

/// Returns pre-set fragments. Used for unit testing the extraction pipeline
/// without requiring Tesseract to be installed.
pub struct MockRecognizer {
    pub fragments: Vec<String>,
}

impl MockRecognizer {
    /// One fragment per line of `text`. Empty text gives no fragments.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            fragments: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn from_fragments<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }
}

impl OcrBackend for MockRecognizer {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn recognize(&self, _image_bytes: &[u8]) -> Result<Vec<String>, OcrError> {
        Ok(self.fragments.clone())
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract_backend {
    use super::{OcrBackend, OcrError};
    use leptess::LepTess;

    /// Holds the engine configuration; a `LepTess` handle is not `Sync`, so
    /// each recognition opens its own.
    pub struct TesseractRecognizer {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractRecognizer {
        /// Fails fast when the language data cannot be loaded.
        pub fn new(data_path: Option<String>, lang: &str) -> Result<Self, OcrError> {
            LepTess::new(data_path.as_deref(), lang).map_err(|e| OcrError::Engine(e.to_string()))?;
            Ok(Self { data_path, lang: lang.to_string() })
        }
    }

    impl OcrBackend for TesseractRecognizer {
        fn name(&self) -> &'static str {
            "tesseract"
        }

        fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<String>, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;
            let text = lt.get_utf8_text().map_err(|e| OcrError::Engine(e.to_string()))?;
            Ok(text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mock_returns_preset_fragments() {
        let r = MockRecognizer::new("INCOME TAX DEPARTMENT\nABCDE1234F");
        assert_eq!(
            r.recognize(b"fake image data").unwrap(),
            vec!["INCOME TAX DEPARTMENT", "ABCDE1234F"]
        );
    }

    #[test]
    fn mock_ignores_image_content() {
        let r = MockRecognizer::from_fragments(["hello"]);
        assert_eq!(r.recognize(b"anything").unwrap(), vec!["hello"]);
        assert_eq!(r.recognize(b"").unwrap(), vec!["hello"]);
    }

    #[test]
    fn mock_with_empty_text_has_no_fragments() {
        assert!(MockRecognizer::new("").recognize(b"x").unwrap().is_empty());
    }

    #[test]
    fn backend_kind_parses_case_insensitively() {
        assert_eq!(OcrBackendKind::from_str("Tesseract").unwrap(), OcrBackendKind::Tesseract);
        assert_eq!(OcrBackendKind::from_str("mock").unwrap(), OcrBackendKind::Mock);
        assert!(OcrBackendKind::from_str("easyocr").is_err());
    }

    #[test]
    fn build_mock_recognizer() {
        let r = build_recognizer(OcrBackendKind::Mock, None, "eng").unwrap();
        assert_eq!(r.name(), "mock");
    }

    #[cfg(not(feature = "tesseract"))]
    #[test]
    fn tesseract_without_feature_is_not_available() {
        let err = build_recognizer(OcrBackendKind::Tesseract, None, "eng").err().unwrap();
        assert!(matches!(err, OcrError::NotAvailable));
    }
}
