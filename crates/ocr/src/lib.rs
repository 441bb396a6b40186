// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static regex::Regex {
            static R: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            R.get_or_init(|| regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub mod classify;
pub mod extract;
pub mod hash;
pub mod normalize;
pub mod pipeline;
pub mod recognizer;

pub use classify::detect_card_type;
pub use extract::{extractor_for, AadhaarExtractor, DlExtractor, FieldExtractor, PanExtractor};
pub use hash::{fingerprint, sha256_bytes};
pub use normalize::{clean_text, normalize_lines};
pub use pipeline::{analyze_text, analyze_transcript, IdentityPipeline, PipelineError};
pub use recognizer::{build_recognizer, MockRecognizer, OcrBackend, OcrBackendKind, OcrError};
