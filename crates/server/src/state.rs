use idscan_ocr::IdentityPipeline;
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared, read-only handler state. Cloning is cheap: the pipeline holds the
/// single OCR engine behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: IdentityPipeline,
    pub ocr_timeout: Duration,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(pipeline: IdentityPipeline, config: &ServerConfig) -> Self {
        Self {
            pipeline,
            ocr_timeout: config.ocr_timeout(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }
}
