//! Error types for the HTTP layer. Domain analysis never fails; only upload
//! handling and the OCR collaborator can.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use idscan_ocr::{OcrError, PipelineError};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Upload exceeds the {0} byte limit")]
    PayloadTooLarge(usize),

    #[error("OCR did not finish within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            AppError::Timeout(_) => {
                tracing::warn!("{}", self);
                (StatusCode::GATEWAY_TIMEOUT, "ocr_timeout")
            }
            AppError::Pipeline(PipelineError::Ocr(OcrError::ImageDecode(_))) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unreadable_image")
            }
            AppError::Pipeline(PipelineError::Ocr(e)) => {
                tracing::error!("OCR engine error: {}", e);
                (StatusCode::BAD_GATEWAY, "ocr_failed")
            }
            AppError::Pipeline(PipelineError::Join(e)) => {
                tracing::error!("OCR task failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let body = Json(ErrorResponse {
            error,
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
