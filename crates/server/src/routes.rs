//! HTTP routes.
//!
//! - `POST /ocr`     multipart `file` → analysis report (snake_case)
//! - `POST /verify`  multipart `file` → front-end view (camelCase)
//! - `POST /analyze` JSON `{"fragments": [..]}` → analysis report, no OCR
//! - `GET  /health`

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use idscan_core::{VerificationReport, VerifyView};
use idscan_ocr::{analyze_transcript, fingerprint};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 16 * 1024;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/ocr", post(ocr))
        .route("/verify", post(verify))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes + MULTIPART_OVERHEAD))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    ocr_backend: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        ocr_backend: state.pipeline.backend_name(),
    })
}

async fn ocr(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<VerificationReport>, AppError> {
    let data = read_upload(multipart, state.max_upload_bytes).await?;
    Ok(Json(run_ocr(&state, data).await?))
}

async fn verify(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<VerifyView>, AppError> {
    let data = read_upload(multipart, state.max_upload_bytes).await?;
    Ok(Json(run_ocr(&state, data).await?.into()))
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    fragments: Vec<String>,
}

async fn analyze(Json(req): Json<AnalyzeRequest>) -> Json<VerificationReport> {
    Json(analyze_transcript(&req.fragments))
}

/// The bytes of the `file` field. Other fields are ignored.
async fn read_upload(mut multipart: Multipart, limit: usize) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if bytes.len() > limit {
            return Err(AppError::PayloadTooLarge(limit));
        }
        return Ok(bytes.to_vec());
    }
    Err(AppError::BadRequest("No file uploaded".to_string()))
}

fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(limit)
    } else {
        AppError::BadRequest(format!("Failed to read upload: {}", e.body_text()))
    }
}

async fn run_ocr(state: &AppState, data: Vec<u8>) -> Result<VerificationReport, AppError> {
    let request_id = Uuid::new_v4();
    let digest = fingerprint(&data);
    let span = tracing::info_span!("ocr_request", %request_id, fingerprint = &digest[..16]);

    async move {
        tracing::info!(bytes = data.len(), "document received");

        let report = tokio::time::timeout(state.ocr_timeout, state.pipeline.process_bytes(data))
            .await
            .map_err(|_| AppError::Timeout(state.ocr_timeout))??;

        tracing::info!(
            card_type = %report.card_type,
            fraud_score = report.fraud_score,
            "document analyzed"
        );
        Ok::<_, AppError>(report)
    }
    .instrument(span)
    .await
}

// ── Tests ─────────────────────────────────────────────────────────────────────
