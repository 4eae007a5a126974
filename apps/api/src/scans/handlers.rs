//! Axum route handlers for the Scan API.

use axum::{
    extract::{rejection::PathRejection, Multipart, Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::augmentation::AugmentationReport;
use crate::errors::AppError;
use crate::scans::service::{run_augmentation, run_scan};
use crate::scans::store::{ScanSummary, StoredScan};
use crate::scans::upload::ScanUpload;
use crate::scoring::ScoreResult;
use crate::state::AppState;

/// Scan result as returned by both `POST /api/scan` and `GET /api/scan/:id`.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub result: ScoreResult,
}

impl From<StoredScan> for ScanResponse {
    fn from(scan: StoredScan) -> Self {
        Self {
            id: scan.id,
            result: scan.result,
        }
    }
}

/// POST /api/scan
///
/// Multipart `resume` (PDF) + `jobDescription`. Scores and persists the result.
pub async fn handle_scan(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScanResponse>, AppError> {
    let upload = ScanUpload::from_multipart(multipart).await?;
    let stored = run_scan(
        &state.scorer,
        state.text_source.clone(),
        state.store.as_ref(),
        upload,
    )
    .await?;
    Ok(Json(stored.into()))
}

/// GET /api/scans
///
/// Scan history, newest first.
pub async fn handle_list_scans(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScanSummary>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /api/scan/:id
pub async fn handle_get_scan(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ScanResponse>, AppError> {
    let Path(id) = id.map_err(|_| AppError::Validation("Invalid scan id.".to_string()))?;
    let scan = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Scan {id} not found")))?;
    Ok(Json(scan.into()))
}

/// POST /api/ai-suggestions
///
/// Same multipart input as `/api/scan`. Always 200 once the upload is valid and
/// readable; `available: false` when the provider is disabled or failed.
pub async fn handle_ai_suggestions(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AugmentationReport>, AppError> {
    let upload = ScanUpload::from_multipart(multipart).await?;
    let report = run_augmentation(
        state.augmenter.as_ref(),
        state.text_source.clone(),
        upload,
    )
    .await?;
    Ok(Json(report))
}
