//! Scan pipeline: validate upload → extract text → score → persist.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use crate::augmentation::{augment_or_degrade, AugmentationReport, SuggestionAugmenter};
use crate::errors::AppError;
use crate::extraction::TextSource;
use crate::scans::store::{NewScan, ScanStore, StoredScan};
use crate::scans::upload::ScanUpload;
use crate::scoring::AtsScorer;

/// Runs the text source on a blocking thread. A failure or a panic inside the
/// source surfaces as `UnreadableDocument`.
pub async fn extract_resume_text(
    source: Arc<dyn TextSource>,
    bytes: Bytes,
) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || source.extract(&bytes))
        .await
        .map_err(|e| AppError::UnreadableDocument(format!("extraction task failed: {e}")))?
        .map_err(|e| AppError::UnreadableDocument(e.to_string()))
}

/// Scores an uploaded résumé and stores the result.
pub async fn run_scan(
    scorer: &AtsScorer,
    source: Arc<dyn TextSource>,
    store: &dyn ScanStore,
    upload: ScanUpload,
) -> Result<StoredScan, AppError> {
    upload.validate()?;

    let resume_filename = upload.display_filename();
    let resume_text = extract_resume_text(source, upload.resume).await?;
    let result = scorer.score(&resume_text, &upload.job_description);

    let stored = store
        .save(NewScan {
            resume_filename,
            job_description: upload.job_description,
            result,
        })
        .await?;

    info!(
        scan_id = %stored.id,
        filename = %stored.resume_filename,
        total = stored.result.total_score,
        keyword = stored.result.keyword_score,
        section = stored.result.section_score,
        "Scan stored"
    );

    Ok(stored)
}

/// Produces AI suggestions for an upload. Provider problems never fail the
/// request; they yield an unavailable report. Nothing is persisted.
pub async fn run_augmentation(
    augmenter: &dyn SuggestionAugmenter,
    source: Arc<dyn TextSource>,
    upload: ScanUpload,
) -> Result<AugmentationReport, AppError> {
    upload.validate()?;

    let resume_text = extract_resume_text(source, upload.resume).await?;
    Ok(augment_or_degrade(augmenter, &resume_text, &upload.job_description).await)
}
