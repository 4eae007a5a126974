use std::sync::Arc;

use crate::augmentation::SuggestionAugmenter;
use crate::config::Config;
use crate::extraction::TextSource;
use crate::scans::store::ScanStore;
use crate::scoring::AtsScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub scorer: Arc<AtsScorer>,
    /// Turns uploaded bytes into résumé text. Default: `PdfTextSource`.
    pub text_source: Arc<dyn TextSource>,
    /// Postgres when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn ScanStore>,
    /// `LlmAugmenter` when an API key is configured, `DisabledAugmenter` otherwise.
    pub augmenter: Arc<dyn SuggestionAugmenter>,
}
