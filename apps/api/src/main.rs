mod augmentation;
mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod scans;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::augmentation::{DisabledAugmenter, LlmAugmenter, SuggestionAugmenter};
use crate::config::Config;
use crate::db::create_pool;
use crate::extraction::PdfTextSource;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scans::store::{InMemoryScanStore, PgScanStore, ScanStore};
use crate::scoring::AtsScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn ScanStore> = match &config.database_url {
        Some(url) => Arc::new(PgScanStore::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; scans are kept in memory and lost on restart");
            Arc::new(InMemoryScanStore::default())
        }
    };

    let augmenter: Arc<dyn SuggestionAugmenter> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.llm_model.clone())?;
            info!("AI suggestions enabled (model: {})", llm.model());
            Arc::new(LlmAugmenter(llm))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set; AI suggestions disabled");
            Arc::new(DisabledAugmenter)
        }
    };

    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(AtsScorer::default()),
        text_source: Arc::new(PdfTextSource),
        store,
        augmenter,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
