//! Suggestion augmentation: optional free-form improvement ideas from a hosted
//! model, additive to the deterministic suggestions in `scoring::suggestions`.
//!
//! `AppState` holds an `Arc<dyn SuggestionAugmenter>`: `LlmAugmenter` when an
//! API key is configured, `DisabledAugmenter` otherwise. Callers never branch on
//! whether a client exists; they go through `augment_or_degrade`, which turns any
//! provider failure into an "unavailable" report instead of an HTTP error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::augmentation::prompts::AUGMENT_PROMPT_TEMPLATE;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_FABRICATION_INSTRUCTION};
use crate::llm_client::LlmClient;

pub mod prompts;

#[derive(Debug, Error)]
pub enum AugmentError {
    #[error("AI suggestions are not configured on this server")]
    Disabled,

    #[error("AI suggestion provider failed: {0}")]
    Provider(String),
}

/// Structured improvement ideas. Keys the model leaves out decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSuggestions {
    pub improved_summary: String,
    pub skills_suggestions: Vec<String>,
    pub rewritten_experience_bullets: Vec<String>,
    pub project_suggestions: Vec<String>,
    pub keyword_placement_tips: Vec<String>,
    pub ats_warnings: Vec<String>,
}

#[async_trait]
pub trait SuggestionAugmenter: Send + Sync {
    async fn suggest(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AiSuggestions, AugmentError>;

    fn is_enabled(&self) -> bool;
}

/// Calls the hosted model through `LlmClient`.
pub struct LlmAugmenter(pub LlmClient);

#[async_trait]
impl SuggestionAugmenter for LlmAugmenter {
    async fn suggest(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AiSuggestions, AugmentError> {
        let prompt = build_prompt(resume_text, job_description);
        self.0
            .call_json::<AiSuggestions>(&prompt, JSON_ONLY_SYSTEM)
            .await
            .map_err(|e| AugmentError::Provider(e.to_string()))
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Stand-in used when no API key is configured.
pub struct DisabledAugmenter;

#[async_trait]
impl SuggestionAugmenter for DisabledAugmenter {
    async fn suggest(
        &self,
        _resume_text: &str,
        _job_description: &str,
    ) -> Result<AiSuggestions, AugmentError> {
        Err(AugmentError::Disabled)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// What the AI suggestions endpoint returns. `suggestions` is flattened so the
/// six fields sit at the top level next to `available`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AugmentationReport {
    pub available: bool,
    #[serde(flatten)]
    pub suggestions: AiSuggestions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Runs the augmenter, degrading to an empty "unavailable" report on failure.
pub async fn augment_or_degrade(
    augmenter: &dyn SuggestionAugmenter,
    resume_text: &str,
    job_description: &str,
) -> AugmentationReport {
    match augmenter.suggest(resume_text, job_description).await {
        Ok(suggestions) => {
            info!("AI suggestions generated");
            AugmentationReport {
                available: true,
                suggestions,
                notice: None,
            }
        }
        Err(e) => {
            warn!("AI suggestions unavailable: {e}");
            AugmentationReport {
                available: false,
                suggestions: AiSuggestions::default(),
                notice: Some(e.to_string()),
            }
        }
    }
}

fn build_prompt(resume_text: &str, job_description: &str) -> String {
    let instructions =
        AUGMENT_PROMPT_TEMPLATE.replace("{no_fabrication}", NO_FABRICATION_INSTRUCTION);
    format!("{instructions}\n\nRESUME:\n{resume_text}\n\nJOB DESCRIPTION:\n{job_description}")
}
