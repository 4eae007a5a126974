use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One row of `resume_scans`. Result lists and section checks are JSONB.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeScanRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_filename: String,
    pub job_description: String,
    pub total_score: i32,
    pub keyword_score: i32,
    pub section_score: i32,
    pub matched_keywords: Value,
    pub missing_keywords: Value,
    pub section_checks: Value,
    pub suggestions: Value,
}

/// History listing projection of `resume_scans`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScanSummaryRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_filename: String,
    pub total_score: i32,
    pub keyword_score: i32,
    pub section_score: i32,
}
