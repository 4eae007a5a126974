//! Persistence sink for scan results.
//!
//! `AppState` carries an `Arc<dyn ScanStore>`: `PgScanStore` when a database is
//! configured, `InMemoryScanStore` otherwise (and in tests).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::scan::{ResumeScanRow, ScanSummaryRow};
use crate::scoring::{ScoreResult, SectionChecks};

/// A scored upload about to be persisted.
#[derive(Debug, Clone)]
pub struct NewScan {
    pub resume_filename: String,
    pub job_description: String,
    pub result: ScoreResult,
}

/// A persisted scan with its assigned identity.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredScan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_filename: String,
    pub job_description: String,
    pub result: ScoreResult,
}

/// History entry: identity plus the three scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub resume_filename: String,
    pub total_score: u8,
    pub keyword_score: u8,
    pub section_score: u8,
}

impl From<&StoredScan> for ScanSummary {
    fn from(scan: &StoredScan) -> Self {
        Self {
            id: scan.id,
            created_at: scan.created_at,
            resume_filename: scan.resume_filename.clone(),
            total_score: scan.result.total_score,
            keyword_score: scan.result.keyword_score,
            section_score: scan.result.section_score,
        }
    }
}

#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Persists `scan`, assigning a fresh id and the current UTC time.
    async fn save(&self, scan: NewScan) -> Result<StoredScan, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredScan>, AppError>;

    /// All scans, newest first.
    async fn list(&self) -> Result<Vec<ScanSummary>, AppError>;

    /// Short backend label for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL
// ────────────────────────────────────────────────────────────────────────────

pub struct PgScanStore {
    pool: PgPool,
}

impl PgScanStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScanStore for PgScanStore {
    async fn save(&self, scan: NewScan) -> Result<StoredScan, AppError> {
        let NewScan {
            resume_filename,
            job_description,
            result,
        } = scan;

        let matched_keywords = serde_json::to_value(&result.matched_keywords)?;
        let missing_keywords = serde_json::to_value(&result.missing_keywords)?;
        let section_checks = serde_json::to_value(result.section_checks)?;
        let suggestions = serde_json::to_value(&result.suggestions)?;

        let id = Uuid::new_v4();
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r#"
            INSERT INTO resume_scans
                (id, resume_filename, job_description, total_score, keyword_score,
                 section_score, matched_keywords, missing_keywords, section_checks, suggestions)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING created_at
            "#,
        )
        .bind(id)
        .bind(&resume_filename)
        .bind(&job_description)
        .bind(i32::from(result.total_score))
        .bind(i32::from(result.keyword_score))
        .bind(i32::from(result.section_score))
        .bind(matched_keywords)
        .bind(missing_keywords)
        .bind(section_checks)
        .bind(suggestions)
        .fetch_one(&self.pool)
        .await?;

        Ok(StoredScan {
            id,
            created_at,
            resume_filename,
            job_description,
            result,
        })
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredScan>, AppError> {
        let row = sqlx::query_as::<_, ResumeScanRow>("SELECT * FROM resume_scans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(StoredScan::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<ScanSummary>, AppError> {
        let rows = sqlx::query_as::<_, ScanSummaryRow>(
            r#"
            SELECT id, created_at, resume_filename, total_score, keyword_score, section_score
            FROM resume_scans
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ScanSummary::from).collect())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

impl TryFrom<ResumeScanRow> for StoredScan {
    type Error = AppError;

    fn try_from(row: ResumeScanRow) -> Result<Self, Self::Error> {
        let result = ScoreResult {
            total_score: stored_score(row.total_score),
            keyword_score: stored_score(row.keyword_score),
            section_score: stored_score(row.section_score),
            matched_keywords: serde_json::from_value(row.matched_keywords)?,
            missing_keywords: serde_json::from_value(row.missing_keywords)?,
            section_checks: serde_json::from_value::<SectionChecks>(row.section_checks)?,
            suggestions: serde_json::from_value(row.suggestions)?,
        };
        Ok(StoredScan {
            id: row.id,
            created_at: row.created_at,
            resume_filename: row.resume_filename,
            job_description: row.job_description,
            result,
        })
    }
}

impl From<ScanSummaryRow> for ScanSummary {
    fn from(row: ScanSummaryRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            resume_filename: row.resume_filename,
            total_score: stored_score(row.total_score),
            keyword_score: stored_score(row.keyword_score),
            section_score: stored_score(row.section_score),
        }
    }
}

/// Scores are CHECK-constrained to 0–100 in the schema.
fn stored_score(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryScanStore {
    scans: RwLock<Vec<StoredScan>>,
}

#[async_trait]
impl ScanStore for InMemoryScanStore {
    async fn save(&self, scan: NewScan) -> Result<StoredScan, AppError> {
        let stored = StoredScan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            resume_filename: scan.resume_filename,
            job_description: scan.job_description,
            result: scan.result,
        };
        self.scans.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredScan>, AppError> {
        Ok(self.scans.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<ScanSummary>, AppError> {
        // Appended in save order, so reverse iteration is newest first.
        Ok(self.scans.read().await.iter().rev().map(ScanSummary::from).collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::AtsScorer;
    use serde_json::json;

    fn new_scan(filename: &str) -> NewScan {
        NewScan {
            resume_filename: filename.to_string(),
            job_description: "Rust developer".to_string(),
            result: AtsScorer::default().score("Skills\nRust", "Rust developer"),
        }
    }

    #[tokio::test]
    async fn test_in_memory_save_then_get() {
        let store = InMemoryScanStore::default();
        let saved = store.save(new_scan("cv.pdf")).await.unwrap();

        let fetched = store.get(saved.id).await.unwrap().unwrap();
        assert_eq!(fetched, saved);
        assert_eq!(fetched.resume_filename, "cv.pdf");
    }

    #[tokio::test]
    async fn test_in_memory_unknown_id_is_none() {
        let store = InMemoryScanStore::default();
        store.save(new_scan("cv.pdf")).await.unwrap();
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_list_newest_first() {
        let store = InMemoryScanStore::default();
        let first = store.save(new_scan("first.pdf")).await.unwrap();
        let second = store.save(new_scan("second.pdf")).await.unwrap();

        let list = store.list().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, second.id);
        assert_eq!(list[1].id, first.id);
        assert_eq!(list[0].total_score, second.result.total_score);
    }

    fn row(section_checks: serde_json::Value) -> ResumeScanRow {
        ResumeScanRow {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            resume_filename: "cv.pdf".to_string(),
            job_description: "Rust".to_string(),
            total_score: 45,
            keyword_score: 50,
            section_score: 29,
            matched_keywords: json!(["rust"]),
            missing_keywords: json!(["kafka"]),
            section_checks,
            suggestions: json!(["Your score is low."]),
        }
    }

    #[test]
    fn test_row_decodes_into_stored_scan() {
        let scan = StoredScan::try_from(row(json!({"Contact Info": true, "Skills": true}))).unwrap();
        assert_eq!(scan.result.matched_keywords, vec!["rust"]);
        assert_eq!(scan.result.missing_keywords, vec!["kafka"]);
        assert!(scan.result.section_checks.contact_info);
        assert!(scan.result.section_checks.skills);
        assert_eq!(scan.result.section_checks.passed_count(), 2);
        assert_eq!(scan.result.total_score, 45);
    }

    #[test]
    fn test_corrupt_row_is_serialization_error() {
        let err = StoredScan::try_from(row(json!(["not", "a", "map"]))).unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[test]
    fn test_stored_score_clamps() {
        assert_eq!(stored_score(-3), 0);
        assert_eq!(stored_score(64), 64);
        assert_eq!(stored_score(250), 100);
    }

    #[test]
    fn test_backend_labels() {
        assert_eq!(InMemoryScanStore::default().backend(), "memory");
    }
}
