//! Multipart upload parsing and validation shared by the scan endpoints.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

/// Fields of a scan form. Absent fields stay empty and are rejected by `validate`.
#[derive(Debug, Clone, Default)]
pub struct ScanUpload {
    pub filename: Option<String>,
    pub resume: Bytes,
    pub job_description: String,
}

impl ScanUpload {
    /// Reads `resume` (file) and `jobDescription` (text); other fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut upload = ScanUpload::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(RESUME_FIELD) => {
                    upload.filename = field.file_name().map(str::to_string);
                    upload.resume = field.bytes().await?;
                }
                Some(JOB_DESCRIPTION_FIELD) => {
                    upload.job_description = field.text().await?;
                }
                _ => {}
            }
        }

        Ok(upload)
    }

    /// Rejects missing inputs and non-PDF filenames, in that order.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resume.is_empty() {
            return Err(AppError::MissingInput("Resume file is required.".to_string()));
        }
        if self.job_description.trim().is_empty() {
            return Err(AppError::MissingInput(
                "Job description is required.".to_string(),
            ));
        }
        let is_pdf = self
            .filename
            .as_deref()
            .is_some_and(|name| name.to_lowercase().ends_with(".pdf"));
        if !is_pdf {
            return Err(AppError::Validation(
                "Please upload a PDF resume only.".to_string(),
            ));
        }
        Ok(())
    }

    /// Filename to persist; `validate` guarantees one exists for accepted uploads.
    pub fn display_filename(&self) -> String {
        self.filename.clone().unwrap_or_default()
    }
}
