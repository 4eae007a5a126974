//! Text source: turns an uploaded résumé document into plain text.
//!
//! The scorer only ever sees the returned string; no document-format
//! validation happens beyond what the backing library enforces.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("PDF library panicked while reading the document")]
    Panicked,
}

/// A provider of plain résumé text from raw uploaded bytes.
///
/// Implementations are blocking; callers run them on a blocking thread.
pub trait TextSource: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Extracts text from PDF bytes with the `pdf-extract` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        // pdf-extract can panic on malformed input instead of returning an error.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractError::Pdf(e.to_string())),
            Err(_) => Err(ExtractError::Panicked),
        }
    }
}

/// Treats the upload as UTF-8 text. Used in tests in place of a real PDF.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct Utf8TextSource;

#[cfg(test)]
impl TextSource for Utf8TextSource {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_an_error_not_a_panic() {
        let result = PdfTextSource.extract(b"definitely not a pdf");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_bytes_are_an_error() {
        assert!(PdfTextSource.extract(&[]).is_err());
    }

    #[test]
    fn test_utf8_source() {
        assert_eq!(Utf8TextSource.extract(b"Skills\nRust").unwrap(), "Skills\nRust");
        assert!(matches!(
            Utf8TextSource.extract(&[0xff, 0xfe, 0x00]),
            Err(ExtractError::Pdf(_))
        ));
    }
}
