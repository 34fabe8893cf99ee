//! Unified client-facing error type

use thiserror::Error;

use memoria_storage::StorageError;
use memoria_transcode::TranscodeError;

/// Errors surfaced by the ingestion client.
///
/// Vision failures never appear here; the vision boundary absorbs them and
/// degrades to empty results. Everything that would corrupt the deliverable
/// (a bad transcode, a bad key, a storage failure) surfaces.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Transcode failed: {0}")]
    Transcode(#[from] TranscodeError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The declared content type has no known file-extension mapping.
    /// Raised before any storage or vision call.
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IngestError {
    /// Whether this error is a storage not-found, propagated unmodified from
    /// the backend.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IngestError::Storage(StorageError::NotFound(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let err = IngestError::from(StorageError::NotFound("missing.jpg".to_string()));
        assert!(err.is_not_found());

        let err = IngestError::UnsupportedContentType("application/pdf".to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_transcode_diagnostic_text_preserved() {
        let err = IngestError::from(TranscodeError::Failed(
            "convert: unrecognized option `-bogus'".to_string(),
        ));
        assert!(err.to_string().contains("unrecognized option"));
    }
}
