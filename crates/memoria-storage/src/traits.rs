//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All backends take fully resolved keys; the content-addressed key format
/// is produced upstream by the fingerprint engine. NotFound is reported as
/// its own variant so callers can propagate it untranslated.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write an object under the given key
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()>;

    /// Read an object by key
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete an object by key
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether an object exists
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}
