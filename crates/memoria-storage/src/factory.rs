#[cfg(feature = "storage-memory")]
use crate::MemoryStorage;
#[cfg(feature = "storage-s3")]
use crate::S3Storage;
use crate::{Storage, StorageError, StorageResult};
use memoria_core::{MemoriaConfig, StorageBackend};
use std::sync::Arc;

/// Create a storage backend based on configuration
pub fn create_storage(config: &MemoriaConfig) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend {
        #[cfg(feature = "storage-s3")]
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;
            let region = config
                .s3_region
                .clone()
                .ok_or_else(|| StorageError::ConfigError("S3_REGION not configured".to_string()))?;
            let endpoint = config.s3_endpoint.clone();

            let storage = S3Storage::new(bucket, region, endpoint)?;
            Ok(Arc::new(storage))
        }

        #[cfg(not(feature = "storage-s3"))]
        StorageBackend::S3 => Err(StorageError::ConfigError(
            "S3 storage backend not available (storage-s3 feature not enabled)".to_string(),
        )),

        #[cfg(feature = "storage-memory")]
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),

        #[cfg(not(feature = "storage-memory"))]
        StorageBackend::Memory => Err(StorageError::ConfigError(
            "Memory storage backend not available (storage-memory feature not enabled)".to_string(),
        )),
    }
}

#[cfg(all(test, feature = "storage-memory"))]
mod tests {
    use super::*;

    #[test]
    fn test_stub_config_gets_memory_backend() {
        let config = MemoriaConfig::stub();
        assert!(create_storage(&config).is_ok());
    }

    #[cfg(feature = "storage-s3")]
    #[test]
    fn test_s3_backend_without_bucket_is_config_error() {
        let config = MemoriaConfig {
            storage_backend: StorageBackend::S3,
            ..MemoriaConfig::stub()
        };
        let result = create_storage(&config);
        assert!(matches!(result, Err(StorageError::ConfigError(_))));
    }
}
