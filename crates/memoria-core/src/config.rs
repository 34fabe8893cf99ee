//! Configuration module
//!
//! Configuration for the ingestion client: operating mode, storage backend
//! selection, S3 and Rekognition settings, and the external converter
//! invocation parameters.

use std::env;

const DEFAULT_CONVERT_PATH: &str = "convert";
const DEFAULT_CONVERT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REFERENCE_QUALITY: u32 = 10;

/// Operating mode for the client.
///
/// `Stub` replaces the object store with an in-memory backend and skips the
/// vision service entirely (gravity defaults to `Center`, keywords to empty).
/// The mode is an explicit configuration field; nothing in the pipeline
/// inspects ambient environment state at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Live,
    Stub,
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Memory,
}

/// Client configuration
#[derive(Clone, Debug)]
pub struct MemoriaConfig {
    pub mode: Mode,
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    pub rekognition_region: Option<String>,
    /// Path to the external ImageMagick `convert` binary
    pub convert_path: String,
    /// Hard wall-clock bound on a single converter invocation
    pub convert_timeout_secs: u64,
    /// JPEG quality factor for the degraded classification reference
    pub reference_quality: u32,
}

impl MemoriaConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let mode = match env::var("MEMORIA_MODE")
            .unwrap_or_else(|_| "live".to_string())
            .to_lowercase()
            .as_str()
        {
            "stub" | "test" => Mode::Stub,
            _ => Mode::Live,
        };

        let storage_backend = match env::var("STORAGE_BACKEND")
            .ok()
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("memory") => StorageBackend::Memory,
            Some(_) => StorageBackend::S3,
            None => match mode {
                Mode::Stub => StorageBackend::Memory,
                Mode::Live => StorageBackend::S3,
            },
        };

        let config = MemoriaConfig {
            mode,
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            rekognition_region: env::var("REKOGNITION_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .ok(),
            convert_path: env::var("CONVERT_PATH")
                .unwrap_or_else(|_| DEFAULT_CONVERT_PATH.to_string()),
            convert_timeout_secs: env::var("CONVERT_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_CONVERT_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_CONVERT_TIMEOUT_SECS),
            reference_quality: env::var("REFERENCE_QUALITY")
                .unwrap_or_else(|_| DEFAULT_REFERENCE_QUALITY.to_string())
                .parse()
                .unwrap_or(DEFAULT_REFERENCE_QUALITY),
        };

        config.validate()?;
        Ok(config)
    }

    /// Stub-mode configuration: in-memory storage, no vision calls.
    pub fn stub() -> Self {
        MemoriaConfig {
            mode: Mode::Stub,
            storage_backend: StorageBackend::Memory,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            rekognition_region: None,
            convert_path: DEFAULT_CONVERT_PATH.to_string(),
            convert_timeout_secs: DEFAULT_CONVERT_TIMEOUT_SECS,
            reference_quality: DEFAULT_REFERENCE_QUALITY,
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.storage_backend == StorageBackend::S3 {
            if self.s3_bucket.is_none() {
                return Err(anyhow::anyhow!(
                    "S3_BUCKET must be set when using the S3 storage backend"
                ));
            }
            if self.s3_region.is_none() {
                return Err(anyhow::anyhow!(
                    "S3_REGION or AWS_REGION must be set when using the S3 storage backend"
                ));
            }
        }

        if self.mode == Mode::Live && self.rekognition_region.is_none() {
            return Err(anyhow::anyhow!(
                "REKOGNITION_REGION or AWS_REGION must be set in live mode"
            ));
        }

        if self.convert_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "CONVERT_TIMEOUT_SECS must be greater than zero"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_config_validates() {
        let config = MemoriaConfig::stub();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, Mode::Stub);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
    }

    #[test]
    fn test_s3_backend_requires_bucket() {
        let config = MemoriaConfig {
            storage_backend: StorageBackend::S3,
            ..MemoriaConfig::stub()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("S3_BUCKET"));
    }

    #[test]
    fn test_s3_backend_requires_region() {
        let config = MemoriaConfig {
            storage_backend: StorageBackend::S3,
            s3_bucket: Some("uploads".to_string()),
            ..MemoriaConfig::stub()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("S3_REGION"));
    }

    #[test]
    fn test_live_mode_requires_rekognition_region() {
        let config = MemoriaConfig {
            mode: Mode::Live,
            ..MemoriaConfig::stub()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("REKOGNITION_REGION"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = MemoriaConfig {
            convert_timeout_secs: 0,
            ..MemoriaConfig::stub()
        };
        assert!(config.validate().is_err());
    }
}
