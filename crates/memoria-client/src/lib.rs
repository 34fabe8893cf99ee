//! Memoria Client Library
//!
//! The ingestion orchestrator: accepts an upload, decides on transcoding,
//! derives the content-addressed storage key, writes to the object store,
//! and enriches the canonical rendition with vision metadata (labels and a
//! face-derived crop-gravity anchor).
//!
//! ```no_run
//! use memoria_client::{MemoriaClient, MemoriaConfig, UploadRequest};
//!
//! # async fn example() -> Result<(), memoria_client::IngestError> {
//! let client = MemoriaClient::connect(MemoriaConfig::from_env().map_err(
//!     |e| memoria_client::IngestError::Config(e.to_string()),
//! )?)
//! .await?;
//!
//! let result = client
//!     .put(UploadRequest::new(
//!         std::fs::read("portrait.jpg").unwrap(),
//!         "123",
//!         "image/jpeg",
//!     ))
//!     .await?;
//! println!("stored as {} with gravity {}", result.filename, result.gravity);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod exif;
pub mod telemetry;

// Re-export the public surface
pub use client::MemoriaClient;
pub use error::IngestError;
pub use memoria_core::{
    FaceBox, GravityAnchor, MemoriaConfig, Mode, RenditionResult, StorageBackend, UploadRequest,
    ORIGINAL_STYLE,
};
pub use memoria_storage::{Storage, StorageError};
pub use memoria_transcode::{ConvertTranscoder, Transcode, TranscodeError};
pub use memoria_vision::VisionService;
