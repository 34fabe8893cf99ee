//! Memoria Core Library
//!
//! Pure, I/O-free building blocks for the ingestion pipeline: configuration,
//! request/result models, the MIME ↔ extension table, content fingerprinting
//! and storage-key derivation, and crop-gravity inference.
//!
//! # Storage key format
//!
//! Keys are content-addressed: `{id}_{md5(original)}_{token}{extension}`,
//! where `token` is the literal `"original"` for the canonical rendition and
//! the MD5 of the rendered bytes otherwise. Identical inputs always resolve
//! to the identical key, so repeated uploads deduplicate naturally. Key
//! derivation is centralized in the `fingerprint` module.

pub mod config;
pub mod fingerprint;
pub mod gravity;
pub mod mime;
pub mod models;

// Re-export commonly used types
pub use config::{MemoriaConfig, Mode, StorageBackend};
pub use gravity::GravityAnchor;
pub use models::{FaceBox, RenditionResult, UploadRequest, ORIGINAL_STYLE};
