//! Memoria Storage Library
//!
//! Object-store abstraction for the ingestion pipeline. Keys arrive fully
//! resolved from the fingerprint engine, so every backend works with the
//! same flat key space; there is no key derivation at this layer.
//!
//! Backends: S3 (and S3-compatible endpoints) through `object_store`, and an
//! in-memory store used by stub mode and tests.

pub mod factory;
#[cfg(feature = "storage-memory")]
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-memory")]
pub use memory::MemoryStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
