//! Request and result models for the ingestion pipeline

mod face;
mod rendition;
mod upload;

pub use face::FaceBox;
pub use rendition::RenditionResult;
pub use upload::{UploadRequest, ORIGINAL_STYLE};
