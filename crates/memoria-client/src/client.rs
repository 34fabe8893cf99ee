//! Ingestion orchestrator
//!
//! Sequences a write: rendition selection → fingerprinting and key
//! resolution → object-store write → (canonical rendition only) vision
//! enrichment → EXIF extraction. Reads and deletes pass straight through to
//! the store.

use std::sync::Arc;

use memoria_core::{
    fingerprint, gravity, mime, GravityAnchor, MemoriaConfig, Mode, RenditionResult, UploadRequest,
};
use memoria_storage::{create_storage, Storage};
use memoria_transcode::{select_rendition, ConvertTranscoder, Transcode};
use memoria_vision::{create_vision, VisionService};

use crate::error::IngestError;
use crate::exif;

/// Media ingestion client.
///
/// Stateless between calls; collaborators are shared behind `Arc`, so a
/// single client can serve concurrent writes.
pub struct MemoriaClient {
    mode: Mode,
    reference_quality: u32,
    storage: Arc<dyn Storage>,
    vision: Arc<dyn VisionService>,
    transcoder: Arc<dyn Transcode>,
}

impl MemoriaClient {
    /// Build a client from configuration, constructing the storage backend,
    /// vision service, and converter it selects.
    pub async fn connect(config: MemoriaConfig) -> Result<Self, IngestError> {
        config
            .validate()
            .map_err(|e| IngestError::Config(e.to_string()))?;

        let storage = create_storage(&config)?;
        let vision = create_vision(&config)
            .await
            .map_err(|e| IngestError::Config(e.to_string()))?;
        let transcoder = Arc::new(ConvertTranscoder::from_config(&config));

        Ok(Self::from_parts(
            config.mode,
            config.reference_quality,
            storage,
            vision,
            transcoder,
        ))
    }

    /// Assemble a client from explicit collaborators.
    pub fn from_parts(
        mode: Mode,
        reference_quality: u32,
        storage: Arc<dyn Storage>,
        vision: Arc<dyn VisionService>,
        transcoder: Arc<dyn Transcode>,
    ) -> Self {
        MemoriaClient {
            mode,
            reference_quality,
            storage,
            vision,
            transcoder,
        }
    }

    /// Write one rendition and return its result record.
    ///
    /// The content type must have a known extension mapping; that check runs
    /// before anything touches the network. Transcode and storage failures
    /// surface; vision failures degrade to empty results inside the vision
    /// boundary.
    pub async fn put(&self, request: UploadRequest) -> Result<RenditionResult, IngestError> {
        let extension = mime::extension_for(&request.content_type)
            .ok_or_else(|| IngestError::UnsupportedContentType(request.content_type.clone()))?;

        let output = select_rendition(self.transcoder.as_ref(), &request).await?;

        let original_digest = fingerprint::content_digest(&request.file);
        let rendered_digest = fingerprint::content_digest(&output);
        let token = fingerprint::rendition_token(&request.style_name, &rendered_digest);
        let key = match &request.key {
            Some(key) => key.clone(),
            None => fingerprint::storage_key(&request.id, &original_digest, token, extension),
        };

        tracing::info!(
            id = %request.id,
            key = %key,
            style = %request.style_name,
            size_bytes = output.len(),
            "storing rendition"
        );

        self.storage
            .put(&key, output, &request.content_type)
            .await?;

        let (keywords, gravity) = if request.is_original() && self.mode == Mode::Live {
            self.classify(&request).await?
        } else {
            (Vec::new(), GravityAnchor::Center)
        };

        let metadata = exif::extract_tags(&request.file);

        Ok(RenditionResult {
            fingerprint: rendered_digest,
            metadata,
            extension: extension.to_string(),
            filename: key,
            keywords,
            gravity,
        })
    }

    /// Read stored bytes by key. NotFound propagates from the backend.
    pub async fn get(&self, key: &str) -> Result<Vec<u8>, IngestError> {
        Ok(self.storage.get(key).await?)
    }

    /// Delete a stored object by key.
    pub async fn remove(&self, key: &str) -> Result<(), IngestError> {
        Ok(self.storage.delete(key).await?)
    }

    /// Vision enrichment for the canonical rendition: render a degraded
    /// reference (small enough for the vision service's payload limit but
    /// fine for classification), then detect labels and faces on it.
    async fn classify(&self, request: &UploadRequest) -> Result<(Vec<String>, GravityAnchor), IngestError> {
        let reference_options = vec![format!("-quality {}", self.reference_quality)];
        let reference = self
            .transcoder
            .render(&request.file, &reference_options)
            .await?;

        let keywords = self.vision.detect_labels(&reference).await;
        let faces = self.vision.detect_faces(&reference).await;

        tracing::debug!(
            id = %request.id,
            keyword_count = keywords.len(),
            face_count = faces.len(),
            "vision enrichment complete"
        );

        Ok((keywords, gravity::infer_gravity(&faces)))
    }
}
