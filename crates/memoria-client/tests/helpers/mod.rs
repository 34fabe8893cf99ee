//! Shared stub collaborators for the ingestion tests

use std::sync::Arc;

use async_trait::async_trait;

use memoria_client::{FaceBox, MemoriaClient, Mode, Transcode, TranscodeError, VisionService};
use memoria_storage::MemoryStorage;
use memoria_transcode::TranscodeResult;
use memoria_vision::NoopVision;

/// Transcoder stub: uppercases on the single-frame path, reverses on the
/// animated path, so tests can tell which path produced the stored bytes.
pub struct UppercaseTranscoder;

#[async_trait]
impl Transcode for UppercaseTranscoder {
    async fn render(&self, input: &[u8], _options: &[String]) -> TranscodeResult<Vec<u8>> {
        Ok(input.to_ascii_uppercase())
    }

    async fn render_animated(&self, input: &[u8], _options: &[String]) -> TranscodeResult<Vec<u8>> {
        Ok(input.iter().rev().copied().collect())
    }
}

/// Transcoder stub that always fails with a fixed diagnostic.
pub struct FailingTranscoder {
    pub message: String,
}

#[async_trait]
impl Transcode for FailingTranscoder {
    async fn render(&self, _input: &[u8], _options: &[String]) -> TranscodeResult<Vec<u8>> {
        Err(TranscodeError::Failed(self.message.clone()))
    }

    async fn render_animated(
        &self,
        _input: &[u8],
        _options: &[String],
    ) -> TranscodeResult<Vec<u8>> {
        Err(TranscodeError::Failed(self.message.clone()))
    }
}

/// Vision stub returning fixed detections.
pub struct FakeVision {
    pub labels: Vec<String>,
    pub faces: Vec<FaceBox>,
}

#[async_trait]
impl VisionService for FakeVision {
    async fn detect_labels(&self, _image: &[u8]) -> Vec<String> {
        self.labels.clone()
    }

    async fn detect_faces(&self, _image: &[u8]) -> Vec<FaceBox> {
        self.faces.clone()
    }
}

/// Stub-mode client over shared in-memory storage.
pub fn stub_client(transcoder: impl Transcode + 'static) -> (MemoriaClient, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let client = MemoriaClient::from_parts(
        Mode::Stub,
        10,
        storage.clone(),
        Arc::new(NoopVision),
        Arc::new(transcoder),
    );
    (client, storage)
}

/// Live-mode client with a stub vision service, for enrichment tests.
pub fn live_client(
    transcoder: impl Transcode + 'static,
    vision: impl VisionService + 'static,
) -> (MemoriaClient, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let client = MemoriaClient::from_parts(
        Mode::Live,
        10,
        storage.clone(),
        Arc::new(vision),
        Arc::new(transcoder),
    );
    (client, storage)
}
