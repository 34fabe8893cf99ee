use async_trait::async_trait;

use memoria_core::FaceBox;

use crate::traits::VisionService;

/// No-op vision service for stub mode: no labels, no faces, no network.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVision;

#[async_trait]
impl VisionService for NoopVision {
    async fn detect_labels(&self, _image: &[u8]) -> Vec<String> {
        Vec::new()
    }

    async fn detect_faces(&self, _image: &[u8]) -> Vec<FaceBox> {
        Vec::new()
    }
}
