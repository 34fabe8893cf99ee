//! Vision service abstraction trait

use async_trait::async_trait;

use memoria_core::FaceBox;

/// Vision service abstraction
///
/// Implementations absorb their own failures: both operations degrade to an
/// empty list when the backing service errors, so callers never branch on a
/// vision failure.
#[async_trait]
pub trait VisionService: Send + Sync {
    /// Detect labels in the image; empty on failure or when nothing clears
    /// the confidence threshold.
    async fn detect_labels(&self, image: &[u8]) -> Vec<String>;

    /// Detect face bounding boxes in the image; empty on failure or when no
    /// faces are present.
    async fn detect_faces(&self, image: &[u8]) -> Vec<FaceBox>;
}
