//! AWS Rekognition vision adapter

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Attribute, Image};
use aws_sdk_rekognition::Client as RekognitionClient;

use memoria_core::FaceBox;

use crate::traits::VisionService;

/// Upper bound on labels per image; classification consumers filter further
/// downstream.
const MAX_LABELS: i32 = 123;
/// Minimum label confidence, percent.
const MIN_CONFIDENCE: f32 = 73.0;

/// AWS Rekognition vision service
pub struct RekognitionVision {
    client: RekognitionClient,
}

impl RekognitionVision {
    /// Create a Rekognition client for the given region, resolving
    /// credentials from the default provider chain.
    pub async fn connect(region: &str) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()))
            .load()
            .await;

        RekognitionVision {
            client: RekognitionClient::new(&config),
        }
    }

    fn image(bytes: &[u8]) -> Image {
        Image::builder().bytes(Blob::new(bytes.to_vec())).build()
    }
}

#[async_trait]
impl VisionService for RekognitionVision {
    async fn detect_labels(&self, image: &[u8]) -> Vec<String> {
        let result = self
            .client
            .detect_labels()
            .image(Self::image(image))
            .max_labels(MAX_LABELS)
            .min_confidence(MIN_CONFIDENCE)
            .send()
            .await;

        match result {
            Ok(output) => output
                .labels()
                .iter()
                .filter_map(|label| label.name().map(str::to_string))
                .collect(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "label detection failed, continuing without labels"
                );
                Vec::new()
            }
        }
    }

    async fn detect_faces(&self, image: &[u8]) -> Vec<FaceBox> {
        let result = self
            .client
            .detect_faces()
            .image(Self::image(image))
            .attributes(Attribute::All)
            .send()
            .await;

        match result {
            Ok(output) => output
                .face_details()
                .iter()
                .filter_map(|detail| detail.bounding_box())
                .map(|bounds| FaceBox {
                    left: bounds.left().unwrap_or(0.0),
                    top: bounds.top().unwrap_or(0.0),
                    width: bounds.width().unwrap_or(0.0),
                    height: bounds.height().unwrap_or(0.0),
                })
                .collect(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "face detection failed, continuing without faces"
                );
                Vec::new()
            }
        }
    }
}
