use crate::noop::NoopVision;
#[cfg(feature = "rekognition")]
use crate::rekognition::RekognitionVision;
use crate::traits::VisionService;
use memoria_core::{MemoriaConfig, Mode};
use std::sync::Arc;

/// Create a vision service based on configuration.
///
/// Stub mode never touches the network; live mode requires a Rekognition
/// region.
pub async fn create_vision(config: &MemoriaConfig) -> Result<Arc<dyn VisionService>, anyhow::Error> {
    match config.mode {
        Mode::Stub => Ok(Arc::new(NoopVision)),

        #[cfg(feature = "rekognition")]
        Mode::Live => {
            let region = config.rekognition_region.as_deref().ok_or_else(|| {
                anyhow::anyhow!("REKOGNITION_REGION not configured for live mode")
            })?;
            Ok(Arc::new(RekognitionVision::connect(region).await))
        }

        #[cfg(not(feature = "rekognition"))]
        Mode::Live => Err(anyhow::anyhow!(
            "Rekognition vision service not available (rekognition feature not enabled)"
        )),
    }
}
