//! Rendition selection
//!
//! Decides whether a write invokes the converter at all, and which output
//! path it takes. The canonical style and option-less requests pass bytes
//! through untouched; GIF content keeps the animated path, everything else
//! renders to single-frame JPEG.

use memoria_core::UploadRequest;

use crate::convert::Transcode;
use crate::runner::TranscodeResult;

/// Produce the output bytes for a request: either the input unchanged or the
/// converter's output.
pub async fn select_rendition(
    transcoder: &dyn Transcode,
    request: &UploadRequest,
) -> TranscodeResult<Vec<u8>> {
    if !request.wants_transcode() {
        return Ok(request.file.to_vec());
    }

    if request.content_type.contains("image/gif") {
        transcoder
            .render_animated(&request.file, &request.convert_options)
            .await
    } else {
        transcoder
            .render(&request.file, &request.convert_options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Records which path ran and returns a fixed marker.
    struct MarkerTranscoder;

    #[async_trait]
    impl Transcode for MarkerTranscoder {
        async fn render(&self, _input: &[u8], _options: &[String]) -> TranscodeResult<Vec<u8>> {
            Ok(b"single-frame".to_vec())
        }

        async fn render_animated(
            &self,
            _input: &[u8],
            _options: &[String],
        ) -> TranscodeResult<Vec<u8>> {
            Ok(b"animated".to_vec())
        }
    }

    fn styled(content_type: &str) -> UploadRequest {
        UploadRequest::new(&b"input-bytes"[..], "42", content_type)
            .with_style("thumbnail")
            .with_convert_options(vec!["-resize 100x100".to_string()])
    }

    #[tokio::test]
    async fn test_original_style_passes_through() {
        let request = UploadRequest::new(&b"input-bytes"[..], "42", "image/jpeg");
        let output = select_rendition(&MarkerTranscoder, &request).await.unwrap();
        assert_eq!(output, b"input-bytes");
    }

    #[tokio::test]
    async fn test_empty_options_pass_through() {
        let request = UploadRequest::new(&b"input-bytes"[..], "42", "image/jpeg")
            .with_style("thumbnail");
        let output = select_rendition(&MarkerTranscoder, &request).await.unwrap();
        assert_eq!(output, b"input-bytes");
    }

    #[tokio::test]
    async fn test_gif_takes_animated_path() {
        let output = select_rendition(&MarkerTranscoder, &styled("image/gif"))
            .await
            .unwrap();
        assert_eq!(output, b"animated");
    }

    #[tokio::test]
    async fn test_other_types_take_single_frame_path() {
        let output = select_rendition(&MarkerTranscoder, &styled("image/png"))
            .await
            .unwrap();
        assert_eq!(output, b"single-frame");
    }
}
