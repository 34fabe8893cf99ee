//! ImageMagick `convert` rendition paths
//!
//! Two output paths: single-frame images render to JPEG, animated GIFs keep
//! GIF output and gain canvas-stabilization options. Option strings may
//! carry several argv tokens each (`"-resize 640x480"`) and are split at
//! invocation time.

use std::time::Duration;

use async_trait::async_trait;

use memoria_core::MemoriaConfig;

use crate::runner::{run_filter, TranscodeResult};

/// Options appended to every animated rendition. `-coalesce` flattens frame
/// deltas into full frames; the repage pair resets the virtual canvas so
/// later geometry operations act on the visible frame.
const GIF_STABILIZE_OPTIONS: [&str; 3] = ["-coalesce", "-repage 0x0", "+repage"];

/// Transcoder seam
#[async_trait]
pub trait Transcode: Send + Sync {
    /// Single-frame rendition, JPEG output
    async fn render(&self, input: &[u8], options: &[String]) -> TranscodeResult<Vec<u8>>;

    /// Animated rendition, GIF output with stabilization options
    async fn render_animated(&self, input: &[u8], options: &[String]) -> TranscodeResult<Vec<u8>>;
}

/// External `convert` process transcoder
#[derive(Debug, Clone)]
pub struct ConvertTranscoder {
    convert_path: String,
    timeout: Duration,
}

impl ConvertTranscoder {
    pub fn new(convert_path: impl Into<String>, timeout: Duration) -> Self {
        ConvertTranscoder {
            convert_path: convert_path.into(),
            timeout,
        }
    }

    pub fn from_config(config: &MemoriaConfig) -> Self {
        ConvertTranscoder::new(
            config.convert_path.clone(),
            Duration::from_secs(config.convert_timeout_secs),
        )
    }

    async fn run(&self, args: Vec<String>, input: &[u8]) -> TranscodeResult<Vec<u8>> {
        tracing::debug!(
            convert_path = %self.convert_path,
            args = ?args,
            input_bytes = input.len(),
            "invoking converter"
        );
        run_filter(&self.convert_path, &args, input, self.timeout).await
    }
}

#[async_trait]
impl Transcode for ConvertTranscoder {
    async fn render(&self, input: &[u8], options: &[String]) -> TranscodeResult<Vec<u8>> {
        self.run(single_frame_args(options), input).await
    }

    async fn render_animated(&self, input: &[u8], options: &[String]) -> TranscodeResult<Vec<u8>> {
        self.run(animated_args(options), input).await
    }
}

/// `convert - <options> jpeg:-`
fn single_frame_args(options: &[String]) -> Vec<String> {
    let mut args = vec!["-".to_string()];
    args.extend(split_tokens(options.iter().cloned()));
    args.push("jpeg:-".to_string());
    args
}

/// `convert - <options'> -coalesce -repage 0x0 +repage gif:-`
///
/// Any caller option requesting a crop gains a trailing `+repage`; cropping
/// a multi-frame image otherwise leaves stale canvas offsets in the output.
fn animated_args(options: &[String]) -> Vec<String> {
    let augmented = options.iter().map(|option| {
        if option.contains("-crop") {
            format!("{} +repage", option)
        } else {
            option.clone()
        }
    });

    let mut args = vec!["-".to_string()];
    args.extend(split_tokens(augmented));
    args.extend(split_tokens(
        GIF_STABILIZE_OPTIONS.iter().map(|s| s.to_string()),
    ));
    args.push("gif:-".to_string());
    args
}

fn split_tokens(options: impl Iterator<Item = String>) -> Vec<String> {
    options
        .flat_map(|option| {
            option
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_frame_args_select_jpeg_output() {
        let args = single_frame_args(&options(&["-resize 640x480", "-strip"]));
        assert_eq!(args, ["-", "-resize", "640x480", "-strip", "jpeg:-"]);
    }

    #[test]
    fn test_single_frame_args_without_options() {
        assert_eq!(single_frame_args(&[]), ["-", "jpeg:-"]);
    }

    #[test]
    fn test_animated_args_append_stabilization() {
        let args = animated_args(&options(&["-resize 320x240"]));
        assert_eq!(
            args,
            [
                "-", "-resize", "320x240", "-coalesce", "-repage", "0x0", "+repage", "gif:-"
            ]
        );
    }

    #[test]
    fn test_animated_crop_gains_repage() {
        let args = animated_args(&options(&["-crop 100x100+10+10"]));
        assert_eq!(
            args,
            [
                "-",
                "-crop",
                "100x100+10+10",
                "+repage",
                "-coalesce",
                "-repage",
                "0x0",
                "+repage",
                "gif:-"
            ]
        );
    }

    #[test]
    fn test_animated_non_crop_options_untouched() {
        let args = animated_args(&options(&["-resize 50x50", "-crop 10x10"]));
        assert_eq!(
            args,
            [
                "-", "-resize", "50x50", "-crop", "10x10", "+repage", "-coalesce", "-repage",
                "0x0", "+repage", "gif:-"
            ]
        );
    }
}
