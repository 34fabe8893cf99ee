//! Memoria Transcode Library
//!
//! Invocation of the external ImageMagick-style `convert` process: the
//! rendition paths (single-frame JPEG, animated GIF with canvas
//! stabilization) and a scoped subprocess runner with a hard timeout and
//! guaranteed process teardown.
//!
//! The converter is a byte filter: input on stdin, result on stdout,
//! diagnostics on stderr. Transcode failures always surface to the caller;
//! nothing at this layer retries.

pub mod convert;
pub mod runner;
pub mod selector;

// Re-export commonly used types
pub use convert::{ConvertTranscoder, Transcode};
pub use runner::{run_filter, TranscodeError, TranscodeResult};
pub use selector::select_rendition;
