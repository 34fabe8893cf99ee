use bytes::Bytes;

/// Style name of the canonical, untransformed rendition.
pub const ORIGINAL_STYLE: &str = "original";

/// Inputs to a single write operation.
///
/// The file content is held as owned [`Bytes`], so every stage of the
/// pipeline (digesting, transcoding, storage) reads from the start without
/// any stream-position bookkeeping.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: Bytes,
    /// Logical identifier the storage key is derived from
    pub id: String,
    /// Explicit storage key override; used verbatim when present
    pub key: Option<String>,
    pub style_name: String,
    /// Converter option strings, e.g. `"-resize 640x480"`. Each entry may
    /// carry several argv tokens; they are split at invocation time.
    pub convert_options: Vec<String>,
    /// Declared MIME type; must have a known extension mapping
    pub content_type: String,
}

impl UploadRequest {
    pub fn new(
        file: impl Into<Bytes>,
        id: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        UploadRequest {
            file: file.into(),
            id: id.into(),
            key: None,
            style_name: ORIGINAL_STYLE.to_string(),
            convert_options: Vec::new(),
            content_type: content_type.into(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_style(mut self, style_name: impl Into<String>) -> Self {
        self.style_name = style_name.into();
        self
    }

    pub fn with_convert_options(mut self, options: Vec<String>) -> Self {
        self.convert_options = options;
        self
    }

    pub fn is_original(&self) -> bool {
        self.style_name == ORIGINAL_STYLE
    }

    /// Whether this request invokes the external converter. The canonical
    /// style and option-less requests always pass bytes through unchanged.
    pub fn wants_transcode(&self) -> bool {
        !self.is_original() && !self.convert_options.is_empty()
    }
}
