//! Static MIME type ↔ file extension mapping
//!
//! Extension resolution happens before any storage or vision call, so an
//! unrecognized content type fails the write up front. For types with
//! several customary extensions the table holds the canonical one; the
//! aliases are still accepted on reverse lookup.

/// Canonical content-type → extension pairs. One entry per type.
const MIME_TABLE: &[(&str, &str)] = &[
    ("image/avif", ".avif"),
    ("image/bmp", ".bmp"),
    ("image/gif", ".gif"),
    ("image/heic", ".heic"),
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("image/svg+xml", ".svg"),
    ("image/tiff", ".tiff"),
    ("image/webp", ".webp"),
];

/// Extension aliases accepted on reverse lookup only.
const EXTENSION_ALIASES: &[(&str, &str)] = &[
    ("jpeg", "image/jpeg"),
    ("jpe", "image/jpeg"),
    ("tif", "image/tiff"),
];

/// Resolve the canonical dot-prefixed extension for a declared content type.
/// Media-type parameters (`; charset=...`) are ignored.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    MIME_TABLE
        .iter()
        .find(|(mime, _)| *mime == essence)
        .map(|(_, ext)| *ext)
}

/// Resolve the content type for a file extension, with or without the
/// leading dot.
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    let bare = extension.trim_start_matches('.').to_ascii_lowercase();

    MIME_TABLE
        .iter()
        .find(|(_, ext)| ext.trim_start_matches('.') == bare)
        .map(|(mime, _)| *mime)
        .or_else(|| {
            EXTENSION_ALIASES
                .iter()
                .find(|(alias, _)| *alias == bare)
                .map(|(_, mime)| *mime)
        })
}
