//! EXIF metadata extraction
//!
//! Best-effort enrichment: files without parseable EXIF yield an empty
//! mapping. Metadata can never fail a write.

use std::collections::BTreeMap;
use std::io::Cursor;

use exif::{In, Reader};

/// Extract EXIF tags from the original file bytes as a tag-name →
/// display-value mapping.
pub fn extract_tags(data: &[u8]) -> BTreeMap<String, String> {
    let mut cursor = Cursor::new(data);
    let parsed = match Reader::new().read_from_container(&mut cursor) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "no EXIF metadata extracted");
            return BTreeMap::new();
        }
    };

    parsed
        .fields()
        .filter(|field| field.ifd_num == In::PRIMARY)
        .map(|field| {
            (
                field.tag.to_string(),
                field.display_value().with_unit(&parsed).to_string(),
            )
        })
        .collect()
}
