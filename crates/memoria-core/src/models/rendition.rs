use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::gravity::GravityAnchor;

/// Outcome of a single write operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenditionResult {
    /// Hex MD5 of the rendered (stored) bytes
    pub fingerprint: String,
    /// Tag name → value mapping extracted from the original file
    pub metadata: BTreeMap<String, String>,
    /// Dot-prefixed file extension resolved from the content type
    pub extension: String,
    /// The resolved storage key the object was written under
    pub filename: String,
    /// Detected label names; empty for non-canonical renditions
    pub keywords: Vec<String>,
    /// Crop anchor derived from the largest detected face
    pub gravity: GravityAnchor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendition_result_serialization() {
        let result = RenditionResult {
            fingerprint: "9e107d9d372bb6826bd81d3542a419d6".to_string(),
            metadata: BTreeMap::from([("Orientation".to_string(), "1".to_string())]),
            extension: ".jpg".to_string(),
            filename: "42_9e107d9d372bb6826bd81d3542a419d6_original.jpg".to_string(),
            keywords: vec!["Portrait".to_string()],
            gravity: GravityAnchor::Center,
        };

        let json = serde_json::to_string(&result).unwrap();
        let deserialized: RenditionResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result.fingerprint, deserialized.fingerprint);
        assert_eq!(result.filename, deserialized.filename);
        assert_eq!(result.keywords, deserialized.keywords);
        assert_eq!(result.gravity, deserialized.gravity);
    }
}
