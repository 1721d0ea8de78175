//! Conversions between external error types and `MergeError`.

use super::MergeError;

/// Deserialisation failures surface as [`MergeError::Decode`].
impl From<serde_json::Error> for MergeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }
}
