//! Extensions for mapping errors to `MergeResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(MergeError::from)` patterns when
//! converting external error types into the crate's [`MergeResult`] alias.
//!
//! # Examples
//!
//! ```
//! use deep_merge::{MergeResult, MergeResultExt};
//!
//! fn decode_port(value: serde_json::Value) -> MergeResult<u16> {
//!     // serde_json::Error implements Into<MergeError>
//!     serde_json::from_value(value).into_merge()
//! }
//!
//! assert!(decode_port(serde_json::json!(8080)).is_ok());
//! assert!(decode_port(serde_json::json!("eighty")).is_err());
//! ```

use crate::{MergeError, MergeResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<MergeError>`
/// into a `MergeResult<T>`.
pub trait MergeResultExt<T, E> {
    /// Convert `Result<T, E>` into `MergeResult<T>` using `Into<MergeError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into [`MergeError`].
    fn into_merge(self) -> MergeResult<T>;
}

impl<T, E> MergeResultExt<T, E> for Result<T, E>
where
    E: Into<MergeError>,
{
    fn into_merge(self) -> MergeResult<T> {
        self.map_err(Into::into)
    }
}
