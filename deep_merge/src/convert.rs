//! Typed extraction of merged values.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{MergeResult, merge::deep_merge, result_ext::MergeResultExt};

/// Deserialise a JSON [`Value`] into `T`.
///
/// # Errors
///
/// Returns [`crate::MergeError::Decode`] when deserialisation fails.
///
/// # Examples
///
/// ```rust
/// use deep_merge::from_value;
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct App { port: u16 }
///
/// let app: App = from_value(json!({"port": 8080}))?;
/// assert_eq!(app.port, 8080);
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn from_value<T: DeserializeOwned>(value: Value) -> MergeResult<T> {
    serde_json::from_value(value).into_merge()
}

/// Deep merge `args` and deserialise the merged mapping into `T`.
///
/// # Errors
///
/// Returns the validation errors of [`deep_merge`], or
/// [`crate::MergeError::Decode`] when the merged mapping does not fit `T`.
///
/// # Examples
///
/// ```rust
/// use deep_merge::deep_merge_into;
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize)]
/// struct Server { host: String, port: u16 }
///
/// let server: Server = deep_merge_into(&[
///     json!({"host": "localhost", "port": 80}),
///     json!({"port": 8080}),
/// ])?;
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 8080);
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn deep_merge_into<T: DeserializeOwned>(args: &[Value]) -> MergeResult<T> {
    from_value(deep_merge(args)?)
}
