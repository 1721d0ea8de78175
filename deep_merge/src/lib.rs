//! Deep merging of nested mappings.
//!
//! Given an ordered list of mapping arguments already decoded into
//! [`serde_json::Value`] trees, [`deep_merge`] produces one mapping holding
//! the recursive union of all inputs. Later arguments win at every nesting
//! level: nested mappings merge key by key, while scalars and sequences are
//! replaced wholesale. Arguments are borrowed and never modified.
//!
//! The calling DSL represents a missing argument with an empty string, which
//! is accepted and treated as an empty mapping. Anything else that is not a
//! mapping is rejected with [`MergeError::UnexpectedType`] before any merging
//! takes place.
//!
//! DSL hosts dispatch through [`FunctionRegistry`], which enforces each
//! function's [`Arity`] before invoking it.
//!
//! ```rust
//! use deep_merge::deep_merge;
//! use serde_json::json;
//!
//! let merged = deep_merge(&[
//!     json!({"one": 1, "two": 2, "three": {"four": 4}}),
//!     json!({"two": "dos", "three": {"five": 5}}),
//!     json!(""),
//! ])?;
//! assert_eq!(
//!     merged,
//!     json!({"one": 1, "two": "dos", "three": {"four": 4, "five": 5}})
//! );
//! # Ok::<_, deep_merge::MergeError>(())
//! ```

mod convert;
mod error;
pub mod function;
mod merge;
mod result_ext;
mod validate;
mod value;

pub use convert::{deep_merge_into, from_value};
pub use error::{MergeError, MergeResult};
pub use function::{Arity, DeepMergeFunction, FunctionRegistry, HostFunction};
pub use merge::{deep_merge, merge_mappings, merge_pair, merge_value};
pub use result_ext::MergeResultExt;
pub use validate::{classify_argument, validate_arguments};
pub use value::{MergeArgument, ValueKind};

pub use serde_json;
