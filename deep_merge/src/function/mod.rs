//! Host function surface for the calling DSL.
//!
//! The DSL invokes native functions by name with a list of decoded argument
//! values. [`HostFunction`] is the callable interface, [`FunctionRegistry`]
//! performs lookup and the argument-count check, and [`DeepMergeFunction`]
//! exposes [`crate::deep_merge`] through that interface.
//!
//! # Example
//!
//! ```rust
//! use deep_merge::FunctionRegistry;
//! use serde_json::json;
//!
//! let registry = FunctionRegistry::with_builtins();
//! let merged = registry.call(
//!     "deep_merge",
//!     &[json!({"one": {"two": 2}}), json!({"one": {"three": 3}})],
//! )?;
//! assert_eq!(merged["one"], json!({"two": 2, "three": 3}));
//!
//! let err = registry
//!     .call("deep_merge", &[json!({"one": 1})])
//!     .unwrap_err();
//! assert!(err.to_string().contains("wrong number of arguments"));
//! # Ok::<_, deep_merge::MergeError>(())
//! ```

mod arity;
mod registry;

pub use arity::Arity;
pub use registry::FunctionRegistry;

use serde_json::Value;

use crate::{MergeResult, merge::{DEEP_MERGE, deep_merge}};

/// A native function callable from the DSL.
///
/// Implementations trust that [`FunctionRegistry::call`] has already checked
/// the argument count against [`HostFunction::arity`].
pub trait HostFunction: Send + Sync {
    /// Name the DSL uses to invoke the function.
    fn name(&self) -> &str;

    /// Accepted argument counts.
    fn arity(&self) -> Arity;

    /// Invoke the function with decoded arguments.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::MergeError`] describing why the arguments were
    /// rejected.
    fn call(&self, args: &[Value]) -> MergeResult<Value>;
}

/// `deep_merge(hash1, hash2, ...)`: recursively merges two or more mappings.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeepMergeFunction;

impl HostFunction for DeepMergeFunction {
    fn name(&self) -> &str {
        DEEP_MERGE
    }

    fn arity(&self) -> Arity {
        Arity::AtLeast(2)
    }

    fn call(&self, args: &[Value]) -> MergeResult<Value> {
        deep_merge(args)
    }
}

#[cfg(test)]
mod tests;
