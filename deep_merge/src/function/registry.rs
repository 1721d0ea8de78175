//! Name-based dispatch for host functions.

use std::{collections::BTreeMap, fmt};

use serde_json::Value;

use super::{DeepMergeFunction, HostFunction};
use crate::{MergeError, MergeResult};

/// Registry of [`HostFunction`]s keyed by name.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: BTreeMap<String, Box<dyn HostFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            functions: BTreeMap::new(),
        }
    }

    /// Create a registry with the crate's functions already registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let _previous = registry.register(Box::new(DeepMergeFunction));
        registry
    }

    /// Register `function` under its own name.
    ///
    /// Returns the function previously registered under that name, if any.
    pub fn register(&mut self, function: Box<dyn HostFunction>) -> Option<Box<dyn HostFunction>> {
        let name = function.name().to_owned();
        tracing::debug!(function = %name, arity = %function.arity(), "registering host function");
        self.functions.insert(name, function)
    }

    /// Look up a function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn HostFunction> {
        self.functions.get(name).map(Box::as_ref)
    }

    /// Returns `true` when a function is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered function names in sorted order.
    #[must_use = "iterators should be consumed to inspect names"]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Resolve `name`, check the argument count, and invoke the function.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::UnknownFunction`] when nothing is registered
    /// under `name`, [`MergeError::Arity`] when `args` has the wrong length,
    /// and otherwise whatever the function itself reports.
    pub fn call(&self, name: &str, args: &[Value]) -> MergeResult<Value> {
        let function = self.get(name).ok_or_else(|| MergeError::UnknownFunction {
            name: name.to_owned(),
        })?;
        let arity = function.arity();
        if !arity.accepts(args.len()) {
            return Err(MergeError::arity(name, arity, args.len()));
        }
        tracing::trace!(function = name, arguments = args.len(), "dispatching host function");
        function.call(args)
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}
