//! Error types produced by validation, merging, and host function dispatch.

mod conversions;
mod types;

pub use types::{MergeError, MergeResult};
