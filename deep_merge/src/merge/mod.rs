//! Recursive merge mechanics for mappings.
//!
//! Mappings merge key by key; every other value (scalars and sequences alike)
//! is replaced wholesale by the later argument. Inputs are only ever borrowed,
//! so the merged tree never aliases caller data.

use serde_json::{Map, Value};

use crate::{
    MergeError, MergeResult,
    function::Arity,
    validate::validate_arguments,
    value::MergeArgument,
};

/// Name reported by errors raised from [`deep_merge`].
pub(crate) const DEEP_MERGE: &str = "deep_merge";

/// Deep merge an ordered list of mapping arguments.
///
/// Later arguments win at every nesting level. Nested mappings merge
/// recursively, while scalars and sequences from later arguments replace
/// earlier values. An empty string argument is treated as an empty mapping.
///
/// # Errors
///
/// Returns [`MergeError::UnexpectedType`] for the first argument that is
/// neither a mapping nor an empty string, and [`MergeError::Arity`] when
/// `args` is empty. No merging happens when validation fails.
///
/// # Examples
///
/// ```rust
/// use deep_merge::deep_merge;
/// use serde_json::json;
///
/// let merged = deep_merge(&[
///     json!({"key1": {"a": 1, "b": 2}, "key2": {"c": 3}}),
///     json!({"key1": {"b": 99}}),
/// ])?;
/// assert_eq!(merged, json!({"key1": {"a": 1, "b": 99}, "key2": {"c": 3}}));
///
/// // Sequences are replaced, never concatenated.
/// let merged = deep_merge(&[json!({"list": [1, 2]}), json!({"list": [3]})])?;
/// assert_eq!(merged["list"], json!([3]));
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn deep_merge(args: &[Value]) -> MergeResult<Value> {
    if args.is_empty() {
        return Err(MergeError::arity(DEEP_MERGE, Arity::AtLeast(1), 0));
    }
    let arguments = validate_arguments(args)?;
    tracing::debug!(arguments = arguments.len(), "deep merging arguments");
    let merged = merge_mappings(&arguments);
    tracing::debug!(keys = merged.len(), "deep merge complete");
    Ok(Value::Object(merged))
}

/// Fold validated arguments left to right into a fresh mapping.
///
/// The null sentinel contributes nothing. A single mapping yields a copy of
/// its contents and an empty slice yields an empty mapping.
#[must_use]
pub fn merge_mappings(arguments: &[MergeArgument<'_>]) -> Map<String, Value> {
    arguments
        .iter()
        .filter_map(|argument| argument.as_mapping())
        .fold(Map::new(), |mut merged, next| {
            overlay_mapping(&mut merged, next);
            merged
        })
}

/// Merge `overlay` over `base`, returning a new mapping.
///
/// # Examples
///
/// ```rust
/// use deep_merge::merge_pair;
/// use serde_json::json;
///
/// let base = json!({"one": {"two": 2}});
/// let overlay = json!({"one": {"three": 3}});
/// let (Some(a), Some(b)) = (base.as_object(), overlay.as_object()) else {
///     unreachable!("fixtures are objects");
/// };
/// let merged = merge_pair(a, b);
/// assert_eq!(merged["one"], json!({"two": 2, "three": 3}));
/// assert_eq!(base, json!({"one": {"two": 2}}));
/// ```
#[must_use]
pub fn merge_pair(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = base.clone();
    overlay_mapping(&mut merged, overlay);
    merged
}

/// Overlay `layer` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - When merging a mapping into a non-mapping target, the target is reset to
///   `{}` first.
/// - Mappings are merged recursively (keys are added or overwritten, and
///   nested mappings are overlaid).
/// - Sequences and scalars replace `target` wholesale.
///
/// `layer` is cloned where it is copied into `target`; it is never modified.
///
/// # Examples
///
/// ```rust
/// use deep_merge::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"a": 1, "b": {"x": 1}});
/// merge_value(&mut acc, &json!({"b": {"y": 2}, "c": 3}));
/// assert_eq!(acc, json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}));
///
/// merge_value(&mut acc, &json!({"b": [1, 2, 3]}));
/// assert_eq!(acc["b"], json!([1, 2, 3]));
/// ```
pub fn merge_value(target: &mut Value, layer: &Value) {
    match layer {
        Value::Object(map) => merge_object(target, map),
        Value::Array(_) | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            target.clone_from(layer);
        }
    }
}

fn merge_object(target: &mut Value, map: &Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }

    let Some(target_map) = target.as_object_mut() else {
        return;
    };

    overlay_mapping(target_map, map);
}

fn overlay_mapping(target: &mut Map<String, Value>, layer: &Map<String, Value>) {
    for (key, value) in layer {
        match target.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
