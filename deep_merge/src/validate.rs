//! Argument validation ahead of merging.

use serde_json::Value;

use crate::{MergeError, MergeResult, value::{MergeArgument, ValueKind}};

/// Classify the argument at `index`.
///
/// Mappings are borrowed as-is and the empty string becomes
/// [`MergeArgument::Undef`]. Every other value is rejected.
///
/// # Errors
///
/// Returns [`MergeError::UnexpectedType`] naming the runtime type of `value`
/// when it is neither a mapping nor the null sentinel.
///
/// # Examples
///
/// ```
/// use deep_merge::{MergeArgument, classify_argument};
/// use serde_json::json;
///
/// assert_eq!(classify_argument(0, &json!(""))?, MergeArgument::Undef);
/// assert!(classify_argument(1, &json!("2")).is_err());
/// # Ok::<_, deep_merge::MergeError>(())
/// ```
pub fn classify_argument(index: usize, value: &Value) -> MergeResult<MergeArgument<'_>> {
    match value {
        Value::Object(map) => Ok(MergeArgument::Mapping(map)),
        Value::String(text) if text.is_empty() => {
            tracing::debug!(index, "treating empty string argument as an empty mapping");
            Ok(MergeArgument::Undef)
        }
        Value::Array(_) | Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            let kind = ValueKind::of(value);
            tracing::debug!(index, %kind, "rejecting merge argument");
            Err(MergeError::unexpected_type(index, kind))
        }
    }
}

/// Validate every argument in order, stopping at the first rejection.
///
/// # Errors
///
/// Returns the [`MergeError::UnexpectedType`] raised for the first argument
/// that is neither a mapping nor the null sentinel.
pub fn validate_arguments(args: &[Value]) -> MergeResult<Vec<MergeArgument<'_>>> {
    args.iter()
        .enumerate()
        .map(|(index, value)| classify_argument(index, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::{classify_argument, validate_arguments};
    use crate::{MergeArgument, MergeError, ValueKind};

    #[rstest]
    #[case(json!("2"), ValueKind::String)]
    #[case(json!(2), ValueKind::Integer)]
    #[case(json!(2.5), ValueKind::Float)]
    #[case(json!([{}]), ValueKind::Sequence)]
    #[case(json!(false), ValueKind::Boolean)]
    #[case(Value::Null, ValueKind::Null)]
    #[case(json!(" "), ValueKind::String)]
    fn rejects_non_mappings(#[case] value: Value, #[case] expected: ValueKind) {
        match classify_argument(3, &value) {
            Err(MergeError::UnexpectedType { index, kind }) => {
                assert_eq!(index, 3);
                assert_eq!(kind, expected);
            }
            other => panic!("expected type error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_mappings_and_sentinel() {
        let args = [json!({"a": 1}), json!(""), json!({})];
        let validated = validate_arguments(&args).expect("arguments are valid");
        assert_eq!(validated.len(), 3);
        assert!(matches!(validated.first(), Some(MergeArgument::Mapping(_))));
        assert!(matches!(validated.get(1), Some(MergeArgument::Undef)));
    }

    #[test]
    fn stops_at_first_rejection() {
        let args = [json!({}), json!(1), json!("x")];
        let err = validate_arguments(&args).expect_err("second argument is invalid");
        assert!(
            matches!(
                err,
                MergeError::UnexpectedType {
                    index: 1,
                    kind: ValueKind::Integer
                }
            ),
            "unexpected error: {err:?}"
        );
    }
}
