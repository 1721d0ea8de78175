//! Unit tests for host function registration and dispatch.

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::{Arity, DeepMergeFunction, FunctionRegistry, HostFunction};
use crate::{MergeError, MergeResult};

struct Echo;

impl HostFunction for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn arity(&self) -> Arity {
        Arity::Exactly(1)
    }

    fn call(&self, args: &[Value]) -> MergeResult<Value> {
        Ok(args.first().cloned().unwrap_or(Value::Null))
    }
}

#[fixture]
fn registry() -> FunctionRegistry {
    FunctionRegistry::with_builtins()
}

#[rstest]
#[case(Arity::Exactly(2), 2, true)]
#[case(Arity::Exactly(2), 3, false)]
#[case(Arity::AtLeast(2), 2, true)]
#[case(Arity::AtLeast(2), 7, true)]
#[case(Arity::AtLeast(2), 1, false)]
#[case(Arity::AtLeast(0), 0, true)]
fn arity_accepts_counts(#[case] arity: Arity, #[case] count: usize, #[case] expected: bool) {
    assert_eq!(arity.accepts(count), expected);
}

#[test]
fn deep_merge_function_declares_two_argument_minimum() {
    assert_eq!(DeepMergeFunction.name(), "deep_merge");
    assert_eq!(DeepMergeFunction.arity(), Arity::AtLeast(2));
}

#[rstest]
fn builtins_register_deep_merge(registry: FunctionRegistry) {
    assert!(registry.contains("deep_merge"));
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["deep_merge"]);
}

#[rstest]
#[case::no_arguments(vec![])]
#[case::one_argument(vec![json!({"one": 1})])]
fn rejects_too_few_arguments(registry: FunctionRegistry, #[case] args: Vec<Value>) {
    let err = registry
        .call("deep_merge", &args)
        .expect_err("arity check should fail");
    assert!(
        matches!(&err, MergeError::Arity { given, .. } if *given == args.len()),
        "unexpected error: {err:?}"
    );
    assert!(err.to_string().contains("wrong number of arguments"));
}

#[rstest]
fn unknown_function_is_reported(registry: FunctionRegistry) {
    let err = registry
        .call("shallow_merge", &[json!({}), json!({})])
        .expect_err("nothing registered under that name");
    assert!(
        matches!(&err, MergeError::UnknownFunction { name } if name == "shallow_merge"),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn register_returns_replaced_function(mut registry: FunctionRegistry) {
    assert!(registry.register(Box::new(Echo)).is_none());
    assert!(registry.register(Box::new(Echo)).is_some());
    assert_eq!(
        registry.names().collect::<Vec<_>>(),
        vec!["deep_merge", "echo"]
    );
    let echoed = registry
        .call("echo", &[json!("hi")])
        .expect("echo accepts one argument");
    assert_eq!(echoed, json!("hi"));
}

#[rstest]
fn type_errors_pass_through_dispatch(registry: FunctionRegistry) {
    let err = registry
        .call("deep_merge", &[json!({}), json!("2")])
        .expect_err("string argument is rejected");
    assert_eq!(
        err.to_string(),
        "unexpected argument type String, only mapping arguments are accepted"
    );
}

#[test]
fn debug_lists_registered_names() {
    let rendered = format!("{:?}", FunctionRegistry::with_builtins());
    assert!(rendered.contains("deep_merge"), "got {rendered}");
}
