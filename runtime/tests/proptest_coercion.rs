//! Property-based tests for boolean argument coercion.
//!
//! Random booleans, numbers, strings, objects, symbols and native functions
//! are pushed through `coerce_bool` and the bundled natives; booleans must come
//! back unchanged and everything else must fail with exactly the caller's
//! message.

use argv::{coerce_bool, ArgvError};
use memory::Value;
use proptest::prelude::*;
use runtime::{Runtime, RuntimeError};

/// Strategy: any host value that is not a boolean.
#[derive(Debug, Clone)]
enum NonBool {
    Int(i32),
    Number(f64),
    Str(String),
    Null,
    Undefined,
    Array(usize),
    Object(Vec<String>),
    Symbol(Option<String>),
    Native(&'static str),
}

fn non_bool() -> impl Strategy<Value = NonBool> {
    prop_oneof![
        any::<i32>().prop_map(NonBool::Int),
        any::<f64>().prop_map(NonBool::Number),
        ".*".prop_map(NonBool::Str),
        Just(NonBool::Null),
        Just(NonBool::Undefined),
        (0usize..4).prop_map(NonBool::Array),
        prop::collection::vec("[a-z]{1,8}", 0..4).prop_map(NonBool::Object),
        proptest::option::of(".*").prop_map(NonBool::Symbol),
        prop::sample::select(vec!["identity", "not", "and", "select"]).prop_map(NonBool::Native),
    ]
}

fn materialize(rt: &mut Runtime, v: &NonBool) -> Value {
    match v {
        NonBool::Int(i) => Value::int(*i),
        NonBool::Number(n) => rt.number(*n),
        NonBool::Str(s) => rt.string(s),
        NonBool::Null => Value::null(),
        NonBool::Undefined => Value::undefined(),
        NonBool::Array(len) => rt.array(vec![Value::bool(true); *len]),
        NonBool::Object(keys) => {
            let props = keys.iter().map(|k| (k.clone(), Value::bool(false))).collect();
            rt.object(props)
        }
        NonBool::Symbol(description) => rt.symbol(description.as_deref()),
        NonBool::Native(name) => rt.global(name).unwrap(),
    }
}

proptest! {
    #[test]
    fn booleans_round_trip(b in any::<bool>()) {
        let mut rt = Runtime::new();
        prop_assert_eq!(coerce_bool(&mut rt, Value::bool(b), "unused").unwrap(), b);
        prop_assert_eq!(rt.call("identity", &[Value::bool(b)]).unwrap(), Value::bool(b));
        prop_assert!(rt.heap.errors.is_empty());
    }

    #[test]
    fn non_booleans_fail_with_the_exact_message(v in non_bool(), message in ".*") {
        let mut rt = Runtime::new();
        let value = materialize(&mut rt, &v);
        match coerce_bool(&mut rt, value, &message) {
            Err(ArgvError::TypeMismatch(descriptor)) => {
                let err = rt.heap.get_error(descriptor).unwrap();
                prop_assert_eq!(&err.message, &message);
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn repeated_coercions_agree(v in non_bool()) {
        let mut rt = Runtime::new();
        let value = materialize(&mut rt, &v);
        let first = coerce_bool(&mut rt, value, "m").is_ok();
        let second = coerce_bool(&mut rt, value, "m").is_ok();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn natives_throw_for_non_booleans(v in non_bool()) {
        let mut rt = Runtime::new();
        let value = materialize(&mut rt, &v);
        match rt.call("not", &[value]) {
            Err(RuntimeError::Exception(exc)) => {
                let err = exc.error.unwrap();
                prop_assert_eq!(err.message, "invalid argument. First argument must be a boolean.");
            }
            other => prop_assert!(false, "unexpected outcome {:?}", other),
        }
    }
}
