use memory::{Status, ValueType};
use tracing::debug;

use crate::env::{calls, Env};
use crate::error::ArgvError;
use crate::host_call;

/// Converts a callback argument to a `bool`.
///
/// A boolean yields its payload and nothing is allocated. Any other value
/// yields a `TypeError` whose message is exactly `message`; the error is
/// built but not thrown. A failing host call short-circuits as
/// [`ArgvError::Internal`].
pub fn coerce_bool<E: Env>(
    env: &mut E,
    value: E::Value,
    message: &str,
) -> Result<bool, ArgvError<E::Value>> {
    coerce(env, value, None, message)
}

fn coerce<E: Env>(
    env: &mut E,
    value: E::Value,
    code: Option<&str>,
    message: &str,
) -> Result<bool, ArgvError<E::Value>> {
    let ty = host_call!(env.type_of(value), calls::TYPEOF);
    if ty != ValueType::Boolean {
        debug!(found = ty.name(), "argument is not a boolean");
        let err = host_call!(env.create_type_error(code, message), calls::CREATE_TYPE_ERROR);
        return Err(ArgvError::TypeMismatch(err));
    }
    Ok(host_call!(env.get_value_bool(value), calls::GET_VALUE_BOOL))
}

/// Binds `argv[index]` as a `bool`, naming the argument by its ordinal in the
/// error message ("invalid argument. First argument must be a boolean.").
///
/// The argument count must already have been checked. An index past the end
/// of `argv` is reported as an internal failure, not as a type error.
pub fn argv_bool<E: Env>(
    env: &mut E,
    argv: &[E::Value],
    index: usize,
) -> Result<bool, ArgvError<E::Value>> {
    let Some(&value) = argv.get(index) else {
        return Err(ArgvError::Internal {
            call: "argv_bool",
            status: Status::InvalidArg,
        });
    };
    let messages = env.messages();
    let message = messages.boolean_message(index);
    let code = messages.type_error_code.clone();
    coerce(env, value, code.as_deref(), &message)
}

/// Call-site form of [`argv_bool`]:
///
/// ```ignore
/// let flag = argv_bool!(env, argv, 0)?;
/// ```
#[macro_export]
macro_rules! argv_bool {
    ($env:expr, $argv:expr, $index:expr) => {
        $crate::argv_bool($env, $argv, $index)
    };
}

#[cfg(test)]
mod tests {
    use memory::Status;

    use super::*;
    use crate::config::MessageConfig;
    use crate::test_env::{Fake, ScriptedEnv};

    #[test]
    fn booleans_pass_through() {
        let mut env = ScriptedEnv::new();
        assert!(coerce_bool(&mut env, Fake::Bool(true), "unused").unwrap());
        assert!(!coerce_bool(&mut env, Fake::Bool(false), "unused").unwrap());
        assert!(env.errors.is_empty());
    }

    #[test]
    fn non_booleans_build_a_type_error_with_the_exact_message() {
        let message = "invalid argument. First argument must be a boolean.";
        for value in [
            Fake::Number(1.0),
            Fake::Number(0.0),
            Fake::Str("true"),
            Fake::Null,
            Fake::Undefined,
            Fake::Object,
            Fake::Array,
        ] {
            let mut env = ScriptedEnv::new();
            let slot = match coerce_bool(&mut env, value, message) {
                Err(ArgvError::TypeMismatch(Fake::Error(slot))) => slot,
                other => panic!("expected a type mismatch for {value:?}, got {other:?}"),
            };
            assert_eq!(env.errors[slot].1, message);
            assert_eq!(env.errors[slot].0, None);
        }
    }

    #[test]
    fn coercion_never_throws() {
        let mut env = ScriptedEnv::new();
        let _ = coerce_bool(&mut env, Fake::Str("yes"), "m");
        assert!(env.thrown.is_none());
        assert!(!env.trace.contains(&calls::THROW));
    }

    #[test]
    fn repeated_calls_agree() {
        let mut env = ScriptedEnv::new();
        let a = coerce_bool(&mut env, Fake::Bool(true), "m").unwrap();
        let b = coerce_bool(&mut env, Fake::Bool(true), "m").unwrap();
        assert_eq!(a, b);

        let first = coerce_bool(&mut env, Fake::Number(3.0), "m").unwrap_err();
        let second = coerce_bool(&mut env, Fake::Number(3.0), "m").unwrap_err();
        assert!(matches!(first, ArgvError::TypeMismatch(_)));
        assert!(matches!(second, ArgvError::TypeMismatch(_)));
        assert_eq!(env.errors[0], env.errors[1]);
    }

    #[test]
    fn typeof_failure_is_internal_and_stops() {
        let mut env = ScriptedEnv::new();
        env.fail(calls::TYPEOF, Status::GenericFailure);
        let err = coerce_bool(&mut env, Fake::Str("yes"), "m").unwrap_err();
        assert!(err.is_fatal());
        assert!(matches!(
            err,
            ArgvError::Internal { call: calls::TYPEOF, status: Status::GenericFailure }
        ));
        assert_eq!(env.trace, vec![calls::TYPEOF]);
        assert!(env.errors.is_empty());
    }

    #[test]
    fn error_construction_failure_is_internal() {
        let mut env = ScriptedEnv::new();
        env.fail(calls::CREATE_TYPE_ERROR, Status::PendingException);
        let err = coerce_bool(&mut env, Fake::Null, "m").unwrap_err();
        assert!(matches!(
            err,
            ArgvError::Internal { call: calls::CREATE_TYPE_ERROR, status: Status::PendingException }
        ));
        assert_eq!(err.descriptor(), None);
        assert_eq!(env.trace, vec![calls::TYPEOF, calls::CREATE_TYPE_ERROR]);
    }

    #[test]
    fn payload_read_failure_is_internal() {
        let mut env = ScriptedEnv::new();
        env.fail(calls::GET_VALUE_BOOL, Status::BooleanExpected);
        let err = coerce_bool(&mut env, Fake::Bool(true), "m").unwrap_err();
        assert!(matches!(
            err,
            ArgvError::Internal { call: calls::GET_VALUE_BOOL, status: Status::BooleanExpected }
        ));
    }

    #[test]
    fn argv_bool_names_the_position() {
        let mut env = ScriptedEnv::new();
        let argv = [Fake::Bool(true), Fake::Number(1.0)];
        assert!(argv_bool(&mut env, &argv, 0).unwrap());
        let err = argv_bool!(&mut env, &argv, 1).unwrap_err();
        assert!(matches!(err, ArgvError::TypeMismatch(_)));
        assert_eq!(
            env.errors[0].1,
            "invalid argument. Second argument must be a boolean."
        );
    }

    #[test]
    fn argv_bool_uses_configured_code() {
        let mut env = ScriptedEnv::new();
        env.messages = MessageConfig {
            type_error_code: Some("ERR_INVALID_ARG_TYPE".to_string()),
            ..MessageConfig::default()
        };
        let _ = argv_bool(&mut env, &[Fake::Undefined], 0);
        assert_eq!(env.errors[0].0.as_deref(), Some("ERR_INVALID_ARG_TYPE"));
    }

    #[test]
    fn argv_bool_out_of_range_is_not_a_type_error() {
        let mut env = ScriptedEnv::new();
        let err = argv_bool(&mut env, &[], 0).unwrap_err();
        assert!(matches!(
            err,
            ArgvError::Internal { status: Status::InvalidArg, .. }
        ));
        assert!(env.trace.is_empty());
    }
}
