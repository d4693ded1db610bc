use tracing::debug;

use crate::env::{calls, Env};
use crate::error::ArgvError;
use crate::host_call;

/// Checks that a callback received exactly `expected` arguments.
///
/// Too few or too many arguments produce a `TypeError` built from the
/// environment's [`MessageConfig`](crate::MessageConfig), returned as
/// [`ArgvError::Arity`] for the caller to raise.
pub fn check_argc<E: Env>(
    env: &mut E,
    argv: &[E::Value],
    expected: usize,
) -> Result<(), ArgvError<E::Value>> {
    check_count(env, argv.len(), expected)
}

/// [`check_argc`] for hosts that report the argument count separately from
/// the values, such as `napi_get_cb_info`.
pub fn check_count<E: Env>(
    env: &mut E,
    received: usize,
    expected: usize,
) -> Result<(), ArgvError<E::Value>> {
    let messages = env.messages();
    let message = if received < expected {
        messages.insufficient_arguments.clone()
    } else if received > expected {
        messages.too_many_arguments.clone()
    } else {
        return Ok(());
    };
    let code = messages.type_error_code.clone();
    debug!(expected, received, "argument count mismatch");
    let err = host_call!(
        env.create_type_error(code.as_deref(), &message),
        calls::CREATE_TYPE_ERROR
    );
    Err(ArgvError::Arity(err))
}
