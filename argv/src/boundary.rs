use tracing::{debug, error};

use crate::env::{calls, Env};
use crate::error::ArgvError;
use crate::host_call;

/// Hands `err` to the host.
///
/// Type and arity errors are thrown as the pending exception; the callback
/// must then return without a value. Internal failures halt the host through
/// [`Env::fatal_error`], as does a throw that fails.
pub fn raise<E: Env>(env: &mut E, err: ArgvError<E::Value>) {
    match err {
        ArgvError::TypeMismatch(descriptor) | ArgvError::Arity(descriptor) => {
            debug!(?descriptor, "throwing argument error");
            if let Err(status) = env.throw(descriptor) {
                halt(
                    env,
                    ArgvError::Internal {
                        call: calls::THROW,
                        status,
                    },
                );
            }
        }
        internal @ ArgvError::Internal { .. } => halt(env, internal),
    }
}

fn halt<E: Env>(env: &mut E, err: ArgvError<E::Value>) -> ! {
    let location = match &err {
        ArgvError::Internal { call, .. } => *call,
        _ => "argv",
    };
    let message = err.to_string();
    error!(location, %message, "host failed while binding arguments");
    env.fatal_error(location, &message)
}

/// Runs a callback body and settles its outcome with the host: `Some(value)`
/// on success, `None` once an argument error has been thrown.
pub fn guard<E, F>(env: &mut E, body: F) -> Option<E::Value>
where
    E: Env,
    F: FnOnce(&mut E) -> Result<E::Value, ArgvError<E::Value>>,
{
    match body(env) {
        Ok(value) => Some(value),
        Err(err) => {
            raise(env, err);
            None
        }
    }
}

/// Host boolean for a callback's return value.
pub fn boolean_value<E: Env>(env: &mut E, value: bool) -> Result<E::Value, ArgvError<E::Value>> {
    Ok(host_call!(env.get_boolean(value), calls::GET_BOOLEAN))
}
