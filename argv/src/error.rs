use std::fmt;

use memory::Status;
use thiserror::Error;

/// Why an argument could not be bound.
///
/// `TypeMismatch` and `Arity` carry a constructed, not yet raised, error
/// object and are meant to be thrown back to the caller. `Internal` means the
/// host failed to answer a query or to build the error object; no further
/// host call should be attempted once it is seen.
#[derive(Debug, Error)]
pub enum ArgvError<V: fmt::Debug> {
    #[error("argument has the wrong type")]
    TypeMismatch(V),
    #[error("wrong number of arguments")]
    Arity(V),
    #[error("{call} failed: {status}")]
    Internal { call: &'static str, status: Status },
}

impl<V: fmt::Debug + Copy> ArgvError<V> {
    /// The error object to raise, if this error is recoverable.
    pub fn descriptor(&self) -> Option<V> {
        match self {
            ArgvError::TypeMismatch(v) | ArgvError::Arity(v) => Some(*v),
            ArgvError::Internal { .. } => None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ArgvError::Internal { .. })
    }
}

/// Unwraps the result of a host call, returning
/// [`ArgvError::Internal`] from the enclosing function on a non-ok status.
#[macro_export]
macro_rules! host_call {
    ($result:expr, $call:expr) => {
        match $result {
            Ok(value) => value,
            Err(status) => {
                $crate::__tracing::warn!(call = $call, %status, "host call failed");
                return Err($crate::ArgvError::Internal {
                    call: $call,
                    status,
                });
            }
        }
    };
}
