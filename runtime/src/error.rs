use std::fmt;

use memory::{ErrorObj, Status, Value};
use thiserror::Error;

/// A value thrown out of a native callback. `error` is set when the thrown
/// value is an error object.
#[derive(Debug, Clone, PartialEq)]
pub struct Exception {
    pub value: Value,
    pub error: Option<ErrorObj>,
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{err}"),
            None => write!(f, "{:?}", self.value),
        }
    }
}

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} is not defined")]
    UnknownNative(String),
    #[error("Uncaught {0}")]
    Exception(Exception),
    #[error(transparent)]
    Status(#[from] Status),
}
