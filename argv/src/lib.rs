//! Binding of native-addon callback arguments.
//!
//! The host runtime is reached only through [`Env`]. A callback checks its
//! argument count with [`check_argc`], binds each argument with a typed
//! helper such as [`argv_bool`], and lets [`guard`] turn any [`ArgvError`]
//! into a thrown exception or, when the host itself failed, a fatal halt.

pub mod arity;
pub mod boolean;
pub mod boundary;
pub mod config;
pub mod env;
pub mod error;
pub mod ordinal;

#[cfg(test)]
mod test_env;

#[doc(hidden)]
pub use tracing as __tracing;

pub use arity::{check_argc, check_count};
pub use boolean::{argv_bool, coerce_bool};
pub use boundary::{boolean_value, guard, raise};
pub use config::{ConfigError, MessageConfig};
pub use env::{calls, Env};
pub use error::ArgvError;
pub use ordinal::ordinal;
