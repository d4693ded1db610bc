use memory::{Status, ValueType};

use crate::config::MessageConfig;

/// Names of the host calls an [`Env`] performs, as reported in
/// [`ArgvError::Internal`](crate::ArgvError::Internal). They are the
/// Node-API function names so both hosts report failures alike.
pub mod calls {
    pub const TYPEOF: &str = "napi_typeof";
    pub const GET_VALUE_BOOL: &str = "napi_get_value_bool";
    pub const CREATE_TYPE_ERROR: &str = "napi_create_type_error";
    pub const THROW: &str = "napi_throw";
    pub const GET_BOOLEAN: &str = "napi_get_boolean";
    pub const GET_CB_INFO: &str = "napi_get_cb_info";
}

/// The slice of a host runtime's embedding API that argument binding needs.
///
/// Values are handles owned by the host; implementations never hand out
/// ownership. Every fallible call reports the host's status so callers can
/// tell a broken host apart from a bad argument.
pub trait Env {
    type Value: Copy + std::fmt::Debug;

    /// `typeof value`.
    fn type_of(&mut self, value: Self::Value) -> Result<ValueType, Status>;

    /// Boolean payload of a value already known to be a boolean.
    fn get_value_bool(&mut self, value: Self::Value) -> Result<bool, Status>;

    /// Builds, but does not raise, a `TypeError`.
    fn create_type_error(
        &mut self,
        code: Option<&str>,
        message: &str,
    ) -> Result<Self::Value, Status>;

    /// Makes `error` the pending exception of the current call.
    fn throw(&mut self, error: Self::Value) -> Result<(), Status>;

    fn get_boolean(&mut self, value: bool) -> Result<Self::Value, Status>;

    /// Halts the host. Used when the host itself can no longer be trusted.
    fn fatal_error(&mut self, location: &str, message: &str) -> !;

    /// Message templates for argument errors raised in this environment.
    fn messages(&self) -> &MessageConfig {
        MessageConfig::shared_default()
    }
}
