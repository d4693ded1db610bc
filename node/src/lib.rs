//! Node.js addon exposing boolean natives through Node-API.
//!
//! ```js
//! const addon = require('./argv_node.node');
//! addon.not(true);   // false
//! addon.not('yes');  // TypeError: invalid argument. First argument must be a boolean.
//! addon.not();       // TypeError: invalid invocation. Insufficient arguments.
//! ```

pub mod env;

use std::ffi::CStr;
use std::ptr;
use std::sync::OnceLock;

use argv::{argv_bool, boolean_value, guard, Env, MessageConfig};
use napi_sys as sys;
use tracing::debug;

pub use env::{Callback, NodeEnv};

static MESSAGES: OnceLock<MessageConfig> = OnceLock::new();

/// Installs the messages the exported natives use for argument errors.
///
/// Only the first call takes effect, and it must happen before the first
/// callback runs; a config that arrives too late is handed back.
pub fn set_messages(config: MessageConfig) -> Result<(), MessageConfig> {
    MESSAGES.set(config)
}

/// Messages in effect for this process.
pub fn messages() -> &'static MessageConfig {
    MESSAGES.get_or_init(MessageConfig::default)
}

const EXPORTS: &[(&CStr, Callback)] = &[
    (c"identity", identity),
    (c"not", not),
    (c"and", and),
];

unsafe extern "C" fn identity(raw: sys::napi_env, info: sys::napi_callback_info) -> sys::napi_value {
    let mut env = NodeEnv::from_raw(raw);
    guard(&mut env, |env| {
        let argv = env.args(info, 1)?;
        let flag = argv_bool(env, &argv, 0)?;
        boolean_value(env, flag)
    })
    .unwrap_or(ptr::null_mut())
}

unsafe extern "C" fn not(raw: sys::napi_env, info: sys::napi_callback_info) -> sys::napi_value {
    let mut env = NodeEnv::from_raw(raw);
    guard(&mut env, |env| {
        let argv = env.args(info, 1)?;
        let flag = argv_bool(env, &argv, 0)?;
        boolean_value(env, !flag)
    })
    .unwrap_or(ptr::null_mut())
}

unsafe extern "C" fn and(raw: sys::napi_env, info: sys::napi_callback_info) -> sys::napi_value {
    let mut env = NodeEnv::from_raw(raw);
    guard(&mut env, |env| {
        let argv = env.args(info, 2)?;
        let a = argv_bool(env, &argv, 0)?;
        let b = argv_bool(env, &argv, 1)?;
        boolean_value(env, a && b)
    })
    .unwrap_or(ptr::null_mut())
}

/// Module initializer looked up by Node when the addon is loaded.
///
/// # Safety
///
/// Called by Node only, with the loading environment and its `exports`.
#[no_mangle]
pub unsafe extern "C" fn napi_register_module_v1(
    raw: sys::napi_env,
    exports: sys::napi_value,
) -> sys::napi_value {
    let mut env = NodeEnv::from_raw(raw);
    for (name, callback) in EXPORTS {
        debug!(name = ?name, "exporting native");
        if let Err(status) = env.export(exports, name, *callback) {
            env.fatal_error("napi_register_module_v1", &status.to_string());
        }
    }
    exports
}
