use std::ffi::CStr;
use std::ptr;

use argv::{calls, check_count, host_call, ArgvError, Env, MessageConfig};
use memory::{Status, ValueType};
use napi_sys as sys;

/// Signature of a callback handed to `napi_create_function`.
pub type Callback = unsafe extern "C" fn(sys::napi_env, sys::napi_callback_info) -> sys::napi_value;

/// [`Env`] over a live `napi_env`.
pub struct NodeEnv {
    raw: sys::napi_env,
    messages: &'static MessageConfig,
}

impl NodeEnv {
    /// # Safety
    ///
    /// `raw` must be the environment Node passed to the callback or module
    /// initializer currently running on this thread, and the `NodeEnv` must
    /// not outlive that call.
    pub unsafe fn from_raw(raw: sys::napi_env) -> Self {
        Self::from_raw_with_messages(raw, crate::messages())
    }

    /// Like [`NodeEnv::from_raw`], with the messages used for argument errors.
    ///
    /// # Safety
    ///
    /// Same contract as [`NodeEnv::from_raw`].
    pub unsafe fn from_raw_with_messages(
        raw: sys::napi_env,
        messages: &'static MessageConfig,
    ) -> Self {
        Self { raw, messages }
    }

    fn string(&mut self, s: &str) -> Result<sys::napi_value, Status> {
        let mut out = ptr::null_mut();
        Status::check(unsafe {
            sys::napi_create_string_utf8(self.raw, s.as_ptr().cast(), s.len(), &mut out)
        })?;
        Ok(out)
    }

    /// Adds a native function named `name` to `exports`.
    pub fn export(
        &mut self,
        exports: sys::napi_value,
        name: &CStr,
        callback: Callback,
    ) -> Result<(), Status> {
        let mut func = ptr::null_mut();
        Status::check(unsafe {
            sys::napi_create_function(
                self.raw,
                name.as_ptr(),
                name.to_bytes().len(),
                Some(callback),
                ptr::null_mut(),
                &mut func,
            )
        })?;
        Status::check(unsafe { sys::napi_set_named_property(self.raw, exports, name.as_ptr(), func) })
    }

    /// Arguments of the running callback, after checking that exactly
    /// `expected` were passed.
    pub fn args(
        &mut self,
        info: sys::napi_callback_info,
        expected: usize,
    ) -> Result<Vec<sys::napi_value>, ArgvError<sys::napi_value>> {
        let mut argc = expected;
        let mut argv = vec![ptr::null_mut(); expected];
        host_call!(
            Status::check(unsafe {
                sys::napi_get_cb_info(
                    self.raw,
                    info,
                    &mut argc,
                    argv.as_mut_ptr(),
                    ptr::null_mut(),
                    ptr::null_mut(),
                )
            }),
            calls::GET_CB_INFO
        );
        check_count(self, argc, expected)?;
        Ok(argv)
    }
}

impl Env for NodeEnv {
    type Value = sys::napi_value;

    fn type_of(&mut self, value: sys::napi_value) -> Result<ValueType, Status> {
        let mut raw = 0;
        Status::check(unsafe { sys::napi_typeof(self.raw, value, &mut raw) })?;
        ValueType::from_raw(raw).ok_or(Status::GenericFailure)
    }

    fn get_value_bool(&mut self, value: sys::napi_value) -> Result<bool, Status> {
        let mut out = false;
        Status::check(unsafe { sys::napi_get_value_bool(self.raw, value, &mut out) })?;
        Ok(out)
    }

    fn create_type_error(
        &mut self,
        code: Option<&str>,
        message: &str,
    ) -> Result<sys::napi_value, Status> {
        let code = match code {
            Some(code) => self.string(code)?,
            None => ptr::null_mut(),
        };
        let message = self.string(message)?;
        let mut out = ptr::null_mut();
        Status::check(unsafe { sys::napi_create_type_error(self.raw, code, message, &mut out) })?;
        Ok(out)
    }

    fn throw(&mut self, error: sys::napi_value) -> Result<(), Status> {
        Status::check(unsafe { sys::napi_throw(self.raw, error) })
    }

    fn get_boolean(&mut self, value: bool) -> Result<sys::napi_value, Status> {
        let mut out = ptr::null_mut();
        Status::check(unsafe { sys::napi_get_boolean(self.raw, value, &mut out) })?;
        Ok(out)
    }

    fn fatal_error(&mut self, location: &str, message: &str) -> ! {
        unsafe {
            sys::napi_fatal_error(
                location.as_ptr().cast(),
                location.len(),
                message.as_ptr().cast(),
                message.len(),
            );
        }
        std::process::abort()
    }

    fn messages(&self) -> &MessageConfig {
        self.messages
    }
}
