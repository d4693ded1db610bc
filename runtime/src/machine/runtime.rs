use std::collections::HashMap;

use argv::MessageConfig;
use memory::{Heap, Status, Value};
use tracing::debug;

use crate::error::{Exception, RuntimeError};
use crate::native::{NativeObj, NativeRegistry};

/// The in-process host: a value heap, a native function table and the
/// exception slot of the call in progress.
pub struct Runtime {
    pub heap: Heap,
    pub natives: Vec<NativeObj>,
    pub globals: HashMap<String, Value>,

    /// Exception thrown by the running callback, if any.
    pub(super) pending: Option<Value>,

    /// Host calls to fail on their next use, in order of registration.
    pub(super) faults: Vec<(&'static str, Status)>,

    /// Every embedding call made since the last [`Runtime::take_trace`].
    pub(super) trace: Vec<&'static str>,

    pub(super) messages: MessageConfig,
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl Runtime {
    /// Create a runtime with the bundled natives registered
    pub fn new() -> Self {
        Self::with_messages(MessageConfig::default())
    }

    pub fn with_messages(messages: MessageConfig) -> Self {
        let mut rt = Self {
            heap: Heap::new(),
            natives: Vec::new(),
            globals: HashMap::new(),
            pending: None,
            faults: Vec::new(),
            trace: Vec::new(),
            messages,
        };
        rt.bootstrap_natives();
        rt
    }

    // --- Value construction ---

    pub fn string(&mut self, s: &str) -> Value {
        self.heap.alloc_string(s.to_string())
    }

    pub fn number(&mut self, n: f64) -> Value {
        self.heap.alloc_number(n)
    }

    pub fn symbol(&mut self, description: Option<&str>) -> Value {
        self.heap.alloc_symbol(description.map(str::to_string))
    }

    pub fn object(&mut self, props: Vec<(String, Value)>) -> Value {
        self.heap.alloc_object(props)
    }

    pub fn array(&mut self, items: Vec<Value>) -> Value {
        self.heap.alloc_array(items)
    }

    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.get(name).copied()
    }

    /// Helper to format values for display
    pub fn val_to_string(&self, val: Value) -> String {
        match val {
            v if v.is_undefined() => "undefined".to_string(),
            v if v.is_null() => "null".to_string(),
            v if v.is_bool() => format!("{}", v.as_bool() == Some(true)),
            v if v.is_number() => match self.heap.get_number(v) {
                Some(n) => format!("{n}"),
                None => "<bad number>".into(),
            },
            v if v.is_string() => match self.heap.get_string(v) {
                Some(s) => format!("{s:?}"),
                None => "<bad string>".into(),
            },
            v if v.is_error() => match self.heap.get_error(v) {
                Some(err) => err.to_string(),
                None => "<bad error>".into(),
            },
            v if v.is_function() => {
                let name = v
                    .as_handle()
                    .and_then(|h| self.natives.get(h as usize))
                    .map(|n| n.name.as_str())
                    .unwrap_or("<anonymous>");
                format!("[Function: {name}]")
            }
            v if v.is_array() => "[Array]".to_string(),
            v => format!("{v:?}"),
        }
    }

    // --- Fault injection ---

    /// Makes the next `call` (one of [`argv::calls`]) fail with `status`.
    pub fn fail_next(&mut self, call: &'static str, status: Status) {
        self.faults.push((call, status));
    }

    /// Drains the record of embedding calls made so far.
    pub fn take_trace(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.trace)
    }

    pub fn is_exception_pending(&self) -> bool {
        self.pending.is_some()
    }

    // --- Invocation ---

    /// Calls the global native `name`.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let func = self
            .global(name)
            .filter(Value::is_function)
            .ok_or_else(|| RuntimeError::UnknownNative(name.to_string()))?;
        self.call_value(func, args)
    }

    /// Calls a function value. An exception thrown by the callback comes
    /// back as [`RuntimeError::Exception`]; returning no value without
    /// throwing yields `undefined`.
    pub fn call_value(&mut self, func: Value, args: &[Value]) -> Result<Value, RuntimeError> {
        if !func.is_function() {
            return Err(Status::FunctionExpected.into());
        }
        let native = func
            .as_handle()
            .and_then(|h| self.natives.get(h as usize))
            .cloned()
            .ok_or(Status::InvalidArg)?;
        if self.pending.is_some() {
            return Err(Status::PendingException.into());
        }

        debug!(native = %native.name, argc = args.len(), "invoking native");
        let ret = (native.func)(self, args);

        if let Some(thrown) = self.pending.take() {
            let exception = Exception {
                value: thrown,
                error: self.heap.get_error(thrown).cloned(),
            };
            debug!(native = %native.name, %exception, "native threw");
            return Err(RuntimeError::Exception(exception));
        }
        Ok(ret.unwrap_or_else(Value::undefined))
    }

    pub(super) fn enter(&mut self, call: &'static str) -> Result<(), Status> {
        self.trace.push(call);
        match self.faults.iter().position(|(c, _)| *c == call) {
            Some(pos) => Err(self.faults.remove(pos).1),
            None => Ok(()),
        }
    }
}
