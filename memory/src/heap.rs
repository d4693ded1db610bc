use std::fmt;

use crate::Value;

/// Constructor family of an error object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    TypeError,
    RangeError,
}

impl ErrorKind {
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
        }
    }
}

/// Heap payload of an error object: what `new TypeError(message)` plus an
/// optional `code` property would hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorObj {
    pub kind: ErrorKind,
    pub code: Option<String>,
    pub message: String,
}

impl fmt::Display for ErrorObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} [{}]: {}", self.kind.name(), code, self.message),
            None => write!(f, "{}: {}", self.kind.name(), self.message),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Arena<T> {
    pub data: Vec<T>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn alloc(&mut self, item: T) -> u32 {
        let index = self.data.len() as u32;
        self.data.push(item);
        index
    }

    pub fn get(&self, index: u32) -> Option<&T> {
        self.data.get(index as usize)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Backing store for every non-inline [`Value`]. Handles stay valid for the
/// lifetime of the heap; nothing is collected.
#[derive(Debug, Default)]
pub struct Heap {
    pub numbers: Arena<f64>,
    pub strings: Arena<String>,
    pub symbols: Arena<Option<String>>,
    pub objects: Arena<Vec<(String, Value)>>,
    pub arrays: Arena<Vec<Value>>,
    pub errors: Arena<ErrorObj>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integral numbers that fit an `i32` stay inline; the rest are boxed.
    pub fn alloc_number(&mut self, n: f64) -> Value {
        if n.fract() == 0.0 && n >= i32::MIN as f64 && n <= i32::MAX as f64 && !is_negative_zero(n) {
            Value::int(n as i32)
        } else {
            Value::number(self.numbers.alloc(n))
        }
    }

    pub fn alloc_string(&mut self, s: String) -> Value {
        Value::string(self.strings.alloc(s))
    }

    pub fn alloc_symbol(&mut self, description: Option<String>) -> Value {
        Value::symbol(self.symbols.alloc(description))
    }

    pub fn alloc_object(&mut self, props: Vec<(String, Value)>) -> Value {
        Value::object(self.objects.alloc(props))
    }

    pub fn alloc_array(&mut self, items: Vec<Value>) -> Value {
        Value::array(self.arrays.alloc(items))
    }

    pub fn alloc_error(&mut self, err: ErrorObj) -> Value {
        Value::error(self.errors.alloc(err))
    }

    pub fn get_number(&self, val: Value) -> Option<f64> {
        if let Some(i) = val.as_int() {
            return Some(i as f64);
        }
        if !val.is_number() {
            return None;
        }
        self.numbers.get(val.as_handle()?).copied()
    }

    pub fn get_string(&self, val: Value) -> Option<&str> {
        if !val.is_string() {
            return None;
        }
        self.strings.get(val.as_handle()?).map(String::as_str)
    }

    pub fn get_array(&self, val: Value) -> Option<&[Value]> {
        if !val.is_array() {
            return None;
        }
        self.arrays.get(val.as_handle()?).map(Vec::as_slice)
    }

    pub fn get_error(&self, val: Value) -> Option<&ErrorObj> {
        if !val.is_error() {
            return None;
        }
        self.errors.get(val.as_handle()?)
    }

    /// Whether `val` refers to a live slot of this heap. Inline values are
    /// always valid.
    pub fn contains(&self, val: Value) -> bool {
        let Some(handle) = val.as_handle() else {
            return val.value_type().is_some();
        };
        let len = match val.tag() {
            crate::value::TAG_NUMBER => self.numbers.len(),
            crate::value::TAG_STRING => self.strings.len(),
            crate::value::TAG_SYMBOL => self.symbols.len(),
            crate::value::TAG_OBJECT => self.objects.len(),
            crate::value::TAG_ARRAY => self.arrays.len(),
            crate::value::TAG_ERROR => self.errors.len(),
            // Function and external handles index tables owned by the host.
            crate::value::TAG_FUNCTION | crate::value::TAG_EXTERNAL => return true,
            _ => return false,
        };
        (handle as usize) < len
    }
}

fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}
