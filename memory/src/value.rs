use std::fmt;

use crate::status::ValueType;

// --- Tagged u64 Constants ---
// Bits 63..60 = tag  (4 bits, 16 possible types)
// Bits 59..0  = payload (60 bits)

const TAG_SHIFT: u32 = 60;
const PAYLOAD_MASK: u64 = (1u64 << 60) - 1;

// Tags
pub const TAG_INT: u64 = 0; // i32 inline number (most common -> tag 0)
pub const TAG_UNDEFINED: u64 = 1;
pub const TAG_NULL: u64 = 2;
pub const TAG_FALSE: u64 = 3;
pub const TAG_TRUE: u64 = 4;
pub const TAG_NUMBER: u64 = 5; // boxed f64
pub const TAG_STRING: u64 = 6;
pub const TAG_SYMBOL: u64 = 7;
pub const TAG_OBJECT: u64 = 8;
pub const TAG_ARRAY: u64 = 9;
pub const TAG_FUNCTION: u64 = 10;
pub const TAG_ERROR: u64 = 11;
pub const TAG_EXTERNAL: u64 = 12;
// 13-15 reserved

// Compile-time guards
const _: () = assert!(TAG_EXTERNAL < 16, "tag must fit in 4 bits");
const _: () = assert!(TAG_NUMBER > TAG_TRUE, "heap tags follow inline tags");

/// A host value as seen from native code: either an inline scalar or a
/// handle into the [`Heap`](crate::Heap). The handle is only meaningful
/// together with the heap that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Value(pub u64);

impl Value {
    // --- Constructors ---

    #[inline]
    pub fn int(val: i32) -> Self {
        Value((TAG_INT << TAG_SHIFT) | (val as u32 as u64))
    }

    #[inline]
    pub fn undefined() -> Self {
        Value(TAG_UNDEFINED << TAG_SHIFT)
    }

    #[inline]
    pub fn null() -> Self {
        Value(TAG_NULL << TAG_SHIFT)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        if b {
            Value(TAG_TRUE << TAG_SHIFT)
        } else {
            Value(TAG_FALSE << TAG_SHIFT)
        }
    }

    #[inline]
    pub fn number(handle: u32) -> Self {
        Value::make_obj(TAG_NUMBER, handle)
    }

    #[inline]
    pub fn string(handle: u32) -> Self {
        Value::make_obj(TAG_STRING, handle)
    }

    #[inline]
    pub fn symbol(handle: u32) -> Self {
        Value::make_obj(TAG_SYMBOL, handle)
    }

    #[inline]
    pub fn object(handle: u32) -> Self {
        Value::make_obj(TAG_OBJECT, handle)
    }

    #[inline]
    pub fn array(handle: u32) -> Self {
        Value::make_obj(TAG_ARRAY, handle)
    }

    #[inline]
    pub fn function(handle: u32) -> Self {
        Value::make_obj(TAG_FUNCTION, handle)
    }

    #[inline]
    pub fn error(handle: u32) -> Self {
        Value::make_obj(TAG_ERROR, handle)
    }

    #[inline]
    pub fn external(handle: u32) -> Self {
        Value::make_obj(TAG_EXTERNAL, handle)
    }

    #[inline]
    fn make_obj(tag: u64, handle: u32) -> Self {
        Value((tag << TAG_SHIFT) | (handle as u64))
    }

    // --- Checkers ---

    #[inline]
    pub fn tag(&self) -> u64 {
        (self.0 >> TAG_SHIFT) & 0xF
    }

    /// Host-level type of this value, as `typeof` would report it.
    /// Arrays and error objects are objects.
    pub fn value_type(&self) -> Option<ValueType> {
        let ty = match self.tag() {
            TAG_INT | TAG_NUMBER => ValueType::Number,
            TAG_UNDEFINED => ValueType::Undefined,
            TAG_NULL => ValueType::Null,
            TAG_FALSE | TAG_TRUE => ValueType::Boolean,
            TAG_STRING => ValueType::String,
            TAG_SYMBOL => ValueType::Symbol,
            TAG_OBJECT | TAG_ARRAY | TAG_ERROR => ValueType::Object,
            TAG_FUNCTION => ValueType::Function,
            TAG_EXTERNAL => ValueType::External,
            _ => return None,
        };
        Some(ty)
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        self.tag() == TAG_INT
    }

    #[inline]
    pub fn is_obj(&self) -> bool {
        self.tag() >= TAG_NUMBER
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.tag() == TAG_UNDEFINED
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.tag() == TAG_NULL
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        let t = self.tag();
        t == TAG_FALSE || t == TAG_TRUE
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        let t = self.tag();
        t == TAG_INT || t == TAG_NUMBER
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.tag() == TAG_STRING
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        self.tag() == TAG_ARRAY
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        self.tag() == TAG_FUNCTION
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.tag() == TAG_ERROR
    }

    // --- Accessors ---

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        if self.tag() != TAG_INT {
            return None;
        }
        Some((self.0 & PAYLOAD_MASK) as u32 as i32)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self.tag() {
            TAG_TRUE => Some(true),
            TAG_FALSE => Some(false),
            _ => None,
        }
    }

    #[inline]
    pub fn as_handle(&self) -> Option<u32> {
        if self.is_obj() {
            Some((self.0 & 0xFFFFFFFF) as u32)
        } else {
            None
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handle = (self.0 & 0xFFFFFFFF) as u32;
        match self.tag() {
            TAG_INT => write!(f, "Int({})", (self.0 & PAYLOAD_MASK) as u32 as i32),
            TAG_UNDEFINED => write!(f, "Undefined"),
            TAG_NULL => write!(f, "Null"),
            TAG_FALSE => write!(f, "Bool(false)"),
            TAG_TRUE => write!(f, "Bool(true)"),
            TAG_NUMBER => write!(f, "Number({handle})"),
            TAG_STRING => write!(f, "String({handle})"),
            TAG_SYMBOL => write!(f, "Symbol({handle})"),
            TAG_OBJECT => write!(f, "Object({handle})"),
            TAG_ARRAY => write!(f, "Array({handle})"),
            TAG_FUNCTION => write!(f, "Function({handle})"),
            TAG_ERROR => write!(f, "Error({handle})"),
            TAG_EXTERNAL => write!(f, "External({handle})"),
            _ => write!(f, "Unknown(Bits: {:x})", self.0),
        }
    }
}
