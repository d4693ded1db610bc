use thiserror::Error;

/// Type tags reported by a host's `typeof` query. Discriminants match
/// `napi_valuetype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ValueType {
    Undefined = 0,
    Null = 1,
    Boolean = 2,
    Number = 3,
    String = 4,
    Symbol = 5,
    Object = 6,
    Function = 7,
    External = 8,
    BigInt = 9,
}

impl ValueType {
    pub fn from_raw(raw: i32) -> Option<Self> {
        let ty = match raw {
            0 => ValueType::Undefined,
            1 => ValueType::Null,
            2 => ValueType::Boolean,
            3 => ValueType::Number,
            4 => ValueType::String,
            5 => ValueType::Symbol,
            6 => ValueType::Object,
            7 => ValueType::Function,
            8 => ValueType::External,
            9 => ValueType::BigInt,
            _ => return None,
        };
        Some(ty)
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Name as the `typeof` operator spells it.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Undefined => "undefined",
            ValueType::Null => "object",
            ValueType::Boolean => "boolean",
            ValueType::Number => "number",
            ValueType::String => "string",
            ValueType::Symbol => "symbol",
            ValueType::Object | ValueType::External => "object",
            ValueType::Function => "function",
            ValueType::BigInt => "bigint",
        }
    }
}

/// Non-ok outcome of a host embedding call. Discriminants match
/// `napi_status`; `napi_ok` (0) has no variant and maps to `Ok(())` in
/// [`Status::check`]. Display strings are the messages Node reports through
/// `napi_get_last_error_info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(i32)]
pub enum Status {
    #[error("Invalid argument")]
    InvalidArg = 1,
    #[error("An object was expected")]
    ObjectExpected = 2,
    #[error("A string was expected")]
    StringExpected = 3,
    #[error("A string or symbol was expected")]
    NameExpected = 4,
    #[error("A function was expected")]
    FunctionExpected = 5,
    #[error("A number was expected")]
    NumberExpected = 6,
    #[error("A boolean was expected")]
    BooleanExpected = 7,
    #[error("An array was expected")]
    ArrayExpected = 8,
    #[error("Unknown failure")]
    GenericFailure = 9,
    #[error("An exception is pending")]
    PendingException = 10,
    #[error("The async work item was cancelled")]
    Cancelled = 11,
    #[error("napi_escape_handle already called on scope")]
    EscapeCalledTwice = 12,
    #[error("Invalid handle scope usage")]
    HandleScopeMismatch = 13,
    #[error("Invalid callback scope usage")]
    CallbackScopeMismatch = 14,
    #[error("Thread-safe function queue is full")]
    QueueFull = 15,
    #[error("Thread-safe function handle is closing")]
    Closing = 16,
    #[error("A bigint was expected")]
    BigintExpected = 17,
    #[error("A date was expected")]
    DateExpected = 18,
    #[error("An arraybuffer was expected")]
    ArraybufferExpected = 19,
    #[error("A detachable arraybuffer was expected")]
    DetachableArraybufferExpected = 20,
    #[error("Main thread would deadlock")]
    WouldDeadlock = 21,
}

impl Status {
    /// Converts a raw status code; unknown codes count as a generic failure.
    pub fn check(raw: i32) -> Result<(), Status> {
        let status = match raw {
            0 => return Ok(()),
            1 => Status::InvalidArg,
            2 => Status::ObjectExpected,
            3 => Status::StringExpected,
            4 => Status::NameExpected,
            5 => Status::FunctionExpected,
            6 => Status::NumberExpected,
            7 => Status::BooleanExpected,
            8 => Status::ArrayExpected,
            10 => Status::PendingException,
            11 => Status::Cancelled,
            12 => Status::EscapeCalledTwice,
            13 => Status::HandleScopeMismatch,
            14 => Status::CallbackScopeMismatch,
            15 => Status::QueueFull,
            16 => Status::Closing,
            17 => Status::BigintExpected,
            18 => Status::DateExpected,
            19 => Status::ArraybufferExpected,
            20 => Status::DetachableArraybufferExpected,
            21 => Status::WouldDeadlock,
            _ => Status::GenericFailure,
        };
        Err(status)
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }
}
