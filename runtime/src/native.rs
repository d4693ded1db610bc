use crate::machine::Runtime;
use memory::Value;

// The signature of every native callback.
// args: the values the caller passed, exactly as many as it passed.
// Return: None when the callback threw (or has nothing to return).
pub type NativeFn = fn(rt: &mut Runtime, args: &[Value]) -> Option<Value>;

#[derive(Clone)]
pub struct NativeObj {
    pub name: String,
    pub func: NativeFn,
}

/// Trait for native function registration
pub trait NativeRegistry {
    fn define_native(&mut self, name: &str, func: NativeFn) -> Value;
    fn bootstrap_natives(&mut self);
}
