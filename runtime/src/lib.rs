pub mod error;
pub mod machine;
pub mod native;
pub mod stdlib;

pub use error::{Exception, RuntimeError};
pub use machine::Runtime;
pub use native::{NativeFn, NativeObj, NativeRegistry};
