pub mod heap;
pub mod status;
pub mod value;


pub use heap::{Arena, ErrorKind, ErrorObj, Heap};
pub use status::{Status, ValueType};
pub use value::Value;
