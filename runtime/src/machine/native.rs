use crate::native::{NativeFn, NativeObj, NativeRegistry};
use crate::stdlib::logic;
use memory::Value;

impl NativeRegistry for super::runtime::Runtime {
    fn define_native(&mut self, name: &str, func: NativeFn) -> Value {
        self.natives.push(NativeObj {
            name: name.to_string(),
            func,
        });
        let val = Value::function((self.natives.len() - 1) as u32);
        self.globals.insert(name.to_string(), val);
        val
    }

    fn bootstrap_natives(&mut self) {
        self.define_native("identity", logic::native_identity);
        self.define_native("not", logic::native_not);
        self.define_native("and", logic::native_and);
        self.define_native("select", logic::native_select);
    }
}
