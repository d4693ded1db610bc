//! Boolean natives bundled with the runtime.
//!
//! Each callback checks its argument count, binds its boolean arguments and
//! leaves error reporting to [`argv::guard`].

use argv::{argv_bool, boolean_value, check_argc, guard};
use memory::Value;

use crate::machine::Runtime;

/// `identity(flag)`: returns `flag`.
pub fn native_identity(rt: &mut Runtime, args: &[Value]) -> Option<Value> {
    guard(rt, |rt| {
        check_argc(rt, args, 1)?;
        let flag = argv_bool(rt, args, 0)?;
        boolean_value(rt, flag)
    })
}

/// `not(flag)`: returns `!flag`.
pub fn native_not(rt: &mut Runtime, args: &[Value]) -> Option<Value> {
    guard(rt, |rt| {
        check_argc(rt, args, 1)?;
        let flag = argv_bool(rt, args, 0)?;
        boolean_value(rt, !flag)
    })
}

/// `and(a, b)`: both arguments are validated before either is used.
pub fn native_and(rt: &mut Runtime, args: &[Value]) -> Option<Value> {
    guard(rt, |rt| {
        check_argc(rt, args, 2)?;
        let a = argv_bool(rt, args, 0)?;
        let b = argv_bool(rt, args, 1)?;
        boolean_value(rt, a && b)
    })
}

/// `select(flag, a, b)`: returns `a` when `flag` is true, else `b`. Only
/// `flag` has to be a boolean.
pub fn native_select(rt: &mut Runtime, args: &[Value]) -> Option<Value> {
    guard(rt, |rt| {
        check_argc(rt, args, 3)?;
        let flag = argv_bool(rt, args, 0)?;
        Ok(if flag { args[1] } else { args[2] })
    })
}
