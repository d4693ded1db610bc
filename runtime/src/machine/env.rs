use argv::{calls, Env, MessageConfig};
use memory::{ErrorKind, ErrorObj, Status, Value, ValueType};

use super::runtime::Runtime;

impl Env for Runtime {
    type Value = Value;

    fn type_of(&mut self, value: Value) -> Result<ValueType, Status> {
        self.enter(calls::TYPEOF)?;
        let live = if value.is_function() {
            value
                .as_handle()
                .is_some_and(|h| (h as usize) < self.natives.len())
        } else {
            self.heap.contains(value)
        };
        if !live {
            return Err(Status::InvalidArg);
        }
        value.value_type().ok_or(Status::InvalidArg)
    }

    fn get_value_bool(&mut self, value: Value) -> Result<bool, Status> {
        self.enter(calls::GET_VALUE_BOOL)?;
        value.as_bool().ok_or(Status::BooleanExpected)
    }

    fn create_type_error(&mut self, code: Option<&str>, message: &str) -> Result<Value, Status> {
        self.enter(calls::CREATE_TYPE_ERROR)?;
        Ok(self.heap.alloc_error(ErrorObj {
            kind: ErrorKind::TypeError,
            code: code.map(str::to_string),
            message: message.to_string(),
        }))
    }

    fn throw(&mut self, error: Value) -> Result<(), Status> {
        self.enter(calls::THROW)?;
        if self.pending.is_some() {
            return Err(Status::PendingException);
        }
        self.pending = Some(error);
        Ok(())
    }

    fn get_boolean(&mut self, value: bool) -> Result<Value, Status> {
        self.enter(calls::GET_BOOLEAN)?;
        Ok(Value::bool(value))
    }

    fn fatal_error(&mut self, location: &str, message: &str) -> ! {
        panic!("FATAL ERROR: {location} {message}")
    }

    fn messages(&self) -> &MessageConfig {
        &self.messages
    }
}
