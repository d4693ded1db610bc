//! A scripted host for unit tests: records every call and can be told to
//! fail a given call once.

use memory::{Status, ValueType};

use crate::config::MessageConfig;
use crate::env::{calls, Env};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fake {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(&'static str),
    Object,
    Array,
    /// Index into [`ScriptedEnv::errors`].
    Error(usize),
}

pub struct ScriptedEnv {
    /// `(code, message)` of every error object built so far.
    pub errors: Vec<(Option<String>, String)>,
    pub thrown: Option<Fake>,
    pub trace: Vec<&'static str>,
    pub messages: MessageConfig,
    failures: Vec<(&'static str, Status)>,
}

impl ScriptedEnv {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            thrown: None,
            trace: Vec::new(),
            messages: MessageConfig::default(),
            failures: Vec::new(),
        }
    }

    pub fn fail(&mut self, call: &'static str, status: Status) {
        self.failures.push((call, status));
    }

    fn enter(&mut self, call: &'static str) -> Result<(), Status> {
        self.trace.push(call);
        match self.failures.iter().position(|(c, _)| *c == call) {
            Some(pos) => Err(self.failures.remove(pos).1),
            None => Ok(()),
        }
    }
}

impl Env for ScriptedEnv {
    type Value = Fake;

    fn type_of(&mut self, value: Fake) -> Result<ValueType, Status> {
        self.enter(calls::TYPEOF)?;
        Ok(match value {
            Fake::Undefined => ValueType::Undefined,
            Fake::Null => ValueType::Null,
            Fake::Bool(_) => ValueType::Boolean,
            Fake::Number(_) => ValueType::Number,
            Fake::Str(_) => ValueType::String,
            Fake::Object | Fake::Array | Fake::Error(_) => ValueType::Object,
        })
    }

    fn get_value_bool(&mut self, value: Fake) -> Result<bool, Status> {
        self.enter(calls::GET_VALUE_BOOL)?;
        match value {
            Fake::Bool(b) => Ok(b),
            _ => Err(Status::BooleanExpected),
        }
    }

    fn create_type_error(&mut self, code: Option<&str>, message: &str) -> Result<Fake, Status> {
        self.enter(calls::CREATE_TYPE_ERROR)?;
        self.errors
            .push((code.map(str::to_string), message.to_string()));
        Ok(Fake::Error(self.errors.len() - 1))
    }

    fn throw(&mut self, error: Fake) -> Result<(), Status> {
        self.enter(calls::THROW)?;
        self.thrown = Some(error);
        Ok(())
    }

    fn get_boolean(&mut self, value: bool) -> Result<Fake, Status> {
        self.enter(calls::GET_BOOLEAN)?;
        Ok(Fake::Bool(value))
    }

    fn fatal_error(&mut self, location: &str, message: &str) -> ! {
        panic!("FATAL ERROR: {location} {message}")
    }

    fn messages(&self) -> &MessageConfig {
        &self.messages
    }
}
