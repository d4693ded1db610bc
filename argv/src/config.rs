use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

use crate::ordinal::ordinal;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid message configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Text of the errors raised for bad callback arguments.
///
/// ```toml
/// invalid_argument_prefix = "invalid argument."
/// boolean_suffix = "argument must be a boolean."
/// type_error_code = "ERR_INVALID_ARG_TYPE"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageConfig {
    pub invalid_argument_prefix: String,
    pub boolean_suffix: String,
    pub insufficient_arguments: String,
    pub too_many_arguments: String,
    /// `code` property attached to every raised `TypeError`.
    pub type_error_code: Option<String>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            invalid_argument_prefix: "invalid argument.".to_string(),
            boolean_suffix: "argument must be a boolean.".to_string(),
            insufficient_arguments: "invalid invocation. Insufficient arguments.".to_string(),
            too_many_arguments: "invalid invocation. Too many arguments.".to_string(),
            type_error_code: None,
        }
    }
}

impl MessageConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn shared_default() -> &'static MessageConfig {
        static DEFAULT: OnceLock<MessageConfig> = OnceLock::new();
        DEFAULT.get_or_init(MessageConfig::default)
    }

    /// "invalid argument. Second argument must be a boolean." for index 1.
    pub fn boolean_message(&self, index: usize) -> String {
        format!(
            "{} {} {}",
            self.invalid_argument_prefix,
            ordinal(index),
            self.boolean_suffix
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boolean_messages() {
        let config = MessageConfig::default();
        assert_eq!(
            config.boolean_message(0),
            "invalid argument. First argument must be a boolean."
        );
        assert_eq!(
            config.boolean_message(2),
            "invalid argument. Third argument must be a boolean."
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = MessageConfig::from_toml_str(
            r#"
            type_error_code = "ERR_INVALID_ARG_TYPE"
            boolean_suffix = "argument must be true or false."
            "#,
        )
        .unwrap();
        assert_eq!(config.type_error_code.as_deref(), Some("ERR_INVALID_ARG_TYPE"));
        assert_eq!(
            config.boolean_message(1),
            "invalid argument. Second argument must be true or false."
        );
        assert_eq!(
            config.insufficient_arguments,
            MessageConfig::default().insufficient_arguments
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = MessageConfig::from_toml_str("boolean_sufix = \"typo\"").unwrap_err();
        assert!(err.to_string().starts_with("invalid message configuration"));
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(MessageConfig::from_toml_str("").unwrap(), MessageConfig::default());
    }
}
