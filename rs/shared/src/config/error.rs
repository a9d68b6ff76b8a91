use std::env::VarError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Error: {0}, Environment variable {1}")]
    EnvVarError(#[source] VarError, String),
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
            reason: reason.into(),
        }
    }

    /// Environment key of the offending value.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::EnvVarError(_, key) => key,
            ConfigError::InvalidValue { key, .. } => key,
        }
    }
}
