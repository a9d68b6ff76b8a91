use serde::Serialize;

use crate::constant::{AGENT_MODEL, AGENT_NAME, AGENT_OUTPUT_KEY};

use super::{
    error::ConfigError,
    util::{non_empty_token, Overrides},
};

pub const AGENT_NAME_KEY: &str = "AGENT_NAME";
pub const AGENT_MODEL_KEY: &str = "AGENT_MODEL";
pub const AGENT_OUTPUT_KEY_KEY: &str = "AGENT_OUTPUT_KEY";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentConfig {
    pub name: String,
    pub model: String,
    /// Session state key the agent response is stored under.
    pub output_key: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: AGENT_NAME.to_owned(),
            model: AGENT_MODEL.to_owned(),
            output_key: AGENT_OUTPUT_KEY.to_owned(),
        }
    }
}

impl AgentConfig {
    pub fn from_overrides(overrides: &Overrides) -> Result<Self, ConfigError> {
        Ok(Self {
            name: overrides.string(AGENT_NAME_KEY, None, AGENT_NAME, validate_identifier)?,
            model: overrides.string(AGENT_MODEL_KEY, None, AGENT_MODEL, non_empty_token)?,
            output_key: overrides.string(
                AGENT_OUTPUT_KEY_KEY,
                None,
                AGENT_OUTPUT_KEY,
                non_empty_token,
            )?,
        })
    }
}

/// Agent names end up as identifiers in the agent runtime, so `rag-agent` is rejected.
pub fn validate_identifier(value: &str) -> Result<(), String> {
    let mut chars = value.chars();
    match chars.next() {
        None => return Err("must not be empty".to_owned()),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err("must start with a letter or underscore".to_owned())
        }
        _ => {}
    }
    if value == "_" {
        return Err("must not be a lone underscore".to_owned());
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err("may only contain letters, digits and underscores".to_owned());
    }
    Ok(())
}
