use shared::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagEngineError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("Json error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown configuration field '{0}'")]
    UnknownField(String),
}
