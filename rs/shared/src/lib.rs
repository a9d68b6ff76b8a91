pub mod config;
pub mod constant;
pub mod tracing;

pub use crate::config::{
    agent::AgentConfig,
    error::ConfigError,
    field::{ConfigField, ConfigValue},
    gcs::{GcsConfig, StorageClass},
    get_env_var,
    log_format::LogFormat,
    logging::{LogLevel, LoggingConfig},
    project::ProjectConfig,
    rag::RagCorpusConfig,
    RagEngineConfig,
};
pub use crate::tracing::setup::setup_tracing;
