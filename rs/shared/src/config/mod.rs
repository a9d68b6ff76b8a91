pub mod agent;
pub mod error;
pub mod field;
pub mod gcs;
pub mod log_format;
pub mod logging;
pub mod project;
pub mod rag;
mod util;

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::debug;

pub use crate::config::util::{get_env_var, get_optional_env_var, Overrides};

use self::{
    agent::AgentConfig, error::ConfigError, field::ConfigField, field::ConfigValue,
    gcs::GcsConfig, logging::LoggingConfig, project::ProjectConfig, rag::RagCorpusConfig,
};

/// Settings read by the corpus, storage and agent collaborators.
/// Loaded once at startup and handed to whoever needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RagEngineConfig {
    pub project: ProjectConfig,
    pub gcs: GcsConfig,
    pub rag: RagCorpusConfig,
    pub agent: AgentConfig,
    pub logging: LoggingConfig,
}

impl RagEngineConfig {
    /// Loads the configuration from the process environment.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_overrides(&Overrides::from_env())
    }

    /// Loads the configuration from an arbitrary key lookup instead of the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_overrides(&Overrides::from_lookup(lookup))
    }

    pub fn from_overrides(overrides: &Overrides) -> Result<Self, ConfigError> {
        let config = Self {
            project: ProjectConfig::from_overrides(overrides)?,
            gcs: GcsConfig::from_overrides(overrides)?,
            rag: RagCorpusConfig::from_overrides(overrides)?,
            agent: AgentConfig::from_overrides(overrides)?,
            logging: LoggingConfig::from_overrides(overrides)?,
        };
        debug!(
            "Loaded configuration for project {} in {}",
            config.project.project_id, config.project.location
        );
        Ok(config)
    }

    pub fn is_placeholder_project(&self) -> bool {
        self.project.is_placeholder()
    }

    pub fn value(&self, field: ConfigField) -> ConfigValue {
        let RagEngineConfig {
            project,
            gcs,
            rag,
            agent,
            logging,
        } = self;
        match field {
            ConfigField::ProjectId => project.project_id.as_str().into(),
            ConfigField::Location => project.location.as_str().into(),
            ConfigField::GcsDefaultStorageClass => {
                ConfigValue::Str(gcs.default_storage_class.to_string())
            }
            ConfigField::GcsDefaultLocation => gcs.default_location.as_str().into(),
            ConfigField::GcsListBucketsMaxResults => gcs.list_buckets_max_results.into(),
            ConfigField::GcsListBlobsMaxResults => gcs.list_blobs_max_results.into(),
            ConfigField::GcsDefaultContentType => gcs.default_content_type.as_str().into(),
            ConfigField::RagDefaultEmbeddingModel => rag.default_embedding_model.as_str().into(),
            ConfigField::RagDefaultTopK => rag.default_top_k.into(),
            ConfigField::RagDefaultSearchTopK => rag.default_search_top_k.into(),
            ConfigField::RagDefaultVectorDistanceThreshold => {
                rag.default_vector_distance_threshold.into()
            }
            ConfigField::RagDefaultPageSize => rag.default_page_size.into(),
            ConfigField::AgentName => agent.name.as_str().into(),
            ConfigField::AgentModel => agent.model.as_str().into(),
            ConfigField::AgentOutputKey => agent.output_key.as_str().into(),
            ConfigField::LogLevel => ConfigValue::Str(logging.level.to_string()),
            ConfigField::LogFormat => logging.format.template().into(),
        }
    }

    /// Looks a field up by its snake_case name, e.g. `rag_default_top_k`.
    pub fn get(&self, name: &str) -> Option<ConfigValue> {
        name.parse::<ConfigField>()
            .ok()
            .map(|field| self.value(field))
    }

    pub fn entries(&self) -> impl Iterator<Item = (ConfigField, ConfigValue)> + '_ {
        ConfigField::iter().map(|field| (field, self.value(field)))
    }
}
