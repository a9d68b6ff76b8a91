use std::fmt;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::constant;

use super::{agent::*, gcs::*, logging::*, project::*, rag::*};

/// A field value as exposed to callers looking fields up by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Str(String),
    Int(u32),
    Float(f64),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_int(&self) -> Option<u32> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Str(s) => f.write_str(s),
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_owned())
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

/// Every configuration field, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ConfigField {
    ProjectId,
    Location,
    GcsDefaultStorageClass,
    GcsDefaultLocation,
    GcsListBucketsMaxResults,
    GcsListBlobsMaxResults,
    GcsDefaultContentType,
    RagDefaultEmbeddingModel,
    RagDefaultTopK,
    RagDefaultSearchTopK,
    RagDefaultVectorDistanceThreshold,
    RagDefaultPageSize,
    AgentName,
    AgentModel,
    AgentOutputKey,
    LogLevel,
    LogFormat,
}

impl ConfigField {
    /// Environment variable that overrides this field.
    pub fn env_key(&self) -> &'static str {
        match self {
            ConfigField::ProjectId => PROJECT_ID_KEY,
            ConfigField::Location => LOCATION_KEY,
            ConfigField::GcsDefaultStorageClass => GCS_DEFAULT_STORAGE_CLASS_KEY,
            ConfigField::GcsDefaultLocation => GCS_DEFAULT_LOCATION_KEY,
            ConfigField::GcsListBucketsMaxResults => GCS_LIST_BUCKETS_MAX_RESULTS_KEY,
            ConfigField::GcsListBlobsMaxResults => GCS_LIST_BLOBS_MAX_RESULTS_KEY,
            ConfigField::GcsDefaultContentType => GCS_DEFAULT_CONTENT_TYPE_KEY,
            ConfigField::RagDefaultEmbeddingModel => RAG_DEFAULT_EMBEDDING_MODEL_KEY,
            ConfigField::RagDefaultTopK => RAG_DEFAULT_TOP_K_KEY,
            ConfigField::RagDefaultSearchTopK => RAG_DEFAULT_SEARCH_TOP_K_KEY,
            ConfigField::RagDefaultVectorDistanceThreshold => {
                RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD_KEY
            }
            ConfigField::RagDefaultPageSize => RAG_DEFAULT_PAGE_SIZE_KEY,
            ConfigField::AgentName => AGENT_NAME_KEY,
            ConfigField::AgentModel => AGENT_MODEL_KEY,
            ConfigField::AgentOutputKey => AGENT_OUTPUT_KEY_KEY,
            ConfigField::LogLevel => LOG_LEVEL_KEY,
            ConfigField::LogFormat => LOG_FORMAT_KEY,
        }
    }

    /// Fallback variable consulted when `env_key` is unset.
    pub fn env_alias(&self) -> Option<&'static str> {
        match self {
            ConfigField::ProjectId => Some(PROJECT_ID_ALIAS),
            ConfigField::Location => Some(LOCATION_ALIAS),
            _ => None,
        }
    }

    pub fn default_value(&self) -> ConfigValue {
        match self {
            ConfigField::ProjectId => constant::PROJECT_ID.into(),
            ConfigField::Location => constant::LOCATION.into(),
            ConfigField::GcsDefaultStorageClass => constant::GCS_DEFAULT_STORAGE_CLASS.into(),
            ConfigField::GcsDefaultLocation => constant::GCS_DEFAULT_LOCATION.into(),
            ConfigField::GcsListBucketsMaxResults => constant::GCS_LIST_BUCKETS_MAX_RESULTS.into(),
            ConfigField::GcsListBlobsMaxResults => constant::GCS_LIST_BLOBS_MAX_RESULTS.into(),
            ConfigField::GcsDefaultContentType => constant::GCS_DEFAULT_CONTENT_TYPE.into(),
            ConfigField::RagDefaultEmbeddingModel => constant::RAG_DEFAULT_EMBEDDING_MODEL.into(),
            ConfigField::RagDefaultTopK => constant::RAG_DEFAULT_TOP_K.into(),
            ConfigField::RagDefaultSearchTopK => constant::RAG_DEFAULT_SEARCH_TOP_K.into(),
            ConfigField::RagDefaultVectorDistanceThreshold => {
                constant::RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD.into()
            }
            ConfigField::RagDefaultPageSize => constant::RAG_DEFAULT_PAGE_SIZE.into(),
            ConfigField::AgentName => constant::AGENT_NAME.into(),
            ConfigField::AgentModel => constant::AGENT_MODEL.into(),
            ConfigField::AgentOutputKey => constant::AGENT_OUTPUT_KEY.into(),
            ConfigField::LogLevel => constant::LOG_LEVEL.into(),
            ConfigField::LogFormat => constant::LOG_FORMAT.into(),
        }
    }
}
