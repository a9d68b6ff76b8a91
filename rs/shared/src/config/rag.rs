use serde::Serialize;

use crate::constant::{
    RAG_DEFAULT_EMBEDDING_MODEL, RAG_DEFAULT_PAGE_SIZE, RAG_DEFAULT_SEARCH_TOP_K,
    RAG_DEFAULT_TOP_K, RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD, VECTOR_DISTANCE_MAX,
    VECTOR_DISTANCE_MIN,
};

use super::{
    error::ConfigError,
    util::{non_empty_token, Overrides},
};

pub const RAG_DEFAULT_EMBEDDING_MODEL_KEY: &str = "RAG_DEFAULT_EMBEDDING_MODEL";
pub const RAG_DEFAULT_TOP_K_KEY: &str = "RAG_DEFAULT_TOP_K";
pub const RAG_DEFAULT_SEARCH_TOP_K_KEY: &str = "RAG_DEFAULT_SEARCH_TOP_K";
pub const RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD_KEY: &str = "RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD";
pub const RAG_DEFAULT_PAGE_SIZE_KEY: &str = "RAG_DEFAULT_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RagCorpusConfig {
    pub default_embedding_model: String,
    /// Results returned by a single-corpus query.
    pub default_top_k: u32,
    /// Results returned per corpus when searching every corpus.
    pub default_search_top_k: u32,
    pub default_vector_distance_threshold: f64,
    pub default_page_size: u32,
}

impl Default for RagCorpusConfig {
    fn default() -> Self {
        Self {
            default_embedding_model: RAG_DEFAULT_EMBEDDING_MODEL.to_owned(),
            default_top_k: RAG_DEFAULT_TOP_K,
            default_search_top_k: RAG_DEFAULT_SEARCH_TOP_K,
            default_vector_distance_threshold: RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD,
            default_page_size: RAG_DEFAULT_PAGE_SIZE,
        }
    }
}

impl RagCorpusConfig {
    pub fn from_overrides(overrides: &Overrides) -> Result<Self, ConfigError> {
        Ok(Self {
            default_embedding_model: overrides.string(
                RAG_DEFAULT_EMBEDDING_MODEL_KEY,
                None,
                RAG_DEFAULT_EMBEDDING_MODEL,
                non_empty_token,
            )?,
            default_top_k: overrides.positive(RAG_DEFAULT_TOP_K_KEY, RAG_DEFAULT_TOP_K)?,
            default_search_top_k: overrides
                .positive(RAG_DEFAULT_SEARCH_TOP_K_KEY, RAG_DEFAULT_SEARCH_TOP_K)?,
            default_vector_distance_threshold: overrides.bounded(
                RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD_KEY,
                RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD,
                VECTOR_DISTANCE_MIN,
                VECTOR_DISTANCE_MAX,
            )?,
            default_page_size: overrides
                .positive(RAG_DEFAULT_PAGE_SIZE_KEY, RAG_DEFAULT_PAGE_SIZE)?,
        })
    }
}
