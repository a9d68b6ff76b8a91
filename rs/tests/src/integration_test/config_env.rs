#[cfg(test)]
mod tests {
    use rstest::rstest;
    use shared::{ConfigError, LogLevel, RagEngineConfig, StorageClass};

    use crate::util::ScopedEnv;

    #[test]
    fn test_process_env_defaults() {
        let _env = ScopedEnv::new(&[]);
        let config = RagEngineConfig::new().unwrap();
        assert_eq!(config, RagEngineConfig::default());
        assert_eq!(config.rag.default_top_k, 10);
        assert_eq!(config.agent.model, "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_process_env_overrides() {
        let _env = ScopedEnv::new(&[
            ("GOOGLE_CLOUD_PROJECT", "acme-rag-prod"),
            ("LOCATION", "us-central1"),
            ("GCS_DEFAULT_STORAGE_CLASS", "coldline"),
            ("RAG_DEFAULT_SEARCH_TOP_K", "8"),
            ("LOG_LEVEL", "warn"),
        ]);
        let config = RagEngineConfig::new().unwrap();
        assert_eq!(config.project.project_id, "acme-rag-prod");
        assert!(!config.is_placeholder_project());
        assert_eq!(config.project.location, "us-central1");
        assert_eq!(config.gcs.default_storage_class, StorageClass::Coldline);
        assert_eq!(config.rag.default_search_top_k, 8);
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.rag.default_top_k, 10);
    }

    #[rstest]
    #[case("RAG_DEFAULT_PAGE_SIZE", "0")]
    #[case("LOG_LEVEL", "VERBOSE")]
    #[case("RAG_DEFAULT_VECTOR_DISTANCE_THRESHOLD", "3")]
    #[case("GCS_LIST_BLOBS_MAX_RESULTS", "-1")]
    fn test_process_env_rejects_invalid(#[case] key: &str, #[case] value: &str) {
        let _env = ScopedEnv::new(&[(key, value)]);
        match RagEngineConfig::new() {
            Err(ConfigError::InvalidValue { key: k, value: v, .. }) => {
                assert_eq!(k, key);
                assert_eq!(v, value);
            }
            other => panic!("expected invalid value for {key}, got {other:?}"),
        }
    }

    #[test]
    fn test_process_env_loads_deterministically() {
        let _env = ScopedEnv::new(&[("AGENT_NAME", "corpus_agent"), ("RAG_DEFAULT_TOP_K", "3")]);
        let first = RagEngineConfig::new().unwrap();
        let second = RagEngineConfig::new().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.agent.name, "corpus_agent");
    }
}
