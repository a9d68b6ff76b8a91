#[cfg(test)]
mod tests {
    use rag_engine::{error::RagEngineError, run::initialize};
    use shared::ConfigError;

    use crate::util::ScopedEnv;

    #[test]
    fn test_initialize_fails_fast_on_invalid_config() {
        let _env = ScopedEnv::new(&[("RAG_DEFAULT_PAGE_SIZE", "0")]);
        let err = initialize().unwrap_err();
        assert!(
            matches!(
                err,
                RagEngineError::ConfigError(ConfigError::InvalidValue { ref key, .. })
                    if key == "RAG_DEFAULT_PAGE_SIZE"
            ),
            "{err}"
        );
    }

    #[test]
    fn test_initialize_with_valid_config() {
        let _env = ScopedEnv::new(&[("AGENT_MODEL", "gemini-2.5-flash")]);
        let config = initialize().unwrap();
        assert_eq!(config.agent.model, "gemini-2.5-flash");
    }
}
