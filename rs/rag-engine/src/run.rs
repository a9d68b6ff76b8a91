use shared::{log_error, setup_tracing, ConfigField, LoggingConfig, RagEngineConfig};
use tracing::{info, warn};

use crate::error::RagEngineError;

/// Loads the configuration and installs tracing from it. An invalid
/// configuration is reported through default logging before bailing out.
pub fn initialize() -> Result<RagEngineConfig, RagEngineError> {
    let config = match RagEngineConfig::new() {
        Ok(config) => config,
        Err(e) => {
            setup_tracing(&LoggingConfig::default());
            return Err(log_error!(e).into());
        }
    };
    setup_tracing(&config.logging);
    if config.is_placeholder_project() {
        warn!(
            "{} is still the placeholder '{}', set it for this deployment",
            ConfigField::ProjectId.env_key(),
            config.project.project_id
        );
    }
    info!(
        "Agent {} using {} with embeddings from {}",
        config.agent.name, config.agent.model, config.rag.default_embedding_model
    );
    Ok(config)
}

/// Renders the whole configuration as JSON, or a single field by name.
pub fn render(config: &RagEngineConfig, field: Option<&str>) -> Result<String, RagEngineError> {
    match field {
        Some(name) => config
            .get(name)
            .map(|value| value.to_string())
            .ok_or_else(|| RagEngineError::UnknownField(name.to_owned())),
        None => Ok(serde_json::to_string_pretty(config)?),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("rag_default_top_k", "10")]
    #[case("agent_model", "gemini-2.0-flash-exp")]
    #[case("rag_default_vector_distance_threshold", "0.5")]
    #[case("gcs_default_storage_class", "STANDARD")]
    fn test_render_field(#[case] name: &str, #[case] expected: &str) {
        let config = RagEngineConfig::default();
        assert_eq!(render(&config, Some(name)).unwrap(), expected);
    }

    #[test]
    fn test_render_unknown_field() {
        let err = render(&RagEngineConfig::default(), Some("top_k")).unwrap_err();
        assert!(matches!(err, RagEngineError::UnknownField(name) if name == "top_k"));
    }

    #[test]
    fn test_render_all_fields_as_json() {
        let rendered = render(&RagEngineConfig::default(), None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["agent"]["output_key"], "rag_response");
        assert_eq!(json["project"]["location"], "europe-west3");
    }
}
