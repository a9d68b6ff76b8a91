use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::logging::LoggingConfig;

use super::format::TemplateFormat;

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber. The configured level is the default
/// directive and `RUST_LOG` directives are applied on top of it.
pub fn setup_tracing(config: &LoggingConfig) {
    // ensures that the subscriber is only initialized once for all threads
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from(config.level).into())
            .from_env_lossy();

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .event_format(TemplateFormat::new(config.format.clone()))
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}
