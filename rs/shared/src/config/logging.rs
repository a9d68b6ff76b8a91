use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{level_filters::LevelFilter, Level};

use super::{error::ConfigError, log_format::LogFormat, util::Overrides};

pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
pub const LOG_FORMAT_KEY: &str = "LOG_FORMAT";

/// Standard severity names. `NOTSET` logs everything, `CRITICAL` logs at error level.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum LogLevel {
    #[strum(to_string = "NOTSET")]
    NotSet,
    Trace,
    Debug,
    #[default]
    Info,
    #[strum(to_string = "WARNING", serialize = "WARN")]
    Warning,
    Error,
    #[strum(to_string = "CRITICAL", serialize = "FATAL")]
    Critical,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::NotSet | LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error | LogLevel::Critical => Level::ERROR,
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        LevelFilter::from_level(level.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn from_overrides(overrides: &Overrides) -> Result<Self, ConfigError> {
        let level = match overrides.get(LOG_LEVEL_KEY, None)? {
            Some((key, value)) => value.parse::<LogLevel>().map_err(|_| {
                let levels: Vec<String> = LogLevel::iter().map(|l| l.to_string()).collect();
                ConfigError::invalid(&key, &value, format!("expected one of {}", levels.join(", ")))
            })?,
            None => LogLevel::default(),
        };
        Ok(Self {
            level,
            format: overrides.parse(LOG_FORMAT_KEY, LogFormat::default())?,
        })
    }
}
