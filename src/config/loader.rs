//! Configuration loading from disk.

use std::fmt;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::channel::ChannelError;
use crate::config::schema::LoggingConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Serialized representation of a [`LoggingConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Toml => f.write_str("toml"),
            ConfigFormat::Json => f.write_str("json"),
        }
    }
}

/// Error type for configuration loading and application.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Channel(#[from] ChannelError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML or JSON file.
pub fn load_config(path: &Path) -> Result<LoggingConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, format)?;

    tracing::debug!(
        path = %path.display(),
        channels = config.channels.len(),
        loggers = config.loggers.len(),
        "Logging configuration loaded"
    );
    Ok(config)
}

/// Parse and validate configuration text.
pub fn parse_config(data: &str, format: ConfigFormat) -> Result<LoggingConfig, ConfigError> {
    let config: LoggingConfig = match format {
        ConfigFormat::Toml => toml::from_str(data)?,
        ConfigFormat::Json => serde_json::from_str(data)?,
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Serialize a configuration.
pub fn save_config(config: &LoggingConfig, format: ConfigFormat) -> Result<String, ConfigError> {
    Ok(match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Severity;

    const SAMPLE: &str = r#"
        [[channels]]
        name = "mem"
        kind = "memory"
        options = { capacity = 16 }

        [[loggers]]
        level = "warn"
        channel = "mem"

        [[loggers]]
        name = "svc.db"
        level = "debug"
    "#;

    #[test]
    fn test_parse_toml() {
        let config = parse_config(SAMPLE, ConfigFormat::Toml).unwrap();
        assert_eq!(config.channels[0].options.get("capacity").map(String::as_str), Some("16"));
        assert_eq!(config.loggers[0].name, "");
        assert_eq!(config.loggers[0].level, Some(Severity::Warning));
        assert_eq!(config.loggers[1].channel, None);
    }

    #[test]
    fn test_parse_json() {
        let data = r#"{
            "channels": [{ "name": "out", "kind": "tracing" }],
            "loggers": [{ "name": "svc", "level": "error", "channel": "out" }]
        }"#;
        let config = parse_config(data, ConfigFormat::Json).unwrap();
        assert_eq!(config.loggers[0].level, Some(Severity::Error));
    }

    #[test]
    fn test_bad_level_is_parse_error() {
        let data = "[[loggers]]\nname = \"svc\"\nlevel = \"loud\"\n";
        assert!(matches!(parse_config(data, ConfigFormat::Toml), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_misspelled_keys_rejected() {
        let logger_typo = "[[loggers]]\nname = \"svc\"\nlevl = \"debug\"\n";
        assert!(matches!(parse_config(logger_typo, ConfigFormat::Toml), Err(ConfigError::Toml(_))));

        let channel_typo = "[[channels]]\nname = \"mem\"\nknd = \"memory\"\nkind = \"memory\"\n";
        assert!(matches!(parse_config(channel_typo, ConfigFormat::Toml), Err(ConfigError::Toml(_))));

        let top_level_typo = r#"{ "logers": [] }"#;
        assert!(matches!(parse_config(top_level_typo, ConfigFormat::Json), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_validation_runs() {
        let data = "[[loggers]]\nname = \"svc\"\nchannel = \"missing\"\n";
        match parse_config(data, ConfigFormat::Toml) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_save_then_parse_both_formats() {
        let config = parse_config(SAMPLE, ConfigFormat::Toml).unwrap();
        for format in [ConfigFormat::Toml, ConfigFormat::Json] {
            let text = save_config(&config, format).unwrap();
            assert_eq!(parse_config(&text, format).unwrap(), config, "format {}", format);
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/log.TOML")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("log.json")).unwrap(), ConfigFormat::Json);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("log.xml")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
