//! Configuration schema definitions.
//!
//! All types derive Serde traits so the same structure can be read from TOML
//! or JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::channel::ChannelOptions;
use crate::message::Severity;

/// Root configuration: named channels plus per-logger overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Channel declarations, referenced by name from loggers.
    pub channels: Vec<ChannelConfig>,

    /// Logger declarations. An empty name configures the root.
    pub loggers: Vec<LoggerConfig>,
}

/// A channel instance built once and shared by every logger naming it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChannelConfig {
    /// Name loggers use to refer to this channel.
    pub name: String,

    /// Builder kind, e.g. `"memory"` or `"tracing"`.
    pub kind: String,

    /// Builder options. Scalars are accepted and kept as strings.
    #[serde(
        default,
        deserialize_with = "scalar_options",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub options: ChannelOptions,
}

/// Overrides for one logger. Omitted fields are inherited.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    /// Dotted logger name (default: root).
    #[serde(default)]
    pub name: String,

    /// Threshold override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Severity>,

    /// Name of a declared channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

fn scalar_options<'de, D>(deserializer: D) -> Result<ChannelOptions, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    let raw = BTreeMap::<String, Scalar>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Scalar::Text(s) => s,
                Scalar::Int(i) => i.to_string(),
                Scalar::Float(f) => f.to_string(),
                Scalar::Bool(b) => b.to_string(),
            };
            (key, value)
        })
        .collect())
}
