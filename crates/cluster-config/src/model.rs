//! Cluster configuration values: resolved output and caller overrides

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Built-in default tier, used when no `default.*` files exist
pub const DEFAULT_CONFIG: ClusterConfig = ClusterConfig {
    master_count: 1,
    worker_count: 1,
    name: String::new(),
};

/// The effective configuration for a cluster after all tiers are merged
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    pub master_count: i64,
    pub worker_count: i64,

    /// Preset the values came from, empty when no preset was named
    #[serde(default)]
    pub name: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// Caller-supplied request for a cluster configuration.
///
/// A count of zero means "not supplied" and the value is inherited from
/// the preset or default tier. Upstream callers send literal zeroes, so the
/// sentinel is kept rather than switching to `Option`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverride {
    /// Named preset to start from
    pub name: Option<String>,
    pub master_count: i64,
    pub worker_count: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LooseOverride {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    master_count: Option<i64>,
    #[serde(default)]
    worker_count: Option<i64>,
}

impl ConfigOverride {
    /// An override that only names a preset
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_master_count(mut self, count: i64) -> Self {
        self.master_count = count;
        self
    }

    pub fn with_worker_count(mut self, count: i64) -> Self {
        self.worker_count = count;
        self
    }

    /// The preset name, treating an empty string the same as no name
    pub fn preset_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Build an override from a loosely-typed request body.
    ///
    /// `name` must be a JSON string, `null` or absent; any other JSON type is
    /// rejected rather than coerced. Missing or `null` counts are zero.
    pub fn from_json(value: &Value) -> Result<Self> {
        let loose = LooseOverride::deserialize(value).map_err(|e| Error::InvalidOverride {
            message: e.to_string(),
        })?;

        let name = match loose.name {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name),
            Some(other) => {
                return Err(Error::InvalidOverride {
                    message: format!("name must be a string, got {}", json_type_name(&other)),
                });
            }
        };

        Ok(Self {
            name,
            master_count: loose.master_count.unwrap_or(0),
            worker_count: loose.worker_count.unwrap_or(0),
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
