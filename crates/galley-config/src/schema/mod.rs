//! Typed model of the host bundler's configuration schema.
//!
//! Field names and nesting serialize exactly as the host expects
//! (`outputModule`, `library.type`, `use`, …); a [`Fragment`] converted with
//! [`Fragment::to_value`] can be handed to the bundler as-is. Everything here
//! is a plain value type; fragments carry no identity beyond their contents.

pub mod pattern;
pub mod plugin;
pub mod rule;

pub use pattern::FilePattern;
pub use plugin::PluginInstance;
pub use rule::{LoaderRef, Rule, RuleUse};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// A partial bundler configuration, meant to be merged with others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    /// Source-map directive (e.g. `"source-map"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleOptions>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginInstance>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizationOptions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiments: Option<ExperimentOptions>,
}

impl Fragment {
    /// Create from a `serde_json::Value` (for fragments arriving as data).
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to a `serde_json::Value` for hand-off to the host bundler.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Wraps a rule list into a mergeable fragment.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Fragment {
            module: Some(ModuleOptions { rules }),
            ..Fragment::default()
        }
    }

    /// Wraps a plugin list into a mergeable fragment.
    pub fn from_plugins(plugins: Vec<PluginInstance>) -> Self {
        Fragment {
            plugins,
            ..Fragment::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Absolute directory bundles are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<LibraryOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryOptions {
    /// Library target (`"module"` for ESM output).
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub minimizer: Vec<PluginInstance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentOptions {
    #[serde(rename = "outputModule")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_module: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_host_field_names() {
        let value = json!({
            "mode": "production",
            "experiments": { "outputModule": true },
            "output": { "library": { "type": "module" } }
        });

        let fragment = Fragment::from_value(value).unwrap();
        assert_eq!(fragment.mode, Some(Mode::Production));
        assert_eq!(
            fragment.experiments,
            Some(ExperimentOptions {
                output_module: Some(true)
            })
        );
        assert_eq!(
            fragment.output.unwrap().library.unwrap().kind,
            "module".to_string()
        );
    }

    #[test]
    fn from_value_rejects_mistyped_fragments() {
        let err = Fragment::from_value(json!({ "plugins": "not-a-list" })).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn empty_fragment_serializes_to_empty_object() {
        assert_eq!(Fragment::default().to_value().unwrap(), json!({}));
    }
}
