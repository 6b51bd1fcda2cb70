use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An instantiated plugin, carried as data.
///
/// The host receives `{ name, options }` and invokes the named constructor
/// itself; this library never executes plugin code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInstance {
    /// Constructor name in the host ecosystem (e.g. `ProvidePlugin`).
    pub name: String,

    /// Options object forwarded to the constructor.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginInstance {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}
