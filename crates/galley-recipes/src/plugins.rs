//! Plugin recipes: global injection, bundle analysis, service workers, and
//! import-cycle detection.

use std::path::Path;

use galley_config::{FilePattern, PluginInstance};
use serde_json::{Map, Value, json};

use crate::error::Result;
use crate::tools::{PluginKind, ToolRegistry};

/// Exposes `symbols` as free identifiers backed by module imports.
///
/// Each `(identifier, module)` pair becomes a provide binding, so bundled
/// code can reference the identifier without importing the module itself.
pub fn inject_globals(tools: &ToolRegistry, symbols: &[(&str, &str)]) -> Result<PluginInstance> {
    let mut bindings = Map::new();
    for (identifier, module) in symbols {
        bindings.insert((*identifier).to_string(), Value::String((*module).to_string()));
    }
    let plugin = tools
        .plugin(PluginKind::Provide)?
        .construct(Value::Object(bindings))?;
    Ok(plugin)
}

/// The classic jQuery bindings: `$`, `jQuery`, and their `window.` forms.
pub fn jquery(tools: &ToolRegistry) -> Result<PluginInstance> {
    inject_globals(
        tools,
        &[
            ("$", "jquery"),
            ("jQuery", "jquery"),
            ("window.jQuery", "jquery"),
            ("window.$", "jquery"),
        ],
    )
}

/// Emits a static bundle-size report alongside the build.
pub fn bundle_analysis(tools: &ToolRegistry) -> Result<PluginInstance> {
    let plugin = tools
        .plugin(PluginKind::BundleAnalyzer)?
        .construct(json!({ "analyzerMode": "static" }))?;
    Ok(plugin)
}

/// Generates a service worker that takes over immediately and answers every
/// GET from the network first, falling back to cache.
pub fn service_worker(tools: &ToolRegistry) -> Result<PluginInstance> {
    let plugin = tools.plugin(PluginKind::ServiceWorker)?.construct(json!({
        "clientsClaim": true,
        "skipWaiting": true,
        "runtimeCaching": [{
            "urlPattern": ".*",
            "handler": "NetworkFirst",
            "method": "GET",
        }],
        "maximumFileSizeToCacheInBytes": 10 * 1024 * 1024,
    }))?;
    Ok(plugin)
}

/// Fails the build when modules matching `include` form an import cycle.
///
/// Anything under `node_modules` is ignored.
pub fn circular_dependency(
    tools: &ToolRegistry,
    include: FilePattern,
    cwd: &Path,
) -> Result<PluginInstance> {
    let plugin = tools
        .plugin(PluginKind::CircularDependency)?
        .construct(json!({
            "exclude": "node_modules",
            "include": include.as_str(),
            "failOnError": true,
            "allowAsyncCycles": false,
            "cwd": cwd.display().to_string(),
        }))?;
    Ok(plugin)
}
