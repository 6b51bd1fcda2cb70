use std::fmt::Debug;

use serde_json::Value;
use thiserror::Error;

use galley_config::PluginInstance;

/// Errors surfaced while resolving or running an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No factory is registered for the tool.
    #[error("tool not available: {tool} (register a factory for it)")]
    Unavailable { tool: String },

    /// The tool was resolved but its invocation failed.
    #[error("tool {tool} failed: {message}")]
    Failed { tool: String, message: String },
}

/// Minifies HTML content (e.g. the `html-minifier` package).
pub trait HtmlMinifier: Debug + Send + Sync {
    fn minify(&self, html: &str) -> Result<String, ToolError>;
}

/// Result of a style optimization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleOutput {
    pub css: String,
}

/// Optimizes CSS content (e.g. the `csso` package).
pub trait StyleOptimizer: Debug + Send + Sync {
    fn minify(&self, css: &str) -> Result<StyleOutput, ToolError>;
}

/// Renders a template against a data object (e.g. the `mustache` package).
pub trait TemplateRenderer: Debug + Send + Sync {
    fn render(&self, template: &str, data: &Value) -> Result<String, ToolError>;
}

/// Builds a [`PluginInstance`] from an options object.
///
/// The default implementations wrap the options into data carrying a
/// well-known constructor name; hosts that talk to a live bundler register
/// constructors that do more.
pub trait PluginConstructor: Send + Sync {
    fn construct(&self, options: Value) -> Result<PluginInstance, ToolError>;
}
