//! Lazy registry of external tool handles.
//!
//! Recipes never talk to minifiers, template engines or plugin constructors
//! directly; they go through a [`ToolRegistry`] passed in by the caller.
//! Each slot resolves its factory on first use and caches the handle, so
//! unused tools are never constructed and repeated access is free.
//!
//! Content tools (HTML minifier, style optimizer, template renderer) have no
//! default and stay [`ToolError::Unavailable`] until the host registers one.
//! Plugin constructors default to data-level constructors that wrap options
//! under the ecosystem's well-known plugin names.

mod contract;
mod handle;

pub use contract::{
    HtmlMinifier, PluginConstructor, StyleOptimizer, StyleOutput, TemplateRenderer, ToolError,
};
pub use handle::LazyHandle;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use galley_config::PluginInstance;

/// Default tool names, matching the packages hosts usually install.
pub const HTML_MINIFIER_TOOL: &str = "html-minifier";
pub const STYLE_OPTIMIZER_TOOL: &str = "csso";
pub const TEMPLATE_RENDERER_TOOL: &str = "mustache";

/// Plugin constructors the catalogs reach for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    /// Injects module-backed globals (`ProvidePlugin`).
    Provide,
    /// Emits a static bundle-composition report (`BundleAnalyzerPlugin`).
    BundleAnalyzer,
    /// Clears the output directory before emitting (`CleanWebpackPlugin`).
    CleanOutput,
    /// Minifies emitted JavaScript (`TerserPlugin`).
    Terser,
    /// Generates a service worker (workbox `GenerateSW`).
    ServiceWorker,
    /// Reports or fails on circular imports (`CircularDependencyPlugin`).
    CircularDependency,
}

impl PluginKind {
    pub const ALL: [PluginKind; 6] = [
        PluginKind::Provide,
        PluginKind::BundleAnalyzer,
        PluginKind::CleanOutput,
        PluginKind::Terser,
        PluginKind::ServiceWorker,
        PluginKind::CircularDependency,
    ];

    /// Constructor name in the host ecosystem.
    pub fn constructor_name(self) -> &'static str {
        match self {
            PluginKind::Provide => "ProvidePlugin",
            PluginKind::BundleAnalyzer => "BundleAnalyzerPlugin",
            PluginKind::CleanOutput => "CleanWebpackPlugin",
            PluginKind::Terser => "TerserPlugin",
            PluginKind::ServiceWorker => "GenerateSW",
            PluginKind::CircularDependency => "CircularDependencyPlugin",
        }
    }
}

/// Default plugin constructor: wraps options into a [`PluginInstance`] named
/// after the kind's host constructor.
struct NamedConstructor {
    kind: PluginKind,
}

impl PluginConstructor for NamedConstructor {
    fn construct(&self, options: Value) -> Result<PluginInstance, ToolError> {
        tracing::debug!(
            constructor = self.kind.constructor_name(),
            "constructing plugin instance"
        );
        Ok(PluginInstance::new(self.kind.constructor_name(), options))
    }
}

/// The registry recipes and plugin factories draw their tools from.
///
/// Construct once via [`ToolRegistry::builder`] (or [`Default`] for the
/// data-only defaults) and pass by reference; every slot caches its first
/// successful resolution.
pub struct ToolRegistry {
    html_minifier: LazyHandle<dyn HtmlMinifier>,
    style_optimizer: LazyHandle<dyn StyleOptimizer>,
    template_renderer: LazyHandle<dyn TemplateRenderer>,
    plugin_constructors: HashMap<PluginKind, LazyHandle<dyn PluginConstructor>>,
}

impl ToolRegistry {
    pub fn builder() -> ToolRegistryBuilder {
        ToolRegistryBuilder::new()
    }

    pub fn html_minifier(&self) -> Result<Arc<dyn HtmlMinifier>, ToolError> {
        self.html_minifier.resolve()
    }

    pub fn style_optimizer(&self) -> Result<Arc<dyn StyleOptimizer>, ToolError> {
        self.style_optimizer.resolve()
    }

    pub fn template_renderer(&self) -> Result<Arc<dyn TemplateRenderer>, ToolError> {
        self.template_renderer.resolve()
    }

    pub fn plugin(&self, kind: PluginKind) -> Result<Arc<dyn PluginConstructor>, ToolError> {
        match self.plugin_constructors.get(&kind) {
            Some(handle) => handle.resolve(),
            None => Err(ToolError::Unavailable {
                tool: kind.constructor_name().to_string(),
            }),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        ToolRegistry::builder().build()
    }
}

/// Builder for [`ToolRegistry`], overriding individual tool factories.
pub struct ToolRegistryBuilder {
    html_minifier: LazyHandle<dyn HtmlMinifier>,
    style_optimizer: LazyHandle<dyn StyleOptimizer>,
    template_renderer: LazyHandle<dyn TemplateRenderer>,
    plugin_constructors: HashMap<PluginKind, LazyHandle<dyn PluginConstructor>>,
}

impl ToolRegistryBuilder {
    fn new() -> Self {
        let mut plugin_constructors = HashMap::new();
        for kind in PluginKind::ALL {
            let constructor: Arc<dyn PluginConstructor> = Arc::new(NamedConstructor { kind });
            plugin_constructors.insert(kind, LazyHandle::provided(constructor));
        }

        Self {
            html_minifier: LazyHandle::unavailable(HTML_MINIFIER_TOOL),
            style_optimizer: LazyHandle::unavailable(STYLE_OPTIMIZER_TOOL),
            template_renderer: LazyHandle::unavailable(TEMPLATE_RENDERER_TOOL),
            plugin_constructors,
        }
    }

    /// Registers the HTML minifier factory, run on first use.
    pub fn html_minifier<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn HtmlMinifier>, ToolError> + Send + Sync + 'static,
    {
        self.html_minifier = LazyHandle::new(factory);
        self
    }

    /// Registers the style optimizer factory, run on first use.
    pub fn style_optimizer<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn StyleOptimizer>, ToolError> + Send + Sync + 'static,
    {
        self.style_optimizer = LazyHandle::new(factory);
        self
    }

    /// Registers the template renderer factory, run on first use.
    pub fn template_renderer<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn TemplateRenderer>, ToolError> + Send + Sync + 'static,
    {
        self.template_renderer = LazyHandle::new(factory);
        self
    }

    /// Replaces the constructor factory for one plugin kind.
    pub fn plugin_constructor<F>(mut self, kind: PluginKind, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn PluginConstructor>, ToolError> + Send + Sync + 'static,
    {
        self.plugin_constructors.insert(kind, LazyHandle::new(factory));
        self
    }

    pub fn build(self) -> ToolRegistry {
        ToolRegistry {
            html_minifier: self.html_minifier,
            style_optimizer: self.style_optimizer,
            template_renderer: self.template_renderer,
            plugin_constructors: self.plugin_constructors,
        }
    }
}

impl Default for ToolRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
