#![cfg_attr(docsrs, feature(doc_cfg))]

//! # galley-recipes
//!
//! Composable webpack configuration in Rust - rule, recipe, and plugin
//! catalogs that merge into a complete config.
//!
//! This crate builds on the `galley-config` fragment model: every catalog
//! entry returns plain data (a [`Rule`], a [`PluginInstance`], or a whole
//! [`Fragment`]), and [`merge`] folds any number of fragments into one.
//! Nothing here runs a bundler; hosts serialize the merged fragment and hand
//! it to whatever does.
//!
//! ## Quick Start
//!
//! ```
//! use std::path::Path;
//!
//! use galley_recipes::recipes::CommonOptions;
//! use galley_recipes::{Fragment, Mode, ToolRegistry, merge, plugins, recipes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tools = ToolRegistry::default();
//! let options = CommonOptions {
//!     mode: Some(Mode::Production),
//! };
//!
//! let config = merge([
//!     recipes::common(&tools, Path::new("/app"), options)?,
//!     Fragment::from_rules(vec![recipes::ts_loader()]),
//!     Fragment::from_plugins(vec![plugins::jquery(&tools)?]),
//!     recipes::es_module_output(),
//! ]);
//!
//! println!("{}", serde_json::to_string_pretty(&config.to_value()?)?);
//! # Ok(()) }
//! ```
//!
//! ## Tools
//!
//! Recipes that need an external tool (a minifier, a template renderer, a
//! plugin constructor) look it up in a [`ToolRegistry`] instead of holding
//! it directly. The default registry constructs plugins by name and reports
//! content tools as unavailable; hosts register factories for the tools they
//! actually ship:
//!
//! ```
//! use std::sync::Arc;
//!
//! use galley_recipes::{HtmlMinifier, ToolError, ToolRegistry};
//!
//! #[derive(Debug)]
//! struct Collapse;
//!
//! impl HtmlMinifier for Collapse {
//!     fn minify(&self, html: &str) -> Result<String, ToolError> {
//!         Ok(html.split_whitespace().collect::<Vec<_>>().join(" "))
//!     }
//! }
//!
//! let tools = ToolRegistry::builder()
//!     .html_minifier(|| Ok(Arc::new(Collapse) as Arc<dyn HtmlMinifier>))
//!     .build();
//!
//! let minifier = tools.html_minifier().unwrap();
//! assert_eq!(minifier.minify("a  \n  b").unwrap(), "a b");
//! ```

// Re-export the fragment model from the foundation crate
pub use galley_config::*;

pub mod copy;
pub mod error;
pub mod plugins;
pub mod recipes;
pub mod rules;
pub mod tools;

pub use copy::{ContentTransform, CopyPattern, CopySelector, copy_patterns};
pub use error::{RecipeError, Result};
pub use rules::StyleInjectionVariants;
pub use tools::{
    HtmlMinifier, LazyHandle, PluginConstructor, PluginKind, StyleOptimizer, StyleOutput,
    TemplateRenderer, ToolError, ToolRegistry, ToolRegistryBuilder,
};

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
#[cfg_attr(docsrs, doc(cfg(feature = "logging")))]
pub mod logging;
