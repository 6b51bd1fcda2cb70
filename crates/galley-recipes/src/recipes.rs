//! Configuration recipes: full or partial fragments for common scenarios.
//!
//! [`common`] is the base most setups start from; everything else is a
//! narrowly-scoped fragment meant to be merged on top of it.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use galley_config::{
    ExperimentOptions, FilePattern, Fragment, LibraryOptions, LoaderRef, MODE_ENV_VAR, Mode,
    ModuleOptions, OptimizationOptions, OutputOptions, Rule, RuleUse, resolve_default_mode,
};

use crate::error::Result;
use crate::rules;
use crate::tools::{PluginKind, ToolRegistry};

/// Options for [`common`].
#[derive(Debug, Clone, Default)]
pub struct CommonOptions {
    /// Overrides the environment-resolved mode.
    pub mode: Option<Mode>,
}

/// The base configuration: mode, output, common rules, mode-driven extras.
///
/// In development the fragment carries `devtool: "source-map"` and no
/// plugins; in production it instead carries the clean-output plugin so stale
/// bundles never survive a build. Output is [`common_output`], fixed on
/// purpose; merge an output fragment on top to change it.
pub fn common(tools: &ToolRegistry, root: &Path, options: CommonOptions) -> Result<Fragment> {
    let mode = options.mode.unwrap_or_else(default_mode);

    let devtool = mode.is_development().then(|| "source-map".to_string());

    let mut plugins = Vec::new();
    if mode.is_production() {
        // newer hosts can express this as output.clean instead
        let clean = tools
            .plugin(PluginKind::CleanOutput)?
            .construct(Value::Null)?;
        plugins.push(clean);
    }

    Ok(Fragment {
        mode: Some(mode),
        devtool,
        output: Some(common_output(root)),
        module: Some(ModuleOptions {
            rules: rules::common(),
        }),
        plugins,
        ..Fragment::default()
    })
}

/// The fixed output section shared by the base recipe:
/// `<root>/dist/bundle.js`.
pub fn common_output(root: &Path) -> OutputOptions {
    OutputOptions {
        path: Some(root.join("dist")),
        filename: Some("bundle.js".to_string()),
        library: None,
    }
}

/// The mode recipes assume when the caller passes none: `NODE_ENV` resolved
/// strictly (no shorthands), falling back to production.
pub fn default_mode() -> Mode {
    let raw = env::var(MODE_ENV_VAR).ok();
    resolve_default_mode(raw.as_deref())
}

/// TypeScript transpilation via `ts-loader`.
pub fn ts_loader() -> Rule {
    Rule {
        test: FilePattern::new(r"\.tsx?$"),
        use_: Some(RuleUse::Single("ts-loader".into())),
        exclude: Some(FilePattern::new("node_modules")),
        ..Rule::default()
    }
}

/// JavaScript downleveling via `babel-loader`.
pub fn babel_loader() -> Rule {
    Rule {
        test: FilePattern::new(r"\.(js)$"),
        exclude: Some(FilePattern::new("node_modules")),
        use_: Some(RuleUse::Single("babel-loader".into())),
        ..Rule::default()
    }
}

/// Babel then TypeScript in one pipeline, for mixed `.js`/`.ts` trees.
///
/// `babel_options` goes to `babel-loader` untouched; `ts-loader` runs
/// transpile-only since Babel owns the downleveling.
pub fn ts_loader_with_babel(babel_options: Value) -> Rule {
    Rule {
        test: FilePattern::new(r"\.(t|j)sx?$"),
        exclude: Some(FilePattern::new("node_modules")),
        use_: Some(RuleUse::Pipeline(vec![
            LoaderRef::with_options("babel-loader", babel_options),
            LoaderRef::with_options("ts-loader", json!({ "transpileOnly": true })),
        ])),
        ..Rule::default()
    }
}

/// Console-method groups for [`drop_console_optimization`].
pub mod console_groups {
    /// Debug chatter only; anything else should stay visible or be handled
    /// in the app.
    pub const DEBUG: &[&str] = &["console.debug"];

    /// Everything trivial. Third-party code may emit these, so stripping at
    /// bundle time beats policing the sources.
    pub const TRIVIAL: &[&str] = &["console.trace", "console.log", "console.info"];

    /// Trivial plus warnings; only errors survive.
    pub const NON_FATAL: &[&str] = &[
        "console.trace",
        "console.log",
        "console.info",
        "console.warn",
    ];
}

/// Options object for the terser minimizer entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimizerOptions {
    #[serde(rename = "terserOptions")]
    pub terser_options: TerserOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerserOptions {
    pub compress: CompressOptions,
}

/// Console-stripping settings. At most one of the two fields is set; the
/// blanket and targeted strategies never combine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompressOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_console: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pure_funcs: Option<Vec<String>>,
}

/// Configures the minimizer to strip console calls.
///
/// A non-empty `methods` list strips exactly those call expressions
/// (`pure_funcs`); an empty list strips every console call (`drop_console`).
/// The [`console_groups`] constants are ready-made method lists.
pub fn drop_console_optimization(tools: &ToolRegistry, methods: &[&str]) -> Result<Fragment> {
    let compress = if methods.is_empty() {
        CompressOptions {
            drop_console: Some(true),
            ..CompressOptions::default()
        }
    } else {
        CompressOptions {
            pure_funcs: Some(methods.iter().map(|m| (*m).to_string()).collect()),
            ..CompressOptions::default()
        }
    };

    let options = MinimizerOptions {
        terser_options: TerserOptions { compress },
    };
    let minimizer = tools
        .plugin(PluginKind::Terser)?
        .construct(serde_json::to_value(&options)?)?;

    Ok(Fragment {
        optimization: Some(OptimizationOptions {
            minimizer: vec![minimizer],
        }),
        ..Fragment::default()
    })
}

/// Emit the bundle as a native ES module.
pub fn es_module_output() -> Fragment {
    Fragment {
        experiments: Some(ExperimentOptions {
            output_module: Some(true),
        }),
        output: Some(OutputOptions {
            library: Some(LibraryOptions {
                kind: "module".to_string(),
            }),
            ..OutputOptions::default()
        }),
        ..Fragment::default()
    }
}
