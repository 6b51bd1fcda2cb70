use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::pattern::FilePattern;

/// A module-transformation rule in the host bundler's schema.
///
/// `loader`, `loaders` and the rule-level `options` are the pre-multi-loader
/// spellings, kept so older fragments deserialize; `compat::modernize_rule`
/// folds them into `use`. New rules set `use` directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Pattern deciding which files this rule applies to.
    pub test: FilePattern,

    /// Loader or loader pipeline applied to matched files.
    #[serde(rename = "use")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<RuleUse>,

    /// Pattern exempting files that `test` would otherwise match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,

    /// Legacy singular loader field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,

    /// Legacy loader list field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaders: Option<Vec<LoaderRef>>,

    /// Legacy rule-level options, paired with `loader`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// The `use` entry of a rule: one loader or an ordered pipeline.
///
/// Untagged so a bare string, a single object, and an array all round-trip
/// exactly as the host schema spells them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleUse {
    Single(LoaderRef),
    Pipeline(Vec<LoaderRef>),
}

/// One loader in a pipeline, by bare name or with an options object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoaderRef {
    Name(String),
    WithOptions {
        loader: String,
        #[serde(default, skip_serializing_if = "Value::is_null")]
        options: Value,
    },
}

impl LoaderRef {
    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        LoaderRef::WithOptions {
            loader: loader.into(),
            options,
        }
    }

    /// The loader's name, regardless of spelling.
    pub fn name(&self) -> &str {
        match self {
            LoaderRef::Name(name) => name,
            LoaderRef::WithOptions { loader, .. } => loader,
        }
    }
}

impl From<&str> for LoaderRef {
    fn from(name: &str) -> Self {
        LoaderRef::Name(name.to_string())
    }
}
