//! Migration of pre-multi-loader rule shapes.
//!
//! Older fragments spell a rule's pipeline as `loaders: [...]` or
//! `loader: "name"` with a rule-level `options`. Current schema carries both
//! under `use`. Migration happens in place over `&mut`; run it before
//! merging when a fragment may predate the multi-loader schema.

use serde_json::Value;

use crate::schema::{Fragment, LoaderRef, Rule, RuleUse};

/// Folds a rule's legacy fields into `use`, in place.
///
/// `loaders` becomes a pipeline; failing that, `loader` becomes a single
/// loader object, taking a rule-level `options` with it. When both legacy
/// fields are present `loaders` wins and the stray `loader` is dropped, so a
/// migrated rule never carries a legacy spelling next to `use`. A rule with
/// neither field passes through untouched.
pub fn modernize_rule(rule: &mut Rule) {
    if let Some(loaders) = rule.loaders.take() {
        rule.use_ = Some(RuleUse::Pipeline(loaders));
        rule.loader = None;
    } else if let Some(loader) = rule.loader.take() {
        let options = rule.options.take().unwrap_or(Value::Null);
        rule.use_ = Some(RuleUse::Single(LoaderRef::WithOptions { loader, options }));
    }
}

/// Applies [`modernize_rule`] to every rule in `config.module.rules`.
///
/// A fragment without a `module` section is left untouched.
pub fn modernize_config(config: &mut Fragment) {
    if let Some(module) = config.module.as_mut() {
        for rule in &mut module.rules {
            modernize_rule(rule);
        }
    }
}
