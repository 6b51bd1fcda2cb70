//! Deep merge for configuration fragments.
//!
//! The layering contract callers rely on: scalar and mapping fields override
//! left to right, while the three sequence fields (`module.rules`, `plugins`,
//! `optimization.minimizer`) concatenate in supply order. Layering a base
//! recipe, a loader recipe and an optimization recipe yields the union of
//! their rules, plugins and minimizers, not whichever fragment came last.

use crate::schema::{
    ExperimentOptions, Fragment, ModuleOptions, OptimizationOptions, OutputOptions,
};

/// Deep-merges `fragments` left to right into one configuration.
///
/// Inputs are consumed by value; the result is a fresh fragment and no input
/// is observable half-merged. `merge([])` is `Fragment::default()`, which is
/// also the merge identity, so `merge([a, merge([b, c])])` equals
/// `merge([a, b, c])`.
pub fn merge<I>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = Fragment>,
{
    fragments.into_iter().fold(Fragment::default(), merge_pair)
}

fn merge_pair(mut base: Fragment, next: Fragment) -> Fragment {
    if next.mode.is_some() {
        base.mode = next.mode;
    }
    if next.devtool.is_some() {
        base.devtool = next.devtool;
    }
    base.output = merge_output(base.output, next.output);
    base.module = merge_module(base.module, next.module);
    base.plugins.extend(next.plugins);
    base.optimization = merge_optimization(base.optimization, next.optimization);
    base.experiments = merge_experiments(base.experiments, next.experiments);
    base
}

fn merge_output(
    base: Option<OutputOptions>,
    next: Option<OutputOptions>,
) -> Option<OutputOptions> {
    match (base, next) {
        (Some(mut base), Some(next)) => {
            if next.path.is_some() {
                base.path = next.path;
            }
            if next.filename.is_some() {
                base.filename = next.filename;
            }
            if next.library.is_some() {
                base.library = next.library;
            }
            Some(base)
        }
        (base, None) => base,
        (None, next) => next,
    }
}

fn merge_module(
    base: Option<ModuleOptions>,
    next: Option<ModuleOptions>,
) -> Option<ModuleOptions> {
    match (base, next) {
        (Some(mut base), Some(next)) => {
            base.rules.extend(next.rules);
            Some(base)
        }
        (base, None) => base,
        (None, next) => next,
    }
}

fn merge_optimization(
    base: Option<OptimizationOptions>,
    next: Option<OptimizationOptions>,
) -> Option<OptimizationOptions> {
    match (base, next) {
        (Some(mut base), Some(next)) => {
            base.minimizer.extend(next.minimizer);
            Some(base)
        }
        (base, None) => base,
        (None, next) => next,
    }
}

fn merge_experiments(
    base: Option<ExperimentOptions>,
    next: Option<ExperimentOptions>,
) -> Option<ExperimentOptions> {
    match (base, next) {
        (Some(mut base), Some(next)) => {
            if next.output_module.is_some() {
                base.output_module = next.output_module;
            }
            Some(base)
        }
        (base, None) => base,
        (None, next) => next,
    }
}
