//! Property-based tests for fragment merging using proptest.
//!
//! Merging is the contract the whole library leans on, so the override and
//! concatenation semantics are checked across generated fragments rather
//! than a handful of fixtures.
//!
//! Run with: cargo test --features proptest --package galley-config property_tests

#![cfg(feature = "proptest")]

use std::path::PathBuf;

use proptest::prelude::*;
use serde_json::json;

use crate::merge::merge;
use crate::mode::Mode;
use crate::schema::{
    ExperimentOptions, FilePattern, Fragment, LoaderRef, ModuleOptions, OptimizationOptions,
    OutputOptions, PluginInstance, Rule, RuleUse,
};

fn loader_ref_strategy() -> impl Strategy<Value = LoaderRef> {
    prop_oneof![
        "[a-z]{2,8}-loader".prop_map(LoaderRef::Name),
        ("[a-z]{2,8}-loader", prop::bool::ANY)
            .prop_map(|(name, flag)| LoaderRef::with_options(name, json!({ "enabled": flag }))),
    ]
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    ("[a-z]{1,5}", prop::collection::vec(loader_ref_strategy(), 1..=3)).prop_map(
        |(ext, pipeline)| Rule {
            test: FilePattern::new(format!(r"\.{ext}$")),
            use_: Some(RuleUse::Pipeline(pipeline)),
            ..Rule::default()
        },
    )
}

fn plugin_strategy() -> impl Strategy<Value = PluginInstance> {
    "[A-Z][a-z]{2,8}Plugin".prop_map(|name| PluginInstance::new(name, serde_json::Value::Null))
}

fn output_strategy() -> impl Strategy<Value = OutputOptions> {
    (
        prop::option::of("[a-z]{1,6}".prop_map(|dir| PathBuf::from("/build").join(dir))),
        prop::option::of(Just("bundle.js".to_string())),
    )
        .prop_map(|(path, filename)| OutputOptions {
            path,
            filename,
            library: None,
        })
}

fn fragment_strategy() -> impl Strategy<Value = Fragment> {
    (
        prop::option::of(prop_oneof![
            Just(Mode::Production),
            Just(Mode::Development),
            Just(Mode::None),
        ]),
        prop::option::of(Just("source-map".to_string())),
        prop::option::of(output_strategy()),
        prop::option::of(
            prop::collection::vec(rule_strategy(), 0..=3).prop_map(|rules| ModuleOptions { rules }),
        ),
        prop::collection::vec(plugin_strategy(), 0..=3),
        prop::option::of(
            prop::collection::vec(plugin_strategy(), 0..=2)
                .prop_map(|minimizer| OptimizationOptions { minimizer }),
        ),
        prop::option::of(prop::bool::ANY.prop_map(|on| ExperimentOptions {
            output_module: Some(on),
        })),
    )
        .prop_map(
            |(mode, devtool, output, module, plugins, optimization, experiments)| Fragment {
                mode,
                devtool,
                output,
                module,
                plugins,
                optimization,
                experiments,
            },
        )
}

fn rules_of(fragment: &Fragment) -> &[Rule] {
    fragment
        .module
        .as_ref()
        .map(|module| module.rules.as_slice())
        .unwrap_or(&[])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For any A, B: merged rules are A's rules followed by B's.
    #[test]
    fn rules_concatenate_in_supply_order(a in fragment_strategy(), b in fragment_strategy()) {
        let expected: Vec<Rule> = rules_of(&a).iter().chain(rules_of(&b)).cloned().collect();
        let merged = merge([a, b]);
        prop_assert_eq!(rules_of(&merged), expected.as_slice());
    }

    /// For any A, B: merged plugins are A's plugins followed by B's.
    #[test]
    fn plugins_concatenate_in_supply_order(a in fragment_strategy(), b in fragment_strategy()) {
        let expected: Vec<PluginInstance> =
            a.plugins.iter().chain(b.plugins.iter()).cloned().collect();
        let merged = merge([a, b]);
        prop_assert_eq!(merged.plugins, expected);
    }

    /// merge([A, merge([B, C])]) == merge([A, B, C]).
    #[test]
    fn merge_is_associative(
        a in fragment_strategy(),
        b in fragment_strategy(),
        c in fragment_strategy(),
    ) {
        let nested = merge([a.clone(), merge([b.clone(), c.clone()])]);
        let flat = merge([a, b, c]);
        prop_assert_eq!(nested, flat);
    }

    /// The default fragment is the merge identity on both sides.
    #[test]
    fn default_fragment_is_merge_identity(a in fragment_strategy()) {
        prop_assert_eq!(merge([Fragment::default(), a.clone()]), a.clone());
        prop_assert_eq!(merge([a.clone(), Fragment::default()]), a);
    }
}
