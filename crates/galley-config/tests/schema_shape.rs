//! Tests that fragments serialize with the host bundler's exact field names.

use galley_config::{
    ExperimentOptions, FilePattern, Fragment, LibraryOptions, LoaderRef, Mode, ModuleOptions,
    OptimizationOptions, OutputOptions, PluginInstance, Rule, RuleUse,
};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn full_fragment_uses_host_field_names() {
    let fragment = Fragment {
        mode: Some(Mode::Production),
        devtool: Some("source-map".into()),
        output: Some(OutputOptions {
            path: Some(PathBuf::from("/app/dist")),
            filename: Some("bundle.js".into()),
            library: Some(LibraryOptions {
                kind: "module".into(),
            }),
        }),
        module: Some(ModuleOptions {
            rules: vec![Rule {
                test: FilePattern::new(r"\.tsx?$"),
                use_: Some(RuleUse::Single(LoaderRef::Name("ts-loader".into()))),
                exclude: Some(FilePattern::new("node_modules")),
                ..Rule::default()
            }],
        }),
        plugins: vec![PluginInstance::new(
            "CleanWebpackPlugin",
            serde_json::Value::Null,
        )],
        optimization: Some(OptimizationOptions {
            minimizer: vec![PluginInstance::new(
                "TerserPlugin",
                json!({ "terserOptions": { "compress": { "drop_console": true } } }),
            )],
        }),
        experiments: Some(ExperimentOptions {
            output_module: Some(true),
        }),
    };

    let value = fragment.to_value().expect("to value");
    assert_eq!(
        value,
        json!({
            "mode": "production",
            "devtool": "source-map",
            "output": {
                "path": "/app/dist",
                "filename": "bundle.js",
                "library": { "type": "module" }
            },
            "module": {
                "rules": [
                    { "test": r"\.tsx?$", "use": "ts-loader", "exclude": "node_modules" }
                ]
            },
            "plugins": [
                { "name": "CleanWebpackPlugin" }
            ],
            "optimization": {
                "minimizer": [
                    {
                        "name": "TerserPlugin",
                        "options": { "terserOptions": { "compress": { "drop_console": true } } }
                    }
                ]
            },
            "experiments": { "outputModule": true }
        })
    );
}

#[test]
fn unset_sections_are_omitted_entirely() {
    let fragment = Fragment {
        mode: Some(Mode::None),
        ..Fragment::default()
    };

    let value = fragment.to_value().expect("to value");
    assert_eq!(value, json!({ "mode": "none" }));
}

#[test]
fn use_spellings_round_trip() {
    let shapes = [
        json!({ "test": r"\.js$", "use": "babel-loader" }),
        json!({ "test": r"\.css$", "use": ["style-loader", "css-loader"] }),
        json!({
            "test": r"\.lazy\.css$",
            "use": [
                { "loader": "style-loader", "options": { "injectType": "lazyStyleTag" } },
                "css-loader"
            ]
        }),
    ];

    for shape in shapes {
        let rule: Rule = serde_json::from_value(shape.clone()).expect("deserialize");
        assert_eq!(serde_json::to_value(&rule).expect("serialize"), shape);
    }
}

#[test]
fn library_type_keyword_survives_round_trip() {
    let value = json!({ "output": { "library": { "type": "module" } } });
    let fragment = Fragment::from_value(value.clone()).expect("fragment");
    assert_eq!(
        fragment.output.as_ref().unwrap().library.as_ref().unwrap().kind,
        "module"
    );
    assert_eq!(fragment.to_value().expect("to value"), value);
}
