//! Tests for legacy rule migration (`loader`/`loaders` to `use`).

use galley_config::{
    FilePattern, Fragment, LoaderRef, ModuleOptions, Rule, RuleUse, modernize_config,
    modernize_rule,
};
use serde_json::json;

#[test]
fn loaders_list_moves_to_use() {
    let mut rule = Rule {
        test: FilePattern::new(r"\.css$"),
        loaders: Some(vec!["to-string-loader".into(), "css-loader".into()]),
        ..Rule::default()
    };

    modernize_rule(&mut rule);

    assert_eq!(
        rule.use_,
        Some(RuleUse::Pipeline(vec![
            "to-string-loader".into(),
            "css-loader".into()
        ]))
    );
    let value = serde_json::to_value(&rule).expect("serialize");
    assert!(value.get("loaders").is_none());
    assert_eq!(value["use"], json!(["to-string-loader", "css-loader"]));
}

#[test]
fn singular_loader_wraps_into_use_object() {
    let mut rule = Rule {
        test: FilePattern::new(r"\.ts$"),
        loader: Some("ts-loader".into()),
        ..Rule::default()
    };

    modernize_rule(&mut rule);

    let value = serde_json::to_value(&rule).expect("serialize");
    assert!(value.get("loader").is_none());
    assert_eq!(value["use"], json!({ "loader": "ts-loader" }));
}

#[test]
fn singular_loader_takes_rule_level_options_along() {
    let mut rule = Rule {
        test: FilePattern::new(r"\.(jpe?g|png)$"),
        loader: Some("file-loader".into()),
        options: Some(json!({ "name": "[name].[ext]" })),
        ..Rule::default()
    };

    modernize_rule(&mut rule);

    assert!(rule.loader.is_none());
    assert!(rule.options.is_none());
    let value = serde_json::to_value(&rule).expect("serialize");
    assert_eq!(
        value["use"],
        json!({ "loader": "file-loader", "options": { "name": "[name].[ext]" } })
    );
    assert!(value.get("options").is_none());
}

#[test]
fn loaders_wins_over_stray_loader() {
    let mut rule = Rule {
        test: FilePattern::new(r"\.html$"),
        loader: Some("html-loader".into()),
        loaders: Some(vec!["raw-loader".into()]),
        ..Rule::default()
    };

    modernize_rule(&mut rule);

    assert_eq!(rule.use_, Some(RuleUse::Pipeline(vec!["raw-loader".into()])));
    assert!(rule.loader.is_none());
    assert!(rule.loaders.is_none());
}

#[test]
fn rule_less_rule_is_a_no_op() {
    let mut rule = Rule {
        test: FilePattern::new(r"\.html$"),
        ..Rule::default()
    };
    let before = rule.clone();

    modernize_rule(&mut rule);
    assert_eq!(rule, before);
}

#[test]
fn modernize_config_migrates_every_rule() {
    let mut config = Fragment {
        module: Some(ModuleOptions {
            rules: vec![
                Rule {
                    test: FilePattern::new(r"\.css$"),
                    loaders: Some(vec!["style-loader".into(), "css-loader".into()]),
                    ..Rule::default()
                },
                Rule {
                    test: FilePattern::new(r"\.ts$"),
                    loader: Some("ts-loader".into()),
                    ..Rule::default()
                },
                Rule {
                    test: FilePattern::new(r"\.html$"),
                    use_: Some(RuleUse::Single(LoaderRef::Name("raw-loader".into()))),
                    ..Rule::default()
                },
            ],
        }),
        ..Fragment::default()
    };

    modernize_config(&mut config);

    let rules = config.module.expect("module").rules;
    assert!(rules.iter().all(|r| r.loader.is_none() && r.loaders.is_none()));
    assert!(rules.iter().all(|r| r.use_.is_some()));
}

#[test]
fn modernize_config_without_module_is_a_no_op() {
    let mut config = Fragment {
        devtool: Some("source-map".into()),
        ..Fragment::default()
    };
    let before = config.clone();

    modernize_config(&mut config);
    assert_eq!(config, before);
}

#[test]
fn legacy_fragment_from_value_migrates_cleanly() {
    let mut config = Fragment::from_value(json!({
        "module": {
            "rules": [
                { "test": r"\.ts$", "loader": "ts-loader", "options": { "transpileOnly": true } }
            ]
        }
    }))
    .expect("legacy fragment");

    modernize_config(&mut config);

    let value = config.to_value().expect("to value");
    assert_eq!(
        value["module"]["rules"][0],
        json!({
            "test": r"\.ts$",
            "use": { "loader": "ts-loader", "options": { "transpileOnly": true } }
        })
    );
}
