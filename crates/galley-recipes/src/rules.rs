//! Rule descriptors for common asset handling.
//!
//! Every factory here is constant-shaped: no required input, one descriptor
//! (or a fixed list) out. Callers wrap the result via
//! [`galley_config::Fragment::from_rules`] and merge it where they want it.

use serde_json::json;

use galley_config::{FilePattern, LoaderRef, Rule, RuleUse};

/// Where emitted images land inside the output directory.
pub const IMAGE_OUTPUT_PATH: &str = "components/assets/images/";

/// Imports `.html` files as raw strings.
pub fn html_as_string() -> Rule {
    Rule {
        test: FilePattern::new(r"\.html$"),
        use_: Some(RuleUse::Pipeline(vec!["raw-loader".into()])),
        ..Rule::default()
    }
}

/// Imports `.css` files as processed strings.
pub fn css_as_string() -> Rule {
    Rule {
        test: FilePattern::new(r"\.css$"),
        use_: Some(RuleUse::Pipeline(vec![
            "to-string-loader".into(),
            "css-loader".into(),
        ])),
        ..Rule::default()
    }
}

/// Emits matched images under [`IMAGE_OUTPUT_PATH`], keeping the original
/// file name and extension.
pub fn image() -> Rule {
    Rule {
        test: FilePattern::case_insensitive(r"\.(jpe?g|png|gif|svg)$"),
        use_: Some(RuleUse::Pipeline(vec![LoaderRef::with_options(
            "file-loader",
            json!({ "name": "[name].[ext]", "outputPath": IMAGE_OUTPUT_PATH }),
        )])),
        ..Rule::default()
    }
}

/// The base rule set, in order: HTML, CSS, images.
///
/// Order is part of the contract (later rules do not override earlier
/// matches) and the three patterns claim disjoint extension sets.
pub fn common() -> Vec<Rule> {
    vec![html_as_string(), css_as_string(), image()]
}

/// The style-injection rule variants.
///
/// Selection is by field name so no variant can silently stand in for
/// another. `non_lazy_styles` and `lazy_styles` are meant to be used as a
/// pair; `styles` and `all_as_lazy_styles` each cover every stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleInjectionVariants {
    /// Inject every stylesheet eagerly.
    pub styles: Rule,
    /// Eager injection for everything but `*.lazy.css`.
    pub non_lazy_styles: Rule,
    /// Lazy injection for `*.lazy.css` only.
    pub lazy_styles: Rule,
    /// Lazy injection for every stylesheet.
    pub all_as_lazy_styles: Rule,
}

pub fn style_injection_variants() -> StyleInjectionVariants {
    let eager = || {
        RuleUse::Pipeline(vec!["style-loader".into(), "css-loader".into()])
    };
    let lazy = || {
        RuleUse::Pipeline(vec![
            LoaderRef::with_options("style-loader", json!({ "injectType": "lazyStyleTag" })),
            "css-loader".into(),
        ])
    };

    StyleInjectionVariants {
        styles: Rule {
            test: FilePattern::new(r"\.css$"),
            use_: Some(eager()),
            ..Rule::default()
        },
        non_lazy_styles: Rule {
            test: FilePattern::case_insensitive(r"\.css$"),
            exclude: Some(FilePattern::case_insensitive(r"\.lazy\.css$")),
            use_: Some(eager()),
            ..Rule::default()
        },
        lazy_styles: Rule {
            test: FilePattern::case_insensitive(r"\.lazy\.css$"),
            use_: Some(lazy()),
            ..Rule::default()
        },
        all_as_lazy_styles: Rule {
            test: FilePattern::new(r"\.css$"),
            use_: Some(lazy()),
            ..Rule::default()
        },
    }
}
