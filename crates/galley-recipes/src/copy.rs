//! Copy patterns for staging standalone files into the build output.
//!
//! A [`CopyPattern`] is data: source, optional destination, optional content
//! transform. Transforms name a tool rather than holding one; the registry
//! resolves it only when [`ContentTransform::apply`] actually runs.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{RecipeError, Result};
use crate::tools::{ToolError, ToolRegistry};

/// The recognized copy-pattern names.
///
/// Parsing is strict: a name outside the four is an error, never a silent
/// empty pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySelector {
    IndexHtml,
    Css,
    Img,
    Changelog,
}

impl CopySelector {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "indexHTML" => Ok(CopySelector::IndexHtml),
            "css" => Ok(CopySelector::Css),
            "img" => Ok(CopySelector::Img),
            "CHANGELOG" => Ok(CopySelector::Changelog),
            other => Err(RecipeError::InvalidSelector(other.to_string())),
        }
    }

    /// The selector's external spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            CopySelector::IndexHtml => "indexHTML",
            CopySelector::Css => "css",
            CopySelector::Img => "img",
            CopySelector::Changelog => "CHANGELOG",
        }
    }

    /// The copy pattern this selector stands for, anchored at `root`.
    ///
    /// `indexHTML` stays relative; the host resolves it against its own
    /// context directory.
    pub fn pattern(self, root: &Path) -> CopyPattern {
        match self {
            CopySelector::IndexHtml => CopyPattern {
                from: PathBuf::from("index.html"),
                to: None,
                transform: Some(ContentTransform::MinifyHtml),
            },
            CopySelector::Css => CopyPattern {
                from: root.join("css"),
                to: Some("css".to_string()),
                transform: Some(ContentTransform::MinifyCss),
            },
            CopySelector::Img => CopyPattern {
                from: root.join("img"),
                to: Some("img".to_string()),
                transform: None,
            },
            CopySelector::Changelog => CopyPattern {
                from: root.join("CHANGELOG.md"),
                to: None,
                transform: None,
            },
        }
    }
}

/// Resolves `names` into their copy patterns, preserving order.
///
/// Fails on the first unrecognized name.
pub fn copy_patterns(names: &[&str], root: &Path) -> Result<Vec<CopyPattern>> {
    names
        .iter()
        .map(|name| CopySelector::parse(name).map(|selector| selector.pattern(root)))
        .collect()
}

/// A file or directory to stage into the build output.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: Option<String>,
    pub transform: Option<ContentTransform>,
}

impl CopyPattern {
    /// Wraps this pattern so the file is rendered as a template against
    /// `data` before any existing transform runs.
    pub fn templated(self, data: Value) -> Self {
        CopyPattern {
            transform: Some(ContentTransform::Template {
                data,
                then: self.transform.map(Box::new),
            }),
            ..self
        }
    }
}

/// Content rewriting applied while copying.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentTransform {
    /// Minify via the registry's HTML minifier.
    MinifyHtml,
    /// Minify via the registry's style optimizer.
    MinifyCss,
    /// Render via the registry's template renderer, then apply `then` to the
    /// rendered output.
    Template {
        data: Value,
        then: Option<Box<ContentTransform>>,
    },
}

impl ContentTransform {
    /// Runs the transform over `content`, resolving tools on demand.
    ///
    /// Tool failures come back unmodified.
    pub fn apply(
        &self,
        tools: &ToolRegistry,
        content: &str,
    ) -> std::result::Result<String, ToolError> {
        match self {
            ContentTransform::MinifyHtml => {
                tracing::debug!("minifying copied HTML");
                tools.html_minifier()?.minify(content)
            }
            ContentTransform::MinifyCss => {
                tracing::debug!("minifying copied CSS");
                Ok(tools.style_optimizer()?.minify(content)?.css)
            }
            ContentTransform::Template { data, then } => {
                tracing::debug!("rendering copied template");
                let rendered = tools.template_renderer()?.render(content, data)?;
                match then {
                    Some(next) => next.apply(tools, &rendered),
                    None => Ok(rendered),
                }
            }
        }
    }
}
