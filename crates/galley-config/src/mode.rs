//! Build-mode resolution.
//!
//! The mode is derived from the `NODE_ENV` environment variable on demand and
//! never stored. Two resolvers exist with intentionally different behavior:
//! [`resolve_mode`] accepts the `dev`/`prod` shorthands and falls back to
//! development, while [`resolve_default_mode`] accepts only the canonical
//! spellings and falls back to production. Keep them separate: recipes
//! default through the strict one, interactive helpers through the lenient
//! one.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable consulted when resolving the current mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// Build mode understood by the host bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Optimized output.
    Production,
    /// Readable output, fast rebuilds.
    #[default]
    Development,
    /// Opt out of mode-driven defaults entirely.
    None,
}

impl Mode {
    /// The exact string the host schema expects.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Production => "production",
            Mode::Development => "development",
            Mode::None => "none",
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    fn parse(raw: &str) -> Option<Mode> {
        match raw {
            "production" => Some(Mode::Production),
            "development" => Some(Mode::Development),
            "none" => Some(Mode::None),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a raw mode value, accepting the `dev`/`prod` shorthands.
///
/// Unset input resolves to [`Mode::Development`]; a value that is neither a
/// shorthand nor a canonical mode does the same, with a warning. Never fails.
pub fn resolve_mode(raw: Option<&str>) -> Mode {
    let Some(raw) = raw else {
        tracing::debug!("no build mode supplied, using development");
        return Mode::Development;
    };

    let canonical = match raw {
        "dev" => "development",
        "prod" => "production",
        other => other,
    };

    match Mode::parse(canonical) {
        Some(mode) => mode,
        None => {
            tracing::warn!(value = raw, "unrecognized build mode, using development");
            Mode::Development
        }
    }
}

/// Resolves a raw mode value for recipe defaults.
///
/// Only the canonical spellings are accepted here; `dev` and `prod` count as
/// unrecognized. Unset or unrecognized input resolves to [`Mode::Production`].
/// Never fails.
pub fn resolve_default_mode(raw: Option<&str>) -> Mode {
    let Some(raw) = raw else {
        tracing::debug!("no build mode supplied, recipes default to production");
        return Mode::Production;
    };

    match Mode::parse(raw) {
        Some(mode) => mode,
        None => {
            tracing::warn!(value = raw, "unrecognized build mode, recipes default to production");
            Mode::Production
        }
    }
}

/// Resolves the current mode from [`MODE_ENV_VAR`] via [`resolve_mode`].
pub fn current_mode() -> Mode {
    let raw = env::var(MODE_ENV_VAR).ok();
    let mode = resolve_mode(raw.as_deref());
    tracing::debug!(%mode, "resolved current build mode");
    mode
}
