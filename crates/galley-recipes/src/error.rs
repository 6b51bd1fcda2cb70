//! Error types for recipe and plugin factories.

use thiserror::Error;

use crate::tools::ToolError;

pub type Result<T> = std::result::Result<T, RecipeError>;

#[derive(Debug, Error)]
pub enum RecipeError {
    /// A copy-pattern name outside the recognized set.
    #[error("unknown copy pattern selector: {0}")]
    InvalidSelector(String),

    /// A tool failed to resolve or run; carried through unmodified.
    #[error("tool error: {0}")]
    Tool(#[from] ToolError),

    /// Options failed to encode for the host schema.
    #[error("failed to encode options: {0}")]
    EncodeOptions(#[from] serde_json::Error),
}
