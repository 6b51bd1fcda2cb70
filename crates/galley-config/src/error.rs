//! Error types for fragment encoding and decoding.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid fragment value: {0}")]
    InvalidValue(String),
}
