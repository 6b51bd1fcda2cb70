pub mod compat;
pub mod error;
pub mod merge;
pub mod mode;
pub mod schema;

// Re-export main types
pub use error::*;
pub use schema::*;

pub use compat::{modernize_config, modernize_rule};
pub use merge::merge;
pub use mode::{MODE_ENV_VAR, Mode, current_mode, resolve_default_mode, resolve_mode};

#[cfg(test)]
mod tests;
