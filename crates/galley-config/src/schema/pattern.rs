use std::fmt;

use serde::{Deserialize, Serialize};

/// A file-matching pattern, carried as regex source text.
///
/// The host bundler compiles the pattern itself; the pattern travels through
/// serialization as a plain string. [`FilePattern::is_match`] exists so rules
/// can be exercised without a bundler run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePattern(String);

impl FilePattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// Like [`FilePattern::new`], with the case-insensitivity flag prepended.
    pub fn case_insensitive(source: impl Into<String>) -> Self {
        Self(format!("(?i){}", source.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `path` matches this pattern.
    ///
    /// A pattern that fails to compile matches nothing; the host bundler
    /// reports its own error for that case.
    pub fn is_match(&self, path: &str) -> bool {
        match regex::Regex::new(&self.0) {
            Ok(re) => re.is_match(path),
            Err(error) => {
                tracing::debug!(pattern = %self.0, %error, "pattern failed to compile");
                false
            }
        }
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilePattern {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for FilePattern {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}
