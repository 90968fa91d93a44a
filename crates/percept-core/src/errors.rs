use std::fmt;

/// Configuration failure. Kept separate from `anyhow::Error` so the CLI can
/// map it to its own exit code instead of the generic fatal path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}
