//! Error types for indicator configuration.

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or validating an indicator
/// configuration.
///
/// Out-of-range numbers such as an opacity above one are clamped when the
/// indicator is built; only values that cannot be clamped into meaning are
/// rejected here.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to access indicator config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax error, unknown key, or a value of the wrong type
    /// (including unrecognized colors and variants).
    #[error("Invalid indicator config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize indicator config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// An indicator needs at least one dot.
    #[error("Invalid dot count {0}: an indicator needs at least one dot")]
    InvalidCount(usize),

    /// A numeric field is NaN or infinite.
    #[error("Invalid value for '{field}': {value} is not a finite number")]
    NonFinite { field: &'static str, value: f32 },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
