//! Error types for configuration loading.

use std::fmt;
use std::path::PathBuf;

/// Represents errors that can occur while reading a YAML configuration.
///
/// # Examples
///
/// ```rust
/// use kitbag::config::{yaml, ConfigError};
///
/// let result: Result<u32, ConfigError> = yaml::decode(b"not: [a number");
/// assert!(matches!(result, Err(ConfigError::Decode(_))));
/// ```
#[derive(Debug)]
pub enum ConfigError {
    /// A configuration file could not be opened or read.
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// Reading from a caller-supplied reader failed.
    Read(std::io::Error),
    /// The bytes were not valid YAML for the requested type.
    Decode(serde_yaml::Error),
    /// The path of the running executable could not be determined.
    Executable(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(formatter, "failed to read {}: {source}", path.display())
            }
            Self::Read(source) => write!(formatter, "failed to read configuration: {source}"),
            Self::Decode(source) => write!(formatter, "invalid YAML configuration: {source}"),
            Self::Executable(source) => {
                write!(formatter, "cannot locate the running executable: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::Read(source) | Self::Executable(source) => {
                Some(source)
            }
            Self::Decode(source) => Some(source),
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Decode(error)
    }
}
