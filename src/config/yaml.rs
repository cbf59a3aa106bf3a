//! Typed YAML configuration reader.
//!
//! Decodes YAML from bytes, readers, or files into any type implementing
//! [`serde::de::DeserializeOwned`]. [`config_file`] resolves the file relative
//! to the directory of the running executable, which keeps deployed binaries
//! independent of the working directory they are started from.
//!
//! # Examples
//!
//! ```rust
//! use kitbag::config::yaml;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, PartialEq)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let server: Server = yaml::read("host: localhost\nport: 8080\n".as_bytes()).unwrap();
//! assert_eq!(server, Server { host: "localhost".to_string(), port: 8080 });
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use super::ConfigError;

/// Decodes a YAML document into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::Decode`] if `bytes` is not valid YAML for `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ConfigError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

/// Reads `reader` to the end and decodes the bytes into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if reading fails and
/// [`ConfigError::Decode`] if the content is not valid YAML for `T`.
pub fn read<T, R>(mut reader: R) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(ConfigError::Read)?;
    decode(&bytes)
}

/// Opens the file at `path` and decodes its content into `T`.
///
/// The file is closed before this function returns, on success and on
/// failure alike.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be opened or read and
/// [`ConfigError::Decode`] if the content is not valid YAML for `T`.
///
/// # Examples
///
/// ```rust
/// use kitbag::config::{yaml, ConfigError};
///
/// let result: Result<Vec<u8>, ConfigError> = yaml::read_file("/nonexistent/config.yaml");
/// assert!(matches!(result, Err(ConfigError::Io { .. })));
/// ```
pub fn read_file<T, P>(path: P) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading yaml configuration");

    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    read(BufReader::new(file)).map_err(|error| match error {
        ConfigError::Read(source) => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Joins `segments` onto the directory containing the running executable.
///
/// # Errors
///
/// Returns [`ConfigError::Executable`] if the executable path is unavailable.
///
/// # Examples
///
/// ```rust
/// use kitbag::config::yaml;
///
/// let path = yaml::executable_relative_path(["config", "app.yaml"]).unwrap();
/// assert!(path.ends_with("config/app.yaml"));
/// assert!(path.is_absolute());
/// ```
pub fn executable_relative_path<I, S>(segments: I) -> Result<PathBuf, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let executable = std::env::current_exe().map_err(ConfigError::Executable)?;
    let mut path = executable
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    for segment in segments {
        path.push(segment);
    }
    Ok(path)
}

/// Decodes the YAML file found at `segments` relative to the executable.
///
/// # Errors
///
/// Fails like [`executable_relative_path`] and [`read_file`].
pub fn config_file<T, I, S>(segments: I) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    read_file(executable_relative_path(segments)?)
}
