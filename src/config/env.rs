//! Environment file bootstrap.
//!
//! Loads `KEY=value` pairs from a `.env` file into the process environment
//! using [`dotenvy`]. Variables that are already set are never overridden.
//!
//! Loading never fails: a missing file is ignored silently, and a file that
//! cannot be parsed is reported through `tracing` and otherwise ignored. The
//! returned [`EnvLoad`] tells the caller which of these happened.
//!
//! # Examples
//!
//! ```rust,no_run
//! use kitbag::config::env;
//!
//! // At startup, before reading configuration from the environment.
//! env::load();
//! ```

use std::path::{Path, PathBuf};

/// Default environment file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// The outcome of loading an environment file.
#[derive(Debug)]
pub enum EnvLoad {
    /// The file was parsed and its variables applied.
    Loaded(PathBuf),
    /// No file exists at the path; nothing was changed.
    Missing,
    /// The file exists but could not be loaded. The error has been logged.
    Failed(dotenvy::Error),
}

impl EnvLoad {
    /// Returns `true` if the file was loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Loads [`DEFAULT_ENV_FILE`] from the working directory.
pub fn load() -> EnvLoad {
    load_from(DEFAULT_ENV_FILE)
}

/// Loads the environment file at `path`.
///
/// See the [module documentation](self) for the failure policy.
pub fn load_from<P: AsRef<Path>>(path: P) -> EnvLoad {
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no environment file");
        return EnvLoad::Missing;
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            EnvLoad::Loaded(path.to_path_buf())
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to load environment file");
            EnvLoad::Failed(error)
        }
    }
}
