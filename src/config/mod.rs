//! Configuration helpers.
//!
//! - [`yaml`]: decode typed configuration from YAML readers and files,
//!   optionally located next to the running executable (feature `yaml`)
//! - [`env`]: bootstrap the process environment from a `.env` file
//!   (feature `env`)

#[cfg(feature = "env")]
pub mod env;

#[cfg(feature = "yaml")]
mod error;

#[cfg(feature = "yaml")]
pub mod yaml;

#[cfg(feature = "yaml")]
pub use error::ConfigError;
