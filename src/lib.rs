//! # kitbag
//!
//! A lock-guarded ordered collection plus small configuration helpers.
//!
//! ## Overview
//!
//! - **Collection**: [`Array`](collection::Array), an insertion-ordered
//!   sequence with positional access, push/pop, slicing, splicing, search,
//!   and filtering that can be shared between threads
//! - **YAML configuration**: typed decoding from readers and files, with
//!   executable-relative path resolution
//! - **Environment bootstrap**: `.env` loading that never aborts startup
//!
//! ## Feature Flags
//!
//! - `collection` (default): the [`collection`] module
//! - `serde`: `Serialize`/`Deserialize` for collections
//! - `yaml`: the [`config::yaml`] module
//! - `env`: the [`config::env`] module
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use kitbag::prelude::*;
//!
//! let array = Array::from(vec![1, 2, 3]);
//! let removed = array.splice(1, 1, [8, 9]).unwrap();
//!
//! assert_eq!(removed.to_vec(), vec![2]);
//! assert_eq!(array.to_vec(), vec![1, 8, 9, 3]);
//! assert!(array.at(4).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the public types of every enabled module.
///
/// # Usage
///
/// ```rust
/// use kitbag::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "yaml")]
    pub use crate::config::ConfigError;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(any(feature = "yaml", feature = "env"))]
pub mod config;
