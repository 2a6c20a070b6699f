//! Filesystem primitives for cueme
//!
//! Provides path normalization and expansion, crash-safe writes,
//! best-effort backups, and the JSON configuration store.

pub mod backup;
pub mod config;
pub mod error;
pub mod expand;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use expand::{expand_path, resolve_path};
pub use path::NormalizedPath;
