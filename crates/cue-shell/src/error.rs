//! Error types for cue-shell

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The candidate profile was rejected by the shell's syntax check.
    #[error("profile failed validation: {path}: {reason}")]
    Validation { path: PathBuf, reason: String },

    #[error("cannot determine home directory")]
    NoHomeDir,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] cue_fs::Error),
}
