//! Error types for cue-proto

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration missing, malformed, or lacking a required key.
    Config,
    /// A file referenced by the configuration cannot be read.
    Resolution,
    /// Persisting the result failed.
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read config: {path}")]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: cue_fs::Error,
    },

    #[error("config is not valid JSON: {path}")]
    ConfigInvalidJson { path: PathBuf },

    #[error("config must be a JSON object: {path}")]
    ConfigNotObject { path: PathBuf },

    #[error("config field must be an object: {field}")]
    FieldNotObject { field: String },

    #[error("target path not configured: cueme.proto.path[\"{key}\"]")]
    TargetPathNotConfigured { key: String },

    #[error("prefix not configured: cueme.proto.prefix[\"{kind}\"]")]
    PrefixNotConfigured { kind: String },

    #[error("cannot read protocol.md")]
    ProtocolUnreadable { path: Option<PathBuf> },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to delete file after removing managed block: {path}: {source}")]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: cue_fs::Error,
    },

    #[error(transparent)]
    Fs(#[from] cue_fs::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigUnreadable { .. }
            | Self::ConfigInvalidJson { .. }
            | Self::ConfigNotObject { .. }
            | Self::FieldNotObject { .. }
            | Self::TargetPathNotConfigured { .. }
            | Self::PrefixNotConfigured { .. } => ErrorKind::Config,
            Self::ProtocolUnreadable { .. } => ErrorKind::Resolution,
            Self::CurrentDir(_) | Self::DeleteFailed { .. } | Self::Fs(_) => ErrorKind::Io,
        }
    }
}
