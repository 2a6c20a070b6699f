//! Platform keys used in `cueme.proto.path` entries.

use std::fmt;
use std::str::FromStr;

/// Normalized operating-system identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    /// Any other OS, keyed by its raw name (e.g. `freebsd`).
    Other(String),
}

impl Platform {
    /// The platform this process runs on.
    pub fn current() -> Self {
        std::env::consts::OS.parse().unwrap_or_else(|_| Self::Linux)
    }

    /// Key used as the first component of `"<platform>.<kind>"`.
    pub fn key(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Other(name) => name,
        }
    }

    /// Composite path-map key for `kind` on this platform.
    pub fn path_key(&self, kind: &str) -> String {
        format!("{}.{}", self.key(), kind)
    }

    /// The three platforms with built-in default paths.
    pub fn known() -> [Platform; 3] {
        [Self::MacOs, Self::Windows, Self::Linux]
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("platform name is empty".to_string());
        }
        Ok(match s.to_lowercase().as_str() {
            "windows" | "win32" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
