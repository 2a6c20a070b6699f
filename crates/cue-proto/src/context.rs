//! Host environment snapshot used for path resolution.
//!
//! Everything the resolver needs from the process (platform, home and
//! working directories, environment variables, native line ending) is
//! captured once here so that operations are deterministic and testable.

use crate::error::{Error, Result};
use crate::platform::Platform;
use cue_blocks::LineEnding;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Directory holding the config under the user's home.
pub const CONFIG_DIR: &str = ".cue";
/// Config file name.
pub const CONFIG_FILE: &str = "cueme.json";
/// Default protocol payload file name, next to the config.
pub const PROTOCOL_FILE: &str = "protocol.md";

#[derive(Debug, Clone)]
pub struct ProtoContext {
    pub platform: Platform,
    pub home: Option<PathBuf>,
    pub cwd: PathBuf,
    pub env: BTreeMap<String, String>,
    /// Line ending for files that do not exist yet.
    pub default_eol: LineEnding,
}

impl ProtoContext {
    /// Snapshot the running process.
    pub fn from_process() -> Result<Self> {
        Ok(Self {
            platform: Platform::current(),
            home: dirs::home_dir(),
            cwd: std::env::current_dir().map_err(Error::CurrentDir)?,
            env: std::env::vars().collect(),
            default_eol: LineEnding::native(),
        })
    }

    /// A context with no environment variables, rooted at `home` and `cwd`.
    pub fn new(platform: Platform, home: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            home: Some(home.into()),
            cwd: cwd.into(),
            env: BTreeMap::new(),
            default_eol: LineEnding::Lf,
        }
    }

    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    pub fn with_default_eol(mut self, eol: LineEnding) -> Self {
        self.default_eol = eol;
        self
    }

    pub fn var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    /// Expand `~`/`%ENV%` in `raw` and make it absolute against `cwd`.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        cue_fs::resolve_path(raw, self.home.as_deref(), &self.cwd, |name| self.var(name))
    }

    /// The home directory, falling back to the working directory.
    pub fn home_or_cwd(&self) -> &Path {
        self.home.as_deref().unwrap_or(&self.cwd)
    }

    /// Default config location: `~/.cue/cueme.json`.
    pub fn default_config_path(&self) -> PathBuf {
        self.home_or_cwd().join(CONFIG_DIR).join(CONFIG_FILE)
    }
}
