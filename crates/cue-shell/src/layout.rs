//! Where the shim and the login profile live.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

const SHIM_NAME: &str = "cueme";
const PROFILE_NAME: &str = ".zprofile";

/// Filesystem locations touched by the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub shim_path: PathBuf,
    /// Login profile receiving the PATH block. `None` on Windows, where the
    /// shim directory is already on `PATH`.
    pub profile_path: Option<PathBuf>,
}

impl InstallLayout {
    /// `~/.local/bin/cueme` and `~/.zprofile`.
    pub fn unix(home: &Path) -> Self {
        Self {
            shim_path: home.join(".local").join("bin").join(SHIM_NAME),
            profile_path: Some(home.join(PROFILE_NAME)),
        }
    }

    /// `%LOCALAPPDATA%\Microsoft\WindowsApps\cueme.cmd`, falling back to
    /// `<home>\AppData\Local` when `LOCALAPPDATA` is unset or empty.
    pub fn windows(home: &Path, local_app_data: Option<PathBuf>) -> Self {
        let local = local_app_data
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| home.join("AppData").join("Local"));
        Self {
            shim_path: local
                .join("Microsoft")
                .join("WindowsApps")
                .join(format!("{SHIM_NAME}.cmd")),
            profile_path: None,
        }
    }

    /// Layout for the running host.
    pub fn detect() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
        if cfg!(windows) {
            Ok(Self::windows(&home, std::env::var_os("LOCALAPPDATA").map(PathBuf::from)))
        } else {
            Ok(Self::unix(&home))
        }
    }

    pub fn is_windows(&self) -> bool {
        self.profile_path.is_none()
    }
}
