//! install / uninstall / status over an [`InstallLayout`].

use crate::error::Result;
use crate::layout::InstallLayout;
use crate::profile::{PATH_SNIPPET, ProfileOutcome, SHELL_MARKERS, swap_profile};
use crate::shim;
use crate::validate::{ShellSyntaxCheck, SyntaxValidator};
use cue_blocks::{LineEnding, has_block, remove_block, upsert_block};
use cue_fs::{NormalizedPath, io};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub shim: PathBuf,
    pub profile: ProfileOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallReport {
    pub shim: PathBuf,
    /// Whether a shim was present and deleted.
    pub shim_removed: bool,
    pub profile: ProfileOutcome,
}

/// Integration diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CliStatus {
    pub shim_path: PathBuf,
    pub shim_exists: bool,
    pub profile_path: Option<PathBuf>,
    /// Both markers present in order. Always `true` where there is no profile.
    pub profile_has_marker: bool,
}

impl CliStatus {
    pub fn is_integrated(&self) -> bool {
        self.shim_exists && self.profile_has_marker
    }
}

/// Installs the `cueme` shim and the login-profile PATH block.
pub struct ShellInstaller {
    layout: InstallLayout,
    exe: PathBuf,
    validator: Box<dyn SyntaxValidator>,
}

impl ShellInstaller {
    /// Installer validating profiles with `zsh -n`; the shim points at `exe`.
    pub fn new(layout: InstallLayout, exe: impl Into<PathBuf>) -> Self {
        Self {
            layout,
            exe: exe.into(),
            validator: Box::new(ShellSyntaxCheck::zsh()),
        }
    }

    pub fn with_validator(mut self, validator: impl SyntaxValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn layout(&self) -> &InstallLayout {
        &self.layout
    }

    /// Write the shim, then add the PATH block unless it is already there.
    pub fn install(&self) -> Result<InstallReport> {
        shim::write_shim(&self.layout.shim_path, &self.exe, self.layout.is_windows())?;
        tracing::info!(path = %self.layout.shim_path.display(), "shim installed");

        let profile = match &self.layout.profile_path {
            None => ProfileOutcome::Skipped,
            Some(path) => {
                let profile = NormalizedPath::new(path);
                let existing = io::read_text_if_exists(&profile)?.unwrap_or_default();
                if has_block(&existing, &SHELL_MARKERS) {
                    tracing::debug!(path = %profile, "PATH block already present");
                    ProfileOutcome::Unchanged
                } else {
                    let next = upsert_block(
                        &existing,
                        &SHELL_MARKERS,
                        None,
                        PATH_SNIPPET,
                        LineEnding::detect(&existing),
                    );
                    swap_profile(&profile, &next, self.validator.as_ref())?
                }
            }
        };

        Ok(InstallReport {
            shim: self.layout.shim_path.clone(),
            profile,
        })
    }

    /// Delete the shim and strip the PATH block. The profile itself is kept
    /// even when nothing else remains in it.
    pub fn uninstall(&self) -> Result<UninstallReport> {
        let shim_removed = io::remove_file_if_exists(&NormalizedPath::new(&self.layout.shim_path))?;
        tracing::info!(path = %self.layout.shim_path.display(), shim_removed, "shim removed");

        let profile = match &self.layout.profile_path {
            None => ProfileOutcome::Skipped,
            Some(path) => {
                let profile = NormalizedPath::new(path);
                let existing = io::read_text_if_exists(&profile)?;
                match existing
                    .as_deref()
                    .and_then(|content| remove_block(content, &SHELL_MARKERS, None))
                {
                    Some(next) => swap_profile(&profile, &next, self.validator.as_ref())?,
                    None => ProfileOutcome::Unchanged,
                }
            }
        };

        Ok(UninstallReport {
            shim: self.layout.shim_path.clone(),
            shim_removed,
            profile,
        })
    }

    /// Read-only diagnostics; unreadable profiles count as unmarked.
    pub fn status(&self) -> CliStatus {
        let profile_has_marker = match &self.layout.profile_path {
            None => true,
            Some(path) => io::read_text(&NormalizedPath::new(path))
                .map(|content| has_block(&content, &SHELL_MARKERS))
                .unwrap_or(false),
        };

        CliStatus {
            shim_path: self.layout.shim_path.clone(),
            shim_exists: self.layout.shim_path.is_file(),
            profile_path: self.layout.profile_path.clone(),
            profile_has_marker,
        }
    }
}
