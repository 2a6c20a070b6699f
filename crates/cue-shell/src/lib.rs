//! Shell integration for the `cueme` command.
//!
//! Installs a launcher shim into the per-user bin directory and a managed
//! PATH block into the user's login profile. Profile edits are validated by
//! the shell in parse-only mode before they replace the live file, and the
//! previous profile is backed up first.
//!
//! ```rust,no_run
//! use cue_shell::{InstallLayout, ShellInstaller};
//!
//! let layout = InstallLayout::detect()?;
//! let installer = ShellInstaller::new(layout, std::env::current_exe()?);
//! let report = installer.install()?;
//! println!("{}", report.shim.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod installer;
pub mod layout;
pub mod profile;
pub mod shim;
pub mod validate;

pub use error::{Error, Result};
pub use installer::{CliStatus, InstallReport, ShellInstaller, UninstallReport};
pub use layout::InstallLayout;
pub use profile::{PATH_SNIPPET, ProfileOutcome, SHELL_MARKERS};
pub use validate::{ShellSyntaxCheck, SyntaxValidator};
