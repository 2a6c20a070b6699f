//! Parse-only syntax checks for candidate profiles.

use std::path::Path;
use std::process::{Command, Stdio};

/// Checks that a shell script parses without running it.
pub trait SyntaxValidator {
    /// `Err(reason)` when `path` does not parse or cannot be checked.
    fn validate(&self, path: &Path) -> std::result::Result<(), String>;
}

/// Runs `<program> -n <path>`; any non-zero exit or spawn failure rejects.
#[derive(Debug, Clone)]
pub struct ShellSyntaxCheck {
    program: String,
}

impl ShellSyntaxCheck {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// `zsh -n`, matching the `.zprofile` the installer edits.
    pub fn zsh() -> Self {
        Self::new("zsh")
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for ShellSyntaxCheck {
    fn default() -> Self {
        Self::zsh()
    }
}

impl SyntaxValidator for ShellSyntaxCheck {
    fn validate(&self, path: &Path) -> std::result::Result<(), String> {
        let output = Command::new(&self.program)
            .arg("-n")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| format!("cannot run {}: {}", self.program, e))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let code = output.status.code().unwrap_or(-1);
            Err(format!("{} -n exited with {}: {}", self.program, code, stderr))
        }
    }
}
