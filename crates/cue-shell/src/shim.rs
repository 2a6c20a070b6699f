//! Launcher shim that forwards to the installed `cueme` executable.

use crate::error::Result;
use cue_fs::{NormalizedPath, io};
use std::path::Path;

/// Shim script text for `exe`.
pub fn render_shim(exe: &Path, windows: bool) -> String {
    let exe = exe.to_string_lossy();
    if windows {
        format!("@echo off\r\n\"{exe}\" %*\r\n")
    } else {
        format!("#!/bin/sh\nexec \"{}\" \"$@\"\n", escape_double_quoted(&exe))
    }
}

/// Write the shim atomically; on unix it is made executable (0755).
pub fn write_shim(path: &Path, exe: &Path, windows: bool) -> Result<()> {
    let target = NormalizedPath::new(path);
    io::write_text(&target, &render_shim(exe, windows))?;

    #[cfg(unix)]
    {
        use crate::error::Error;
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(
            |source| Error::Io {
                path: path.to_path_buf(),
                source,
            },
        )?;
    }

    tracing::debug!(path = %target, "shim written");
    Ok(())
}

/// Escape the characters that stay special inside `"..."` in POSIX sh.
fn escape_double_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
