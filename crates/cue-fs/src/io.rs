//! Atomic I/O operations with file locking

use crate::{Error, NormalizedPath, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Temp sibling used by [`write_atomic`]: `.{name}.{pid}.tmp`.
///
/// Living in the same directory keeps the final rename on one filesystem.
pub fn temp_path_for(path: &NormalizedPath) -> NormalizedPath {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name().unwrap_or_default(),
        std::process::id()
    );
    match path.parent() {
        Some(parent) => parent.join(&temp_name),
        None => NormalizedPath::new(temp_name),
    }
}

/// Follow `path` to the file it points at when it is a symlink.
///
/// Anything else, including a missing path, comes back unchanged. A dangling
/// link resolves to its target so the write creates that file.
pub fn resolve_link(path: &NormalizedPath) -> NormalizedPath {
    let native = path.to_native();
    let is_link = fs::symlink_metadata(&native)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return path.clone();
    }
    if let Ok(real) = fs::canonicalize(&native) {
        return NormalizedPath::new(real);
    }
    match fs::read_link(&native) {
        Ok(link) => match native.parent() {
            Some(parent) => NormalizedPath::new(parent.join(link)),
            None => NormalizedPath::new(link),
        },
        Err(_) => path.clone(),
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent(path: &NormalizedPath) -> Result<()> {
    if let Some(parent) = path.to_native().parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path` under an exclusive advisory lock and flush it.
///
/// This is the first half of an atomic swap; callers rename the result over
/// the live file with [`commit`].
pub fn write_synced(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&native_path)
        .map_err(|e| Error::io(&native_path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    file.write_all(content)
        .map_err(|e| Error::io(&native_path, e))?;
    file.sync_all().map_err(|e| Error::io(&native_path, e))?;

    file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    Ok(())
}

/// Rename `temp` over `dest`.
pub fn commit(temp: &NormalizedPath, dest: &NormalizedPath) -> Result<()> {
    let dest_native = dest.to_native();
    fs::rename(temp.to_native(), &dest_native).map_err(|e| Error::io(&dest_native, e))
}

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename so a reader never observes a
/// half-written file. A failed write removes its temp file; a failed rename
/// may leave it behind, but never touches the destination.
///
/// A symlinked `path` is written through: the rename lands on the link's
/// target and the link stays in place.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let resolved = resolve_link(path);
    let path = &resolved;
    let temp_path = temp_path_for(path);

    if let Err(e) = write_synced(&temp_path, content) {
        let _ = fs::remove_file(temp_path.to_native());
        return Err(e);
    }

    commit(&temp_path, path)?;
    tracing::debug!(path = %path, bytes = content.len(), "atomic write committed");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, mapping a missing file to `None`.
///
/// Any other failure (permissions, invalid UTF-8) is still an error.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    match read_text(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Delete a file.
pub fn remove_file(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::remove_file(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Delete a file if present. Returns whether something was removed.
pub fn remove_file_if_exists(path: &NormalizedPath) -> Result<bool> {
    match remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let path = NormalizedPath::new("/home/me/.kiro/steering/cueme_proto.md");
        let temp = temp_path_for(&path);
        assert_eq!(
            temp.as_str(),
            format!(
                "/home/me/.kiro/steering/.cueme_proto.md.{}.tmp",
                std::process::id()
            )
        );
    }

    #[test]
    fn test_remove_file_if_exists_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join("gone.md"));
        assert!(!remove_file_if_exists(&path).unwrap());
    }
}
