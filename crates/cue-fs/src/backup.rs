//! Timestamped sibling backups
//!
//! A backup of `<file>` taken at instant `T` lives at
//! `<file>.bak.<T>`, where `T` is the RFC 3339 UTC timestamp with
//! millisecond precision and every `:` and `.` replaced by `-`
//! (`2026-10-19T08-15-30-123Z`).

use crate::{Error, NormalizedPath, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;

/// Filesystem-safe timestamp used in backup names.
pub fn backup_stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Path of the backup for `path` taken at `at`.
pub fn backup_path(path: &NormalizedPath, at: DateTime<Utc>) -> NormalizedPath {
    path.with_suffix(&format!(".bak.{}", backup_stamp(at)))
}

/// Copy `path` to its timestamped sibling.
///
/// Returns `Ok(None)` when there is nothing to back up.
pub fn create_backup(path: &NormalizedPath, at: DateTime<Utc>) -> Result<Option<NormalizedPath>> {
    if !path.is_file() {
        return Ok(None);
    }

    let dest = backup_path(path, at);
    fs::copy(path.to_native(), dest.to_native()).map_err(|e| Error::io(dest.to_native(), e))?;
    tracing::debug!(source = %path, backup = %dest, "backup created");
    Ok(Some(dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_stamp_replaces_colons_and_dots() {
        assert_eq!(backup_stamp(fixed_instant()), "2026-10-19T08-15-30-123Z");
    }

    #[test]
    fn test_backup_path_is_sibling() {
        let path = NormalizedPath::new("/home/me/.zprofile");
        assert_eq!(
            backup_path(&path, fixed_instant()).as_str(),
            "/home/me/.zprofile.bak.2026-10-19T08-15-30-123Z"
        );
    }

    #[test]
    fn test_create_backup_copies_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join(".zprofile"));
        fs::write(path.to_native(), "export A=1\n").unwrap();

        let backup = create_backup(&path, fixed_instant()).unwrap().unwrap();
        assert_eq!(fs::read_to_string(backup.to_native()).unwrap(), "export A=1\n");
    }

    #[test]
    fn test_create_backup_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = NormalizedPath::new(dir.path().join(".zprofile"));
        assert!(create_backup(&path, fixed_instant()).unwrap().is_none());
    }
}
