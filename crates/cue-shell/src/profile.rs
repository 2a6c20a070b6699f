//! Managed PATH block in the login profile, and the validated profile swap.

use crate::error::{Error, Result};
use crate::validate::SyntaxValidator;
use chrono::{DateTime, Utc};
use cue_blocks::MarkerSet;
use cue_fs::{NormalizedPath, backup, io};
use std::path::PathBuf;
use std::sync::LazyLock;

pub const BEGIN_MARKER: &str = "# >>> cueme cli (managed) >>>";
pub const END_MARKER: &str = "# <<< cueme cli (managed) <<<";

// Profiles edited by the desktop app carry `cuemeapp` markers. Both names
// are recognized so install never stacks a second block and uninstall
// clears either one.
const BEGIN_PATTERN: &str = r"# >>> cueme(?:app)? cli \(managed\) >>>";
const END_PATTERN: &str = r"# <<< cueme(?:app)? cli \(managed\) <<<";

pub static SHELL_MARKERS: LazyLock<MarkerSet> = LazyLock::new(|| {
    MarkerSet::with_patterns(BEGIN_MARKER, END_MARKER, BEGIN_PATTERN, END_PATTERN)
        .expect("Invalid shell marker set")
});

/// POSIX snippet prepending `~/.local/bin` to `PATH` unless already there.
pub const PATH_SNIPPET: &str = r#"# Added by cueme to put ~/.local/bin on PATH.
if [ -d "$HOME/.local/bin" ]; then
  case ":$PATH:" in
    *":$HOME/.local/bin:"*) :;;
    *) export PATH="$HOME/.local/bin:$PATH";;
  esac
fi
"#;

/// Suffix of the candidate file validated before the swap.
const CANDIDATE_SUFFIX: &str = ".cueme.tmp";

/// What happened to the login profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// The profile was replaced; `backup` is the copy of the previous one.
    Written { backup: Option<PathBuf> },
    /// Nothing to do: the block was already present (install) or absent
    /// (uninstall).
    Unchanged,
    /// The shell rejected the candidate; the profile was left untouched.
    Rejected { reason: String },
    /// This platform has no login profile to edit.
    Skipped,
}

/// Candidate path used while validating a new profile.
pub fn candidate_path(profile: &NormalizedPath) -> NormalizedPath {
    profile.with_suffix(CANDIDATE_SUFFIX)
}

/// Replace `profile` with `content` only if it passes `validator`.
///
/// The candidate is written next to the profile and checked in place. A
/// rejected candidate is deleted and reported as [`Error::Validation`]. An
/// accepted one is renamed over the profile after a best-effort backup of
/// the existing file; backup failures are logged and ignored.
///
/// Returns the backup path, if one was made.
pub fn write_profile_safely(
    profile: &NormalizedPath,
    content: &str,
    validator: &dyn SyntaxValidator,
    now: DateTime<Utc>,
) -> Result<Option<NormalizedPath>> {
    // Dotfile managers symlink profiles; swap the real file, keep the link.
    let profile = &io::resolve_link(profile);
    let candidate = candidate_path(profile);
    io::write_synced(&candidate, content.as_bytes())?;

    if let Err(reason) = validator.validate(&candidate.to_native()) {
        if let Err(e) = io::remove_file_if_exists(&candidate) {
            tracing::warn!(path = %candidate, error = %e, "failed to remove rejected profile candidate");
        }
        return Err(Error::Validation {
            path: profile.to_native(),
            reason,
        });
    }

    let backup = match backup::create_backup(profile, now) {
        Ok(backup) => backup,
        Err(e) => {
            tracing::warn!(path = %profile, error = %e, "profile backup failed, continuing");
            None
        }
    };

    io::commit(&candidate, profile)?;
    tracing::debug!(path = %profile, backup = ?backup.as_ref().map(|b| b.as_str()), "profile updated");
    Ok(backup)
}

/// Run [`write_profile_safely`], turning a validation failure into a
/// [`ProfileOutcome::Rejected`] no-op.
pub(crate) fn swap_profile(
    profile: &NormalizedPath,
    content: &str,
    validator: &dyn SyntaxValidator,
) -> Result<ProfileOutcome> {
    match write_profile_safely(profile, content, validator, Utc::now()) {
        Ok(backup) => Ok(ProfileOutcome::Written {
            backup: backup.map(|b| b.to_native()),
        }),
        Err(Error::Validation { reason, .. }) => {
            tracing::warn!(path = %profile, %reason, "profile edit rejected, left untouched");
            Ok(ProfileOutcome::Rejected { reason })
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    struct Accept;
    impl SyntaxValidator for Accept {
        fn validate(&self, _: &Path) -> std::result::Result<(), String> {
            Ok(())
        }
    }

    struct Reject;
    impl SyntaxValidator for Reject {
        fn validate(&self, _: &Path) -> std::result::Result<(), String> {
            Err("parse error".into())
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap()
    }

    #[test]
    fn test_accepted_write_backs_up_and_swaps() {
        let dir = tempfile::tempdir().unwrap();
        let profile = NormalizedPath::new(dir.path().join(".zprofile"));
        fs::write(profile.to_native(), "old\n").unwrap();

        let backup = write_profile_safely(&profile, "new\n", &Accept, at())
            .unwrap()
            .unwrap();

        assert_eq!(fs::read_to_string(profile.to_native()).unwrap(), "new\n");
        assert_eq!(backup.file_name(), Some(".zprofile.bak.2026-10-19T08-15-30-000Z"));
        assert_eq!(fs::read_to_string(backup.to_native()).unwrap(), "old\n");
        assert!(!candidate_path(&profile).exists());
    }

    #[test]
    fn test_new_profile_has_no_backup() {
        let dir = tempfile::tempdir().unwrap();
        let profile = NormalizedPath::new(dir.path().join(".zprofile"));

        let backup = write_profile_safely(&profile, "new\n", &Accept, at()).unwrap();

        assert_eq!(backup, None);
        assert_eq!(fs::read_to_string(profile.to_native()).unwrap(), "new\n");
    }

    #[test]
    fn test_rejected_write_leaves_profile_and_no_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let profile = NormalizedPath::new(dir.path().join(".zprofile"));
        fs::write(profile.to_native(), "old\n").unwrap();

        let err = write_profile_safely(&profile, "broken\n", &Reject, at()).unwrap_err();

        assert!(matches!(err, Error::Validation { ref reason, .. } if reason == "parse error"));
        assert_eq!(fs::read_to_string(profile.to_native()).unwrap(), "old\n");
        assert!(!candidate_path(&profile).exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_swap_reports_rejection_as_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let profile = NormalizedPath::new(dir.path().join(".zprofile"));

        let outcome = swap_profile(&profile, "x\n", &Reject).unwrap();

        assert_eq!(
            outcome,
            ProfileOutcome::Rejected {
                reason: "parse error".into()
            }
        );
        assert!(!profile.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_profile_keeps_link() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("dotfiles.zprofile");
        fs::write(&real, "old\n").unwrap();
        let link = dir.path().join(".zprofile");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_profile_safely(&NormalizedPath::new(&link), "new\n", &Accept, at()).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new\n");
    }

    #[test]
    fn test_candidate_path() {
        let profile = NormalizedPath::new("/home/me/.zprofile");
        assert_eq!(candidate_path(&profile).as_str(), "/home/me/.zprofile.cueme.tmp");
    }
}
