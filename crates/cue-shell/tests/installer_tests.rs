//! Installer lifecycle tests with stubbed and real syntax validators.

use assert_fs::TempDir;
use assert_fs::prelude::*;
use cue_shell::profile::{BEGIN_MARKER, END_MARKER};
use cue_shell::{
    InstallLayout, PATH_SNIPPET, ProfileOutcome, ShellInstaller, ShellSyntaxCheck,
    SyntaxValidator,
};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

struct Accept;
impl SyntaxValidator for Accept {
    fn validate(&self, _: &Path) -> Result<(), String> {
        Ok(())
    }
}

struct Reject;
impl SyntaxValidator for Reject {
    fn validate(&self, _: &Path) -> Result<(), String> {
        Err("syntax error near unexpected token".into())
    }
}

fn installer(home: &TempDir, validator: impl SyntaxValidator + 'static) -> ShellInstaller {
    ShellInstaller::new(InstallLayout::unix(home.path()), "/opt/cueme/bin/cueme")
        .with_validator(validator)
}

fn managed_block() -> String {
    format!("{BEGIN_MARKER}\n{PATH_SNIPPET}{END_MARKER}\n")
}

#[test]
fn test_install_writes_shim_and_block() {
    let home = TempDir::new().unwrap();
    home.child(".zprofile").write_str("export EDITOR=vim\n").unwrap();

    let report = installer(&home, Accept).install().unwrap();

    home.child(".local/bin/cueme")
        .assert(predicate::str::contains("exec \"/opt/cueme/bin/cueme\" \"$@\""));
    home.child(".zprofile")
        .assert(predicate::str::diff(format!("export EDITOR=vim\n{}", managed_block())));
    let ProfileOutcome::Written { backup: Some(backup) } = &report.profile else {
        panic!("expected a backup, got {:?}", report.profile);
    };
    assert_eq!(fs::read_to_string(backup).unwrap(), "export EDITOR=vim\n");
}

#[cfg(unix)]
#[test]
fn test_shim_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let home = TempDir::new().unwrap();
    installer(&home, Accept).install().unwrap();

    let mode = fs::metadata(home.child(".local/bin/cueme").path())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_install_twice_leaves_profile_alone() {
    let home = TempDir::new().unwrap();
    let installer = installer(&home, Accept);
    installer.install().unwrap();
    let before = fs::read_to_string(home.child(".zprofile").path()).unwrap();

    let report = installer.install().unwrap();

    assert_eq!(report.profile, ProfileOutcome::Unchanged);
    home.child(".zprofile").assert(predicate::str::diff(before));
}

#[test]
fn test_rejected_profile_is_untouched() {
    let home = TempDir::new().unwrap();
    home.child(".zprofile").write_str("original\n").unwrap();

    let report = installer(&home, Reject).install().unwrap();

    assert!(matches!(report.profile, ProfileOutcome::Rejected { .. }));
    home.child(".zprofile").assert("original\n");
    home.child(".zprofile.cueme.tmp").assert(predicate::path::missing());
    home.child(".local/bin/cueme").assert(predicate::path::exists());
}

#[test]
fn test_uninstall_removes_shim_and_block_but_keeps_profile() {
    let home = TempDir::new().unwrap();
    let installer = installer(&home, Accept);
    installer.install().unwrap();

    let report = installer.uninstall().unwrap();

    assert!(report.shim_removed);
    assert!(matches!(report.profile, ProfileOutcome::Written { .. }));
    home.child(".local/bin/cueme").assert(predicate::path::missing());
    home.child(".zprofile").assert("");
}

#[test]
fn test_uninstall_when_nothing_installed() {
    let home = TempDir::new().unwrap();

    let report = installer(&home, Accept).uninstall().unwrap();

    assert!(!report.shim_removed);
    assert_eq!(report.profile, ProfileOutcome::Unchanged);
    home.child(".zprofile").assert(predicate::path::missing());
}

fn desktop_app_block() -> String {
    format!("# >>> cuemeapp cli (managed) >>>\n{PATH_SNIPPET}# <<< cuemeapp cli (managed) <<<\n")
}

#[test]
fn test_install_recognizes_desktop_app_block() {
    let home = TempDir::new().unwrap();
    let original = format!("export EDITOR=vim\n{}", desktop_app_block());
    home.child(".zprofile").write_str(&original).unwrap();
    let installer = installer(&home, Accept);

    let report = installer.install().unwrap();

    assert_eq!(report.profile, ProfileOutcome::Unchanged);
    home.child(".zprofile").assert(predicate::str::diff(original));
    assert!(installer.status().profile_has_marker);
}

#[test]
fn test_uninstall_clears_desktop_app_block() {
    let home = TempDir::new().unwrap();
    home.child(".zprofile")
        .write_str(&format!("export EDITOR=vim\n{}", desktop_app_block()))
        .unwrap();

    let report = installer(&home, Accept).uninstall().unwrap();

    assert!(matches!(report.profile, ProfileOutcome::Written { .. }));
    home.child(".zprofile").assert("export EDITOR=vim\n");
}

#[test]
fn test_status_reflects_installation() {
    let home = TempDir::new().unwrap();
    let installer = installer(&home, Accept);

    let before = installer.status();
    assert!(!before.shim_exists);
    assert!(!before.profile_has_marker);
    assert!(!before.is_integrated());

    installer.install().unwrap();
    let after = installer.status();
    assert!(after.shim_exists);
    assert!(after.profile_has_marker);
    assert!(after.is_integrated());
}

#[test]
fn test_windows_layout_skips_profile() {
    let home = TempDir::new().unwrap();
    let layout = InstallLayout::windows(home.path(), Some(home.path().join("Local")));
    let installer = ShellInstaller::new(layout, "C:/Apps/cueme.exe").with_validator(Reject);

    let report = installer.install().unwrap();

    assert_eq!(report.profile, ProfileOutcome::Skipped);
    home.child("Local/Microsoft/WindowsApps/cueme.cmd")
        .assert("@echo off\r\n\"C:/Apps/cueme.exe\" %*\r\n");
    assert!(installer.status().profile_has_marker);
}

#[cfg(unix)]
#[test]
fn test_path_block_passes_real_sh_check() {
    let home = TempDir::new().unwrap();
    home.child(".zprofile").write_str("alias ll='ls -l'\n").unwrap();

    let report = installer(&home, ShellSyntaxCheck::new("sh")).install().unwrap();

    assert!(matches!(report.profile, ProfileOutcome::Written { .. }));
    home.child(".zprofile").assert(predicate::str::contains(END_MARKER));
}

#[cfg(unix)]
#[test]
fn test_broken_profile_rejected_by_real_sh_check() {
    let home = TempDir::new().unwrap();
    home.child(".zprofile").write_str("if [ -d /tmp ]; then\n").unwrap();

    let report = installer(&home, ShellSyntaxCheck::new("sh")).install().unwrap();

    assert!(matches!(report.profile, ProfileOutcome::Rejected { .. }));
    home.child(".zprofile").assert("if [ -d /tmp ]; then\n");
}
