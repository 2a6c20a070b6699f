//! `cueme cli` command implementations

use colored::Colorize;
use cue_shell::{
    CliStatus, InstallLayout, InstallReport, ProfileOutcome, ShellInstaller, ShellSyntaxCheck,
    UninstallReport,
};
use std::path::Path;

use crate::cli::ShellAction;
use crate::error::Result;

pub fn run_shell(action: ShellAction) -> Result<()> {
    let layout = InstallLayout::detect()?;
    let exe = std::env::current_exe()?;

    match action {
        ShellAction::Install { shell } => {
            let installer =
                ShellInstaller::new(layout, exe).with_validator(ShellSyntaxCheck::new(shell));
            let report = installer.install()?;
            print_install(&report, installer.layout().profile_path.as_deref());
        }
        ShellAction::Uninstall { shell } => {
            let installer =
                ShellInstaller::new(layout, exe).with_validator(ShellSyntaxCheck::new(shell));
            let report = installer.uninstall()?;
            print_uninstall(&report, installer.layout().profile_path.as_deref());
        }
        ShellAction::Status { json } => {
            let status = ShellInstaller::new(layout, exe).status();
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status(&status);
            }
        }
    }

    Ok(())
}

fn print_install(report: &InstallReport, profile: Option<&Path>) {
    println!("ok: shim installed: {}", report.shim.display());
    print_profile(&report.profile, profile, "PATH block added to");
}

fn print_uninstall(report: &UninstallReport, profile: Option<&Path>) {
    if report.shim_removed {
        println!("ok: shim removed: {}", report.shim.display());
    } else {
        println!("ok: no shim at: {}", report.shim.display());
    }
    print_profile(&report.profile, profile, "PATH block removed from");
}

fn print_profile(outcome: &ProfileOutcome, profile: Option<&Path>, written: &str) {
    let Some(profile) = profile else {
        return;
    };
    match outcome {
        ProfileOutcome::Written { backup } => {
            println!("ok: {} {}", written, profile.display());
            if let Some(backup) = backup {
                println!("    backup: {}", backup.display());
            }
        }
        ProfileOutcome::Unchanged => println!("ok: {} unchanged", profile.display()),
        ProfileOutcome::Rejected { reason } => eprintln!(
            "{}: {} left unchanged, validation failed: {}",
            "warning".yellow().bold(),
            profile.display(),
            reason
        ),
        ProfileOutcome::Skipped => {}
    }
}

fn print_status(status: &CliStatus) {
    println!("{}", "cueme CLI integration".bold());
    println!();

    let shim_state = if status.shim_exists {
        "installed".green()
    } else {
        "missing".yellow()
    };
    println!("{}:    {} ({})", "Shim".dimmed(), status.shim_path.display(), shim_state);

    if let Some(profile) = &status.profile_path {
        let profile_state = if status.profile_has_marker {
            "PATH block present".green()
        } else {
            "PATH block missing".yellow()
        };
        println!("{}: {} ({})", "Profile".dimmed(), profile.display(), profile_state);
    }

    if !status.is_integrated() {
        println!();
        println!("Run {} to install.", "cueme cli install".cyan());
    }
}
