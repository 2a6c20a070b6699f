//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use cue_proto::Platform;
use std::path::PathBuf;

/// cueme - keep the human agent protocol in your editors' prompt files
#[derive(Parser, Debug)]
#[command(name = "cueme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.cue/cueme.json
    #[arg(long, global = true, env = "CUEME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Platform key for path lookups (windows, macos, linux, ...)
    #[arg(long, global = true, env = "CUEME_PLATFORM")]
    pub platform: Option<Platform>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Manage the protocol block in editor prompt files
    Proto {
        #[command(subcommand)]
        action: ProtoAction,
    },

    /// Manage the `cueme` shell integration
    Cli {
        #[command(subcommand)]
        action: ShellAction,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   cueme completions bash > ~/.local/share/bash-completion/completions/cueme
    ///   cueme completions zsh > ~/.zfunc/_cueme
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProtoAction {
    /// Create the config with detected default paths, if absent
    Init,

    /// List configured target kinds
    Ls,

    /// Print the prefix and protocol for a target kind
    Render {
        /// Target kind (e.g. vscode, windsurf, kiro)
        kind: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved target file path
    Path {
        /// Target kind
        kind: String,
    },

    /// Write or refresh the managed block in the target file
    ///
    /// Examples:
    ///   cueme proto apply kiro
    ///   cueme --platform macos proto apply vscode
    Apply {
        /// Target kind
        kind: String,
    },

    /// Remove the managed block from the target file
    Remove {
        /// Target kind
        kind: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    /// Install the launcher shim and the login-profile PATH block
    Install {
        /// Shell used to syntax-check the edited profile
        #[arg(long, env = "CUEME_SHELL", default_value = "zsh")]
        shell: String,
    },

    /// Remove the launcher shim and the PATH block
    Uninstall {
        /// Shell used to syntax-check the edited profile
        #[arg(long, env = "CUEME_SHELL", default_value = "zsh")]
        shell: String,
    },

    /// Show integration diagnostics
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
