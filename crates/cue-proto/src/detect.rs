//! Built-in target tools and best-effort path detection.
//!
//! Each tool has a default path per platform (used to seed a new config) and
//! a list of candidate locations scanned in order on the current platform;
//! the first candidate that already exists wins.

use crate::context::ProtoContext;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

const VSCODE_FILE: &str = "cueme_proto.instructions.md";
const KIRO_FILE: &str = "cueme_proto.md";

/// Editors cueme knows default locations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetTool {
    Vscode,
    Windsurf,
    Kiro,
}

impl TargetTool {
    pub const ALL: [TargetTool; 3] = [Self::Vscode, Self::Windsurf, Self::Kiro];

    /// Target-kind identifier used in the config.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Vscode => "vscode",
            Self::Windsurf => "windsurf",
            Self::Kiro => "kiro",
        }
    }

    /// Lines written above the managed block for this tool.
    pub fn default_prefix(&self) -> Vec<String> {
        match self {
            Self::Vscode => vec!["---".into(), "applyTo: \"**\"".into(), "---".into()],
            Self::Windsurf | Self::Kiro => Vec::new(),
        }
    }

    /// User-level default path on `platform`. `None` for unknown platforms.
    pub fn default_path(&self, platform: &Platform, ctx: &ProtoContext) -> Option<PathBuf> {
        let home = ctx.home_or_cwd();
        let user_profile = user_profile(ctx);

        let path = match (self, platform) {
            (Self::Vscode, Platform::MacOs) => home
                .join("Library")
                .join("Application Support")
                .join("Code")
                .join("User")
                .join("prompts")
                .join(VSCODE_FILE),
            (Self::Vscode, Platform::Windows) => {
                let roaming = ctx
                    .var("APPDATA")
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
                    .unwrap_or_else(|| user_profile.join("AppData").join("Roaming"));
                roaming.join("Code").join("User").join("prompts").join(VSCODE_FILE)
            }
            (Self::Vscode, Platform::Linux) => home
                .join(".config")
                .join("Code")
                .join("User")
                .join("prompts")
                .join(VSCODE_FILE),
            (Self::Windsurf, Platform::MacOs | Platform::Linux) => windsurf_rules(home),
            (Self::Windsurf, Platform::Windows) => windsurf_rules(&user_profile),
            (Self::Kiro, Platform::MacOs | Platform::Linux) => kiro_steering(home),
            (Self::Kiro, Platform::Windows) => kiro_steering(&user_profile),
            (_, Platform::Other(_)) => return None,
        };
        Some(path)
    }

    /// Candidate locations on the context's platform, in priority order.
    ///
    /// Workspace-local locations (under the working directory) come first
    /// for tools that support them; Kiro is user-level only.
    pub fn candidates(&self, ctx: &ProtoContext) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        match self {
            Self::Vscode => {
                candidates.push(ctx.cwd.join(".vscode").join("prompts").join(VSCODE_FILE));
                if let Platform::Windows = ctx.platform {
                    // Only the real APPDATA location; no synthesized fallback.
                    if let Some(app_data) = ctx.var("APPDATA").filter(|v| !v.is_empty()) {
                        candidates.push(
                            PathBuf::from(app_data)
                                .join("Code")
                                .join("User")
                                .join("prompts")
                                .join(VSCODE_FILE),
                        );
                    }
                } else {
                    candidates.extend(self.default_path(&ctx.platform, ctx));
                }
            }
            Self::Windsurf => {
                candidates.push(windsurf_rules(&ctx.cwd));
                candidates.extend(self.default_path(&ctx.platform, ctx));
            }
            Self::Kiro => candidates.extend(self.default_path(&ctx.platform, ctx)),
        }
        candidates
    }

    /// First candidate that exists on disk.
    pub fn detect(&self, ctx: &ProtoContext) -> Option<PathBuf> {
        first_existing(&self.candidates(ctx))
    }
}

/// First path in `candidates` that exists.
pub fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .find(|candidate| !candidate.as_os_str().is_empty() && candidate.exists())
        .cloned()
}

fn user_profile(ctx: &ProtoContext) -> PathBuf {
    ctx.var("USERPROFILE")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| ctx.home_or_cwd().to_path_buf())
}

fn windsurf_rules(base: &Path) -> PathBuf {
    base.join(".codeium")
        .join("windsurf")
        .join("memories")
        .join("global_rules.md")
}

fn kiro_steering(base: &Path) -> PathBuf {
    base.join(".kiro").join("steering").join(KIRO_FILE)
}
