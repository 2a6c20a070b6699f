//! Proto operations: init, ls, render, path, apply, remove.
//!
//! Every operation loads the configuration fresh from disk (creating it on
//! first use) and resolves everything it needs before touching a target
//! file, so a configuration or resolution error never leaves a target
//! modified.

use crate::config::{ConfigDocument, PrefixValue, ProtoConfig};
use crate::context::{PROTOCOL_FILE, ProtoContext};
use crate::detect::TargetTool;
use crate::error::{Error, Result};
use crate::markers::PROTO_MARKERS;
use crate::platform::Platform;
use cue_blocks::{LineEnding, remove_block, render, upsert_block};
use cue_fs::{ConfigStore, NormalizedPath, io};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix and protocol text for a target kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub prefix: String,
    pub protocol: String,
}

/// Everything `apply` needs, resolved up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub target: PathBuf,
    pub prefix: String,
    pub protocol: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Exists {
        path: PathBuf,
    },
    Initialized {
        path: PathBuf,
        platform: Platform,
        /// `(kind, detected)` for each built-in tool on the current platform.
        detected: Vec<(String, bool)>,
    },
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exists { path } => write!(f, "ok: exists {}", path.display()),
            Self::Initialized {
                path,
                platform,
                detected,
            } => {
                let summary = detected
                    .iter()
                    .map(|(kind, found)| {
                        let state = if *found { "detected" } else { "default" };
                        format!("{}={}", platform.path_key(kind), state)
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "ok: initialized {} (auto-detect: {})",
                    path.display(),
                    summary
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub path: PathBuf,
    /// Whether the target file existed before.
    pub existed: bool,
}

impl fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ok: applied to {}", self.path.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    FileMissing(PathBuf),
    NoBlock(PathBuf),
    Removed(PathBuf),
    DeletedEmptyFile(PathBuf),
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileMissing(path) => write!(f, "ok: file does not exist: {}", path.display()),
            Self::NoBlock(path) => write!(f, "ok: no managed block found in: {}", path.display()),
            Self::Removed(path) => {
                write!(f, "ok: removed managed block from: {}", path.display())
            }
            Self::DeletedEmptyFile(path) => write!(
                f,
                "ok: removed managed block and deleted empty file: {}",
                path.display()
            ),
        }
    }
}

/// Config-driven managed block editor for editor prompt files.
#[derive(Debug)]
pub struct ProtoEditor {
    config_path: PathBuf,
    ctx: ProtoContext,
    store: ConfigStore,
}

impl ProtoEditor {
    pub fn new(config_path: impl Into<PathBuf>, ctx: ProtoContext) -> Self {
        Self {
            config_path: config_path.into(),
            ctx,
            store: ConfigStore::new(),
        }
    }

    /// Editor using the default config location for `ctx`.
    pub fn with_default_config(ctx: ProtoContext) -> Self {
        let config_path = ctx.default_config_path();
        Self::new(config_path, ctx)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn context(&self) -> &ProtoContext {
        &self.ctx
    }

    /// Create the config if it does not exist yet.
    pub fn init(&self) -> Result<InitOutcome> {
        let path = NormalizedPath::new(&self.config_path);
        if path.exists() {
            return Ok(InitOutcome::Exists {
                path: self.config_path.clone(),
            });
        }

        let (document, detected) = self.default_document();
        self.store.save(&path, &document)?;
        tracing::info!(path = %path, "initialized proto config");

        Ok(InitOutcome::Initialized {
            path: self.config_path.clone(),
            platform: self.ctx.platform.clone(),
            detected,
        })
    }

    /// Default document plus which current-platform paths were detected.
    ///
    /// Every known platform gets its default path; for the current platform
    /// an existing candidate location replaces the default.
    fn default_document(&self) -> (ConfigDocument, Vec<(String, bool)>) {
        let mut path = BTreeMap::new();
        let mut prefix = BTreeMap::new();
        let mut detected = Vec::new();

        for tool in TargetTool::ALL {
            for platform in Platform::known() {
                if let Some(default) = tool.default_path(&platform, &self.ctx) {
                    path.insert(
                        platform.path_key(tool.kind()),
                        default.to_string_lossy().into_owned(),
                    );
                }
            }

            let found = tool.detect(&self.ctx);
            if let Some(found) = &found {
                tracing::debug!(kind = tool.kind(), path = %found.display(), "detected target");
                path.insert(
                    self.ctx.platform.path_key(tool.kind()),
                    found.to_string_lossy().into_owned(),
                );
            }
            detected.push((tool.kind().to_string(), found.is_some()));

            prefix.insert(
                tool.kind().to_string(),
                PrefixValue::Lines(tool.default_prefix()),
            );
        }

        let protocol_path = self
            .config_path
            .parent()
            .map(|dir| dir.join(PROTOCOL_FILE))
            .unwrap_or_else(|| PathBuf::from(PROTOCOL_FILE));

        let document = ConfigDocument {
            path,
            prefix,
            protocol_path: protocol_path.to_string_lossy().into_owned(),
        };
        (document, detected)
    }

    /// Load and validate the config, creating it first if missing.
    pub fn load_config(&self) -> Result<ProtoConfig> {
        let path = NormalizedPath::new(&self.config_path);
        if !path.exists() {
            self.init()?;
        }

        let value: Value = self.store.load(&path).map_err(|e| match e {
            cue_fs::Error::ConfigParse { .. } => Error::ConfigInvalidJson {
                path: self.config_path.clone(),
            },
            other => Error::ConfigUnreadable {
                path: self.config_path.clone(),
                source: other,
            },
        })?;

        ProtoConfig::from_value(value, &self.config_path)
    }

    /// Configured target kinds, sorted.
    pub fn list_target_kinds(&self) -> Result<Vec<String>> {
        Ok(self.load_config()?.target_kinds())
    }

    /// Absolute target path for `kind` on the current platform.
    pub fn target_path(&self, kind: &str) -> Result<PathBuf> {
        let config = self.load_config()?;
        self.resolve_target(&config, kind)
    }

    /// Prefix and protocol text for `kind`, without touching the target.
    pub fn render(&self, kind: &str) -> Result<Rendered> {
        let config = self.load_config()?;
        self.render_with(&config, kind)
    }

    /// Resolve target path, prefix, and protocol text for `kind`.
    pub fn resolve(&self, kind: &str) -> Result<Resolved> {
        let config = self.load_config()?;
        let target = self.resolve_target(&config, kind)?;
        let Rendered { prefix, protocol } = self.render_with(&config, kind)?;
        Ok(Resolved {
            target,
            prefix,
            protocol,
        })
    }

    /// Write or refresh the managed block in `kind`'s target file.
    pub fn apply(&self, kind: &str) -> Result<ApplyOutcome> {
        let resolved = self.resolve(kind)?;
        let target = NormalizedPath::new(&resolved.target);

        let existing = io::read_text_if_exists(&target)?;
        let next = match &existing {
            Some(content) => upsert_block(
                content,
                &PROTO_MARKERS,
                Some(&resolved.prefix),
                &resolved.protocol,
                LineEnding::detect(content),
            ),
            None => render(
                &PROTO_MARKERS,
                Some(&resolved.prefix),
                &resolved.protocol,
                self.ctx.default_eol,
            ),
        };

        io::write_text(&target, &next)?;
        tracing::info!(kind, path = %target, existed = existing.is_some(), "applied managed block");

        Ok(ApplyOutcome {
            path: resolved.target,
            existed: existing.is_some(),
        })
    }

    /// Remove the managed block from `kind`'s target file.
    ///
    /// Deletes the file when nothing but whitespace would remain.
    pub fn remove(&self, kind: &str) -> Result<RemoveOutcome> {
        let config = self.load_config()?;
        let target_path = self.resolve_target(&config, kind)?;
        let target = NormalizedPath::new(&target_path);
        // Only used to recognize the header; a missing prefix is fine here.
        let prefix = config.prefix(kind).ok();

        let existing = match io::read_text(&target) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %target, error = %e, "target unreadable, nothing to remove");
                return Ok(RemoveOutcome::FileMissing(target_path));
            }
        };

        let Some(remaining) = remove_block(&existing, &PROTO_MARKERS, prefix) else {
            return Ok(RemoveOutcome::NoBlock(target_path));
        };

        if remaining.trim().is_empty() {
            io::remove_file(&target).map_err(|source| Error::DeleteFailed {
                path: target_path.clone(),
                source,
            })?;
            tracing::info!(kind, path = %target, "removed managed block and deleted file");
            return Ok(RemoveOutcome::DeletedEmptyFile(target_path));
        }

        io::write_text(&target, &remaining)?;
        tracing::info!(kind, path = %target, "removed managed block");
        Ok(RemoveOutcome::Removed(target_path))
    }

    fn resolve_target(&self, config: &ProtoConfig, kind: &str) -> Result<PathBuf> {
        let key = self.ctx.platform.path_key(kind);
        let raw = config.target_path(&key)?;
        Ok(self.ctx.resolve(raw))
    }

    fn render_with(&self, config: &ProtoConfig, kind: &str) -> Result<Rendered> {
        let prefix = config.prefix(kind)?.to_string();

        let raw = config
            .protocol_path()
            .ok_or(Error::ProtocolUnreadable { path: None })?;
        let protocol_path = self.ctx.resolve(raw);
        let protocol = io::read_text(&NormalizedPath::new(&protocol_path)).map_err(|e| {
            tracing::debug!(path = %protocol_path.display(), error = %e, "protocol unreadable");
            Error::ProtocolUnreadable {
                path: Some(protocol_path.clone()),
            }
        })?;

        Ok(Rendered { prefix, protocol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outcome_messages() {
        let path = PathBuf::from("/tmp/t.md");
        assert_eq!(
            ApplyOutcome {
                path: path.clone(),
                existed: false
            }
            .to_string(),
            "ok: applied to /tmp/t.md"
        );
        assert_eq!(
            RemoveOutcome::FileMissing(path.clone()).to_string(),
            "ok: file does not exist: /tmp/t.md"
        );
        assert_eq!(
            RemoveOutcome::NoBlock(path.clone()).to_string(),
            "ok: no managed block found in: /tmp/t.md"
        );
        assert_eq!(
            RemoveOutcome::Removed(path.clone()).to_string(),
            "ok: removed managed block from: /tmp/t.md"
        );
        assert_eq!(
            RemoveOutcome::DeletedEmptyFile(path).to_string(),
            "ok: removed managed block and deleted empty file: /tmp/t.md"
        );
    }

    #[test]
    fn test_init_outcome_message() {
        let outcome = InitOutcome::Initialized {
            path: PathBuf::from("/h/.cue/cueme.json"),
            platform: Platform::Linux,
            detected: vec![("vscode".into(), true), ("kiro".into(), false)],
        };
        assert_eq!(
            outcome.to_string(),
            "ok: initialized /h/.cue/cueme.json (auto-detect: linux.vscode=detected, linux.kiro=default)"
        );
    }
}
