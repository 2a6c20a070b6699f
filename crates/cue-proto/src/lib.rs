//! Protocol payload injection for cueme.
//!
//! Editors (VS Code, Windsurf, Kiro, ...) each read agent instructions from a
//! prompt/rules file at a tool-specific location. This crate keeps the
//! human-agent protocol snippet inside a managed block in each of those
//! files, driven by a small JSON configuration:
//!
//! ```json
//! {
//!   "cueme.proto.path":   { "macos.kiro": "~/.kiro/steering/cueme_proto.md" },
//!   "cueme.proto.prefix": { "kiro": [] },
//!   "cueme.proto.protocol_path": "~/.cue/protocol.md"
//! }
//! ```
//!
//! [`ProtoEditor`] exposes the `init`, `ls`, `render`, `path`, `apply` and
//! `remove` operations over that configuration.

pub mod config;
pub mod context;
pub mod detect;
pub mod editor;
pub mod error;
pub mod markers;
pub mod platform;

pub use config::{PrefixValue, ProtoConfig};
pub use context::ProtoContext;
pub use editor::{ApplyOutcome, InitOutcome, ProtoEditor, RemoveOutcome, Rendered, Resolved};
pub use error::{Error, ErrorKind, Result};
pub use platform::Platform;
