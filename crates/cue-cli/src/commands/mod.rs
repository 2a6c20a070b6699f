//! Command implementations for cue-cli

pub mod completions;
pub mod proto;
pub mod shell;

pub use completions::run_completions;
pub use proto::run_proto;
pub use shell::run_shell;
