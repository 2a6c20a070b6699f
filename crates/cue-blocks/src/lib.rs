//! Managed block scanning and splicing for cueme.
//!
//! A managed block is a span of a text file delimited by a begin marker and
//! an end marker. Everything outside the span belongs to the user and is
//! preserved byte for byte; the span itself is owned and rewritten by cueme.
//!
//! ```text
//! <!-- HUMAN_AGENT_PROTO_BEGIN -->
//! payload lines
//! <!-- HUMAN_AGENT_PROTO_END -->
//! ```
//!
//! The markers themselves are supplied by the caller as a [`MarkerSet`], so
//! the same splice rules apply to HTML-comment markers in Markdown prompt
//! files and `#`-comment markers in shell profiles.
//!
//! All functions here are pure string computations. Persisting the result
//! is the caller's job.

pub mod eol;
pub mod error;
pub mod markers;
pub mod parser;
pub mod render;
pub mod writer;

pub use eol::LineEnding;
pub use error::{Error, Result};
pub use markers::MarkerSet;
pub use parser::{Region, find_region, has_block};
pub use render::{render, render_block, render_header};
pub use writer::{remove_block, upsert_block};
