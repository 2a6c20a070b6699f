//! Managed block markers for prompt files.

use cue_blocks::MarkerSet;
use std::sync::LazyLock;

pub const BEGIN_MARKER: &str = "<!-- HUMAN_AGENT_PROTO_BEGIN -->";
pub const END_MARKER: &str = "<!-- HUMAN_AGENT_PROTO_END -->";

// HUAMN is a misspelling found in files written by early releases. It is
// recognized so those blocks get replaced, and never written.
const BEGIN_PATTERN: &str = r"<!--\s*(?:HUMAN|HUAMN)_AGENT_PROTO_BEGIN\s*-->";
const END_PATTERN: &str = r"<!--\s*(?:HUMAN|HUAMN)_AGENT_PROTO_END\s*-->";

pub static PROTO_MARKERS: LazyLock<MarkerSet> = LazyLock::new(|| {
    MarkerSet::with_patterns(BEGIN_MARKER, END_MARKER, BEGIN_PATTERN, END_PATTERN)
        .expect("Invalid proto marker patterns")
});
