//! Managed region scanning.
//!
//! Only the first begin match and the first end match are considered. A
//! region exists when both are present and the begin marker comes first;
//! any other arrangement is treated as "no region" so that a damaged file is
//! never spliced.

use crate::markers::MarkerSet;

/// Byte span of a managed region within a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Offset of the first byte of the begin marker.
    pub start: usize,
    /// Offset one past the last byte of the end marker.
    pub end: usize,
}

/// Locate the managed region in `content`.
///
/// # Example
/// ```
/// use cue_blocks::{MarkerSet, find_region};
///
/// let markers = MarkerSet::literal("<!-- B -->", "<!-- E -->").unwrap();
/// let content = "intro\n<!-- B -->\nbody\n<!-- E -->\noutro\n";
///
/// let region = find_region(content, &markers).unwrap();
/// assert_eq!(&content[region.start..region.end], "<!-- B -->\nbody\n<!-- E -->");
/// ```
pub fn find_region(content: &str, markers: &MarkerSet) -> Option<Region> {
    let begin = markers.begin_re().find(content)?;
    let end = markers.end_re().find(content)?;

    if end.start() <= begin.start() {
        tracing::debug!(
            begin = begin.start(),
            end = end.start(),
            "end marker precedes begin marker, treating region as absent"
        );
        return None;
    }

    if markers.begin_re().find_iter(content).nth(1).is_some()
        || markers.end_re().find_iter(content).nth(1).is_some()
    {
        tracing::warn!("multiple managed block markers found, using the first pair");
    }

    Some(Region {
        start: begin.start(),
        end: end.end(),
    })
}

/// Whether `content` contains a well-formed managed region.
pub fn has_block(content: &str, markers: &MarkerSet) -> bool {
    find_region(content, markers).is_some()
}
