//! Block splicing: insert-or-replace and removal.
//!
//! Both operations return the complete next content. A region is consumed
//! together with one line ending directly after the end marker, so splicing
//! never leaves a blank-line artifact behind.

use crate::eol::LineEnding;
use crate::markers::MarkerSet;
use crate::parser::{Region, find_region};
use crate::render::{render, render_header};

/// Insert a managed block into `existing`, or replace the one already there.
///
/// `eol` is the line ending used for everything rendered; callers pass the
/// style detected from `existing` (or the platform default for new files).
///
/// With a well-formed region, the span from its begin marker through the end
/// marker and one following `eol` is replaced. A header identical to the
/// rendered `header` directly above the begin marker is treated as part of
/// the managed output, so re-applying never duplicates it. Without a region
/// the block is appended after terminating any unterminated last line.
///
/// ```
/// use cue_blocks::{LineEnding, MarkerSet, upsert_block};
///
/// let markers = MarkerSet::literal("<!-- B -->", "<!-- E -->").unwrap();
/// let once = upsert_block("notes\n", &markers, None, "v1", LineEnding::Lf);
/// assert_eq!(once, "notes\n<!-- B -->\nv1\n<!-- E -->\n");
///
/// let twice = upsert_block(&once, &markers, None, "v2", LineEnding::Lf);
/// assert_eq!(twice, "notes\n<!-- B -->\nv2\n<!-- E -->\n");
/// ```
pub fn upsert_block(
    existing: &str,
    markers: &MarkerSet,
    header: Option<&str>,
    body: &str,
    eol: LineEnding,
) -> String {
    let rendered = render(markers, header, body, eol);

    match find_region(existing, markers) {
        Some(region) => {
            let (start, end) = managed_span(existing, region, header, eol);
            let mut out = String::with_capacity(existing.len() + rendered.len());
            out.push_str(&existing[..start]);
            out.push_str(&rendered);
            out.push_str(&existing[end..]);
            out
        }
        None => {
            let mut out = existing.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push_str(eol.as_str());
            }
            out.push_str(&rendered);
            out
        }
    }
}

/// Remove the managed block from `existing`.
///
/// Returns `None` when there is no well-formed region (the content must then
/// be left untouched). The line ending consumed after the end marker is the
/// one detected from `existing`. A header matching `header` directly above
/// the begin marker is removed along with the block.
///
/// ```
/// use cue_blocks::{MarkerSet, remove_block};
///
/// let markers = MarkerSet::literal("<!-- B -->", "<!-- E -->").unwrap();
/// let content = "top\n<!-- B -->\nx\n<!-- E -->\nbottom\n";
/// assert_eq!(remove_block(content, &markers, None).as_deref(), Some("top\nbottom\n"));
/// assert_eq!(remove_block("top\n", &markers, None), None);
/// ```
pub fn remove_block(existing: &str, markers: &MarkerSet, header: Option<&str>) -> Option<String> {
    let region = find_region(existing, markers)?;
    let eol = LineEnding::detect(existing);
    let (start, end) = managed_span(existing, region, header, eol);

    let mut out = String::with_capacity(existing.len() - (end - start));
    out.push_str(&existing[..start]);
    out.push_str(&existing[end..]);
    Some(out)
}

/// Widen a marker region to everything cueme owns: a matching header above
/// it and one line ending after it.
fn managed_span(
    existing: &str,
    region: Region,
    header: Option<&str>,
    eol: LineEnding,
) -> (usize, usize) {
    let before = &existing[..region.start];
    let start = match header.and_then(|h| render_header(h, eol)) {
        Some(rendered) if before.ends_with(&rendered) => region.start - rendered.len(),
        _ => region.start,
    };

    let after = &existing[region.end..];
    let end = if after.starts_with(eol.as_str()) {
        region.end + eol.as_str().len()
    } else {
        region.end
    };

    (start, end)
}
