//! Rendering of managed blocks and their optional header.

use crate::eol::{self, LineEnding};
use crate::markers::MarkerSet;

/// Render `body` wrapped in the canonical markers.
///
/// The body's own line endings are normalized and one trailing newline is
/// dropped; every emitted line, markers included, ends with `eol`.
///
/// ```
/// use cue_blocks::{LineEnding, MarkerSet, render_block};
///
/// let markers = MarkerSet::literal("<!-- B -->", "<!-- E -->").unwrap();
/// assert_eq!(
///     render_block(&markers, "Hello\n", LineEnding::Lf),
///     "<!-- B -->\nHello\n<!-- E -->\n"
/// );
/// ```
pub fn render_block(markers: &MarkerSet, body: &str, eol: LineEnding) -> String {
    let body_lines = eol::lines(body);
    let mut lines: Vec<&str> = Vec::with_capacity(body_lines.len() + 2);
    lines.push(markers.begin());
    lines.extend(body_lines.iter().map(String::as_str));
    lines.push(markers.end());

    let mut out = lines.join(eol.as_str());
    out.push_str(eol.as_str());
    out
}

/// Render the header section written above the begin marker: the header
/// lines followed by one blank line. Blank headers render to `None`.
pub fn render_header(header: &str, eol: LineEnding) -> Option<String> {
    if header.trim().is_empty() {
        return None;
    }
    let mut out = eol::lines(header).join(eol.as_str());
    out.push_str(eol.as_str());
    out.push_str(eol.as_str());
    Some(out)
}

/// Render the full managed output: optional header, then the block.
pub fn render(markers: &MarkerSet, header: Option<&str>, body: &str, eol: LineEnding) -> String {
    let mut out = header
        .and_then(|h| render_header(h, eol))
        .unwrap_or_default();
    out.push_str(&render_block(markers, body, eol));
    out
}
