//! Begin/end marker definitions
//!
//! A [`MarkerSet`] pairs the canonical marker literals (what cueme writes)
//! with detection patterns (what cueme recognizes). Detection may be more
//! tolerant than the literals, e.g. to accept a legacy spelling.

use crate::error::{Error, Result};
use regex::Regex;

/// Canonical begin/end markers plus their detection regexes.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    begin: String,
    end: String,
    begin_re: Regex,
    end_re: Regex,
}

impl MarkerSet {
    /// Markers detected by exact literal match only.
    pub fn literal(begin: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let begin = begin.into();
        let end = end.into();
        let begin_pattern = regex::escape(&begin);
        let end_pattern = regex::escape(&end);
        Self::with_patterns(begin, end, &begin_pattern, &end_pattern)
    }

    /// Markers detected by custom patterns.
    ///
    /// Each pattern must match its own canonical marker, otherwise a block
    /// written by cueme could never be found again.
    pub fn with_patterns(
        begin: impl Into<String>,
        end: impl Into<String>,
        begin_pattern: &str,
        end_pattern: &str,
    ) -> Result<Self> {
        let begin = begin.into();
        let end = end.into();
        let begin_re = Regex::new(begin_pattern)?;
        let end_re = Regex::new(end_pattern)?;

        for (re, marker) in [(&begin_re, &begin), (&end_re, &end)] {
            if !re.is_match(marker) {
                return Err(Error::MarkerMismatch {
                    pattern: re.as_str().to_string(),
                    marker: marker.clone(),
                });
            }
        }

        Ok(Self {
            begin,
            end,
            begin_re,
            end_re,
        })
    }

    /// Canonical begin marker.
    pub fn begin(&self) -> &str {
        &self.begin
    }

    /// Canonical end marker.
    pub fn end(&self) -> &str {
        &self.end
    }

    pub(crate) fn begin_re(&self) -> &Regex {
        &self.begin_re
    }

    pub(crate) fn end_re(&self) -> &Regex {
        &self.end_re
    }
}
