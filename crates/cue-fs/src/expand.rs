//! Path expansion for user-supplied configuration values
//!
//! Configured paths may start with `~` and may contain Windows-style
//! `%NAME%` placeholders. Relative results are resolved against a base
//! directory (normally the process working directory).

use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z0-9_]+)%").expect("Invalid env placeholder regex"));

/// Expand a leading `~` and `%NAME%` placeholders.
///
/// `lookup` resolves environment variables; unknown names expand to the
/// empty string. Without a home directory a leading `~` is left as-is.
pub fn expand_path<F>(raw: &str, home: Option<&Path>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut expanded = raw.to_string();

    if let Some(home) = home
        && (raw == "~" || raw.starts_with("~/") || raw.starts_with("~\\"))
    {
        let rest = raw.get(2..).unwrap_or("");
        expanded = home.join(rest).to_string_lossy().into_owned();
    }

    ENV_PLACEHOLDER
        .replace_all(&expanded, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

/// Expand `raw` and make it absolute against `base`.
pub fn resolve_path<F>(raw: &str, home: Option<&Path>, base: &Path, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let expanded = PathBuf::from(expand_path(raw, home, lookup));
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
