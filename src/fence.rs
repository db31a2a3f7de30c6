//! Markdown fence stripping for descriptions produced by a text generator.
//!
//! Analysis services tend to answer with ```` ```json ... ``` ````. The
//! converter wants bare JSON, so callers strip the fences first.

use once_cell::sync::Lazy;
use regex::Regex;

static OPENING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[A-Za-z0-9_+-]*").expect("valid opening fence regex"));
static CLOSING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```$").expect("valid closing fence regex"));

/// Trim, drop a leading fence (with optional language tag) and a trailing
/// fence, trim again. Either fence may be missing.
pub fn strip_fences(text: &str) -> &str {
    let text = text.trim();
    let text = match OPENING_FENCE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    let text = match CLOSING_FENCE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };
    text.trim()
}
