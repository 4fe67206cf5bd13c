//! Preprocessor marker stripping.
//!
//! The preprocessor wraps embedded statements in begin/end marker
//! strings. The graph stores the text between the markers verbatim.

/// Strips begin/end markers from tagged lines and joins the remainder.
///
/// Each line is trimmed, a leading begin marker and a trailing end
/// marker are removed where present, and non-empty remainders are
/// joined with newlines. Lines without markers pass through unchanged.
#[must_use]
pub fn untagged_text(lines: &[String], begin_tag: &str, end_tag: &str) -> String {
    let mut result = Vec::new();

    for line in lines {
        let mut text = line.trim();
        if let Some(rest) = text.strip_prefix(begin_tag) {
            text = rest.trim_start();
        }
        if let Some(rest) = text.strip_suffix(end_tag) {
            text = rest.trim_end();
        }
        if !text.is_empty() {
            result.push(text);
        }
    }

    result.join("\n")
}
