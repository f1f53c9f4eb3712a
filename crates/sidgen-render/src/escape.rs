//! HTML entity escaping for user-supplied text.

/// Escape the five standard HTML entities.
///
/// Every piece of user text that ends up in element content or an attribute
/// value passes through here exactly once. The ampersand is handled by the
/// single pass itself, so already-escaped input would be double-escaped —
/// callers must only hand in raw text.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
