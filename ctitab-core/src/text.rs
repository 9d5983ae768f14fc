//! Text normalization

/// Collapse whitespace runs to a single space and trim both ends.
///
/// Newlines, tabs and the ASCII separators U+001C to U+001F count as
/// whitespace. Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_space).filter(|word| !word.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// [`normalize`] for an optional cell
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
