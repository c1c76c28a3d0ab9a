//! Scalar text cleaning: quote extraction and trailing comment removal.

use std::sync::LazyLock;

use regex::Regex;

/// Leading double- or single-quoted run; backslash escapes stay verbatim.
static QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:"((?:[^"\\]|\\.)*)"|'((?:[^'\\]|\\.)*)')"#).expect("valid quoted scalar pattern")
});

/// Clean a raw scalar taken from the right of `:` or `- `.
///
/// Quoted text yields its inner content, which keeps `#` characters and may be
/// empty. Anything else is cut at the first `#` and trimmed; an empty result
/// means there is no value.
pub fn clean_scalar(raw: &str) -> Option<String> {
    let text = raw.trim();
    if let Some(caps) = QUOTED.captures(text) {
        if let Some(inner) = caps.get(1).or_else(|| caps.get(2)) {
            return Some(inner.as_str().to_string());
        }
    }

    let bare = text.find('#').map_or(text, |pos| &text[..pos]).trim();
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}
