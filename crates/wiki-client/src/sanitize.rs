//! Markup removal for article extracts.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<`, then anything up to the next `>`, then the `>` if there is one.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>?").expect("Failed to compile tag pattern"));

/// Removes every angle-bracket token from `text` in a single pass.
///
/// Entities are left as-is and an unterminated `<` swallows the rest of the input.
/// Text without `<` is returned unchanged.
pub fn strip_markup(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}
