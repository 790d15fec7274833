//! Escaping for safe verbatim display.

use std::borrow::Cow;

/// Escapes raw text so it can sit inside markup without being interpreted as
/// markup itself.
///
/// The five characters with special meaning (`&`, `<`, `>`, `"`, `'`) map to
/// entities in a single left-to-right pass, so entity text produced for one
/// character is never re-escaped. Every other character, including
/// whitespace and newlines, passes through untouched. Total function; the
/// output may be longer than the input.
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(raw)
}
