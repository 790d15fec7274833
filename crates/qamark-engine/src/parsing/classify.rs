use regex::Regex;
use std::sync::OnceLock;

use super::types::ListKind;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of rendering: each line is classified with one line of
/// look-ahead (for table separator detection) and no other context. The
/// [`BlockBuilder`](super::BlockBuilder) applies open-block state on top.
#[derive(Debug, Clone)]
pub struct LineFacts {
    /// The raw line text, markers included.
    pub text: String,
    /// Whether the line is blank after trimming.
    pub is_blank: bool,
    /// Whether the trimmed line starts with `|`.
    pub pipe_led: bool,
    /// Whether this line opens a table: pipe-led with a separator row as the
    /// next line. A pipe-led line without one is an ordinary paragraph.
    pub table_start: bool,
    /// Heading level and remainder text, if a heading prefix matched.
    pub heading: Option<(u8, String)>,
    /// List marker kind and the text after the marker, if one matched.
    pub list_item: Option<(ListKind, String)>,
}

/// Classifies a line into [`LineFacts`], looking one line ahead.
pub fn classify(line: &str, next: Option<&str>) -> LineFacts {
    let pipe_led = line.trim().starts_with('|');
    let table_start =
        pipe_led && next.is_some_and(|next| separator_regex().is_match(next.trim()));

    LineFacts {
        is_blank: line.trim().is_empty(),
        pipe_led,
        table_start,
        heading: heading_of(line),
        list_item: list_item_of(line),
        text: line.to_string(),
    }
}

/// Splits a pipe row into trimmed cell texts.
///
/// The boundary pipes produce empty leading/trailing fragments which are
/// dropped; interior empty cells are kept.
pub fn split_cells(line: &str) -> Vec<String> {
    let parts: Vec<&str> = line.trim().split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Exactly one prefix is checked per line, longest form first, so `### ` is
/// never also matched as `# `. Prefixes are checked on the raw line; an
/// indented `#` is not a heading.
fn heading_of(line: &str) -> Option<(u8, String)> {
    for (prefix, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some((level, rest.to_string()));
        }
    }
    None
}

fn list_item_of(line: &str) -> Option<(ListKind, String)> {
    if let Some(marker) = numbered_regex().find(line) {
        return Some((ListKind::Numbered, line[marker.end()..].to_string()));
    }
    if let Some(marker) = bullet_regex().find(line) {
        return Some((ListKind::Bullet, line[marker.end()..].to_string()));
    }
    None
}

fn separator_regex() -> &'static Regex {
    static SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_REGEX.get_or_init(|| {
        Regex::new(r"^\|(?:\s*:?-+:?\s*\|)+$").expect("Invalid separator regex")
    })
}

fn bullet_regex() -> &'static Regex {
    static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
    BULLET_REGEX.get_or_init(|| Regex::new(r"^\s*[*-]\s").expect("Invalid bullet regex"))
}

fn numbered_regex() -> &'static Regex {
    static NUMBERED_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBERED_REGEX.get_or_init(|| Regex::new(r"^\s*\d+\.\s").expect("Invalid numbered regex"))
}
