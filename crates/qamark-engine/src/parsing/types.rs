use serde::Serialize;

/// Content-type signal supplied by the caller.
///
/// Prose reports run through the markdown renderer; code-like output (e.g.
/// generated automation code or pipeline YAML) takes the verbatim path and
/// is escaped at write time instead of being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Prose,
    Code,
}

/// Which wrapping element a list block renders with.
///
/// The first item line of a run fixes the kind for the whole block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// `-` or `*` markers, rendered as `<ul>`.
    Bullet,
    /// `1.`-style markers, rendered as `<ol>`.
    Numbered,
}

/// One inline run of paragraph or list-item text.
///
/// Bold runs never nest; an unmatched `**` stays literal inside a `Text` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    /// Plain text, stored unescaped.
    Text(String),
    /// A `**bold**` span, stored without its markers.
    Strong(String),
}

/// One structural unit of rendered output.
///
/// Blocks are produced in source-line order and carry raw (unescaped) text;
/// escaping is a concern of the HTML writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A `#`/`##`/`###` heading. Level is 1 to 3; bold substitution does not
    /// apply to heading text.
    Heading { level: u8, text: String },
    /// A single non-blank line of prose after inline substitution.
    Paragraph { text: Vec<Inline> },
    /// A run of consecutive list-item lines.
    List {
        kind: ListKind,
        items: Vec<Vec<Inline>>,
    },
    /// A pipe-table: header row plus zero or more body rows. Cells are plain
    /// text, no inline substitution.
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Code-like output carried unparsed for escaped monospace display.
    Verbatim { text: String },
}
