pub mod classify;
pub mod inline;
pub mod types;

mod builder;

pub use builder::BlockBuilder;
pub use types::{Block, Inline, ListKind, OutputKind};

use classify::classify;

/// Renders a prose report into an ordered sequence of [`Block`]s.
///
/// Total over any input: malformed constructs degrade to paragraphs, an
/// empty input produces no blocks, and nothing here panics. Lines are
/// classified top to bottom with one line of look-ahead for table
/// separators; a list or table still open at end of input is closed
/// implicitly.
pub fn parse_report(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut builder = BlockBuilder::new();

    for (i, line) in lines.iter().enumerate() {
        let facts = classify(line, lines.get(i + 1).copied());
        builder.push(&facts);
    }

    builder.finish()
}

/// Renders backend output according to the caller-supplied content kind.
///
/// The kind comes from the surrounding display logic (e.g. which generator
/// produced the output). Code-like output bypasses the markdown renderer and
/// is carried as a single verbatim block.
pub fn render_output(text: &str, kind: OutputKind) -> Vec<Block> {
    match kind {
        OutputKind::Prose => parse_report(text),
        OutputKind::Code => vec![Block::Verbatim {
            text: text.to_string(),
        }],
    }
}
