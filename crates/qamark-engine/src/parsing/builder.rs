use super::classify::{LineFacts, split_cells};
use super::inline::parse_inline;
use super::types::{Block, Inline, ListKind};

/// The block currently being accumulated, if any.
///
/// Invariant: a list and a table are never open at the same time. A table
/// opener closes an open list before the table opens, and any non-pipe line
/// closes an open table before it is classified further.
#[derive(Debug)]
enum OpenBlock {
    None,
    List {
        kind: ListKind,
        items: Vec<Vec<Inline>>,
    },
    Table {
        header: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Accumulates classified lines into [`Block`]s.
///
/// Lines are pushed top to bottom; predicate order (open table, heading,
/// table start, list item, blank, paragraph) carries the tie-breaks between
/// line classes. `finish` closes whatever is still open at end of input.
#[derive(Debug)]
pub struct BlockBuilder {
    open: OpenBlock,
    skip_separator: bool,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            skip_separator: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, facts: &LineFacts) {
        if self.skip_separator {
            // The separator row under a table header produces no output.
            self.skip_separator = false;
            return;
        }

        // An open table swallows every pipe-led line as a body row; the
        // first non-pipe line closes it and is then classified normally.
        if matches!(self.open, OpenBlock::Table { .. }) {
            if facts.pipe_led {
                self.push_row(split_cells(&facts.text));
                return;
            }
            self.flush();
        }

        if let Some((level, text)) = &facts.heading {
            self.flush();
            self.out.push(Block::Heading {
                level: *level,
                text: text.clone(),
            });
            return;
        }

        if facts.table_start {
            self.flush();
            self.open = OpenBlock::Table {
                header: split_cells(&facts.text),
                rows: vec![],
            };
            self.skip_separator = true;
            return;
        }

        if let Some((kind, text)) = &facts.list_item {
            let item = parse_inline(text);
            match &mut self.open {
                // Consecutive items join the open run; the first line of the
                // run already fixed its kind.
                OpenBlock::List { items, .. } => items.push(item),
                _ => {
                    self.open = OpenBlock::List {
                        kind: *kind,
                        items: vec![item],
                    }
                }
            }
            return;
        }

        // Any other line closes an open list; non-blank remainders become
        // paragraphs of their own.
        self.flush();
        if !facts.is_blank {
            self.out.push(Block::Paragraph {
                text: parse_inline(&facts.text),
            });
        }
    }

    /// Closes the builder, flushing a still-open list or table.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.out
    }

    fn push_row(&mut self, cells: Vec<String>) {
        if let OpenBlock::Table { rows, .. } = &mut self.open {
            rows.push(cells);
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::List { kind, items } => self.out.push(Block::List { kind, items }),
            OpenBlock::Table { header, rows } => self.out.push(Block::Table { header, rows }),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
