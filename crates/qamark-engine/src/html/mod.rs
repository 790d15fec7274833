//! HTML writer for rendered blocks.
//!
//! Emits semantic, class-free markup; presentation comes from the page
//! stylesheet. All text content is escaped here, so block values can carry
//! raw generated text.

use crate::escape::escape_text;
use crate::parsing::{Block, Inline, ListKind};

/// Stylesheet embedded in standalone pages.
///
/// Element selectors only, matching the markup `render_html` produces.
pub const DEFAULT_STYLESHEET: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; color: #111827; padding: 1rem; }
h1, h2, h3 { color: #000; border-bottom: 1px solid #e5e7eb; padding-bottom: 0.3em; margin-top: 1.5em; }
h1 { font-size: 2em; } h2 { font-size: 1.5em; } h3 { font-size: 1.2em; }
table { border-collapse: collapse; width: 100%; margin-top: 1em; }
th, td { border: 1px solid #d1d5db; padding: 8px; text-align: left; }
th { background-color: #f3f4f6; }
pre { background-color: #f3f4f6; padding: 10px; border-radius: 5px; white-space: pre-wrap; font-family: monospace; }
ul, ol { padding-left: 20px; }
strong { font-weight: 600; }
@media print { body { -webkit-print-color-adjust: exact; print-color-adjust: exact; } }
";

/// Renders blocks to an HTML fragment, one element per block, in order.
pub fn render_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        push_block(&mut out, block);
    }
    out
}

/// Wraps a fragment in a complete standalone document.
///
/// A caller-supplied `stylesheet` replaces the built-in one.
pub fn render_page(blocks: &[Block], title: &str, stylesheet: Option<&str>) -> String {
    let styles = stylesheet.unwrap_or(DEFAULT_STYLESHEET);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_text(title),
        styles,
        render_html(blocks),
    )
}

fn push_block(out: &mut String, block: &Block) {
    match block {
        Block::Heading { level, text } => {
            out.push_str(&format!("<h{level}>{}</h{level}>\n", escape_text(text)));
        }
        Block::Paragraph { text } => {
            out.push_str("<p>");
            push_inlines(out, text);
            out.push_str("</p>\n");
        }
        Block::List { kind, items } => {
            let tag = match kind {
                ListKind::Bullet => "ul",
                ListKind::Numbered => "ol",
            };
            out.push_str(&format!("<{tag}>\n"));
            for item in items {
                out.push_str("<li>");
                push_inlines(out, item);
                out.push_str("</li>\n");
            }
            out.push_str(&format!("</{tag}>\n"));
        }
        Block::Table { header, rows } => {
            out.push_str("<table>\n<thead>\n<tr>");
            for cell in header {
                out.push_str(&format!("<th>{}</th>", escape_text(cell)));
            }
            out.push_str("</tr>\n</thead>\n<tbody>\n");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str(&format!("<td>{}</td>", escape_text(cell)));
                }
                out.push_str("</tr>\n");
            }
            out.push_str("</tbody>\n</table>\n");
        }
        Block::Verbatim { text } => {
            out.push_str(&format!("<pre>{}</pre>\n", escape_text(text)));
        }
    }
}

fn push_inlines(out: &mut String, runs: &[Inline]) {
    for run in runs {
        match run {
            Inline::Text(text) => out.push_str(&escape_text(text)),
            Inline::Strong(text) => {
                out.push_str(&format!("<strong>{}</strong>", escape_text(text)));
            }
        }
    }
}
