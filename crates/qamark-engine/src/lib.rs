pub mod escape;
pub mod html;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use escape::escape_text;
pub use html::{DEFAULT_STYLESHEET, render_html, render_page};
pub use parsing::{Block, BlockBuilder, Inline, ListKind, OutputKind, parse_report, render_output};
