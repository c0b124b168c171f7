pub mod block_parser;
pub mod config;
pub mod error;
pub mod html;
pub mod inline_parser;
pub mod parser;
pub mod span;

pub use block_parser::{BlockKind, block_to_block_kind, markdown_to_blocks};
pub use config::Config;
pub use error::{Error, Result};
pub use html::{Attributes, LeafNode, ParentNode, RenderNode};
pub use inline_parser::text_to_spans;
pub use parser::{extract_title, markdown_to_html_node};
pub use span::{InlineSpan, SpanKind};

/// Renders a Markdown document to an HTML string.
///
/// The output is a single `<div>` wrapping one element per block.
///
/// # Examples
///
/// ```rust
/// let html = mdhtml::render("# Title").unwrap();
/// assert_eq!(html, "<div><h1>Title</h1></div>");
/// ```
pub fn render(input: &str) -> Result<String> {
    markdown_to_html_node(input)?.to_html()
}

/// Like [`render`], honouring the line ending and title settings in `config`.
pub fn render_with(input: &str, config: &Config) -> Result<String> {
    let normalized;
    let input = if config.normalize_line_endings() {
        normalized = input.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        input
    };

    if config.require_title() {
        extract_title(input)?;
    }

    render(input)
}
