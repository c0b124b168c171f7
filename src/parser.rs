use crate::block_parser::{
    BlockKind, block_to_block_kind, markdown_to_blocks, ordered_item_prefix,
};
use crate::error::{Error, Result};
use crate::html::{LeafNode, ParentNode, RenderNode};
use crate::inline_parser::text_to_spans;
use crate::span::spans_to_nodes;

fn inline_children(text: &str) -> Result<Vec<RenderNode>> {
    spans_to_nodes(&text_to_spans(text))
}

fn heading_to_node(block: &str) -> Result<ParentNode> {
    let after_hashes = block.trim_start_matches('#');
    let level = block.len() - after_hashes.len();
    // Only one space belongs to the marker
    let text = after_hashes.strip_prefix(' ').unwrap_or(after_hashes);
    Ok(ParentNode::new(format!("h{level}"), inline_children(text)?))
}

fn code_to_node(block: &str) -> ParentNode {
    let lines: Vec<&str> = block.split('\n').collect();
    let inner = match lines.len() {
        0..=2 => String::new(),
        n => lines[1..n - 1].join("\n"),
    };
    let mut content = textwrap::dedent(&inner);
    content.push('\n');
    ParentNode::new("pre", vec![LeafNode::new("code", content).into()])
}

fn quote_to_node(block: &str) -> Result<ParentNode> {
    let text = block
        .split('\n')
        .map(|line| line.trim_start_matches(['>', ' ']).trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(ParentNode::new("blockquote", inline_children(&text)?))
}

fn list_to_node(tag: &str, items: Vec<&str>) -> Result<ParentNode> {
    let mut children: Vec<RenderNode> = Vec::with_capacity(items.len());
    for item in items {
        children.push(ParentNode::new("li", inline_children(item)?).into());
    }
    Ok(ParentNode::new(tag, children))
}

fn unordered_list_to_node(block: &str) -> Result<ParentNode> {
    let items = block
        .split('\n')
        .map(|line| line.strip_prefix("- ").unwrap_or(line))
        .collect();
    list_to_node("ul", items)
}

fn ordered_list_to_node(block: &str) -> Result<ParentNode> {
    let items = block
        .split('\n')
        .map(|line| match ordered_item_prefix(line) {
            // The marker owns every space after the dot
            Some((prefix_len, _)) => line[prefix_len..].trim_start_matches(' '),
            None => line,
        })
        .collect();
    list_to_node("ol", items)
}

fn paragraph_to_node(block: &str) -> Result<ParentNode> {
    let text = block.split_whitespace().collect::<Vec<_>>().join(" ");
    Ok(ParentNode::new("p", inline_children(&text)?))
}

fn block_to_node(block: &str, kind: BlockKind) -> Result<ParentNode> {
    match kind {
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => Ok(code_to_node(block)),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
        BlockKind::Paragraph => paragraph_to_node(block),
    }
}

/// Builds the HTML tree for a whole document.
///
/// The result is always a `div` holding one child element per block, in
/// document order. Code block contents are emitted verbatim; every other
/// block has its text run through the inline tokenizer.
pub fn markdown_to_html_node(markdown: &str) -> Result<RenderNode> {
    log::debug!("Starting document assembly");

    let mut children = Vec::new();
    for (idx, block) in markdown_to_blocks(markdown).into_iter().enumerate() {
        let kind = block_to_block_kind(block);
        log::debug!("Converting block {} as {kind}", idx + 1);
        children.push(block_to_node(block, kind)?.into());
    }

    Ok(ParentNode::new("div", children).into())
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Text of the first line starting with `# `, trimmed.
///
/// Lines break on any Unicode line boundary, including a lone `\r`.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split(is_line_break)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(Error::NoTitleFound)
}
