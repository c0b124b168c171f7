use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+)\. ").unwrap());

/// Structural type of a block, decided from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockKind::Heading => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::UnorderedList => "unordered_list",
            BlockKind::OrderedList => "ordered_list",
            BlockKind::Paragraph => "paragraph",
        })
    }
}

/// Splits a document into blocks on blank lines.
///
/// Only the exact `"\n\n"` boundary separates blocks. Each piece is trimmed
/// and empty pieces are dropped, so runs of three or more newlines are
/// harmless.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    let blocks: Vec<&str> = markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect();
    log::debug!("Split document into {} blocks", blocks.len());
    blocks
}

/// Number of leading `#`s if `block` opens with a 1-6 level heading marker.
pub(crate) fn heading_level(block: &str) -> Option<usize> {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    // Must be followed by a space
    block[hashes..].starts_with(' ').then_some(hashes)
}

/// Length of the `<n>. ` prefix and the number it carries.
pub(crate) fn ordered_item_prefix(line: &str) -> Option<(usize, usize)> {
    let caps = ORDERED_ITEM.captures(line)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    Some((caps.get(0)?.end(), number))
}

fn is_heading(block: &str) -> bool {
    heading_level(block).is_some()
}

fn is_code(block: &str) -> bool {
    block.starts_with("```") && block.trim().ends_with("```")
}

fn is_quote(lines: &[&str]) -> bool {
    lines.iter().all(|line| line.starts_with('>'))
}

fn is_unordered_list(lines: &[&str]) -> bool {
    lines.iter().all(|line| line.starts_with("- "))
}

/// Every line must be `<n>. ` and the numbers must read exactly 1, 2, ..., N.
fn is_ordered_list(lines: &[&str]) -> bool {
    let numbers: Option<Vec<usize>> = lines
        .iter()
        .map(|line| ordered_item_prefix(line).map(|(_, n)| n))
        .collect();
    match numbers {
        Some(numbers) => numbers.into_iter().eq(1..=lines.len()),
        None => false,
    }
}

/// Classifies a block. Rules are tried in priority order and the first
/// match wins; anything unmatched is a paragraph.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    let kind = if is_heading(block) {
        BlockKind::Heading
    } else if is_code(block) {
        BlockKind::Code
    } else if is_quote(&lines) {
        BlockKind::Quote
    } else if is_unordered_list(&lines) {
        BlockKind::UnorderedList
    } else if is_ordered_list(&lines) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };

    log::debug!("Classified block ({} lines) as {kind}", lines.len());
    kind
}

#[cfg(test)]
mod tests {
    mod blanklines;
    mod blockquotes;
    mod code_blocks;
    mod headings;
    mod helpers;
    mod lists;
    mod priority;
}
