//! Block splitting and classification.
//!
//!     A document is cut into blocks on blank lines. Each block is then classified purely from
//!     its own text, checking categories in a fixed precedence order:
//!
//!         1. heading          1 to 6 `#` followed by a space
//!         2. code             starts and ends with a ``` fence
//!         3. quote            every line starts with `>`
//!         4. unordered list   every line starts with `- `
//!         5. ordered list     line i starts with `{i+1}. `
//!         6. paragraph        anything else
//!
//!     The first match wins. The prefix helpers below are the inverse of the checks and are
//!     used by the tree builder to recover the block's inner text.

use serde::Serialize;

const CODE_FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Structural category of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    Heading { level: usize },
    Code,
    Quote,
    OrderedList,
    UnorderedList,
    Paragraph,
}

/// A trimmed chunk of the source document with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub raw: String,
    pub kind: BlockKind,
}

impl Block {
    /// Classify `raw` and wrap it.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = classify(&raw);
        Self { raw, kind }
    }
}

/// Split a document on blank lines into trimmed, non empty blocks.
pub fn blocks_of(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Split and classify a whole document.
pub fn parse_blocks(document: &str) -> Vec<Block> {
    let blocks: Vec<Block> = blocks_of(document).into_iter().map(Block::new).collect();
    log::debug!("split document into {} block(s)", blocks.len());
    blocks
}

/// Determine the category of a single block.
pub fn classify(block: &str) -> BlockKind {
    let kind = if let Some(level) = heading_level(block) {
        BlockKind::Heading { level }
    } else if is_code(block) {
        BlockKind::Code
    } else if block.lines().all(|line| line.starts_with('>')) {
        BlockKind::Quote
    } else if block.lines().all(|line| line.starts_with("- ")) {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };
    log::trace!("classified block as {kind:?}");
    kind
}

/// Number of leading `#` when they form a valid heading marker.
pub fn heading_level(block: &str) -> Option<usize> {
    let level = block.chars().take_while(|c| *c == '#').count();
    if (1..=MAX_HEADING_LEVEL).contains(&level) && block[level..].starts_with(' ') {
        Some(level)
    } else {
        None
    }
}

fn is_code(block: &str) -> bool {
    block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(index, line)| line.starts_with(&ordered_marker(index)))
}

fn ordered_marker(index: usize) -> String {
    format!("{}. ", index + 1)
}

/// Heading text with the `#` marker and surrounding whitespace removed.
pub fn strip_heading(block: &str) -> &str {
    block.trim_start_matches('#').trim()
}

/// Split a fenced code block into its info string and body.
///
/// The whole opening fence line is removed, so `"```rust\nfn x() {}\n```"` gives
/// `(Some("rust"), "fn x() {}\n")`. A one line block like "```" has an empty body.
pub fn strip_code_fence(block: &str) -> (Option<&str>, &str) {
    let inner = block.strip_prefix(CODE_FENCE).unwrap_or(block);
    let (info, body) = match inner.split_once('\n') {
        Some((info, body)) => (info.trim(), body),
        None => ("", inner),
    };
    let body = body.strip_suffix(CODE_FENCE).unwrap_or(body);
    let info = if info.is_empty() || info.contains(CODE_FENCE) {
        None
    } else {
        Some(info)
    };
    (info, body)
}

/// Quote text with the `>` marker (and one following space) removed from every line.
pub fn strip_quote(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Paragraph text with hard line breaks collapsed to single spaces.
pub fn join_paragraph(block: &str) -> String {
    block.lines().collect::<Vec<_>>().join(" ")
}

/// Item texts of an unordered list.
pub fn unordered_items(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(|line| line.strip_prefix("- ").unwrap_or(line))
        .collect()
}

/// Item texts of an ordered list.
pub fn ordered_items(block: &str) -> Vec<&str> {
    block
        .lines()
        .enumerate()
        .map(|(index, line)| line.strip_prefix(ordered_marker(index).as_str()).unwrap_or(line))
        .collect()
}
