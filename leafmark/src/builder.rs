//! Tree construction: classified blocks and inline tokens to HTML nodes.
//!
//!     | Block           | Node                                      |
//!     |-----------------|-------------------------------------------|
//!     | Heading(n)      | `<hN>` with inline children               |
//!     | Code            | `<pre><code>` with one raw text leaf      |
//!     | Quote           | `<blockquote>` with inline children       |
//!     | Paragraph       | `<p>` with inline children                |
//!     | UnorderedList   | `<ul>` of `<li>` with inline children     |
//!     | OrderedList     | `<ol>` of `<li>` with inline children     |
//!
//!     | Token   | Leaf                                   |
//!     |---------|----------------------------------------|
//!     | Plain   | raw text                               |
//!     | Bold    | `<b>`                                  |
//!     | Italic  | `<i>`                                  |
//!     | Code    | `<code>`                               |
//!     | Link    | `<a href="target">label</a>`           |
//!     | Image   | `<img src="target" alt="label"></img>` |
//!
//! Code block bodies never go through the inline pipeline.
//!
//! Every parent produced here has at least one child: when the inline pipeline yields no
//! tokens (e.g. a paragraph made only of `****`) an empty text leaf stands in, and an empty
//! document becomes an empty root container.

use crate::blocks::{self, Block, BlockKind};
use crate::error::ConvertError;
use crate::html::HtmlNode;
use crate::inline::{text_to_tokens, InlineToken, TokenKind};

/// Knobs for tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Tag of the container wrapping every block.
    pub root_tag: String,
    /// Add `class="language-<info>"` to `<code>` when the fence carries an info string.
    pub code_language_class: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root_tag: "div".to_string(),
            code_language_class: true,
        }
    }
}

impl ConvertOptions {
    pub fn with_root_tag(mut self, tag: impl Into<String>) -> Self {
        self.root_tag = tag.into();
        self
    }

    pub fn with_code_language_class(mut self, enabled: bool) -> Self {
        self.code_language_class = enabled;
        self
    }
}

/// Build the node tree for a whole document.
pub fn build(document: &str, options: &ConvertOptions) -> Result<HtmlNode, ConvertError> {
    let children = blocks::parse_blocks(document)
        .iter()
        .map(|block| block_to_node(block, options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(options.root_tag.clone(), non_empty(children)))
}

/// Build the node for one classified block.
pub fn block_to_node(block: &Block, options: &ConvertOptions) -> Result<HtmlNode, ConvertError> {
    let raw = block.raw.as_str();
    match block.kind {
        BlockKind::Heading { level } => Ok(HtmlNode::parent(
            format!("h{level}"),
            inline_children(blocks::strip_heading(raw))?,
        )),
        BlockKind::Code => Ok(code_to_node(raw, options)),
        BlockKind::Quote => Ok(HtmlNode::parent(
            "blockquote",
            inline_children(&blocks::strip_quote(raw))?,
        )),
        BlockKind::Paragraph => Ok(HtmlNode::parent(
            "p",
            inline_children(&blocks::join_paragraph(raw))?,
        )),
        BlockKind::UnorderedList => list_to_node("ul", &blocks::unordered_items(raw)),
        BlockKind::OrderedList => list_to_node("ol", &blocks::ordered_items(raw)),
    }
}

fn code_to_node(raw: &str, options: &ConvertOptions) -> HtmlNode {
    let (info, body) = blocks::strip_code_fence(raw);
    let mut code = HtmlNode::parent("code", vec![HtmlNode::text(body)]);
    if let (true, Some(language)) = (options.code_language_class, info) {
        code = code.with_attribute("class", format!("language-{language}"));
    }
    HtmlNode::parent("pre", vec![code])
}

fn list_to_node(tag: &str, items: &[&str]) -> Result<HtmlNode, ConvertError> {
    let children = items
        .iter()
        .map(|item| inline_children(item).map(|nodes| HtmlNode::parent("li", nodes)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(tag, children))
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    let nodes = text_to_tokens(text)?.iter().map(token_to_node).collect();
    Ok(non_empty(nodes))
}

fn non_empty(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    if nodes.is_empty() {
        vec![HtmlNode::text("")]
    } else {
        nodes
    }
}

/// Map an inline token to its leaf node.
pub fn token_to_node(token: &InlineToken) -> HtmlNode {
    let content = token.content.as_str();
    let target = token.target.as_deref().unwrap_or_default();
    match token.kind {
        TokenKind::Plain => HtmlNode::text(content),
        TokenKind::Bold => HtmlNode::leaf("b", content),
        TokenKind::Italic => HtmlNode::leaf("i", content),
        TokenKind::Code => HtmlNode::leaf("code", content),
        TokenKind::Link => HtmlNode::leaf("a", content).with_attribute("href", target),
        TokenKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", target)
            .with_attribute("alt", content),
    }
}
