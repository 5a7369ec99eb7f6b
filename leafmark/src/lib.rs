//! Markdown to HTML node tree conversion
//!
//!     This crate converts a small, deliberately constrained markdown dialect into a validated
//!     HTML node tree, and serializes that tree to text.
//!
//!     This is a pure lib: it never touches the filesystem, the environment or stdout. Page
//!     generation, templating and file copying belong to callers (see leafmark-cli).
//!
//! Pipeline
//!
//!     raw text ─▶ blocks (split + classify) ─▶ tree builder ─▶ HtmlNode ─▶ render ─▶ String
//!                                                   │
//!                                                   └─▶ inline pipeline (per block)
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # ConvertError
//!     ├── blocks.rs           # Blank line splitting, classification, prefix helpers
//!     ├── inline
//!     │   ├── mod.rs          # InlineToken and the ordered pass pipeline
//!     │   ├── delimiter.rs    # Bold / italic / code splitting
//!     │   └── references.rs   # Image and link extraction + splitting
//!     ├── builder.rs          # Blocks and tokens to HtmlNode
//!     ├── html
//!     │   ├── mod.rs          # HtmlNode model
//!     │   └── render.rs       # Serialization and render time validation
//!     └── title.rs            # First `# ` heading lookup
//!
//! Supported Grammar
//!
//!     Blocks: `#`..`######` headings, ``` fenced code, `>` quotes, `- ` lists, `1. ` lists and
//!     paragraphs. Inlines: `**bold**`, `_italic_`, `` `code` ``, `[label](url)` and
//!     `![alt](url)`. Nested emphasis, escapes, tables, footnotes and raw HTML are not part of
//!     the dialect. Text is never HTML-escaped.
//!
//! Concurrency
//!
//!     Conversion holds no global mutable state; each call owns all its intermediate values,
//!     so documents can be converted in parallel by the caller.

pub mod blocks;
pub mod builder;
pub mod error;
pub mod html;
pub mod inline;
pub mod title;

pub use blocks::{Block, BlockKind};
pub use builder::ConvertOptions;
pub use error::ConvertError;
pub use html::{render, Attributes, HtmlNode, LeafNode, ParentNode};
pub use inline::{text_to_tokens, InlineToken, TokenKind};
pub use title::extract_title;

/// Convert a markdown document to its HTML node tree, wrapped in a root `div`.
///
/// Fails only with [`ConvertError::UnbalancedDelimiter`].
pub fn convert_document(markdown: &str) -> Result<HtmlNode, ConvertError> {
    convert_document_with_options(markdown, &ConvertOptions::default())
}

/// Convert a markdown document using explicit [`ConvertOptions`].
pub fn convert_document_with_options(
    markdown: &str,
    options: &ConvertOptions,
) -> Result<HtmlNode, ConvertError> {
    builder::build(markdown, options)
}

/// Convert and render in one step.
pub fn render_document(markdown: &str) -> Result<String, ConvertError> {
    render(&convert_document(markdown)?)
}
