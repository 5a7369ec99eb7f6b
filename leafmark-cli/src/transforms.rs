//! CLI-specific transforms
//!
//! Each transform dumps one stage of the conversion pipeline:
//!
//! 1. **Blocks** - Raw text → classified blocks
//!    - `blocks-json`: block text and category
//!
//! 2. **Inline lexing** - Block text → inline tokens
//!    - `tokens-json`: token runs per block (one run per list item, none for code)
//!
//! 3. **Tree building** - Blocks → HTML node tree
//!    - `tree-json`: the node tree
//!    - `html`: the rendered fragment
//!
//! ## Extra Parameters
//!
//! - `pretty`: "false" switches JSON output to a single line.

use leafmark::blocks::{self, Block, BlockKind};
use leafmark::{render, text_to_tokens, ConvertOptions, InlineToken};
use serde_json::json;
use std::collections::HashMap;

/// All available CLI transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["blocks-json", "tokens-json", "tree-json", "html"];

/// Transform used when none is given.
pub const DEFAULT_TRANSFORM: &str = "tree-json";

/// Execute a named transform on a markdown source
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &ConvertOptions,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let pretty = extra_params
        .get("pretty")
        .map(|value| value != "false")
        .unwrap_or(true);

    let value = match transform_name {
        "blocks-json" => {
            let blocks = blocks::parse_blocks(source);
            serde_json::to_value(&blocks)
                .map_err(|e| format!("JSON serialization failed: {e}"))?
        }
        "tokens-json" => {
            let entries = blocks::parse_blocks(source)
                .iter()
                .map(|block| {
                    block_token_runs(block)
                        .map(|runs| json!({ "kind": block.kind, "tokens": runs }))
                })
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::Value::Array(entries)
        }
        "tree-json" => {
            let root = leafmark::convert_document_with_options(source, options)
                .map_err(|e| format!("Transform failed: {e}"))?;
            serde_json::to_value(&root)
                .map_err(|e| format!("JSON serialization failed: {e}"))?
        }
        "html" => {
            let root = leafmark::convert_document_with_options(source, options)
                .map_err(|e| format!("Transform failed: {e}"))?;
            return render(&root).map_err(|e| format!("Render failed: {e}"));
        }
        other => return Err(format!("Unknown transform '{other}'")),
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    output.map_err(|e| format!("JSON serialization failed: {e}"))
}

/// Inline token runs of a block, in the order the tree builder lexes them.
fn block_token_runs(block: &Block) -> Result<Vec<Vec<InlineToken>>, String> {
    let raw = block.raw.as_str();
    let texts: Vec<String> = match block.kind {
        BlockKind::Heading { .. } => vec![blocks::strip_heading(raw).to_string()],
        BlockKind::Code => Vec::new(),
        BlockKind::Quote => vec![blocks::strip_quote(raw)],
        BlockKind::Paragraph => vec![blocks::join_paragraph(raw)],
        BlockKind::UnorderedList => blocks::unordered_items(raw)
            .into_iter()
            .map(str::to_string)
            .collect(),
        BlockKind::OrderedList => blocks::ordered_items(raw)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    texts
        .iter()
        .map(|text| text_to_tokens(text).map_err(|e| format!("Transform failed: {e}")))
        .collect()
}
