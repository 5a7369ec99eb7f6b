//! HTML serialization of the node tree

use super::{Attributes, HtmlNode, LeafNode, ParentNode};
use crate::error::ConvertError;

/// Render a node and its descendants to an HTML string.
pub fn render(node: &HtmlNode) -> Result<String, ConvertError> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

fn write_node(node: &HtmlNode, out: &mut String) -> Result<(), ConvertError> {
    match node {
        HtmlNode::Leaf(leaf) => write_leaf(leaf, out),
        HtmlNode::Parent(parent) => write_parent(parent, out),
    }
}

fn write_leaf(leaf: &LeafNode, out: &mut String) -> Result<(), ConvertError> {
    let value = leaf.value.as_deref().ok_or(ConvertError::MissingValue)?;
    match leaf.tag.as_deref() {
        None => out.push_str(value),
        Some(tag) => {
            open_tag(tag, &leaf.attributes, out);
            out.push_str(value);
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn write_parent(parent: &ParentNode, out: &mut String) -> Result<(), ConvertError> {
    let tag = parent
        .tag
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .ok_or(ConvertError::MissingTag)?;
    if parent.children.is_empty() {
        return Err(ConvertError::EmptyChildren);
    }

    open_tag(tag, &parent.attributes, out);
    for child in &parent.children {
        write_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes_to_html(attributes));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Serialize attributes as ` key="value"` pairs, or an empty string when there are none.
pub(crate) fn attributes_to_html(attributes: &Attributes) -> String {
    if attributes.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = attributes
        .iter()
        .map(|(key, value)| format!("{key}=\"{value}\""))
        .collect();
    format!(" {}", pairs.join(" "))
}
