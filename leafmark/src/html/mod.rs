//! HTML node tree
//!
//! A document converts into a tree of [`HtmlNode`]s: leaves hold text, parents hold an ordered
//! list of children. Structural rules (a parent has a tag and children, a leaf has a value) are
//! checked when rendering rather than when constructing, so a tree can be assembled in stages.
//!
//! # Output Format
//!
//! Rendering produces a compact HTML fragment with no whitespace between elements:
//!
//! - leaf with a tag:      `<tag attrs>value</tag>`
//! - leaf without a tag:   `value`, verbatim
//! - parent:               `<tag attrs>children...</tag>`
//!
//! Attributes are written as `key="value"` in insertion order. Neither text nor attribute
//! values are escaped.

mod serializer;

use serde::Serialize;

pub use serializer::render;

/// Ordered attribute list. Insertion order is preserved on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, replacing the value in place if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

/// A text carrying node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafNode {
    /// `None` renders the value as raw text with no wrapping element.
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

/// A node wrapping an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

/// A node of the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// A leaf wrapped in `tag`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    /// A raw text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        })
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        })
    }

    /// Builder style attribute insertion.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes_mut().insert(key, value);
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &mut leaf.attributes,
            HtmlNode::Parent(parent) => &mut parent.attributes,
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => &parent.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_keep_insertion_order() {
        let attributes: Attributes = [("src", "cat.png"), ("alt", "a cat")].into_iter().collect();
        let pairs: Vec<_> = attributes.iter().collect();
        assert_eq!(pairs, vec![("src", "cat.png"), ("alt", "a cat")]);
    }

    #[test]
    fn test_attributes_insert_replaces_existing_key() {
        let mut attributes = Attributes::new();
        attributes.insert("href", "a");
        attributes.insert("target", "_blank");
        attributes.insert("href", "b");
        let pairs: Vec<_> = attributes.iter().collect();
        assert_eq!(pairs, vec![("href", "b"), ("target", "_blank")]);
        assert_eq!(attributes.get("href"), Some("b"));
    }

    #[test]
    fn test_accessors() {
        let node = HtmlNode::parent("p", vec![HtmlNode::text("x")]).with_attribute("id", "one");
        assert_eq!(node.tag(), Some("p"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.attributes().get("id"), Some("one"));
        assert_eq!(HtmlNode::text("x").tag(), None);
    }
}
