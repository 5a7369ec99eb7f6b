//! Rendering of hand built node trees

use leafmark::{render, Attributes, ConvertError, HtmlNode, LeafNode, ParentNode};

#[test]
fn test_staged_tree_is_validated_at_render() {
    let mut list = HtmlNode::Parent(ParentNode {
        tag: Some("ul".to_string()),
        children: vec![],
        attributes: Attributes::new(),
    });
    assert_eq!(render(&list), Err(ConvertError::EmptyChildren));

    if let HtmlNode::Parent(parent) = &mut list {
        parent
            .children
            .push(HtmlNode::parent("li", vec![HtmlNode::text("item")]));
    }
    assert_eq!(render(&list).unwrap(), "<ul><li>item</li></ul>");
}

#[test]
fn test_leaf_value_filled_later() {
    let mut leaf = LeafNode {
        tag: Some("b".to_string()),
        value: None,
        attributes: Attributes::new(),
    };
    assert_eq!(
        render(&HtmlNode::Leaf(leaf.clone())),
        Err(ConvertError::MissingValue)
    );

    leaf.value = Some(String::new());
    assert_eq!(render(&HtmlNode::Leaf(leaf)).unwrap(), "<b></b>");
}

#[test]
fn test_untagged_parent_is_rejected() {
    let node = HtmlNode::Parent(ParentNode {
        tag: None,
        children: vec![HtmlNode::text("x")],
        attributes: Attributes::new(),
    });
    assert_eq!(render(&node), Err(ConvertError::MissingTag));
    assert_eq!(
        ConvertError::MissingTag.to_string(),
        "Parent nodes must have a tag"
    );
}

#[test]
fn test_attribute_values_are_not_escaped() {
    let node = HtmlNode::leaf("a", "q").with_attribute("href", "/search?a=1&b=\"2\"");
    assert_eq!(
        render(&node).unwrap(),
        "<a href=\"/search?a=1&b=\"2\"\">q</a>"
    );
}

#[test]
fn test_attributes_follow_insertion_order() {
    let node = HtmlNode::leaf("img", "")
        .with_attribute("src", "cat.png")
        .with_attribute("alt", "cat")
        .with_attribute("width", "10");
    assert_eq!(
        render(&node).unwrap(),
        "<img src=\"cat.png\" alt=\"cat\" width=\"10\"></img>"
    );
}
