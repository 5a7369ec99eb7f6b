//! Whole document conversion tests (markdown → HTML)

use insta::assert_snapshot;
use leafmark::blocks::{blocks_of, parse_blocks};
use leafmark::{
    convert_document, convert_document_with_options, render, render_document, BlockKind,
    ConvertError, ConvertOptions, HtmlNode,
};

fn md_to_html(md: &str) -> String {
    render_document(md).expect("document to convert and render")
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_heading_round_trip() {
    assert_snapshot!(md_to_html("# Title"), @"<div><h1>Title</h1></div>");
}

#[test]
fn test_heading_levels() {
    let md = "# One\n\n## Two\n\n###### Six";
    assert_snapshot!(md_to_html(md), @"<div><h1>One</h1><h2>Two</h2><h6>Six</h6></div>");
}

#[test]
fn test_code_block() {
    assert_eq!(
        md_to_html("```\ncode line\n```"),
        "<div><pre><code>code line\n</code></pre></div>"
    );
}

#[test]
fn test_code_block_keeps_inline_markers() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        md_to_html(md),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn test_paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

    ";
    assert_eq!(
        md_to_html(md),
        "<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn test_ordered_list() {
    assert_snapshot!(md_to_html("1. a\n2. b"), @"<div><ol><li>a</li><li>b</li></ol></div>");
}

#[test]
fn test_ordered_list_with_gap_is_paragraph() {
    let blocks = parse_blocks("1. a\n3. b");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Paragraph);
}

#[test]
fn test_unordered_list() {
    assert_snapshot!(
        md_to_html("- first **item**\n- second"),
        @"<div><ul><li>first <b>item</b></li><li>second</li></ul></div>"
    );
}

#[test]
fn test_quote() {
    assert_eq!(
        md_to_html("> quoted\n> text"),
        "<div><blockquote>quoted\ntext</blockquote></div>"
    );
}

#[test]
fn test_links_and_images() {
    assert_snapshot!(
        md_to_html("see ![a](b) and [c](d)"),
        @r#"<div><p>see <img src="b" alt="a"></img> and <a href="d">c</a></p></div>"#
    );
}

#[test]
fn test_text_is_not_escaped() {
    assert_snapshot!(md_to_html("a < b & c"), @"<div><p>a < b & c</p></div>");
}

// ============================================================================
// DOCUMENT STRUCTURE
// ============================================================================

#[test]
fn test_kitchensink() {
    let md = "# Kitchen sink

Intro with **bold**, _italic_ and `code`.

> A quote

- one
- two

1. first
2. second

```
raw _text_
```";
    assert_eq!(
        md_to_html(md),
        "<div><h1>Kitchen sink</h1><p>Intro with <b>bold</b>, <i>italic</i> and <code>code</code>.</p><blockquote>A quote</blockquote><ul><li>one</li><li>two</li></ul><ol><li>first</li><li>second</li></ol><pre><code>raw _text_\n</code></pre></div>"
    );
}

#[test]
fn test_blocks_of_three_sections() {
    let md = "\n\n  first section  \n\n   \n\nsecond\nsection\n\n\n\nthird\n\n";
    assert_eq!(
        blocks_of(md),
        vec!["first section", "second\nsection", "third"]
    );
}

#[test]
fn test_root_is_div_with_one_child_per_block() {
    let root = convert_document("# a\n\nb\n\n- c").unwrap();
    assert_eq!(root.tag(), Some("div"));
    let tags: Vec<_> = root.children().iter().map(HtmlNode::tag).collect();
    assert_eq!(tags, vec![Some("h1"), Some("p"), Some("ul")]);
}

#[test]
fn test_render_is_idempotent() {
    let root = convert_document("# Title\n\nSome [link](x) text").unwrap();
    assert_eq!(render(&root).unwrap(), render(&root).unwrap());
}

#[test]
fn test_options_root_tag() {
    let options = ConvertOptions::default().with_root_tag("section");
    let root = convert_document_with_options("hi", &options).unwrap();
    assert_snapshot!(render(&root).unwrap(), @"<section><p>hi</p></section>");
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_unbalanced_bold_fails_whole_document() {
    let err = convert_document("# Fine\n\nThis is not **correct").unwrap_err();
    assert_eq!(err, ConvertError::UnbalancedDelimiter("**".to_string()));
    assert_eq!(
        err.to_string(),
        "Unbalanced delimiter '**': markdown syntax is invalid"
    );
}

#[test]
fn test_unbalanced_code_in_list_item() {
    let err = convert_document("- ok\n- `broken").unwrap_err();
    assert_eq!(err, ConvertError::UnbalancedDelimiter("`".to_string()));
}

#[test]
fn test_tree_serializes_to_json() {
    let root = convert_document("[c](d)").unwrap();
    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(json["node"], "parent");
    assert_eq!(json["tag"], "div");
    let link = &json["children"][0]["children"][0];
    assert_eq!(link["tag"], "a");
    assert_eq!(link["attributes"][0][0], "href");
    assert_eq!(link["attributes"][0][1], "d");
}
