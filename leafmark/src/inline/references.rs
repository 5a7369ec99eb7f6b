//! Extraction and splitting of `[label](target)` links and `![label](target)` images.
//!
//! The regex crate has no lookbehind, so a single pattern captures an optional leading `!`
//! and the two extractors filter on it: images keep the bang-prefixed matches, links keep the
//! rest. A link therefore never matches the bracket part of an image.

use super::{InlineToken, TokenKind};
use once_cell::sync::Lazy;
use regex::Regex;

static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("reference pattern is valid")
});

/// Return the `(alt, target)` pairs of every image in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_references(text, true)
}

/// Return the `(label, target)` pairs of every link in `text`, left to right.
///
/// Bracket/paren pairs preceded by `!` are images and are not reported.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_references(text, false)
}

fn extract_references(text: &str, images: bool) -> Vec<(String, String)> {
    REFERENCE_RE
        .captures_iter(text)
        .filter(|caps| caps[1].is_empty() != images)
        .map(|caps| (caps[2].to_string(), caps[3].to_string()))
        .collect()
}

/// Split every plain token around its images.
pub fn split_images(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_references(tokens, TokenKind::Image)
}

/// Split every plain token around its links.
pub fn split_links(tokens: Vec<InlineToken>) -> Vec<InlineToken> {
    split_references(tokens, TokenKind::Link)
}

fn split_references(tokens: Vec<InlineToken>, kind: TokenKind) -> Vec<InlineToken> {
    let mut result = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            result.push(token);
            continue;
        }

        let matches = match kind {
            TokenKind::Image => extract_images(&token.content),
            _ => extract_links(&token.content),
        };
        if matches.is_empty() {
            result.push(token);
            continue;
        }

        let mut remaining = token.content.as_str();
        for (label, target) in matches {
            let literal = match kind {
                TokenKind::Image => format!("![{label}]({target})"),
                _ => format!("[{label}]({target})"),
            };
            let Some((before, after)) = remaining.split_once(literal.as_str()) else {
                continue;
            };
            if !before.is_empty() {
                result.push(InlineToken::plain(before));
            }
            result.push(match kind {
                TokenKind::Image => InlineToken::image(label, target),
                _ => InlineToken::link(label, target),
            });
            remaining = after;
        }

        if !remaining.is_empty() {
            result.push(InlineToken::plain(remaining));
        }
    }

    result
}
