//! Inline tokens and the pipeline that produces them.
//!
//!     Inline text is lexed by running a fixed sequence of passes over a token stream. The
//!     stream is seeded with a single plain token holding the whole text, and every pass only
//!     rewrites plain tokens, leaving already styled tokens alone:
//!
//!         1. bold     `**`
//!         2. italic   `_`
//!         3. code     `` ` ``
//!         4. images   `![label](target)`
//!         5. links    `[label](target)`
//!
//!     Each pass returns a fresh sequence so intermediate results stay inspectable. Bold must
//!     run before the single character delimiters, and images must run before links, since the
//!     link pattern cannot see a leading `!` once the match is cut out of its context.
//!
//!     Nested emphasis and escaped delimiters are not supported.

pub mod delimiter;
pub mod references;

use crate::error::ConvertError;
use serde::Serialize;

pub use delimiter::split_delimiter;
pub use references::{extract_images, extract_links, split_images, split_links};

/// The category of an inline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A run of inline content.
///
/// For links and images `content` is the display label and `target` the referenced url.
/// Plain, bold, italic and code tokens never carry a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineToken {
    pub content: String,
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl InlineToken {
    /// Create a token without a target.
    pub fn new(content: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, TokenKind::Plain)
    }

    pub fn link(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: label.into(),
            kind: TokenKind::Link,
            target: Some(target.into()),
        }
    }

    pub fn image(alt: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: TokenKind::Image,
            target: Some(target.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TokenKind::Plain
    }
}

/// Lex inline markdown text into an ordered token sequence.
///
/// Fails only when a style delimiter is unbalanced.
pub fn text_to_tokens(text: &str) -> Result<Vec<InlineToken>, ConvertError> {
    let tokens = vec![InlineToken::plain(text)];
    let tokens = split_delimiter(tokens, "**", TokenKind::Bold)?;
    let tokens = split_delimiter(tokens, "_", TokenKind::Italic)?;
    let tokens = split_delimiter(tokens, "`", TokenKind::Code)?;
    let tokens = split_images(tokens);
    let tokens = split_links(tokens);
    log::trace!("lexed {} inline token(s) from {} byte(s)", tokens.len(), text.len());
    Ok(tokens)
}
