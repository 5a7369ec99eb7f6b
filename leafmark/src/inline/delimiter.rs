//! Splitting plain tokens on a paired style delimiter.

use super::{InlineToken, TokenKind};
use crate::error::ConvertError;

/// Split every plain token on `delimiter`, alternating plain and `kind` runs.
///
/// Splitting a well formed text yields an odd number of parts: even indexes are plain, odd
/// indexes are styled. An even number of parts means a delimiter was left open. Empty parts
/// are dropped, and non plain tokens pass through unchanged.
pub fn split_delimiter(
    tokens: Vec<InlineToken>,
    delimiter: &str,
    kind: TokenKind,
) -> Result<Vec<InlineToken>, ConvertError> {
    let mut result = Vec::with_capacity(tokens.len());

    for token in tokens {
        if !token.is_plain() {
            result.push(token);
            continue;
        }

        let parts: Vec<&str> = token.content.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ConvertError::UnbalancedDelimiter(delimiter.to_string()));
        }

        for (index, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if index % 2 == 0 { TokenKind::Plain } else { kind };
            result.push(InlineToken::new(part, part_kind));
        }
    }

    Ok(result)
}
