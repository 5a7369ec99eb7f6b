//! Property tests for the inline pipeline and rendering

use leafmark::{
    convert_document, render, text_to_tokens, ConvertError, InlineToken, TokenKind,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn plain_text_is_a_single_plain_token(text in "[a-zA-Z0-9 .,;:?]{1,60}") {
        let tokens = text_to_tokens(&text).unwrap();
        prop_assert_eq!(tokens, vec![InlineToken::plain(text)]);
    }

    #[test]
    fn balanced_bold_alternates(
        segments in prop::collection::vec("[a-z ]{1,10}", 1..6)
            .prop_filter("odd segment count", |s| s.len() % 2 == 1)
    ) {
        let text = segments.join("**");
        let tokens = text_to_tokens(&text).unwrap();

        prop_assert_eq!(tokens.len(), segments.len());
        for (index, (token, segment)) in tokens.iter().zip(&segments).enumerate() {
            let expected = if index % 2 == 0 { TokenKind::Plain } else { TokenKind::Bold };
            prop_assert_eq!(token.kind, expected);
            prop_assert_eq!(&token.content, segment);
            prop_assert!(!token.content.is_empty());
        }
    }

    #[test]
    fn odd_delimiter_count_is_rejected(
        segments in prop::collection::vec("[a-z]{1,8}", 2..7)
            .prop_filter("even segment count", |s| s.len() % 2 == 0)
    ) {
        let text = segments.join("_");
        prop_assert_eq!(
            text_to_tokens(&text),
            Err(ConvertError::UnbalancedDelimiter("_".to_string()))
        );
    }

    #[test]
    fn rendering_is_idempotent(document in r"[a-z #>\n-]{0,80}") {
        let root = convert_document(&document).unwrap();
        let first = render(&root).unwrap();
        let second = render(&root).unwrap();
        prop_assert_eq!(first, second);
    }
}
