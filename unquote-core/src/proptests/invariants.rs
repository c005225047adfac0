//! Normalization invariants checked with property-based testing

use proptest::prelude::*;

use crate::{Document, LINE_SEPARATOR, QUOTE, normalize_line, transform};

use super::generators::*;

fn quote_count(text: &str) -> usize {
    text.chars().filter(|c| *c == QUOTE).count()
}

fn without_quotes(text: &str) -> String {
    text.chars().filter(|c| *c != QUOTE).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    /// Lines without quotes come back untouched.
    #[test]
    fn quote_free_lines_are_unchanged(line in quote_free_line()) {
        prop_assert_eq!(normalize_line(&line), line.as_str());
    }

    /// Normalization only ever removes characters, and only quotes.
    #[test]
    fn only_quotes_are_removed(line in quote_heavy_line()) {
        let normalized = normalize_line(&line);
        prop_assert!(normalized.len() <= line.len());
        prop_assert!(quote_count(&normalized) <= quote_count(&line));
        prop_assert_eq!(without_quotes(&normalized), without_quotes(&line));
    }

    /// The number of lines never changes, whatever the input.
    #[test]
    fn line_count_is_preserved(content in any_document_string()) {
        let transformed = transform(&content);
        prop_assert_eq!(transformed.line_count_original(), transformed.line_count_result());
        prop_assert_eq!(
            transformed.result().split(LINE_SEPARATOR).count(),
            content.split(LINE_SEPARATOR).count()
        );
    }

    /// Splitting and joining without normalization is lossless.
    #[test]
    fn split_join_round_trip(content in any_document_string()) {
        prop_assert_eq!(Document::split(&content).join(), content);
    }

    /// The document transform is exactly the per-line transform.
    #[test]
    fn transform_is_per_line(content in quote_heavy_document()) {
        let expected = content
            .split(LINE_SEPARATOR)
            .map(normalize_line)
            .collect::<Vec<_>>()
            .join("\n");
        let transformed = transform(&content);
        prop_assert_eq!(transformed.result(), expected.as_str());
    }
}
