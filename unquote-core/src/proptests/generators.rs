//! Input generators for property-based testing
#![allow(clippy::expect_used)]
use proptest::prelude::*;

/// Any string at all, separators included.
pub fn any_document_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("(?s).*").expect("Failed to create any string strategy")
}

/// A single line that never contains a quote.
pub fn quote_free_line() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\"\n]*").expect("Failed to create quote-free line strategy")
}

/// A single line built mostly from quotes, so that leading, trailing and
/// doubled quotes are all common.
pub fn quote_heavy_line() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => Just("\"".to_string()),
            1 => Just("\"\"".to_string()),
            1 => Just(" ".to_string()),
            1 => Just("\r".to_string()),
            2 => prop::string::string_regex("[a-zA-Zа-я,;]{1,3}")
                .expect("Failed to create text chunk"),
        ],
        0..12,
    )
    .prop_map(|chunks| chunks.concat())
}

/// A document of quote-heavy lines, optionally ending with a separator.
pub fn quote_heavy_document() -> impl Strategy<Value = String> {
    (prop::collection::vec(quote_heavy_line(), 1..10), any::<bool>()).prop_map(
        |(lines, trailing_separator)| {
            let mut document = lines.join("\n");
            if trailing_separator {
                document.push('\n');
            }
            document
        },
    )
}
