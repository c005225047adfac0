//! Per-line quote normalization.
//!
//! A line goes through three steps, always in this order:
//!
//! 1. one leading `"` is removed, if present
//! 2. one trailing `"` is removed from what is left, if present
//! 3. every `""` pair is collapsed into a single `"`, scanning left to right
//!    without re-reading the produced output
//!
//! The order matters: `""` loses both characters to steps 1 and 2 and never
//! reaches the collapse, while `""""` ends up as a single `"`.
use std::borrow::Cow;

/// The only quote character this crate knows about.
pub const QUOTE: char = '"';

const DOUBLED_QUOTE: &str = "\"\"";

/// Normalize a single line.
///
/// Returns the input borrowed when none of the three rules fire, which is
/// the common case for lines without any quotes.
///
/// The function is total: any `&str` is accepted, including the empty
/// string, and the result is never longer than the input.
///
/// # Example
///
/// ```
/// use unquote_core::normalize_line;
///
/// assert_eq!(normalize_line(r#""he said ""hi"" to me""#), r#"he said "hi" to me"#);
/// assert_eq!(normalize_line(r#""""#), "");
/// assert_eq!(normalize_line("hello"), "hello");
/// ```
#[must_use]
pub fn normalize_line(line: &str) -> Cow<'_, str> {
    let stripped = strip_trailing_quote(strip_leading_quote(line));
    collapse_doubled_quotes(stripped)
}

fn strip_leading_quote(line: &str) -> &str {
    line.strip_prefix(QUOTE).unwrap_or(line)
}

fn strip_trailing_quote(line: &str) -> &str {
    line.strip_suffix(QUOTE).unwrap_or(line)
}

/// Collapse every `""` into `"`.
///
/// `str::replace` already scans left to right and resumes after each match,
/// so a run of `2n` quotes becomes `n` and a run of `2n + 1` keeps its
/// unpaired quote at the end.
fn collapse_doubled_quotes(line: &str) -> Cow<'_, str> {
    if line.contains(DOUBLED_QUOTE) {
        Cow::Owned(line.replace(DOUBLED_QUOTE, "\""))
    } else {
        Cow::Borrowed(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::surrounded(r#""hello""#, "hello")]
    #[case::embedded_pairs(r#""he said ""hi"" to me""#, r#"he said "hi" to me"#)]
    #[case::single_quote(r#"""#, "")]
    #[case::two_quotes(r#""""#, "")]
    #[case::four_quotes(r#""""""#, r#"""#)]
    #[case::no_quotes("hello", "hello")]
    #[case::empty("", "")]
    #[case::leading_only(r#""abc"#, "abc")]
    #[case::trailing_only(r#"abc""#, "abc")]
    #[case::only_first_leading_stripped(r#"""abc"#, "\"abc")]
    #[case::only_last_trailing_stripped(r#"abc"""#, "abc\"")]
    #[case::odd_inner_run(r#"a"""b"#, r#"a""b"#)]
    #[case::even_inner_run(r#"a""""b"#, r#"a""b"#)]
    #[case::lone_inner_quote(r#"a"b"#, r#"a"b"#)]
    #[case::whitespace_before_quote(r#" "abc" "#, r#" "abc" "#)]
    #[case::carriage_return_is_last("\"a\"\r", "a\"\r")]
    #[case::unicode(r#""привет ""мир""""#, r#"привет "мир""#)]
    fn normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_line(input), expected);
    }

    #[rstest]
    #[case::empty(0, 0)]
    #[case::one(1, 0)]
    #[case::two(2, 0)]
    #[case::three(3, 1)]
    #[case::four(4, 1)]
    #[case::five(5, 2)]
    #[case::six(6, 2)]
    #[case::seven(7, 3)]
    fn quote_runs(#[case] run: usize, #[case] expected: usize) {
        let line = QUOTE.to_string().repeat(run);
        assert_eq!(normalize_line(&line), QUOTE.to_string().repeat(expected));
    }

    #[test]
    fn unchanged_line_is_borrowed() {
        assert!(matches!(normalize_line("no quotes here"), Cow::Borrowed(_)));
        assert!(matches!(normalize_line(r#"a"b"#), Cow::Borrowed(_)));
    }

    #[test]
    fn stripped_line_without_pairs_is_borrowed() {
        assert!(matches!(normalize_line(r#""abc""#), Cow::Borrowed("abc")));
    }

    #[rstest]
    #[case::plain_word(r#""hello""#, true)]
    #[case::embedded_pairs(r#""he said ""hi"" to me""#, true)]
    #[case::single_quote(r#"""#, true)]
    #[case::four_quotes(r#""""""#, false)]
    #[case::nested_surrounding(r#"""a"""#, false)]
    #[case::pair_after_strip(r#""a""b""#, true)]
    fn second_pass(#[case] input: &str, #[case] is_noop: bool) {
        let once = normalize_line(input).into_owned();
        let twice = normalize_line(&once).into_owned();
        assert_eq!(once == twice, is_noop, "once: {once:?}, twice: {twice:?}");
    }
}
