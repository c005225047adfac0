use std::borrow::Cow;

use serde::Serialize;

use crate::document::Document;

/// Outcome of normalizing a whole document.
///
/// Holds the untouched original next to the normalized text, plus line
/// counts for both. The two counts are always equal since normalization
/// never adds or removes lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed<'a> {
    original: Cow<'a, str>,
    result: String,
    line_count_original: usize,
    line_count_result: usize,
    changed_lines: usize,
}

/// Serializable line-count metadata of a [`Transformed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransformSummary {
    pub line_count_original: usize,
    pub line_count_result: usize,
    pub changed_lines: usize,
}

impl Transformed<'_> {
    /// The content as it was handed to [`transform`].
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The normalized content.
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    #[must_use]
    pub fn line_count_original(&self) -> usize {
        self.line_count_original
    }

    #[must_use]
    pub fn line_count_result(&self) -> usize {
        self.line_count_result
    }

    /// Number of lines that normalization actually modified.
    #[must_use]
    pub fn changed_lines(&self) -> usize {
        self.changed_lines
    }

    #[must_use]
    pub fn summary(&self) -> TransformSummary {
        TransformSummary {
            line_count_original: self.line_count_original,
            line_count_result: self.line_count_result,
            changed_lines: self.changed_lines,
        }
    }

    /// Take the normalized content, dropping the original.
    #[must_use]
    pub fn into_result(self) -> String {
        self.result
    }

    /// Detach from the borrowed original by copying it.
    #[must_use]
    pub fn into_owned(self) -> Transformed<'static> {
        Transformed {
            original: Cow::Owned(self.original.into_owned()),
            result: self.result,
            line_count_original: self.line_count_original,
            line_count_result: self.line_count_result,
            changed_lines: self.changed_lines,
        }
    }
}

/// Normalize every line of `content`.
///
/// `content` is split on `\n`, each line goes through
/// [`normalize_line`](crate::normalize_line), and the lines are joined back
/// with `\n`. No separator is added or dropped, so a trailing newline in the
/// input stays a trailing newline in the output.
///
/// # Example
///
/// ```
/// use unquote_core::transform;
///
/// let transformed = transform("\"a\"\n\"b\"\"c\"\n");
/// assert_eq!(transformed.result(), "a\nb\"c\n");
/// assert_eq!(transformed.line_count_original(), 3);
/// assert_eq!(transformed.line_count_result(), 3);
/// ```
#[must_use]
pub fn transform(content: &str) -> Transformed<'_> {
    transform_cow(Cow::Borrowed(content))
}

pub(crate) fn transform_owned(content: String) -> Transformed<'static> {
    transform_cow(Cow::Owned(content))
}

fn transform_cow(original: Cow<'_, str>) -> Transformed<'_> {
    let (result, line_count_original, line_count_result, changed_lines) = {
        let document = Document::split(&original);
        let normalized = document.normalized();
        let changed_lines = document
            .lines()
            .zip(normalized.lines())
            .filter(|(before, after)| before != after)
            .count();
        (
            normalized.join(),
            document.line_count(),
            normalized.line_count(),
            changed_lines,
        )
    };
    Transformed {
        original,
        result,
        line_count_original,
        line_count_result,
        changed_lines,
    }
}
