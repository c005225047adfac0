use std::borrow::Cow;

use crate::normalize::normalize_line;

/// Separator used both to split a document into lines and to join it back.
pub const LINE_SEPARATOR: char = '\n';

/// A document as an ordered sequence of lines.
///
/// Splitting follows [`str::split`]: a document with `n` separators has
/// `n + 1` lines, so a trailing separator yields a trailing empty line and
/// the empty document is a single empty line. Joining the lines back with
/// [`LINE_SEPARATOR`] reproduces the input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    lines: Vec<Cow<'a, str>>,
}

impl<'a> Document<'a> {
    /// Split `content` into lines without copying.
    #[must_use]
    pub fn split(content: &'a str) -> Self {
        Self {
            lines: content.split(LINE_SEPARATOR).map(Cow::Borrowed).collect(),
        }
    }

    /// Number of lines, including a trailing empty one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over the lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(AsRef::as_ref)
    }

    /// Apply [`normalize_line`] to every line.
    ///
    /// Order and count are preserved. Lines that need no change stay
    /// borrowed from the original content.
    #[must_use]
    pub fn normalized(&self) -> Document<'_> {
        Document {
            lines: self.lines().map(normalize_line).collect(),
        }
    }

    /// Join the lines with a single [`LINE_SEPARATOR`] between neighbours.
    #[must_use]
    pub fn join(&self) -> String {
        let mut separator = [0; 4];
        self.lines.join(&*LINE_SEPARATOR.encode_utf8(&mut separator))
    }
}
