//! Line-oriented quote normalization.
//!
//! Every line of a document is normalized independently:
//!
//! 1. one leading `"` is removed
//! 2. one trailing `"` is removed
//! 3. each remaining `""` becomes `"`
//!
//! The pure entry points are [`normalize_line`] and [`transform`]. They never
//! fail. The byte-oriented entry points ([`transform_bytes`],
//! [`transform_reader`], [`transform_file`]) decode the input first and can
//! fail with an [`Error`].
//!
//! # Example
//!
//! ```
//! use unquote_core::{transform, transform_bytes, Options};
//!
//! let transformed = transform("\"id\",\"name\"\n\"1\",\"Bob \"\"The Builder\"\"\"\n");
//! assert_eq!(transformed.result(), "id\",\"name\n1\",\"Bob \"The Builder\"\n");
//!
//! let transformed = transform_bytes(b"\"a\"\n", &Options::default())?;
//! assert_eq!(transformed.result(), "a\n");
//! # Ok::<(), unquote_core::Error>(())
//! ```
use std::{io::Read, path::Path};

mod decode;
mod document;
mod error;
mod normalize;
mod options;
mod transform;

#[cfg(test)]
mod proptests;

pub use decode::decode;
pub use document::{Document, LINE_SEPARATOR};
pub use error::Error;
pub use normalize::{QUOTE, normalize_line};
pub use options::{Options, OptionsBuilder};
pub use transform::{TransformSummary, Transformed, transform};

/// Decode `bytes` and normalize every line.
///
/// # Errors
/// Returns an error if the bytes cannot be decoded as text, see [`decode`].
#[tracing::instrument(skip(bytes, options), fields(len = bytes.len()))]
pub fn transform_bytes(bytes: &[u8], options: &Options) -> Result<Transformed<'static>, Error> {
    let content = decode::decode_named(bytes, "input", options)?;
    Ok(transform::transform_owned(content))
}

/// Read all of `reader`, decode it and normalize every line.
///
/// # Errors
/// Returns an error if reading fails or the content cannot be decoded.
#[tracing::instrument(skip(reader, options))]
pub fn transform_reader<R: Read>(
    mut reader: R,
    options: &Options,
) -> Result<Transformed<'static>, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        tracing::error!(error=?e, "failed to read from reader");
        e
    })?;
    let content = decode::decode_named(&bytes, "reader", options)?;
    Ok(transform::transform_owned(content))
}

/// Read the file at `path`, decode it and normalize every line.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
#[tracing::instrument(skip(path, options), fields(path = %path.as_ref().display()))]
pub fn transform_file<P: AsRef<Path>>(
    path: P,
    options: &Options,
) -> Result<Transformed<'static>, Error> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to read file");
        e
    })?;
    let content = decode::decode_named(&bytes, &path.display().to_string(), options)?;
    let transformed = transform::transform_owned(content);
    tracing::debug!(
        path = %path.display(),
        lines = transformed.line_count_original(),
        changed = transformed.changed_lines(),
        "file processed"
    );
    Ok(transformed)
}
