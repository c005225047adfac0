//! Turning raw input bytes into text.
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::{Error, Options};

/// BOM (Byte Order Mark) patterns for encoding detection
const BOM_PATTERNS: &[(&[u8], &Encoding, usize, &str)] = &[
    (&[0xEF, 0xBB, 0xBF], UTF_8, 3, "UTF-8"),
    (&[0xFF, 0xFE], UTF_16LE, 2, "UTF-16 LE"),
    (&[0xFE, 0xFF], UTF_16BE, 2, "UTF-16 BE"),
];

/// Decode input bytes into a string.
///
/// Supports:
/// - Explicit encoding via [`Options::encoding`]
/// - UTF-8 with BOM (EF BB BF)
/// - UTF-16 LE with BOM (FF FE)
/// - UTF-16 BE with BOM (FE FF)
/// - UTF-8 without BOM (fallback)
///
/// The BOM itself never ends up in the returned string.
///
/// # Errors
/// Returns an error if:
/// - The explicit encoding label is unknown
/// - The input is not valid UTF-8 and has no BOM
pub fn decode(bytes: &[u8], options: &Options) -> Result<String, Error> {
    decode_named(bytes, "input", options)
}

/// Same as [`decode`], with `origin` naming the input in logs and errors.
#[tracing::instrument(skip(bytes, options), fields(len = bytes.len()))]
pub(crate) fn decode_named(bytes: &[u8], origin: &str, options: &Options) -> Result<String, Error> {
    // If there was an encoding specified, decode the entire input as that
    if let Some(enc_label) = options.encoding.as_deref() {
        let Some(encoding) = Encoding::for_label(enc_label.as_bytes()) else {
            return Err(Error::UnknownEncoding(enc_label.to_string()));
        };
        let (cow, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            tracing::warn!(
                origin,
                encoding = %enc_label,
                "decoding encountered errors, malformed sequences were replaced"
            );
        }
        return Ok(cow.into_owned());
    }

    // Check for BOM patterns and decode accordingly
    for (bom, encoding, skip, name) in BOM_PATTERNS {
        if bytes.starts_with(bom)
            && let Some(content) = bytes.get(*skip..)
        {
            tracing::debug!(origin, encoding = name, "byte order mark found");
            let (cow, had_errors) = encoding.decode_without_bom_handling(content);
            if had_errors {
                tracing::warn!(
                    origin,
                    encoding = name,
                    "decoding encountered errors, malformed sequences were replaced"
                );
            }
            return Ok(cow.into_owned());
        }
    }

    // If no BOM, the input has to be UTF-8
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(e) => {
            tracing::error!(origin, error = %e, "input is not valid UTF-8");
            Err(Error::InvalidText(origin.to_string()))
        }
    }
}
