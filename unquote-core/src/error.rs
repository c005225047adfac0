use std::io;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Input is not valid UTF-8 and has no byte order mark: {0}")]
    InvalidText(String),
}

impl Error {
    /// Get advice for this error if available.
    /// Returns helpful information for resolving the error.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::UnknownEncoding(..) => Some(
                "Use a WHATWG encoding label such as 'utf-8', 'utf-16le', 'windows-1252' or 'koi8-r'",
            ),
            Self::InvalidText(..) => Some(
                "Pass the input encoding explicitly (e.g. '--encoding windows-1251'), or save the file as UTF-8",
            ),
            Self::Io(e) if e.kind() == io::ErrorKind::NotFound => {
                Some("Check that the path exists and is spelled correctly")
            }
            Self::Io(..) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_advice() {
        let error = Error::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(error.advice().is_some());
    }

    #[test]
    fn other_io_errors_have_no_advice() {
        let error = Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(error.advice(), None);
    }

    #[test]
    fn messages_name_the_culprit() {
        assert_eq!(
            Error::UnknownEncoding("klingon".into()).to_string(),
            "Unknown encoding: klingon"
        );
        assert_eq!(
            Error::InvalidText("data.txt".into()).to_string(),
            "Input is not valid UTF-8 and has no byte order mark: data.txt"
        );
    }
}
