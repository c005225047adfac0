#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct Options {
    /// Encoding label used to decode input bytes.
    ///
    /// Any WHATWG label understood by `encoding_rs` is accepted
    /// (`utf-8`, `utf-16le`, `windows-1251`, ...). When unset, the input is
    /// decoded according to its byte order mark, or as UTF-8 without one.
    pub encoding: Option<String>,
}

impl Options {
    /// Create a new `OptionsBuilder` for fluent configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use unquote_core::Options;
    ///
    /// let options = Options::builder()
    ///     .with_encoding("windows-1252")
    ///     .build();
    /// assert_eq!(options.encoding.as_deref(), Some("windows-1252"));
    /// ```
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Create a new `Options` with default settings.
    ///
    /// Equivalent to `Options::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Builder for `Options`.
///
/// Create an `OptionsBuilder` using `Options::builder()`.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct OptionsBuilder {
    encoding: Option<String>,
}

impl OptionsBuilder {
    /// Force the input to be decoded with the encoding named by `label`.
    #[must_use]
    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Set or clear the forced encoding.
    ///
    /// Convenient when the label comes from an optional CLI argument.
    #[must_use]
    pub fn with_optional_encoding(mut self, label: Option<String>) -> Self {
        self.encoding = label;
        self
    }

    /// Build the `Options`.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            encoding: self.encoding,
        }
    }
}
