//! Error types that can occur during header related operation.

/// An error that can occur in header related operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Header line does not contains `:` separator.
    Malformed,
    /// Header name is empty or contains invalid character, including whitespace before `:`.
    InvalidName,
    /// Header value contains invalid character.
    InvalidValue,
}

impl HeaderError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed header line",
            Self::InvalidName => "invalid header name",
            Self::InvalidValue => "invalid header value",
        }
    }

    pub(crate) const fn panic_const(self) -> ! {
        panic!("{}", self.message())
    }
}

impl std::error::Error for HeaderError {}

impl std::fmt::Display for HeaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
