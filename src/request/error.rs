use crate::headers::HeaderError;

/// HTTP Request parsing error.
///
/// Any of this error moves the [`Request`] into error state, parsing the same request again
/// returns [`ParseError::AlreadyFailed`].
///
/// [`Request`]: super::Request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Request line does not have exactly three fields, or the version is not `HTTP/<version>`.
    MalformedRequestLine,
    /// Request line version is not `1.1`.
    UnsupportedVersion,
    /// Header line parsing error.
    Header(HeaderError),
    /// Header count exceeds [`Config::max_headers`].
    ///
    /// [`Config::max_headers`]: super::Config::max_headers
    TooManyHeaders,
    /// Non numeric or conflicting `Content-Length` value.
    InvalidContentLength,
    /// Parsing a request that already failed.
    AlreadyFailed,
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Header(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::MalformedRequestLine => f.write_str("malformed request line"),
            Self::UnsupportedVersion => f.write_str("unsupported http version"),
            Self::Header(err) => write!(f, "header error: {err}"),
            Self::TooManyHeaders => f.write_str("too many headers"),
            Self::InvalidContentLength => f.write_str("invalid content length"),
            Self::AlreadyFailed => f.write_str("request already in error state"),
        }
    }
}

impl From<HeaderError> for ParseError {
    #[inline]
    fn from(value: HeaderError) -> Self {
        Self::Header(value)
    }
}
