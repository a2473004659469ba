const MAX_HEADERS: usize = 64;
const DEFAULT_BUFFER_CAP: usize = 1024;
const MAX_FIELD_CAP: usize = 4 * 1024;

/// How a `Content-Length` value that is not a plain decimal number is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentLengthPolicy {
    /// Invalid or conflicting values are [`ParseError::InvalidContentLength`].
    ///
    /// [`ParseError::InvalidContentLength`]: super::ParseError::InvalidContentLength
    #[default]
    Strict,
    /// Invalid values are treated as zero, the first value wins on duplicates.
    Lenient,
}

/// Request parsing limits and behavior.
///
/// ```rust
/// use kirim::{Config, ContentLengthPolicy};
///
/// let config = Config::new()
///     .with_max_headers(16)
///     .with_content_length(ContentLengthPolicy::Lenient);
///
/// assert_eq!(config.max_headers(), 16);
/// assert_eq!(config.max_buffer(), 4 * 1024);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    max_headers: usize,
    content_length: ContentLengthPolicy,
    initial_buffer: usize,
    max_buffer: usize,
}

impl Config {
    /// Create default [`Config`].
    pub const fn new() -> Self {
        Self {
            max_headers: MAX_HEADERS,
            content_length: ContentLengthPolicy::Strict,
            initial_buffer: DEFAULT_BUFFER_CAP,
            max_buffer: MAX_FIELD_CAP,
        }
    }

    /// Maximum number of header lines, duplicates included.
    #[inline]
    pub const fn max_headers(&self) -> usize {
        self.max_headers
    }

    #[inline]
    pub const fn content_length(&self) -> ContentLengthPolicy {
        self.content_length
    }

    /// Read buffer capacity allocated upfront.
    #[inline]
    pub const fn initial_buffer(&self) -> usize {
        self.initial_buffer
    }

    /// Maximum unparsed bytes held by the read buffer.
    ///
    /// A request line or a header line longer than this fails to parse.
    #[inline]
    pub const fn max_buffer(&self) -> usize {
        self.max_buffer
    }

    pub const fn with_max_headers(mut self, max_headers: usize) -> Self {
        self.max_headers = max_headers;
        self
    }

    pub const fn with_content_length(mut self, policy: ContentLengthPolicy) -> Self {
        self.content_length = policy;
        self
    }

    pub const fn with_initial_buffer(mut self, capacity: usize) -> Self {
        self.initial_buffer = capacity;
        self
    }

    /// Set [`max_buffer`][Config::max_buffer], zero is treated as one byte.
    pub const fn with_max_buffer(mut self, capacity: usize) -> Self {
        self.max_buffer = if capacity == 0 { 1 } else { capacity };
        self
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
