use super::error::ParseError;
use crate::common::ParseResult;
use crate::matches;

/// HTTP Version.
///
/// Only `HTTP/1.1` is supported.
///
/// [httpwg](https://httpwg.org/specs/rfc9112.html#http.version)
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Version(Inner);

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
enum Inner {
    Http11,
}

impl Version {
    /// `HTTP/1.1`
    pub const HTTP_11: Version = Version(Inner::Http11);

    /// Parse the part after `HTTP/`, e.g: `1.1`.
    #[inline]
    pub fn from_number(bytes: &[u8]) -> Option<Version> {
        match bytes {
            b"1.1" => Some(Version::HTTP_11),
            _ => None,
        }
    }

    /// Returns string representation of HTTP version, e.g: `HTTP/1.1`
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            Inner::Http11 => "HTTP/1.1",
        }
    }

    /// Returns the version number without `HTTP/` prefix, e.g: `1.1`
    #[inline]
    pub const fn as_number(&self) -> &'static str {
        match self.0 {
            Inner::Http11 => "1.1",
        }
    }
}

impl Default for Version {
    #[inline]
    fn default() -> Version {
        Version::HTTP_11
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// ===== Request Line =====

/// HTTP Request line, `<method> <target> HTTP/<version>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: String,
    version: Version,
}

impl RequestLine {
    /// Returns the request method, e.g: `GET`.
    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the request target as is, e.g: `/index.html?q=1`.
    #[inline]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }
}

impl std::fmt::Display for RequestLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.method, self.target, self.version)
    }
}

/// Parse request line from the front of `bytes`.
///
/// Returns the request line and the number of bytes consumed including crlf. If crlf is not
/// found, returns [`ParseResult::Pending`].
///
/// ```rust
/// use kirim::ParseResult;
/// use kirim::request::parse_request_line;
///
/// let ParseResult::Ok((line, read)) = parse_request_line(b"GET /coffee HTTP/1.1\r\nHost") else {
///     panic!("complete request line")
/// };
/// assert_eq!(line.target(), "/coffee");
/// assert_eq!(read, 22);
///
/// assert!(parse_request_line(b"GET /coffee HTTP/1.1").is_pending());
/// ```
pub fn parse_request_line(bytes: &[u8]) -> ParseResult<(RequestLine, usize), ParseError> {
    use ParseResult as Result;

    let Some(end) = matches::find_crlf(bytes) else {
        return Result::Pending;
    };

    let mut fields = bytes[..end].split(|&b| b == b' ');
    let (Some(method), Some(target), Some(version), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Result::Err(ParseError::MalformedRequestLine);
    };

    if method.is_empty() || !method.iter().all(|&b| matches::is_token(b)) {
        return Result::Err(ParseError::MalformedRequestLine);
    }

    let version = {
        let mut parts = version.split(|&b| b == b'/');
        let (Some(b"HTTP"), Some(number), None) = (parts.next(), parts.next(), parts.next()) else {
            return Result::Err(ParseError::MalformedRequestLine);
        };
        match Version::from_number(number) {
            Some(ok) => ok,
            None => return Result::Err(ParseError::UnsupportedVersion),
        }
    };

    let (Ok(method), Ok(target)) = (std::str::from_utf8(method), std::str::from_utf8(target)) else {
        return Result::Err(ParseError::MalformedRequestLine);
    };
    if target.is_empty() {
        return Result::Err(ParseError::MalformedRequestLine);
    }

    Result::Ok((
        RequestLine {
            method: method.to_owned(),
            target: target.to_owned(),
            version,
        },
        end + matches::CRLF.len(),
    ))
}
