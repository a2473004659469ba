use super::{HeaderError, HeaderMap, HeaderName, HeaderValue};
use crate::common::ParseResult;
use crate::matches;

/// A single parsed header line.
#[derive(Debug)]
pub(crate) struct Header {
    pub name: HeaderName,
    pub value: HeaderValue,
}

impl HeaderMap {
    /// Parse header lines from the front of `bytes`.
    ///
    /// Returns the number of bytes consumed, and whether parsing stopped at the empty line that
    /// ends the header section. The empty line itself is never consumed.
    ///
    /// Parsing stops without consuming when only a partial line remains, so `(0, false)` means
    /// more bytes are required.
    ///
    /// ```rust
    /// use kirim::headers::HeaderMap;
    ///
    /// let mut map = HeaderMap::new();
    /// let (read, done) = map.parse_chunk(b"Host: localhost\r\nAccept: */*\r\n\r\n").unwrap();
    ///
    /// assert_eq!(read, 30);
    /// assert!(done);
    /// assert_eq!(map.get("accept").unwrap().as_str(), "*/*");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error when a complete line is not a valid header field, headers parsed before the
    /// invalid line are kept in the map.
    pub fn parse_chunk(&mut self, bytes: &[u8]) -> Result<(usize, bool), HeaderError> {
        let mut read = 0;

        loop {
            let state = &bytes[read..];

            if matches::starts_with_crlf(state) {
                return Ok((read, true));
            }

            match parse_header_line(state) {
                ParseResult::Ok((Header { name, value }, len)) => {
                    self.append(name, value);
                    read += len;
                }
                ParseResult::Pending => return Ok((read, false)),
                ParseResult::Err(err) => return Err(err),
            }
        }
    }
}

/// Parse a single `name: value` line terminated by crlf.
///
/// Returns the header and the line length including crlf.
pub(crate) fn parse_header_line(bytes: &[u8]) -> ParseResult<(Header, usize), HeaderError> {
    let Some(end) = matches::find_crlf(bytes) else {
        return ParseResult::Pending;
    };
    let line = &bytes[..end];

    let Some(colon) = line.iter().position(|&b| b == b':') else {
        return ParseResult::Err(HeaderError::Malformed);
    };

    // whitespace between name and colon is rejected by token validation
    let name = match HeaderName::from_slice(&line[..colon]) {
        Ok(ok) => ok,
        Err(err) => return ParseResult::Err(err),
    };

    let value = match HeaderValue::from_slice(&line[colon + 1..]) {
        Ok(ok) => ok,
        Err(err) => return ParseResult::Err(err),
    };

    ParseResult::Ok((Header { name, value }, end + matches::CRLF.len()))
}
