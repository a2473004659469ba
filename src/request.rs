//! HTTP Request and its incremental parser.
//!
//! [`Request::parse`] works on chunked bytes, given any length of bytes, the parser consumes
//! every complete protocol unit and leaves the rest for the next call. Bytes that does not form
//! a complete unit yet are never consumed, the caller keeps them and calls again with more bytes
//! appended.
use bytes::{Bytes, BytesMut};
use std::mem;

use crate::common::ParseResult;
use crate::headers::HeaderMap;
use crate::log::{debug, trace, warning};
use crate::matches;

mod config;
mod error;
mod line;
mod state;


pub use config::{Config, ContentLengthPolicy};
pub use error::ParseError;
pub use line::{RequestLine, Version, parse_request_line};
pub use state::State;

use state::Phase;

/// HTTP Request.
///
/// Created empty, then populated by [`parse`][Request::parse] as bytes arrive. Once the request
/// is [`Done`][State::Done] or [`Error`][State::Error], it no longer consumes any bytes.
pub struct Request {
    phase: Phase,
    headers: HeaderMap,
    body: BytesMut,
    config: Config,
}

impl Request {
    /// Create new empty [`Request`] with default [`Config`].
    #[inline]
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Create new empty [`Request`] with given [`Config`].
    #[inline]
    pub fn with_config(config: Config) -> Self {
        Self {
            phase: Phase::Init,
            headers: HeaderMap::with_capacity(8),
            body: BytesMut::new(),
            config,
        }
    }

    /// Returns current parsing state.
    #[inline]
    pub const fn state(&self) -> State {
        self.phase.state()
    }

    /// Returns `true` if the request is completely parsed.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// Returns `true` if parsing failed.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self.phase, Phase::Error)
    }

    /// Returns the request line.
    ///
    /// Request line is present only in [`Header`], [`Body`] and [`Done`] state.
    ///
    /// [`Header`]: State::Header
    /// [`Body`]: State::Body
    /// [`Done`]: State::Done
    #[inline]
    pub const fn request_line(&self) -> Option<&RequestLine> {
        self.phase.line()
    }

    /// Returns headers parsed so far.
    #[inline]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns body bytes parsed so far.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the declared content length, available in [`Body`][State::Body] state.
    #[inline]
    pub const fn content_length(&self) -> Option<usize> {
        match self.phase {
            Phase::Body { length, .. } => Some(length),
            _ => None,
        }
    }

    /// Returns the [`Config`] this request is parsed with.
    #[inline]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Consume request into its headers and body.
    #[inline]
    pub fn into_parts(self) -> (Option<RequestLine>, HeaderMap, Bytes) {
        let line = match self.phase {
            Phase::Header(line) | Phase::Body { line, .. } | Phase::Done(line) => Some(line),
            Phase::Init | Phase::Error => None,
        };
        (line, self.headers, self.body.freeze())
    }
}

impl Default for Request {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("state", &self.state())
            .field("line", &self.request_line())
            .field("headers", &self.headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}

// ===== Parsing =====

impl Request {
    /// Parse request from `bytes`.
    ///
    /// Returns the number of bytes consumed. Zero consumed without error means more bytes is
    /// required, the caller should call again with the unconsumed bytes followed by newly read
    /// bytes.
    ///
    /// Calling this on a [`Done`][State::Done] request always returns `Ok(0)`.
    ///
    /// ```rust
    /// use kirim::{Request, State};
    ///
    /// let mut req = Request::new();
    ///
    /// assert_eq!(req.parse(b"GET / HT").unwrap(), 0);
    /// assert_eq!(req.parse(b"GET / HTTP/1.1\r\nHost: x").unwrap(), 16);
    /// assert_eq!(req.state(), State::Header);
    /// assert_eq!(req.parse(b"Host: x\r\n\r\n").unwrap(), 11);
    /// assert!(req.is_done());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if the bytes is not a valid request, the request then moves to
    /// [`Error`][State::Error] state, and any subsequent call returns
    /// [`ParseError::AlreadyFailed`].
    pub fn parse(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        let mut read = 0;

        loop {
            let rest = &bytes[read..];

            let progress = match self.state() {
                State::Error => return Err(ParseError::AlreadyFailed),
                State::Done => break,
                _ if rest.is_empty() => break,
                State::Init => self.parse_reqline(rest),
                State::Header => self.parse_headers(rest),
                State::Body => self.parse_body(rest),
            };

            match progress {
                Ok(0) => break,
                Ok(n) => read += n,
                Err(err) => {
                    debug!("request parsing failed in {} state: {err}", self.state());
                    self.phase = Phase::Error;
                    return Err(err);
                }
            }
        }

        trace!("consumed {read} of {} bytes, {} state", bytes.len(), self.state());

        Ok(read)
    }

    fn parse_reqline(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        match parse_request_line(bytes) {
            ParseResult::Ok((line, read)) => {
                debug!("request line: {line}");
                self.phase = Phase::Header(line);
                Ok(read)
            }
            ParseResult::Pending => Ok(0),
            ParseResult::Err(err) => Err(err),
        }
    }

    fn parse_headers(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        let (read, _) = self.headers.parse_chunk(bytes)?;

        if self.headers.len() > self.config.max_headers() {
            return Err(ParseError::TooManyHeaders);
        }

        if read != 0 {
            return Ok(read);
        }

        // the collection stops before the empty line, and also on a partial line
        if !matches::starts_with_crlf(bytes) {
            return Ok(0);
        }

        match self.declared_length()? {
            0 => self.transition(Phase::Done),
            length => self.transition(|line| Phase::Body { line, length }),
        }

        Ok(matches::CRLF.len())
    }

    fn parse_body(&mut self, bytes: &[u8]) -> Result<usize, ParseError> {
        let Phase::Body { length, .. } = self.phase else {
            unreachable!("parsing body in {} state", self.state())
        };

        if length == 0 {
            self.transition(Phase::Done);
            return Ok(0);
        }

        let Some(left) = length.checked_sub(self.body.len()) else {
            unreachable!("body exceeds declared content length of {length}")
        };

        let read = left.min(bytes.len());
        self.body.extend_from_slice(&bytes[..read]);

        if self.body.len() == length {
            debug!("body complete, {length} bytes");
            self.transition(Phase::Done);
        }

        Ok(read)
    }

    /// Move to the next phase, carrying the request line over.
    fn transition(&mut self, next: impl FnOnce(RequestLine) -> Phase) {
        self.phase = match mem::replace(&mut self.phase, Phase::Error) {
            Phase::Header(line) | Phase::Body { line, .. } | Phase::Done(line) => next(line),
            phase @ (Phase::Init | Phase::Error) => {
                unreachable!("no request line to carry over in {} state", phase.state())
            }
        };
    }

    fn declared_length(&self) -> Result<usize, ParseError> {
        let mut values = self.headers.get_all("content-length");

        let Some(first) = values.next() else {
            return Ok(0);
        };

        match self.config.content_length() {
            ContentLengthPolicy::Lenient => match parse_signed_length(first.as_bytes()) {
                Some(length) => Ok(length),
                None => {
                    warning!("invalid content length {first:?}, assuming no body");
                    Ok(0)
                }
            },
            ContentLengthPolicy::Strict => {
                let length = parse_length(first.as_bytes()).ok_or(ParseError::InvalidContentLength)?;
                if values.any(|value| parse_length(value.as_bytes()) != Some(length)) {
                    return Err(ParseError::InvalidContentLength);
                }
                Ok(length)
            }
        }
    }
}

/// Like [`parse_length`], but allows one leading `+`. Negative values are rejected.
fn parse_signed_length(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [b'+', rest @ ..] => parse_length(rest),
        _ => parse_length(bytes),
    }
}

/// Parse ASCII decimal digits, sign is not allowed.
fn parse_length(bytes: &[u8]) -> Option<usize> {
    if bytes.is_empty() {
        return None;
    }
    bytes.iter().try_fold(0usize, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add((b - b'0') as usize)
    })
}
