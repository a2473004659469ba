use std::{fmt, io};

use crate::request::{ParseError, State};

/// An error that can occur when reading a request from a stream.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

/// The kind of [`Error`].
#[derive(Debug)]
pub enum ErrorKind {
    /// Reading from the stream failed.
    Io(io::Error),
    /// Bytes from the stream is not a valid request.
    Parse(ParseError),
    /// A single request line or header line does not fit the read buffer.
    LineTooLong,
    /// Stream ended before the request is complete, contains the state it ended in.
    UnexpectedEof(State),
}

use ErrorKind as Kind;

impl Error {
    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume error into its kind.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if the stream ended before the request is complete.
    #[inline]
    pub fn is_unexpected_eof(&self) -> bool {
        matches!(self.kind, Kind::UnexpectedEof(_))
    }
}

impl From<Kind> for Error {
    #[inline]
    fn from(kind: Kind) -> Self {
        Self { kind }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(v: io::Error) -> Self {
        Self { kind: Kind::Io(v) }
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(v: ParseError) -> Self {
        Self { kind: Kind::Parse(v) }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            Kind::Io(err) => Some(err),
            Kind::Parse(err) => Some(err),
            Kind::LineTooLong | Kind::UnexpectedEof(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Io(err) => write!(f, "io error: {err}"),
            Kind::Parse(err) => write!(f, "parse error: {err}"),
            Kind::LineTooLong => f.write_str("request line or header line too long"),
            Kind::UnexpectedEof(State::Init) => {
                f.write_str("unexpected end of stream while reading request line")
            }
            Kind::UnexpectedEof(State::Header) => {
                f.write_str("unexpected end of stream while reading headers")
            }
            Kind::UnexpectedEof(State::Body) => {
                f.write_str("unexpected end of stream while reading body")
            }
            Kind::UnexpectedEof(state) => write!(f, "unexpected end of stream in {state} state"),
        }
    }
}
