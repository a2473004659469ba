//! Request reading from a byte stream.
//!
//! The drivers own a [`ReadBuffer`] and a [`Request`], perform reads into the buffer and feed
//! the unconsumed bytes to [`Request::parse`] until the request is complete.
//!
//! The drivers does not apply any timeout, a stalled peer blocks the caller until data arrives
//! or the stream is closed. Timeout should be layered on the stream itself.
use std::io::{self, Read};

use crate::log::{debug, trace};
use crate::request::{Config, Request, State};

mod buffer;
mod error;
#[cfg(feature = "tokio")]
mod rt_tokio;

#[cfg(test)]
mod test;

pub use buffer::ReadBuffer;
pub use error::{Error, ErrorKind};

#[cfg(feature = "tokio")]
pub use rt_tokio::{read_request_async, read_request_async_with};

/// Read a single request from blocking `reader` with default [`Config`].
///
/// ```rust
/// let raw = b"POST /echo HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
/// let req = kirim::read_request(&raw[..]).unwrap();
///
/// assert_eq!(req.request_line().unwrap().method(), "POST");
/// assert_eq!(req.body(), b"hello");
///
/// let err = kirim::read_request(&raw[..raw.len() - 2]).unwrap_err();
/// assert_eq!(err.to_string(), "unexpected end of stream while reading body");
/// ```
///
/// # Errors
///
/// Returns error if reading fails, the bytes is not a valid request, or the stream ends before
/// the request is complete. Partially parsed request is never returned.
#[inline]
pub fn read_request<R: Read>(reader: R) -> Result<Request, Error> {
    read_request_with(reader, Config::new())
}

/// Read a single request from blocking `reader`.
///
/// See [`read_request`] for details.
pub fn read_request_with<R: Read>(mut reader: R, config: Config) -> Result<Request, Error> {
    let mut request = Request::with_config(config);
    let mut buffer = ReadBuffer::from_config(&config);

    while !request.is_done() {
        if buffer.is_full() {
            return Err(ErrorKind::LineTooLong.into());
        }

        let read = match buffer.fill_from(&mut reader) {
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };

        if read == 0 {
            break;
        }

        advance(&mut request, &mut buffer)?;
    }

    complete(request)
}

/// Parse the buffered bytes and drop the consumed ones.
fn advance(request: &mut Request, buffer: &mut ReadBuffer) -> Result<(), Error> {
    let consumed = request.parse(buffer.as_slice())?;
    buffer.consume(consumed);
    trace!("{} bytes left in buffer", buffer.len());
    Ok(())
}

/// Returns the request if it is complete.
fn complete(request: Request) -> Result<Request, Error> {
    match request.state() {
        State::Done => Ok(request),
        state => {
            debug!("stream ended in {state} state");
            Err(ErrorKind::UnexpectedEof(state).into())
        }
    }
}
