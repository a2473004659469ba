use std::io;
use tokio::io::AsyncRead;

use super::{Error, ErrorKind, ReadBuffer, advance, complete};
use crate::request::{Config, Request};

/// Read a single request from async `reader` with default [`Config`].
///
/// This is the async counterpart of [`read_request`][super::read_request].
///
/// # Errors
///
/// Returns error if reading fails, the bytes is not a valid request, or the stream ends before
/// the request is complete.
#[inline]
pub async fn read_request_async<R>(reader: R) -> Result<Request, Error>
where
    R: AsyncRead + Unpin,
{
    read_request_async_with(reader, Config::new()).await
}

/// Read a single request from async `reader`.
///
/// See [`read_request_async`] for details.
pub async fn read_request_async_with<R>(mut reader: R, config: Config) -> Result<Request, Error>
where
    R: AsyncRead + Unpin,
{
    let mut request = Request::with_config(config);
    let mut buffer = ReadBuffer::from_config(&config);

    while !request.is_done() {
        if buffer.is_full() {
            return Err(ErrorKind::LineTooLong.into());
        }

        let read = match buffer.fill_from_async(&mut reader).await {
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
