use bytes::{Buf, BytesMut};
use std::io::{self, Read};

use crate::request::Config;

/// Owned read buffer with bounded capacity.
///
/// Bytes are appended at the tail by [`fill_from`][ReadBuffer::fill_from] and dropped from the
/// front by [`consume`][ReadBuffer::consume]. Space of consumed bytes is reclaimed by moving the
/// remaining bytes to the front when the tail runs out of room, so consumed bytes are never read
/// twice and the buffer does not grow past its limit.
pub struct ReadBuffer {
    buf: BytesMut,
    chunk: usize,
    max: usize,
}

impl ReadBuffer {
    /// Create buffer with `initial` capacity that holds at most `max` bytes.
    ///
    /// A single read fills at most `initial` bytes.
    pub fn with_capacity(initial: usize, max: usize) -> Self {
        let max = max.max(1);
        let chunk = initial.clamp(1, max);
        Self {
            buf: BytesMut::with_capacity(chunk),
            chunk,
            max,
        }
    }

    /// Create buffer from [`Config::initial_buffer`] and [`Config::max_buffer`].
    #[inline]
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_buffer(), config.max_buffer())
    }

    /// Returns the unconsumed bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of unconsumed bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` if no more bytes can be read without consuming.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buf.len() >= self.max
    }

    /// Drop `n` bytes from the front.
    ///
    /// # Panics
    ///
    /// Panics if `n` is larger than [`len`][ReadBuffer::len].
    #[inline]
    pub fn consume(&mut self, n: usize) {
        self.buf.advance(n);
    }

    /// Reserve room at the tail for the next read, returns how many bytes it may read.
    fn reserve_tail(&mut self) -> usize {
        let spare = self.max.saturating_sub(self.buf.len()).min(self.chunk);
        // when the consumed prefix is large enough, this moves the remaining bytes to the front
        // instead of allocating
        self.buf.reserve(spare);
        spare
    }

    /// Perform a single blocking read from `reader` into the tail.
    ///
    /// Returns the number of bytes read, `0` means end of stream, or that the buffer is
    /// [full][ReadBuffer::is_full].
    ///
    /// # Errors
    ///
    /// Returns the reader error as is, the buffer content is left unchanged.
    pub fn fill_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<usize> {
        let start = self.buf.len();
        let spare = self.reserve_tail();
        // `Read` only writes into initialized memory, at most `chunk` bytes are zeroed per read
        self.buf.resize(start + spare, 0);

        match reader.read(&mut self.buf[start..]) {
            Ok(read) => {
                self.buf.truncate(start + read);
                Ok(read)
            }
            Err(err) => {
                self.buf.truncate(start);
                Err(err)
            }
        }
    }

    /// Perform a single read from async `reader` into the tail.
    ///
    /// See [`fill_from`][ReadBuffer::fill_from] for details.
    #[cfg(feature = "tokio")]
    pub async fn fill_from_async<R>(&mut self, reader: &mut R) -> io::Result<usize>
    where
        R: tokio::io::AsyncRead + Unpin + ?Sized,
    {
        use bytes::BufMut;
        use tokio::io::AsyncReadExt;

        let spare = self.reserve_tail();
        if spare == 0 {
            return Ok(0);
        }
        let mut tail = (&mut self.buf).limit(spare);
        reader.read_buf(&mut tail).await
    }
}

impl std::fmt::Debug for ReadBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ReadBuffer")
            .field("len", &self.buf.len())
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
