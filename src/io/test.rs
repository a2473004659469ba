use std::io::{self, Read};

use crate::headers::HeaderMap;
use crate::io::{ErrorKind, ReadBuffer, read_request, read_request_with};
use crate::request::{Config, ParseError, Request, RequestLine, State};

/// Reader that returns at most `chunk` bytes per read.
struct Chunked<'a> {
    bytes: &'a [u8],
    chunk: usize,
}

impl<'a> Chunked<'a> {
    fn new(bytes: &'a [u8], chunk: usize) -> Self {
        Self { bytes, chunk }
    }
}

impl Read for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}

#[cfg(feature = "tokio")]
impl tokio::io::AsyncRead for Chunked<'_> {
    fn poll_read(
        self: std::pin::Pin<&mut Self>,
        _: &mut std::task::Context<'_>,
        buf: &mut tokio::io::ReadBuf<'_>,
    ) -> std::task::Poll<io::Result<()>> {
        let me = self.get_mut();
        let n = me.chunk.min(buf.remaining()).min(me.bytes.len());
        buf.put_slice(&me.bytes[..n]);
        me.bytes = &me.bytes[n..];
        std::task::Poll::Ready(Ok(()))
    }
}

/// Reader that yields `bytes` in one read, then fails with `kind`.
struct Failing<'a> {
    bytes: &'a [u8],
    kind: io::ErrorKind,
}

impl Read for Failing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes.is_empty() {
            return Err(self.kind.into());
        }
        let n = buf.len().min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}

fn snapshot(req: &Request) -> (State, Option<RequestLine>, HeaderMap, Vec<u8>) {
    (
        req.state(),
        req.request_line().cloned(),
        req.headers().clone(),
        req.body().to_vec(),
    )
}

const REQUEST: &[u8] = b"POST /submit?draft=1 HTTP/1.1\r\n\
    Host: localhost:42069\r\n\
    Content-Type: application/json\r\n\
    X-Trace: a\r\n\
    X-Trace: b\r\n\
    Content-Length: 22\r\n\
    \r\n\
    {\"flavor\":\"dark mode\"}";

#[test]
fn test_chunk_size_does_not_matter() {
    let expected = snapshot(&read_request(REQUEST).unwrap());
    assert_eq!(expected.0, State::Done);
    assert_eq!(expected.3, b"{\"flavor\":\"dark mode\"}");

    for chunk in 1..=REQUEST.len() {
        let req = read_request(Chunked::new(REQUEST, chunk)).unwrap();
        assert_eq!(snapshot(&req), expected, "chunk size {chunk}");
    }
}

#[test]
fn test_small_buffer() {
    let config = Config::new().with_initial_buffer(8).with_max_buffer(40);

    for chunk in [1, 3, 7, 64] {
        let req = read_request_with(Chunked::new(REQUEST, chunk), config).unwrap();
        assert!(req.is_done());
        assert_eq!(req.headers().get_all("x-trace").count(), 2);
        assert_eq!(req.body().len(), 22);
    }
}

#[test]
fn test_no_headers() {
    let req = read_request(Chunked::new(b"GET / HTTP/1.1\r\n\r\n", 3)).unwrap();
    let line = req.request_line().unwrap();
    assert_eq!(line.method(), "GET");
    assert_eq!(line.target(), "/");
    assert_eq!(line.version().as_number(), "1.1");
    assert!(req.headers().is_empty());
    assert!(req.body().is_empty());
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let input = b"GET / HTTP/1.1\r\nHost: x\r\n\r\nGET /next HTTP/1.1\r\n\r\n";
    let req = read_request(Chunked::new(input, 5)).unwrap();
    assert_eq!(req.request_line().unwrap().target(), "/");
}

#[test]
fn test_unexpected_eof() {
    macro_rules! test {
        ($input:expr, $state:ident, $msg:literal) => {
            for chunk in [1, 4, 1024] {
                let err = read_request(Chunked::new(&$input[..], chunk)).unwrap_err();
                assert!(err.is_unexpected_eof());
                assert!(matches!(err.kind(), ErrorKind::UnexpectedEof(State::$state)));
                assert_eq!(err.to_string(), $msg);
            }
        };
    }

    test!(b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhel", Body, "unexpected end of stream while reading body");
    test!(b"GET / HTTP/1.1\r\nHost: x\r\n", Header, "unexpected end of stream while reading headers");
    test!(b"GET / HTTP/1.1\r\nHo", Header, "unexpected end of stream while reading headers");
    test!(b"GET / HTT", Init, "unexpected end of stream while reading request line");
    test!(b"", Init, "unexpected end of stream while reading request line");
}

#[test]
fn test_parse_error() {
    let err = read_request(Chunked::new(b"GET / HTTP/1.0\r\n\r\n", 2)).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Parse(ParseError::UnsupportedVersion)));

    let err = read_request(&b"GET /\r\n\r\n"[..]).unwrap_err();
    assert!(matches!(err.into_kind(), ErrorKind::Parse(ParseError::MalformedRequestLine)));
}

#[test]
fn test_line_too_long() {
    let config = Config::new().with_initial_buffer(4).with_max_buffer(16);

    let err = read_request_with(Chunked::new(b"GET /a-very-long-target HTTP/1.1\r\n\r\n", 4), config)
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::LineTooLong));

    let err = read_request_with(&b"GET / HTTP/1.1\r\nX-Long: abcdefghijkl\r\n\r\n"[..], config)
        .unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::LineTooLong));

    // body is streamed through, only lines are bounded
    let body = [b'x'; 100];
    let mut input = b"PUT / HTTP/1.1\r\nContent-Length: 100\r\n\r\n".to_vec();
    input.extend_from_slice(&body);
    let config = Config::new().with_initial_buffer(8).with_max_buffer(24);
    let req = read_request_with(&input[..], config).unwrap();
    assert_eq!(req.body(), &body[..]);
}

#[test]
fn test_io_error() {
    let reader = Failing {
        bytes: b"GET / HTTP/1.1\r\n",
        kind: io::ErrorKind::ConnectionReset,
    };
    let err = read_request(reader).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Io(e) if e.kind() == io::ErrorKind::ConnectionReset));
}

#[test]
fn test_interrupted_is_retried() {
    struct Interrupting<'a> {
        inner: Chunked<'a>,
        interrupt: bool,
    }

    impl Read for Interrupting<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::ErrorKind::Interrupted.into());
            }
            self.inner.read(buf)
        }
    }

    let reader = Interrupting {
        inner: Chunked::new(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n", 6),
        interrupt: false,
    };
    let req = read_request(reader).unwrap();
    assert_eq!(req.headers().get_str("host"), ("x", true));
}

#[test]
fn test_read_buffer() {
    let mut buffer = ReadBuffer::with_capacity(4, 10);
    let mut reader = Chunked::new(b"abcdefghijklmnop", 16);

    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 4);
    assert_eq!(buffer.as_slice(), b"abcd");

    buffer.consume(3);
    assert_eq!(buffer.as_slice(), b"d");

    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 4);
    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 4);
    assert_eq!(buffer.as_slice(), b"defghijkl");
    assert!(!buffer.is_full());

    // limited by the remaining room
    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 1);
    assert_eq!(buffer.as_slice(), b"defghijklm");
    assert!(buffer.is_full());
    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 0);

    buffer.consume(10);
    assert!(buffer.is_empty());
    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 3);
    assert_eq!(buffer.as_slice(), b"nop");
    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 0);
    assert_eq!(buffer.len(), 3);
}

#[test]
fn test_read_buffer_error_keeps_content() {
    let mut buffer = ReadBuffer::with_capacity(8, 8);
    let mut reader = Failing {
        bytes: b"abc",
        kind: io::ErrorKind::TimedOut,
    };

    assert_eq!(buffer.fill_from(&mut reader).unwrap(), 3);
    let err = buffer.fill_from(&mut reader).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    assert_eq!(buffer.as_slice(), b"abc");
}

#[cfg(feature = "tokio")]
mod rt_tokio {
    use super::*;
    use crate::io::{read_request_async, read_request_async_with};

    #[tokio::test]
    async fn test_async_chunk_size_does_not_matter() {
        let expected = snapshot(&read_request_async(REQUEST).await.unwrap());

        for chunk in 1..=REQUEST.len() {
            let req = read_request_async(Chunked::new(REQUEST, chunk)).await.unwrap();
            assert_eq!(snapshot(&req), expected, "chunk size {chunk}");
        }
    }

    #[tokio::test]
    async fn test_async_errors() {
        let err = read_request_async(Chunked::new(b"POST / HTTP/1.1\r\nContent-Length: 5\r\n\r\nhel", 2))
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnexpectedEof(State::Body)));

        let config = Config::new().with_initial_buffer(4).with_max_buffer(8);
        let err = read_request_async_with(Chunked::new(b"GET /too-long HTTP/1.1\r\n\r\n", 3), config)
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::LineTooLong));
    }

    #[tokio::test]
    async fn test_async_read_buffer() {
        let mut buffer = ReadBuffer::with_capacity(4, 6);
        let mut reader = Chunked::new(b"abcdefgh", 16);

        assert_eq!(buffer.fill_from_async(&mut reader).await.unwrap(), 4);
        assert_eq!(buffer.fill_from_async(&mut reader).await.unwrap(), 2);
        assert!(buffer.is_full());
        assert_eq!(buffer.fill_from_async(&mut reader).await.unwrap(), 0);

        buffer.consume(5);
        assert_eq!(buffer.fill_from_async(&mut reader).await.unwrap(), 2);
        assert_eq!(buffer.as_slice(), b"fgh");
    }
}
