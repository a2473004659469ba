//! Incremental HTTP/1.1 Request Parser
//!
//! Bytes may arrive in any chunk size, the parser never assumes a read boundary lines up
//! with a protocol boundary.
//!
//! - [`headers`] contains the header multimap and the header line parser
//! - [`request`] contains the request line scanner and the request state machine
//! - [`io`] contains the read buffer and the drivers that pull bytes from a reader
#![warn(missing_debug_implementations)]

mod log;
mod matches;
mod common;

pub mod headers;
pub mod request;
pub mod io;

pub use common::ParseResult;
pub use request::{Config, ContentLengthPolicy, Request, RequestLine, State, Version};
pub use io::{read_request, read_request_with};

#[cfg(feature = "tokio")]
pub use io::{read_request_async, read_request_async_with};
