//! HTTP Header Multimap.
//!
//! [`HeaderMap::parse_chunk`] parses header lines incrementally, see its documentation for the
//! exact contract.
mod name;
mod value;
mod map;
mod iter;
mod parser;
mod error;

#[cfg(test)]
mod test;

pub use name::{HeaderName, AsHeaderName};
pub use value::HeaderValue;
pub use map::{HeaderMap, IntoHeaderName};
pub use iter::{Iter, GetAll};
pub use error::HeaderError;
