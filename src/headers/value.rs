use bytes::Bytes;

use super::error::HeaderError;
use crate::matches;

/// HTTP Header Value.
///
/// Only visible ASCII, SP and HTAB are accepted. obs-text (`0x80..=0xFF`) is rejected with
/// [`HeaderError::InvalidValue`] instead of being carried as opaque bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HeaderValue {
    /// is ASCII
    bytes: Bytes,
}

impl HeaderValue {
    /// Parse header value from static str.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header value.
    #[inline]
    pub fn from_static(value: &'static str) -> Self {
        match validate_header_value(value.as_bytes()) {
            Ok(()) => Self {
                bytes: Bytes::from_static(value.as_bytes()),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header value by copying from slice of bytes.
    ///
    /// Leading and trailing SP and HTAB are removed.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_slice<A: AsRef<[u8]>>(value: A) -> Result<Self, HeaderError> {
        let value = trim_ows(value.as_ref());
        validate_header_value(value)?;
        Ok(Self {
            bytes: Bytes::copy_from_slice(value),
        })
    }

    /// Returns header value as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns header value as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `bytes` is valid ASCII
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }
}

fn trim_ows(mut bytes: &[u8]) -> &[u8] {
    while let [b' ' | b'\t', rest @ ..] = bytes {
        bytes = rest;
    }
    while let [rest @ .., b' ' | b'\t'] = bytes {
        bytes = rest;
    }
    bytes
}

fn validate_header_value(bytes: &[u8]) -> Result<(), HeaderError> {
    if bytes.iter().all(|&b| matches::is_header_value(b)) {
        Ok(())
    } else {
        Err(HeaderError::InvalidValue)
    }
}

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl std::fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
