use bytes::Bytes;

use super::error::HeaderError;
use crate::matches;

/// HTTP Header name.
///
/// # Case Normalization
///
/// Input is normalized to lowercase at construction time, so comparison against another
/// [`HeaderName`] is a plain byte comparison.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HeaderName {
    /// is lowercase token
    bytes: Bytes,
}

impl HeaderName {
    /// Parse header name from static str.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name.
    #[inline]
    pub fn from_static(name: &'static str) -> Self {
        match validate_header_name(name.as_bytes()) {
            Ok(()) if !name.bytes().any(|b| b.is_ascii_uppercase()) => Self {
                bytes: Bytes::from_static(name.as_bytes()),
            },
            Ok(()) => Self::lowercase(name.as_bytes()),
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header name by copying from slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name.
    #[inline]
    pub fn from_slice<A: AsRef<[u8]>>(name: A) -> Result<Self, HeaderError> {
        let name = name.as_ref();
        validate_header_name(name)?;
        Ok(Self::lowercase(name))
    }

    fn lowercase(name: &[u8]) -> Self {
        Self {
            bytes: Bytes::from(name.to_ascii_lowercase()),
        }
    }

    /// Returns header name as lowercase `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `bytes` is validated as token which is ASCII
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Returns `true` if this name equals `name`, ignoring ASCII case.
    #[inline]
    pub fn eq_ignore_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }
}

fn validate_header_name(bytes: &[u8]) -> Result<(), HeaderError> {
    if bytes.is_empty() || !bytes.iter().all(|&b| matches::is_token(b)) {
        return Err(HeaderError::InvalidName);
    }
    Ok(())
}

impl std::fmt::Debug for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

impl std::fmt::Display for HeaderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for HeaderName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_case(other)
    }
}

impl PartialEq<&str> for HeaderName {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_case(other)
    }
}

// ===== Ref Traits =====

/// A type that can be used for [`HeaderMap`] lookup.
///
/// Lookup is case-insensitive.
///
/// [`HeaderMap`]: super::HeaderMap
#[allow(private_bounds)]
pub trait AsHeaderName: Sealed { }
trait Sealed {
    fn as_name_str(&self) -> &str;
}

impl AsHeaderName for str { }
impl Sealed for str {
    #[inline]
    fn as_name_str(&self) -> &str {
        self
    }
}

impl AsHeaderName for String { }
impl Sealed for String {
    #[inline]
    fn as_name_str(&self) -> &str {
        self
    }
}

impl AsHeaderName for HeaderName { }
impl Sealed for HeaderName {
    #[inline]
    fn as_name_str(&self) -> &str {
        self.as_str()
    }
}

// blanket implementation
impl<K: AsHeaderName + ?Sized> AsHeaderName for &K { }
impl<S: Sealed + ?Sized> Sealed for &S {
    #[inline]
    fn as_name_str(&self) -> &str {
        S::as_name_str(self)
    }
}

pub(crate) fn name_str<K: AsHeaderName + ?Sized>(name: &K) -> &str {
    name.as_name_str()
}
