use super::{
    HeaderName, HeaderValue,
    iter::{GetAll, Iter},
    name::{AsHeaderName, name_str},
};

/// HTTP Headers Multimap.
///
/// Entries are kept in insertion order, a name can appear more than once.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns headers length, counting every value of duplicate names.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields(&self) -> &[(HeaderName, HeaderValue)] {
        &self.fields
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns `true` if the map contains a header value for given header name.
    #[inline]
    pub fn contains_key<K: AsHeaderName + ?Sized>(&self, name: &K) -> bool {
        self.get(name).is_some()
    }

    /// Returns a reference to the first header value corresponding to the given header name.
    ///
    /// Lookup is case-insensitive.
    ///
    /// ```rust
    /// use kirim::headers::{HeaderMap, HeaderValue};
    ///
    /// let mut map = HeaderMap::new();
    /// map.append("Host", HeaderValue::from_static("example.com"));
    /// assert_eq!(map.get("host").unwrap().as_str(), "example.com");
    /// assert!(map.get("missing").is_none());
    /// ```
    pub fn get<K: AsHeaderName + ?Sized>(&self, name: &K) -> Option<&HeaderValue> {
        let name = name_str(name);
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_case(name))
            .map(|(_, value)| value)
    }

    /// Returns the first header value as `str`, or empty string if not found, paired with
    /// whether the header was found.
    #[inline]
    pub fn get_str<K: AsHeaderName + ?Sized>(&self, name: &K) -> (&str, bool) {
        match self.get(name) {
            Some(value) => (value.as_str(), true),
            None => ("", false),
        }
    }

    /// Returns an iterator to all header values corresponding to the given header name.
    #[inline]
    pub fn get_all<'a, K: AsHeaderName + ?Sized>(&'a self, name: &'a K) -> GetAll<'a> {
        GetAll::new(self, name_str(name))
    }

    /// Returns an iterator over headers as name and value pair in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Visit every header as name and value pair in insertion order.
    #[inline]
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&HeaderName, &HeaderValue),
    {
        for (name, value) in self {
            visit(name, value);
        }
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Inserts a key-value pair into the map.
    ///
    /// If the map did have this key present, all of its values are removed, and the first
    /// old value is returned.
    pub fn insert(&mut self, name: impl IntoHeaderName, value: HeaderValue) -> Option<HeaderValue> {
        let name = name.into_header_name();
        let old = self.remove(&name);
        self.fields.push((name, value));
        old
    }

    /// Append a header key and value into the map.
    ///
    /// Unlike [`insert`][HeaderMap::insert], if header key is present, header value is still
    /// appended as extra value.
    #[inline]
    pub fn append(&mut self, name: impl IntoHeaderName, value: HeaderValue) {
        self.fields.push((name.into_header_name(), value));
    }

    /// Removes a header from the map, returning the first header value at the key if the key was
    /// previously in the map.
    ///
    /// The rest of duplicate header values are dropped.
    pub fn remove<K: AsHeaderName + ?Sized>(&mut self, name: &K) -> Option<HeaderValue> {
        let name = name_str(name);
        let mut first = None;
        let mut index = 0;
        while index < self.fields.len() {
            if self.fields[index].0.eq_ignore_case(name) {
                let (_, value) = self.fields.remove(index);
                first.get_or_insert(value);
            } else {
                index += 1;
            }
        }
        first
    }

    /// Clear headers map, removing all the value.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ===== Owned Traits =====

/// A type that can be used for name consuming [`HeaderMap`] operation.
///
/// # Panics
///
/// Using static str that is not a valid header name panics.
#[allow(private_bounds)]
pub trait IntoHeaderName: Sealed {}
trait Sealed: Sized {
    fn into_header_name(self) -> HeaderName;
}

impl IntoHeaderName for &'static str {}
impl Sealed for &'static str {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        HeaderName::from_static(self)
    }
}

impl IntoHeaderName for HeaderName {}
impl Sealed for HeaderName {
    #[inline]
    fn into_header_name(self) -> HeaderName {
        self
    }
}
