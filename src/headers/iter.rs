use super::{HeaderMap, HeaderName, HeaderValue};

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned from [`HeaderMap::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(map: &'a HeaderMap) -> Self {
        Self {
            iter: map.fields().iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a HeaderValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(name, value)| (name, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> { }

/// Iterator returned from [`HeaderMap::get_all`].
#[derive(Debug)]
pub struct GetAll<'a> {
    iter: std::slice::Iter<'a, (HeaderName, HeaderValue)>,
    name: &'a str,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(map: &'a HeaderMap, name: &'a str) -> Self {
        Self {
            iter: map.fields().iter(),
            name,
        }
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.name;
        self.iter
            .by_ref()
            .find(|(key, _)| key.eq_ignore_case(name))
            .map(|(_, value)| value)
    }
}
