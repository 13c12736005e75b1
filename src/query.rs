//! The query multimap.

use std::{fmt, slice};
use url::form_urlencoded;

/// The key dropped from every query by normalization.
pub(crate) const PROTO_KEY: &str = "__proto__";

/// Decodes a query string into a [`QueryMap`].
///
/// The query is decoded as `application/x-www-form-urlencoded`: pairs are
/// separated by `&`, a `+` stands for a space, and malformed escapes are
/// kept literally. A leading `?` is not stripped.
///
/// # Examples
///
/// ```
/// use lenient_uri::parse_query_string;
///
/// let query = parse_query_string("tr=udp%3A%2F%2Fa&dn=Linux+64x&tr=b");
/// assert_eq!(query.get("dn"), Some("Linux 64x"));
/// assert_eq!(query.get_all("tr"), ["udp://a", "b"]);
/// assert_eq!(query.keys().collect::<Vec<_>>(), ["tr", "dn"]);
/// ```
#[must_use]
pub fn parse_query_string(query: &str) -> QueryMap {
    form_urlencoded::parse(query.as_bytes()).collect()
}

/// Re-encodes a raw query string after removing every pair with the given key.
///
/// Returns `None` when no pair is left.
pub(crate) fn strip_key(query: &str, key: &str) -> Option<String> {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    ser.extend_pairs(form_urlencoded::parse(query.as_bytes()).filter(|(k, _)| k != key));
    Some(ser.finish()).filter(|s| !s.is_empty())
}

/// Appends pairs to a raw query string, re-encoding the existing pairs.
pub(crate) fn append_pairs<I, K, V>(query: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut ser = form_urlencoded::Serializer::new(String::new());
    ser.extend_pairs(form_urlencoded::parse(query.as_bytes()));
    ser.extend_pairs(pairs);
    ser.finish()
}

/// An ordered multimap of decoded query parameters.
///
/// Keys are kept in order of first appearance. The values of a key are
/// kept in order of appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryMap {
    /// Creates an empty `QueryMap`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the map has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns the first value of a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    /// Returns every value of a key, or an empty slice.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        match self.position(key) {
            Some(i) => &self.entries[i].1,
            None => &[],
        }
    }

    /// Checks whether the map has a key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Appends a value to a key, adding the key at the end if it is new.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.position(&key) {
            Some(i) => self.entries[i].1.push(value.into()),
            None => self.entries.push((key, vec![value.into()])),
        }
    }

    /// Removes a key, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let i = self.position(key)?;
        Some(self.entries.remove(i).1)
    }

    /// Returns an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns an iterator over every key-value pair, grouped by key.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries.iter(),
            cur: None,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = QueryMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.append(k, v);
        }
    }
}

impl<'a> IntoIterator for &'a QueryMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// An iterator over the key-value pairs of a [`QueryMap`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    entries: slice::Iter<'a, (String, Vec<String>)>,
    cur: Option<(&'a str, slice::Iter<'a, String>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, values)) = &mut self.cur {
                if let Some(value) = values.next() {
                    return Some((*key, value.as_str()));
                }
            }
            let (key, values) = self.entries.next()?;
            self.cur = Some((key, values.iter()));
        }
    }
}

/// Encodes the map as `application/x-www-form-urlencoded`.
impl fmt::Display for QueryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        ser.extend_pairs(self.iter());
        f.write_str(&ser.finish())
    }
}
