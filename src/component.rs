//! The component model and its derived accessors.

use crate::{
    ip,
    pct_enc::{encode, table::COMPONENT},
    query::{parse_query_string, QueryMap},
    suffix::{self, DomainParts},
};
use ref_cast::{ref_cast_custom, RefCastCustom};
use std::str::Split;

/// Schemes with a registered default port.
const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("http", 80),
    ("https", 443),
    ("ftp", 21),
    ("gopher", 70),
    ("ws", 80),
    ("wss", 443),
];

/// A scheme component.
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. Compare the results of
/// [`as_str`](Self::as_str) for a case-sensitive comparison.
///
/// # Examples
///
/// ```
/// use lenient_uri::{component::Scheme, parse};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new("http");
///
/// let data = parse("HTTP://EXAMPLE.COM/");
/// let scheme = Scheme::new(data.scheme());
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// assert_eq!(scheme.default_port(), Some(80));
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    /// Converts a string slice to `&Scheme`.
    ///
    /// No validation is done: the parser only ever captures alphanumeric
    /// schemes, but a hand-built [`UriData`] may hold anything.
    #[ref_cast_custom]
    #[inline]
    #[must_use]
    pub const fn new(scheme: &str) -> &Scheme;

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the default port of the scheme, if it has one.
    ///
    /// The table covers `http` (80), `https` (443), `ftp` (21),
    /// `gopher` (70), `ws` (80) and `wss` (443).
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        DEFAULT_PORTS
            .iter()
            .find(|(name, _)| self.inner.eq_ignore_ascii_case(name))
            .map(|&(_, port)| port)
    }

    /// Checks whether the scheme is one of the schemes with a default port.
    ///
    /// Only these schemes are recognized without slashes after the colon.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.default_port().is_some()
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// The components of a URI.
///
/// Every field is optional. An empty string and an absent field mean the
/// same thing to every operation of this crate, and every string accessor
/// returns `""` for an absent component.
///
/// A `UriData` is obtained with [`parse`](crate::parse()) and turned back
/// into a string with its [`Display`](std::fmt::Display) implementation.
///
/// # Invariants
///
/// Values produced by this crate satisfy the following:
///
/// - When `urn` is `true`, the authority fields are absent and the path is
///   opaque.
/// - A present `port` implies a present `hostname`.
/// - `username` and `password` are percent-decoded; the other fields hold
///   the text as it was captured.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UriData {
    /// The scheme, without the colon.
    pub scheme: Option<String>,
    /// The decoded username.
    pub username: Option<String>,
    /// The decoded password.
    pub password: Option<String>,
    /// The host, without brackets around an IPv6 address.
    pub hostname: Option<String>,
    /// The port, as captured.
    pub port: Option<String>,
    /// The path, with forward slashes only.
    pub path: Option<String>,
    /// The query, without the question mark.
    pub query: Option<String>,
    /// The fragment, without the number sign.
    pub fragment: Option<String>,
    /// Whether this is an opaque, non-hierarchical reference such as
    /// `mailto:hello@example.org`.
    pub urn: bool,
}

pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

impl UriData {
    /// Parses a string into a `UriData`.
    ///
    /// This is equivalent to [`parse`](crate::parse()).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        crate::parse(s)
    }

    /// Returns the scheme, or `""`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.scheme.as_deref().unwrap_or_default()
    }

    /// Returns the decoded username, or `""`.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    /// Returns the decoded password, or `""`.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    /// Returns the host name, or `""`.
    #[must_use]
    pub fn hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or_default()
    }

    /// Returns the port, or `""`.
    #[must_use]
    pub fn port(&self) -> &str {
        self.port.as_deref().unwrap_or_default()
    }

    /// Returns the path, or `""`.
    #[must_use]
    pub fn pathname(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    /// Returns the raw query string, or `""`.
    #[must_use]
    pub fn query_string(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    /// Returns the fragment, or `""`.
    #[must_use]
    pub fn fragment(&self) -> &str {
        self.fragment.as_deref().unwrap_or_default()
    }

    /// Returns the query decoded into an ordered multimap.
    #[must_use]
    pub fn query(&self) -> QueryMap {
        parse_query_string(self.query_string())
    }

    /// Returns an iterator over the path segments, split on `/`.
    ///
    /// An absolute path yields an empty first segment, and an empty path
    /// yields a single empty segment.
    pub fn segments(&self) -> Split<'_, char> {
        self.pathname().split('/')
    }

    /// Returns the last path segment, or `""` for an opaque reference.
    #[must_use]
    pub fn filename(&self) -> &str {
        if self.urn {
            return "";
        }
        self.segments().last().unwrap_or_default()
    }

    /// Returns the extension of the filename, without the dot.
    ///
    /// Only an extension made of ASCII alphanumerics and `%` counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::parse;
    ///
    /// assert_eq!(parse("/some/file.html").suffix(), "html");
    /// assert_eq!(parse("/some/file.html-is-awesome").suffix(), "");
    /// assert_eq!(parse("/some/file").suffix(), "");
    /// ```
    #[must_use]
    pub fn suffix(&self) -> &str {
        match self.filename().rsplit_once('.') {
            Some((_, ext))
                if !ext.is_empty()
                    && ext.bytes().all(|x| x.is_ascii_alphanumeric() || x == b'%') =>
            {
                ext
            }
            _ => "",
        }
    }

    /// Returns the user info, percent-encoded, as `user[:password]`.
    #[must_use]
    pub fn user_info(&self) -> String {
        let mut buf = encode(self.username(), COMPONENT).into_owned();
        if let Some(password) = present(&self.password) {
            buf.push(':');
            buf.push_str(&encode(password, COMPONENT));
        }
        buf
    }

    /// Returns the host name and port, as `hostname[:port]`.
    ///
    /// An IPv6 host name is enclosed in brackets.
    #[must_use]
    pub fn host(&self) -> String {
        let hostname = self.hostname();
        let mut buf = if self.is_ipv6() {
            format!("[{hostname}]")
        } else {
            hostname.to_owned()
        };
        if let Some(port) = present(&self.port) {
            buf.push(':');
            buf.push_str(port);
        }
        buf
    }

    /// Returns the authority, as `[user_info@]host`.
    #[must_use]
    pub fn authority(&self) -> String {
        let user_info = self.user_info();
        let host = self.host();
        if user_info.is_empty() {
            host
        } else {
            format!("{user_info}@{host}")
        }
    }

    /// Returns the origin, as `scheme://authority`, or `""` when there is
    /// no authority.
    #[must_use]
    pub fn origin(&self) -> String {
        let authority = self.authority();
        match present(&self.scheme) {
            Some(scheme) if !authority.is_empty() => format!("{scheme}://{authority}"),
            _ => authority,
        }
    }

    fn domain_parts(&self) -> DomainParts<'_> {
        suffix::split(self.hostname())
    }

    /// Returns the effective top-level domain of the host.
    ///
    /// See [`suffix::tld`](crate::suffix::tld).
    #[must_use]
    pub fn tld(&self) -> &str {
        self.domain_parts().tld
    }

    /// Returns the registrable domain of the host.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.domain_parts().domain
    }

    /// Returns the labels of the host in front of the registrable domain.
    #[must_use]
    pub fn subdomain(&self) -> &str {
        self.domain_parts().subdomain
    }

    /// Checks whether the host looks like an IPv4 address.
    #[must_use]
    pub fn is_ipv4(&self) -> bool {
        present(&self.hostname).map_or(false, ip::is_ipv4)
    }

    /// Checks whether the host is an IPv6 address.
    #[must_use]
    pub fn is_ipv6(&self) -> bool {
        present(&self.hostname).map_or(false, ip::is_ipv6)
    }

    /// Checks whether the host is an IP address of either version.
    #[must_use]
    pub fn is_ip(&self) -> bool {
        self.is_ipv4() || self.is_ipv6()
    }

    /// Checks whether this is an opaque reference or has a host.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.urn || present(&self.hostname).is_some()
    }

    /// Checks whether this is an opaque reference.
    #[must_use]
    pub fn is_urn(&self) -> bool {
        self.urn
    }
}
