//! Module for normalization.

use crate::{
    component::{present, Scheme, UriData},
    error::{ParseError, ParseErrorKind},
    ip::is_ipv6,
    query::{strip_key, PROTO_KEY},
    resolve::remove_dot_segments,
};
use url::Url;

/// A configurable normalizer.
///
/// Normalization runs the following steps in order:
///
/// 1. The scheme is lower-cased.
/// 2. The host is canonicalized by the WHATWG host parser: names are
///    lower-cased and converted to punycode, IPv4 addresses are written in
///    dotted decimal and IPv6 addresses are compressed. Hosts that the
///    parser rejects fail the normalization.
/// 3. A port equal to the default port of the scheme is removed. Any other
///    port is written without leading zeros.
/// 4. Double quotes and spaces in the path are percent-encoded. Then the
///    slashes of an opaque path are percent-encoded, or the dot segments of
///    a hierarchical path are removed.
/// 5. The query is re-encoded as `application/x-www-form-urlencoded`,
///    without any `__proto__` key.
///
/// Normalization is idempotent.
#[derive(Clone, Copy)]
#[allow(missing_debug_implementations)]
#[must_use]
pub struct Normalizer {
    default_port_f: fn(&Scheme) -> Option<u16>,
}

impl Normalizer {
    /// Creates a new `Normalizer` with default configuration.
    pub fn new() -> Self {
        Self {
            default_port_f: Scheme::default_port,
        }
    }

    /// Sets the function with which to get the default port of a scheme.
    ///
    /// This defaults to [`Scheme::default_port`].
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::{component::Scheme, normalize::Normalizer, parse};
    ///
    /// const SCHEME_FOO: &Scheme = Scheme::new("foo");
    ///
    /// let normalizer = Normalizer::new().default_port_with(|scheme| {
    ///     if scheme == SCHEME_FOO {
    ///         Some(4673)
    ///     } else {
    ///         scheme.default_port()
    ///     }
    /// });
    /// let data = normalizer.normalize(&parse("foo://localhost:4673"))?;
    ///
    /// assert_eq!(data.to_string(), "foo://localhost/");
    /// # Ok::<_, lenient_uri::ParseError>(())
    /// ```
    pub fn default_port_with(mut self, f: fn(&Scheme) -> Option<u16>) -> Self {
        self.default_port_f = f;
        self
    }

    /// Normalizes the given components.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the host or the port is rejected by the host parser.
    pub fn normalize(&self, data: &UriData) -> Result<UriData, ParseError> {
        let mut data = data.clone();

        if let Some(scheme) = &mut data.scheme {
            scheme.make_ascii_lowercase();
        }

        if present(&data.hostname).is_some() {
            data.hostname = Some(canonicalize_host(&data)?);
        }

        if let Some(port) = present(&data.port) {
            let value = port_value(port);
            let default = present(&data.scheme).and_then(|s| (self.default_port_f)(Scheme::new(s)));
            data.port = match value {
                Some(v) if default != Some(v) => Some(v.to_string()),
                _ => None,
            };
        }

        if let Some(path) = &mut data.path {
            if path.contains(['"', ' ']) {
                *path = path.replace('"', "%22").replace(' ', "%20");
            }
            if data.urn {
                *path = path.replace('/', "%2F");
            } else if !path.is_empty() {
                *path = remove_dot_segments(path);
            }
        }

        if let Some(query) = present(&data.query) {
            data.query = strip_key(query, PROTO_KEY);
        }

        Ok(data)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes the given components with the default configuration.
///
/// See [`Normalizer`] for the exact behavior.
///
/// # Errors
///
/// Returns `Err` if the host or the port is rejected by the host parser.
///
/// # Examples
///
/// ```
/// use lenient_uri::{normalize, parse};
///
/// let data = normalize(&parse("HTTP://User@EXAMPLE.org:80/a/./b/../c d?__proto__=x&q=1"))?;
/// assert_eq!(data.to_string(), "http://User@example.org/a/c%20d?q=1");
///
/// let data = normalize(&parse("http://[FEDC:BA98:0:0:0:0:0:3210]:0080/"))?;
/// assert_eq!(data.to_string(), "http://[fedc:ba98::3210]/");
/// # Ok::<_, lenient_uri::ParseError>(())
/// ```
pub fn normalize(data: &UriData) -> Result<UriData, ParseError> {
    Normalizer::new().normalize(data)
}

/// Runs `hostname[:port]` through the WHATWG host parser.
fn canonicalize_host(data: &UriData) -> Result<String, ParseError> {
    let hostname = data.hostname();
    // These would be taken as delimiters instead of being rejected.
    if hostname.contains(['@', '/', '\\', '?', '#']) {
        tracing::debug!(hostname, "host contains a delimiter");
        return Err(ParseError::new(ParseErrorKind::InvalidHost));
    }
    // A colon run that is not an address would otherwise read as a port.
    if hostname.contains(':') && !is_ipv6(hostname) {
        tracing::debug!(hostname, "host has colons but is not IPv6");
        return Err(ParseError::new(ParseErrorKind::InvalidHost));
    }

    let host = data.host();
    match Url::parse(&format!("http://{host}")) {
        Ok(url) => {
            let canonical = url.host_str().unwrap_or_default();
            let canonical = canonical
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .unwrap_or(canonical);
            Ok(canonical.to_owned())
        }
        Err(e) => {
            tracing::debug!(host = host.as_str(), error = %e, "failed to canonicalize host");
            let kind = match e {
                url::ParseError::InvalidPort => ParseErrorKind::InvalidPort,
                _ => ParseErrorKind::InvalidHost,
            };
            Err(ParseError::new(kind))
        }
    }
}

/// Reads the decimal digits at the start of a port.
///
/// Anything after them has already been accepted by the host parser as the
/// start of a path.
fn port_value(port: &str) -> Option<u16> {
    let digits = port.bytes().take_while(u8::is_ascii_digit).count();
    port[..digits].parse().ok()
}
