use crate::{
    component::{present, Scheme, UriData},
    error::{ArgumentError, ArgumentErrorKind, ParseError, ParseErrorKind},
    uri::Uri,
};
use std::fmt;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidHost => "invalid host",
            ParseErrorKind::InvalidPort => "invalid port",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ArgumentErrorKind::NotAnAuthority => "value is not an authority",
            ArgumentErrorKind::NotAUserInfo => "value is not a user info",
            ArgumentErrorKind::NotAHost => "value is not a host",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

/// Serializes the components.
///
/// An opaque reference is written as `scheme:path`. Otherwise `//` follows
/// the scheme whenever there is a scheme or a host, then come the
/// authority and the path. The query and fragment are written when
/// non-empty.
impl fmt::Display for UriData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = present(&self.scheme) {
            write!(f, "{scheme}:")?;
        }
        if self.urn {
            f.write_str(self.pathname())?;
        } else {
            if self.is_absolute() || present(&self.scheme).is_some() {
                f.write_str("//")?;
            }
            f.write_str(&self.authority())?;
            f.write_str(self.pathname())?;
        }
        if let Some(query) = present(&self.query) {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = present(&self.fragment) {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_data(), f)
    }
}

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("authority", &self.authority())
            .field("path", &self.pathname())
            .field("query", &self.query_string())
            .field("fragment", &self.fragment())
            .field("urn", &self.is_urn())
            .finish()
    }
}
