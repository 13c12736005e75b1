//! Error types.

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The host is not a valid host literal.
    ///
    /// Raised for forbidden host code points, malformed IP literals and
    /// names that fail IDNA processing.
    InvalidHost,
    /// The port is not a decimal number in the range of `u16`.
    InvalidPort,
}

/// An error occurred when canonicalizing the host of a URI.
///
/// Parsing itself never fails: the grammar accepts every string. This error
/// is raised by [`normalize`](crate::normalize()) when the captured host
/// and port cannot be canonicalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl std::error::Error for ParseError {}

/// Detailed cause of an [`ArgumentError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgumentErrorKind {
    /// The value given to `set_authority` has a path, query or fragment.
    NotAnAuthority,
    /// The value given to `set_user_info` has something other than
    /// a username and a password.
    NotAUserInfo,
    /// The value given to `set_host` has a user info, path, query or fragment.
    NotAHost,
}

/// An error occurred when a mutator was given a value
/// that cannot stand for the component it replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArgumentError {
    pub(crate) kind: ArgumentErrorKind,
}

impl ArgumentError {
    pub(crate) fn new(kind: ArgumentErrorKind) -> Self {
        Self { kind }
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }
}

impl std::error::Error for ArgumentError {}
