//! Byte pattern tables.
//!
//! The tables in this module only ever describe ASCII bytes. Every non-ASCII
//! byte is rejected by every table, so a table may double as a set of
//! delimiters when scanning UTF-8 input byte by byte: a scan that stops on
//! an allowed byte can never stop inside a multi-byte character.

/// A table specifying a set of ASCII bytes.
#[derive(Clone, Copy, Debug)]
pub struct Table(u64, u64);

impl Table {
    /// Creates a table that allows the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes is not ASCII.
    #[must_use]
    pub const fn new(mut bytes: &[u8]) -> Self {
        let mut table = 0;
        while let [cur, rem @ ..] = bytes {
            assert!(cur.is_ascii(), "cannot allow non-ASCII byte");
            table |= 1u128.wrapping_shl(*cur as u32);
            bytes = rem;
        }
        Self(table as u64, (table >> 64) as u64)
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` or by `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0, self.1 | other.1)
    }

    /// Subtracts from this table.
    ///
    /// Returns a new table that allows all the bytes allowed
    /// by `self` but not allowed by `other`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 & !other.0, self.1 & !other.1)
    }

    #[inline]
    pub(crate) const fn allows_ascii(self, x: u8) -> bool {
        let table = if x < 64 {
            self.0
        } else if x < 128 {
            self.1
        } else {
            0
        };
        table & 1u64.wrapping_shl(x as u32) != 0
    }

    /// Checks whether the given character is allowed by the table.
    #[inline]
    #[must_use]
    pub const fn allows(self, ch: char) -> bool {
        ch.is_ascii() && self.allows_ascii(ch as u8)
    }

    /// Returns the length of the longest prefix of `s` containing
    /// no byte allowed by the table.
    #[inline]
    pub(crate) fn span_until(self, s: &[u8]) -> usize {
        s.iter()
            .position(|&x| self.allows_ascii(x))
            .unwrap_or(s.len())
    }

    /// Returns the length of the longest prefix of `s` containing
    /// only bytes allowed by the table.
    #[inline]
    pub(crate) fn span_while(self, s: &[u8]) -> usize {
        s.iter()
            .position(|&x| !self.allows_ascii(x))
            .unwrap_or(s.len())
    }
}

const fn new(bytes: &[u8]) -> Table {
    Table::new(bytes)
}

/// `ALPHA = %x41-5A / %x61-7A`
pub const ALPHA: Table = new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz");

/// `DIGIT = %x30-39`
pub const DIGIT: Table = new(b"0123456789");

/// `HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"`
pub const HEXDIG: Table = DIGIT.or(new(b"ABCDEFabcdef"));

/// Characters of a scheme token, `1*( ALPHA / DIGIT )`.
///
/// Narrower than the RFC 3986 scheme rule: `+`, `-` and `.` never
/// start an authority-bearing prefix.
pub const SCHEME: Table = ALPHA.or(DIGIT);

/// Characters left alone by `encodeURIComponent`.
pub const COMPONENT: Table = ALPHA.or(DIGIT).or(new(b"-_.!~*'()"));

/// The two interchangeable path separators.
pub const SLASH: Table = new(b"/\\");

/// `":"`
pub const COLON: Table = new(b":");

/// Delimiters ending a username: `\ / ? # :`.
pub const USERNAME_DELIMS: Table = new(b"\\/?#:");

/// Delimiters ending a password or a port after a registered name: `/ ? #`.
///
/// Backslashes and colons may appear in both.
pub const PASSWORD_DELIMS: Table = new(b"/?#");

/// Delimiters ending an unbracketed multi-colon host: `\ / ? #`.
pub const HOST_RUN_DELIMS: Table = new(b"\\/?#");

/// Delimiters ending a registered name: `\ / ? # :`.
pub const REG_NAME_DELIMS: Table = USERNAME_DELIMS;

/// Delimiters ending a port after a bracketed host: `/ ? # :`.
pub const BRACKETED_PORT_DELIMS: Table = new(b"/?#:");

/// Delimiters ending a path: `? #`.
pub const PATH_DELIMS: Table = new(b"?#");

/// Delimiter ending a query: `#`.
pub const QUERY_DELIMS: Table = new(b"#");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span() {
        assert_eq!(USERNAME_DELIMS.span_until(b"user:pass@host"), 4);
        assert_eq!(USERNAME_DELIMS.span_until("ä\\b".as_bytes()), 2);
        assert_eq!(SCHEME.span_while(b"http2:"), 5);
        assert_eq!(SLASH.span_while(b"/\\/x"), 3);
        assert_eq!(PATH_DELIMS.span_until(b"abc"), 3);
    }

    #[test]
    fn allows() {
        assert!(COMPONENT.allows('~'));
        assert!(!COMPONENT.allows('@'));
        assert!(!COMPONENT.allows('é'));
        assert!(HEXDIG.allows('f') && !HEXDIG.allows('g'));
        assert!(!SCHEME.sub(DIGIT).allows('1'));
    }
}
