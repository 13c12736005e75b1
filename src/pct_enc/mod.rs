//! Percent-encoding utilities.

pub mod table;

pub use table::Table;

use std::{borrow::Cow, str};

/// Percent-encodes every character of `s` not allowed by `table`.
///
/// Non-ASCII characters are always encoded, byte by byte, as UTF-8.
/// Allocates only when some character needs encoding.
///
/// # Examples
///
/// ```
/// use lenient_uri::pct_enc::{encode, table::COMPONENT};
///
/// assert_eq!(encode("john@doe.com", COMPONENT), "john%40doe.com");
/// assert_eq!(encode("pass:word", COMPONENT), "pass%3Aword");
/// assert_eq!(encode("plain", COMPONENT), "plain");
/// ```
#[must_use]
pub fn encode(s: &str, table: Table) -> Cow<'_, str> {
    let i = match s.find(|ch| !table.allows(ch)) {
        Some(i) => i,
        None => return Cow::Borrowed(s),
    };

    let mut buf = String::with_capacity(s.len() + 8);
    buf.push_str(&s[..i]);
    for ch in s[i..].chars() {
        if table.allows(ch) {
            buf.push(ch);
        } else {
            let mut utf8 = [0; 4];
            for &x in ch.encode_utf8(&mut utf8).as_bytes() {
                buf.push_str(encode_byte(x));
            }
        }
    }
    Cow::Owned(buf)
}

/// Decodes percent-encoded octets in `s`, leniently.
///
/// A `%` that is not followed by two hexadecimal digits is kept as is.
/// Decoded bytes that do not form valid UTF-8 are replaced with
/// [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
///
/// [U+FFFD]: char::REPLACEMENT_CHARACTER
///
/// # Examples
///
/// ```
/// use lenient_uri::pct_enc::decode_lossy;
///
/// assert_eq!(decode_lossy("john%40doe.com"), "john@doe.com");
/// assert_eq!(decode_lossy("100%"), "100%");
/// assert_eq!(decode_lossy("%zz%41"), "%zzA");
/// assert_eq!(decode_lossy("%FF"), "\u{FFFD}");
/// ```
#[must_use]
pub fn decode_lossy(s: &str) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let mut i = match (0..bytes.len()).find(|&i| octet_at(bytes, i).is_some()) {
        Some(i) => i,
        None => return Cow::Borrowed(s),
    };

    let mut buf = Vec::with_capacity(bytes.len());
    buf.extend_from_slice(&bytes[..i]);
    while i < bytes.len() {
        match octet_at(bytes, i) {
            Some(x) => {
                buf.push(x);
                i += 3;
            }
            None => {
                buf.push(bytes[i]);
                i += 1;
            }
        }
    }
    match String::from_utf8(buf) {
        Ok(s) => Cow::Owned(s),
        Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}

fn octet_at(bytes: &[u8], i: usize) -> Option<u8> {
    match bytes[i..] {
        [b'%', hi, lo, ..] => Some(hex_value(hi)? << 4 | hex_value(lo)?),
        _ => None,
    }
}

const fn hex_value(x: u8) -> Option<u8> {
    match x {
        b'0'..=b'9' => Some(x - b'0'),
        b'A'..=b'F' => Some(x - b'A' + 10),
        b'a'..=b'f' => Some(x - b'a' + 10),
        _ => None,
    }
}

/// Returns the percent-encoded form of a byte, e.g. `"%7C"` for `b'|'`.
pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

#[cfg(test)]
mod tests {
    use super::{table::COMPONENT, *};

    #[test]
    fn encode_component() {
        assert_eq!(encode("", COMPONENT), "");
        assert_eq!(encode("a b", COMPONENT), "a%20b");
        assert_eq!(encode("ä", COMPONENT), "%C3%A4");
        assert_eq!(encode("(*)!~'", COMPONENT), "(*)!~'");
        assert_eq!(encode("a/b?c#d", COMPONENT), "a%2Fb%3Fc%23d");
    }

    #[test]
    fn decode_lenient() {
        assert_eq!(decode_lossy(""), "");
        assert_eq!(decode_lossy("%"), "%");
        assert_eq!(decode_lossy("%4"), "%4");
        assert_eq!(decode_lossy("a%2"), "a%2");
        assert_eq!(decode_lossy("%41%42c"), "ABc");
        assert_eq!(decode_lossy("%C3%A4"), "ä");
        assert_eq!(decode_lossy("%%41"), "%A");
    }

    #[test]
    fn encode_byte_table() {
        assert_eq!(encode_byte(0), "%00");
        assert_eq!(encode_byte(b'|'), "%7C");
        assert_eq!(encode_byte(0xff), "%FF");
    }
}
