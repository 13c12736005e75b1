//! Recognition of IP address hosts.

use std::net::Ipv6Addr;

/// Checks whether a host looks like an IPv4 address.
///
/// This is deliberately loose: four dot-separated groups of one to three
/// ASCII digits, without range checks, so that `999.0.0.1` and `010.0.0.1`
/// both count.
///
/// # Examples
///
/// ```
/// use lenient_uri::ip::is_ipv4;
///
/// assert!(is_ipv4("127.0.0.1"));
/// assert!(is_ipv4("999.0.0.1"));
/// assert!(!is_ipv4("0x7f.1"));
/// ```
#[must_use]
pub fn is_ipv4(host: &str) -> bool {
    let mut groups = 0;
    for group in host.split('.') {
        groups += 1;
        if groups > 4 || !(1..=3).contains(&group.len()) {
            return false;
        }
        if !group.bytes().all(|x| x.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}

/// Checks whether a host (without brackets) is an IPv6 address,
/// optionally followed by a `%` and a non-empty zone identifier.
///
/// # Examples
///
/// ```
/// use lenient_uri::ip::is_ipv6;
///
/// assert!(is_ipv6("fe80::1"));
/// assert!(is_ipv6("fe80::1%eth0"));
/// assert!(is_ipv6("::ffff:192.0.2.33"));
/// assert!(!is_ipv6("[::1]"));
/// ```
#[must_use]
pub fn is_ipv6(host: &str) -> bool {
    let addr = match host.split_once('%') {
        Some((addr, zone)) if !zone.is_empty() => addr,
        Some(_) => return false,
        None => host,
    };
    addr.parse::<Ipv6Addr>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4() {
        assert!(is_ipv4("127.0.0.1"));
        assert!(is_ipv4("123.123.123.123"));
        // no range checks
        assert!(is_ipv4("999.0.0.1"));
        assert!(is_ipv4("010.0.0.1"));

        // too short
        assert!(!is_ipv4("255.0.0"));
        // too long
        assert!(!is_ipv4("255.0.0.1.2"));
        // no number between dots
        assert!(!is_ipv4("255.0..1"));
        // group too long
        assert!(!is_ipv4("1.2.3.0004"));
        // trailing dot
        assert!(!is_ipv4("0.0.0.0."));
        assert!(!is_ipv4("example.org"));
        assert!(!is_ipv4(""));
    }

    #[test]
    fn ipv6() {
        assert!(is_ipv6("3ffe:2a00:100:7031::1"));
        assert!(is_ipv6("FEDC:BA98:7654:3210:FEDC:BA98:7654:3210"));
        assert!(is_ipv6("fe80:0000:0000:0000:0204:61ff:fe9d:f156"));
        assert!(is_ipv6("::"));
        assert!(is_ipv6("::FFFF:192.0.2.33"));
        assert!(is_ipv6("fe80::1%eth0"));

        assert!(!is_ipv6("fe80::1%"));
        assert!(!is_ipv6("1:2:3:4:5:6:7"));
        assert!(!is_ipv6("1:2::6::8"));
        assert!(!is_ipv6("::00000"));
        assert!(!is_ipv6("www.example.org"));
        assert!(!is_ipv6("a:b:c"));
        assert!(!is_ipv6(""));
    }
}
