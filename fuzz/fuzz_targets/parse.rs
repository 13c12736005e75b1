#![no_main]
use lenient_uri::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let r = parse(data);

    assert!(r.port.is_none() || r.hostname.is_some());
    if r.urn {
        assert!(r.hostname.is_none());
        assert!(!r.scheme().is_empty());
    }
    assert!(!r.pathname().contains('\\'));

    // Accessors never panic, whatever was captured.
    let _ = (r.authority(), r.origin(), r.filename(), r.suffix());
    let _ = (r.tld(), r.domain(), r.subdomain(), r.query());

    let s = r.to_string();
    let _ = parse(&s);
});
