#![no_main]
use lenient_uri::{absolute_to, parse, relative_to, remove_dot_segments};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (base, r) = (parse(data.0), parse(data.1));

    let u = absolute_to(&r, &base);
    if r.urn {
        assert_eq!(u, r);
    } else {
        let path = u.pathname();
        assert_eq!(remove_dot_segments(path), path);
    }
    assert_eq!(u.query, r.query);
    assert_eq!(u.fragment, r.fragment);

    let rel = relative_to(&r, &base);
    assert_eq!(rel.query, r.query);
    let _ = rel.to_string();
});
