#![no_main]
use lenient_uri::{normalize, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(r1) = normalize(&parse(data)) else {
        return;
    };

    assert_eq!(r1.scheme(), r1.scheme().to_ascii_lowercase());
    assert!(!r1.query().contains_key("__proto__"));

    // `normalize` is idempotent: we cannot normalize beyond normalized components.
    assert_eq!(normalize(&r1).as_ref(), Ok(&r1));
});
