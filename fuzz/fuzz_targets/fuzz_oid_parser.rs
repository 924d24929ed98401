#![no_main]

use libfuzzer_sys::fuzz_target;

use snmposter::oid::{Oid, sanitize};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Oid::parse(s);
    let _ = Oid::resolve(s);

    // Sanitized parsing must agree with parsing the sanitized text.
    let clean = sanitize(s);
    assert_eq!(sanitize(&clean), clean);
    assert_eq!(Oid::parse_sanitized(s).ok(), Oid::parse(&clean).ok());
});
