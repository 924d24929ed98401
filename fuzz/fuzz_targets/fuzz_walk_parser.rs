#![no_main]

use libfuzzer_sys::fuzz_target;

use snmposter::OidStore;
use snmposter::walk;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 is replaced, never rejected.
    let Ok(parsed) = walk::parse_reader(data) else {
        return;
    };

    // Building may fail on duplicates; lookups on a built store must not panic.
    if let Ok(store) = OidStore::build(parsed.records) {
        for (oid, value) in store.iter() {
            assert_eq!(store.get(oid), Some(value));
        }
    }
});
