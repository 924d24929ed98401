//! Common test fixtures and constants.

use snmposter::{Oid, oid};
use std::io::Write;
use tempfile::NamedTempFile;

// =============================================================================
// Standard system MIB OIDs (1.3.6.1.2.1.1.*)
// =============================================================================

pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}
pub fn sys_uptime() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 3, 0)
}
pub fn sys_contact() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 4, 0)
}
pub fn sys_name() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 5, 0)
}
pub fn sys_location() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 6, 0)
}

// =============================================================================
// Subtree roots (for walks)
// =============================================================================

/// System subtree root: 1.3.6.1.2.1.1
pub fn system_subtree() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1)
}

/// Interfaces subtree root: 1.3.6.1.2.1.2
pub fn interfaces_subtree() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2)
}

/// Nonexistent OID for testing misses
pub fn nonexistent_oid() -> Oid {
    oid!(1, 3, 6, 1, 99, 99, 99, 0)
}

// =============================================================================
// Captures
// =============================================================================

/// A small switch capture in `snmpwalk -On` format.
///
/// Ten well-formed records (one multi-line, one untyped, one with an
/// anonymized identifier) and one malformed Timeticks record.
pub const SWITCH_CAPTURE: &str = r#".1.3.6.1.2.1.1.1.0 = STRING: "Cisco IOS Software, C2960 Software (C2960-LANBASEK9-M)
Technical Support: http://www.cisco.com/techsupport
Copyright (c) 1986-2012 by Cisco Systems, Inc."
.1.3.6.1.2.1.1.2.0 = OID: .1.3.6.1.4.1.9.1.716
.1.3.6.1.2.1.1.3.0 = Timeticks: (12345) 0:02:03.45
.1.3.6.1.2.1.1.4.0 = STRING: "noc@example.net"
.1.3.6.1.2.1.1.5.0 = STRING: "router1"
.1.3.6.1.2.1.1.6.0 = Timeticks: sometime yesterday
.1.3.6.1.2.1.2.1.0 = 2
.1.3.6.1.2.1.2.2.1.2.1 = STRING: "GigabitEthernet0/1"
.1.3.6.1.2.1.2.2.1.6.1 = Hex-STRING: 00 1A 2B 3C 4D 5E
.1.3.6.1.2.1.2.2.1.10.1 = Counter32: 3735928559
.1.3.6.1.2.1.4.20.1.1.192.168.x.1 = IpAddress: 192.168.0.1
"#;

/// Number of records [`SWITCH_CAPTURE`] yields.
pub const SWITCH_RECORDS: usize = 10;

/// Write `contents` to a temporary capture or config file, removed on drop.
pub fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// Install a test subscriber so `RUST_LOG=snmposter=trace` shows library logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
