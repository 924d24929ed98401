//! Well-known OID name hints.
//!
//! A small hardcoded table of names for objects commonly found in device
//! captures. This is NOT MIB support - just friendly names for display and
//! for typing OIDs on the command line.

use crate::Oid;

/// Well-known OID entries.
static WELL_KNOWN_OIDS: &[(&[u32], &str)] = &[
    // SNMPv2-MIB::system
    (&[1, 3, 6, 1, 2, 1, 1], "system"),
    (&[1, 3, 6, 1, 2, 1, 1, 1], "sysDescr"),
    (&[1, 3, 6, 1, 2, 1, 1, 2], "sysObjectID"),
    (&[1, 3, 6, 1, 2, 1, 1, 3], "sysUpTime"),
    (&[1, 3, 6, 1, 2, 1, 1, 4], "sysContact"),
    (&[1, 3, 6, 1, 2, 1, 1, 5], "sysName"),
    (&[1, 3, 6, 1, 2, 1, 1, 6], "sysLocation"),
    (&[1, 3, 6, 1, 2, 1, 1, 7], "sysServices"),
    // IF-MIB::interfaces
    (&[1, 3, 6, 1, 2, 1, 2], "interfaces"),
    (&[1, 3, 6, 1, 2, 1, 2, 1], "ifNumber"),
    (&[1, 3, 6, 1, 2, 1, 2, 2], "ifTable"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1], "ifEntry"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 1], "ifIndex"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 2], "ifDescr"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 3], "ifType"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 5], "ifSpeed"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 6], "ifPhysAddress"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 7], "ifAdminStatus"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 8], "ifOperStatus"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 10], "ifInOctets"),
    (&[1, 3, 6, 1, 2, 1, 2, 2, 1, 16], "ifOutOctets"),
    // IF-MIB::ifXTable
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 1], "ifName"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 6], "ifHCInOctets"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 10], "ifHCOutOctets"),
    (&[1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 18], "ifAlias"),
    // HOST-RESOURCES-MIB
    (&[1, 3, 6, 1, 2, 1, 25, 1, 1], "hrSystemUptime"),
];

/// Look up a friendly name for an OID.
///
/// Exact table entries return their name; OIDs below a column return the
/// column name plus the instance suffix (`ifDescr.3`). Returns `None` if no
/// entry covers the OID.
pub fn lookup(oid: &Oid) -> Option<String> {
    let arcs = oid.arcs();
    WELL_KNOWN_OIDS
        .iter()
        .filter(|(pattern, _)| arcs.starts_with(pattern))
        .max_by_key(|(pattern, _)| pattern.len())
        .map(|(pattern, name)| {
            let suffix = &arcs[pattern.len()..];
            if suffix.is_empty() {
                (*name).to_string()
            } else {
                let suffix: Vec<String> = suffix.iter().map(u32::to_string).collect();
                format!("{}.{}", name, suffix.join("."))
            }
        })
}

/// Parse an OID from string, supporting dotted notation and names.
///
/// Accepts:
/// - Dotted notation, with or without a leading dot: "1.3.6.1.2.1.1.1.0"
/// - Well-known names with an optional instance suffix: "sysDescr.0", "IF-MIB::ifDescr.3"
/// - Symbolic roots as printed by net-snmp: "SNMPv2-SMI::enterprises.9"
pub fn parse_oid(s: &str) -> Result<Oid, String> {
    let s = s.trim();
    if s.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Oid::parse(s).map_err(|e| format!("invalid OID '{}': {}", s, e));
    }

    let unqualified = s.rsplit_once("::").map(|(_, rest)| rest).unwrap_or(s);
    let (name, suffix) = match unqualified.split_once('.') {
        Some((name, suffix)) => (name, Some(suffix)),
        None => (s, None),
    };
    let known = WELL_KNOWN_OIDS
        .iter()
        .find(|(_, known)| known.eq_ignore_ascii_case(name));

    if let Some((arcs, _)) = known {
        let base = Oid::from_slice(arcs);
        return match suffix {
            None => Ok(base),
            Some(suffix) => {
                let rest = Oid::parse(suffix)
                    .map_err(|e| format!("invalid instance suffix in '{}': {}", s, e))?;
                Ok(Oid::new(base.arcs().iter().chain(rest.arcs()).copied()))
            }
        };
    }

    Oid::resolve(s).map_err(|_| {
        format!(
            "unknown OID name '{}'; use dotted notation (e.g., 1.3.6.1.2.1.1.1.0)",
            s
        )
    })
}
