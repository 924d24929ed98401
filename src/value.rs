//! Typed values recovered from a capture.
//!
//! The `Value` enum covers every kind a walk capture can declare. Values are
//! immutable once loaded; the store hands out references or clones.

use crate::oid::Oid;
use crate::util::format_hex_string;
use bytes::Bytes;
use std::net::Ipv4Addr;

/// Value of one captured object.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Value {
    /// INTEGER (signed 32-bit).
    ///
    /// Unparsable integer text loads as `-1`.
    Integer(i32),

    /// Counter32 (unsigned 32-bit, wrapping).
    Counter32(u32),

    /// Counter64 (unsigned 64-bit, wrapping).
    Counter64(u64),

    /// Gauge32 / Unsigned32 (unsigned 32-bit, non-wrapping).
    Gauge32(u32),

    /// TimeTicks (hundredths of seconds).
    TimeTicks(u32),

    /// IpAddress in sanitized dotted form.
    ///
    /// Kept as text: anonymized captures may hold addresses that no longer
    /// have four valid octets. Use [`as_ip`](Value::as_ip) for a strict view.
    IpAddress(String),

    /// OBJECT IDENTIFIER.
    ObjectIdentifier(Oid),

    /// OCTET STRING reconstructed from a Hex-STRING capture.
    OctetString(Bytes),

    /// OCTET STRING captured as text; continuation lines are joined with `\n`.
    Text(String),
}

impl Value {
    /// Try to get as i32.
    ///
    /// Returns `Some(i32)` for [`Value::Integer`], `None` otherwise.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    ///
    /// Returns `Some(u32)` for [`Value::Counter32`], [`Value::Gauge32`],
    /// [`Value::TimeTicks`], or non-negative [`Value::Integer`].
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::Value;
    ///
    /// assert_eq!(Value::Counter32(100).as_u32(), Some(100));
    /// assert_eq!(Value::TimeTicks(300).as_u32(), Some(300));
    /// assert_eq!(Value::Integer(-1).as_u32(), None);
    /// assert_eq!(Value::Counter64(100).as_u32(), None);
    /// ```
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Counter32(v) | Value::Gauge32(v) | Value::TimeTicks(v) => Some(*v),
            Value::Integer(v) if *v >= 0 => Some(*v as u32),
            _ => None,
        }
    }

    /// Try to get as u64.
    ///
    /// Returns `Some(u64)` for [`Value::Counter64`] and anything
    /// [`as_u32`](Value::as_u32) accepts.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Counter64(v) => Some(*v),
            other => other.as_u32().map(u64::from),
        }
    }

    /// Get the octets of an OCTET STRING, whether captured as hex or text.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(data) => Some(data),
            Value::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Get an OCTET STRING as text.
    ///
    /// Binary octet strings are returned only if they happen to be valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::OctetString(data) => std::str::from_utf8(data).ok(),
            _ => None,
        }
    }

    /// Try to get as OID.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Value::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }

    /// Try to get a strict IPv4 address.
    ///
    /// Returns `None` for non-address values and for sanitized text that is
    /// not four decimal octets.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::Value;
    /// use std::net::Ipv4Addr;
    ///
    /// let v = Value::IpAddress("10.0.0.1".into());
    /// assert_eq!(v.as_ip(), Some(Ipv4Addr::new(10, 0, 0, 1)));
    ///
    /// let v = Value::IpAddress("10.0.0.1b".into());
    /// assert_eq!(v.as_ip(), None);
    /// ```
    pub fn as_ip(&self) -> Option<Ipv4Addr> {
        match self {
            Value::IpAddress(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The capture-format type tag this value renders as.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Counter32(_) => "Counter32",
            Value::Counter64(_) => "Counter64",
            Value::Gauge32(_) => "Gauge32",
            Value::TimeTicks(_) => "Timeticks",
            Value::IpAddress(_) => "IpAddress",
            Value::ObjectIdentifier(_) => "OID",
            Value::OctetString(_) => "Hex-STRING",
            Value::Text(_) => "STRING",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Counter32(v) => write!(f, "{}", v),
            Value::Counter64(v) => write!(f, "{}", v),
            Value::Gauge32(v) => write!(f, "{}", v),
            Value::TimeTicks(v) => write!(f, "({}) {}", v, format_timeticks(*v)),
            Value::IpAddress(s) => write!(f, "{}", s),
            Value::ObjectIdentifier(oid) => write!(f, "{}", oid),
            Value::OctetString(data) => write!(f, "{}", format_hex_string(data)),
            Value::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// Format TimeTicks the way snmpwalk does (`1 day, 10:17:36.78`).
pub(crate) fn format_timeticks(centiseconds: u32) -> String {
    let total_seconds = centiseconds / 100;
    let cs = centiseconds % 100;

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    match days {
        0 => format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, cs),
        1 => format!("1 day, {}:{:02}:{:02}.{:02}", hours, minutes, seconds, cs),
        _ => format!(
            "{} days, {}:{:02}:{:02}.{:02}",
            days, hours, minutes, seconds, cs
        ),
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Oid> for Value {
    fn from(oid: Oid) -> Self {
        Value::ObjectIdentifier(oid)
    }
}

impl From<Bytes> for Value {
    fn from(data: Bytes) -> Self {
        Value::OctetString(data)
    }
}
