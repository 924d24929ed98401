//! Type coercion: raw captured text to [`Value`].
//!
//! Integer-like kinds are lenient (direct parse, then the first `(N)` group,
//! then the first digit run, then `-1`) so one odd rendering never aborts a load.
//! Counter64, Timeticks, Hex-STRING and OID values are strict.

use std::str::FromStr;

use bytes::Bytes;

use crate::error::{Error, IdentifierErrorKind, Result, ValueErrorKind};
use crate::oid::{Oid, sanitize};
use crate::util::{first_digit_run, parenthesized_digits};
use crate::value::Value;

use super::TypeTag;

/// Value used for integer text with no recoverable number.
pub const UNPARSABLE_INTEGER: i32 = -1;

/// Coerce the accumulated value lines of one record.
///
/// `lines` holds the first value line followed by any continuation lines,
/// with surrounding quotes already removed.
///
/// # Examples
///
/// ```
/// use snmposter::walk::{TypeTag, coerce};
/// use snmposter::Value;
///
/// let v = coerce(&TypeTag::Integer, &["up(1)".to_string()]).unwrap();
/// assert_eq!(v, Value::Integer(1));
///
/// let v = coerce(&TypeTag::Timeticks, &["(12345) 0:02:03.45".to_string()]).unwrap();
/// assert_eq!(v, Value::TimeTicks(12345));
/// ```
pub fn coerce(tag: &TypeTag, lines: &[String]) -> Result<Value> {
    let first = lines.first().map(String::as_str).unwrap_or("");

    match tag {
        TypeTag::Integer => Ok(Value::Integer(lenient_integer(first))),
        TypeTag::Counter32 => Ok(Value::Counter32(lenient_unsigned(first))),
        TypeTag::Gauge32 => Ok(Value::Gauge32(lenient_unsigned(first))),
        TypeTag::Counter64 => first
            .trim()
            .parse::<u64>()
            .map(Value::Counter64)
            .map_err(|_| {
                Error::malformed_value(tag.clone(), ValueErrorKind::InvalidCounter64, first)
            }),
        TypeTag::Timeticks => parenthesized_digits(first)
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(Value::TimeTicks)
            .ok_or_else(|| Error::MalformedTimeInterval {
                input: first.into(),
            }),
        TypeTag::HexString => decode_hex_lines(lines).map(Value::OctetString),
        TypeTag::IpAddress => Ok(Value::IpAddress(sanitize(first).trim().to_string())),
        TypeTag::Oid => Oid::resolve(first).map(Value::ObjectIdentifier).map_err(|e| {
            let kind = match e {
                Error::MalformedIdentifier { kind, .. } => kind,
                _ => IdentifierErrorKind::InvalidArc,
            };
            Error::malformed_value(tag.clone(), ValueErrorKind::InvalidOid(kind), first)
        }),
        TypeTag::String => Ok(Value::Text(lines.join("\n"))),
        TypeTag::Unknown(_) => Err(Error::malformed_value(
            tag.clone(),
            ValueErrorKind::UnsupportedType,
            first,
        )),
    }
}

/// Lenient signed integer: direct parse, `(N)`, first digit run, else `-1`.
///
/// # Examples
///
/// ```
/// use snmposter::walk::lenient_integer;
///
/// assert_eq!(lenient_integer("-42"), -42);
/// assert_eq!(lenient_integer("ethernetCsmacd(6)"), 6);
/// assert_eq!(lenient_integer("100 Mbps"), 100);
/// assert_eq!(lenient_integer("abc"), -1);
/// ```
pub fn lenient_integer(text: &str) -> i32 {
    lenient(text).unwrap_or(UNPARSABLE_INTEGER)
}

/// Lenient unsigned 32-bit integer.
///
/// Same tiers as [`lenient_integer`]. A negative literal, and the `-1`
/// sentinel, are stored as their 32-bit two's complement (`-1` is `u32::MAX`).
///
/// # Examples
///
/// ```
/// use snmposter::walk::lenient_unsigned;
///
/// assert_eq!(lenient_unsigned("4294967295"), u32::MAX);
/// assert_eq!(lenient_unsigned("-1"), u32::MAX);
/// assert_eq!(lenient_unsigned("n/a"), u32::MAX);
/// ```
pub fn lenient_unsigned(text: &str) -> u32 {
    let trimmed = text.trim();
    if let Ok(v) = trimmed.parse::<i64>()
        && (i64::from(i32::MIN)..=i64::from(u32::MAX)).contains(&v)
    {
        return v as u32;
    }
    fallback(trimmed).unwrap_or(UNPARSABLE_INTEGER as u32)
}

fn lenient<T: FromStr>(text: &str) -> Option<T> {
    let trimmed = text.trim();
    if let Ok(v) = trimmed.parse() {
        return Some(v);
    }
    fallback(trimmed)
}

/// First `(N)` group, else first digit run.
fn fallback<T: FromStr>(trimmed: &str) -> Option<T> {
    parenthesized_digits(trimmed)
        .or_else(|| first_digit_run(trimmed))
        .and_then(|digits| digits.parse().ok())
}

/// Decode sanitized, whitespace-separated hex byte tokens across all lines.
fn decode_hex_lines(lines: &[String]) -> Result<Bytes> {
    let mut out = Vec::new();
    for line in lines {
        let clean = sanitize(line);
        for token in clean.split_whitespace() {
            let byte = u8::from_str_radix(token, 16).map_err(|_| {
                Error::malformed_value(TypeTag::HexString, ValueErrorKind::InvalidHexToken, token)
            })?;
            out.push(byte);
        }
    }
    Ok(Bytes::from(out))
}
