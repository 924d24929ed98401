//! Internal utilities.
//!
//! Small text scanners shared by type coercion, plus hex rendering.

/// Find the first `(<digits>)` group and return the digits.
pub(crate) fn parenthesized_digits(s: &str) -> Option<&str> {
    let mut rest = s;
    while let Some(open) = rest.find('(') {
        let after = &rest[open + 1..];
        let len = after.bytes().take_while(u8::is_ascii_digit).count();
        if len > 0 && after.as_bytes().get(len) == Some(&b')') {
            return Some(&after[..len]);
        }
        rest = after;
    }
    None
}

/// Find the first run of ASCII digits anywhere in the text.
pub(crate) fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let len = s[start..].bytes().take_while(u8::is_ascii_digit).count();
    Some(&s[start..start + len])
}

/// Format bytes as spaced uppercase hex, the way snmpwalk prints Hex-STRING.
pub(crate) fn format_hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format bytes as hex string (lowercase, no separator).
#[cfg(feature = "cli")]
pub(crate) fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized_digits() {
        assert_eq!(parenthesized_digits("up(1)"), Some("1"));
        assert_eq!(parenthesized_digits("(12345) 0:02:03.45"), Some("12345"));
        assert_eq!(parenthesized_digits("a(b) c(42) d(7)"), Some("42"));
        assert_eq!(parenthesized_digits("((9))"), Some("9"));
        assert_eq!(parenthesized_digits("(12 )"), None);
        assert_eq!(parenthesized_digits("()"), None);
        assert_eq!(parenthesized_digits("no digits"), None);
    }

    #[test]
    fn test_first_digit_run() {
        assert_eq!(first_digit_run("42 octets"), Some("42"));
        assert_eq!(first_digit_run("speed 1000 Mb/s"), Some("1000"));
        assert_eq!(first_digit_run("abc"), None);
        assert_eq!(first_digit_run(""), None);
    }

    #[test]
    fn test_format_hex_string() {
        assert_eq!(format_hex_string(&[0x00, 0x1A, 0x2B]), "00 1A 2B");
        assert_eq!(format_hex_string(&[]), "");
    }
}
