//! Capture-format type tags.
//!
//! The tag is the text between `=` and `:` on a record's first line
//! (`1.3.6.1.2.1.1.3.0 = Timeticks: (12345) 0:02:03.45`).

use std::fmt;

/// Declared (or inferred) type of a captured value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Counter32,
    Counter64,
    Gauge32,
    HexString,
    Integer,
    IpAddress,
    Oid,
    String,
    Timeticks,
    /// Tag the capture format does not define (`Opaque`, `BITS`, ...).
    Unknown(Box<str>),
}

impl TypeTag {
    /// Map tag text to a tag. Surrounding whitespace is ignored; names are case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::walk::TypeTag;
    ///
    /// assert_eq!(TypeTag::parse("Hex-STRING"), TypeTag::HexString);
    /// assert_eq!(TypeTag::parse(" INTEGER "), TypeTag::Integer);
    /// assert_eq!(TypeTag::parse("BITS"), TypeTag::Unknown("BITS".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Counter32" => Self::Counter32,
            "Counter64" => Self::Counter64,
            "Gauge32" => Self::Gauge32,
            "Hex-STRING" => Self::HexString,
            "INTEGER" => Self::Integer,
            "IpAddress" => Self::IpAddress,
            "OID" => Self::Oid,
            "STRING" => Self::String,
            "Timeticks" => Self::Timeticks,
            other => Self::Unknown(other.into()),
        }
    }

    /// Tag text as it appears in captures.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Counter32 => "Counter32",
            Self::Counter64 => "Counter64",
            Self::Gauge32 => "Gauge32",
            Self::HexString => "Hex-STRING",
            Self::Integer => "INTEGER",
            Self::IpAddress => "IpAddress",
            Self::Oid => "OID",
            Self::String => "STRING",
            Self::Timeticks => "Timeticks",
            Self::Unknown(name) => name,
        }
    }

    /// Whether the tag is one the loader knows how to coerce.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_round_trip_text() {
        for name in [
            "Counter32",
            "Counter64",
            "Gauge32",
            "Hex-STRING",
            "INTEGER",
            "IpAddress",
            "OID",
            "STRING",
            "Timeticks",
        ] {
            let tag = TypeTag::parse(name);
            assert!(tag.is_known(), "{name} should be known");
            assert_eq!(tag.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_tag() {
        let tag = TypeTag::parse("Network Address");
        assert!(!tag.is_known());
        assert_eq!(tag.to_string(), "Network Address");
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!TypeTag::parse("integer").is_known());
    }
}
