//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.
//! Ordering is arc-by-arc numeric comparison, so `1.9 < 1.10` and a prefix sorts
//! before every extension of it (`1.3.6.1 < 1.3.6.1.0`).

use crate::error::{Error, IdentifierErrorKind, Result};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Maximum number of arcs (subidentifiers) allowed in an OID.
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a value".
pub const MAX_OID_LEN: usize = 128;

/// Well-known roots used when a capture renders OID values symbolically
/// (`SNMPv2-SMI::enterprises.9.1.1`, `iso.3.6.1.2.1`).
static WELL_KNOWN_ROOTS: &[(&str, &[u32])] = &[
    ("ccitt", &[0]),
    ("zeroDotZero", &[0, 0]),
    ("iso", &[1]),
    ("org", &[1, 3]),
    ("dod", &[1, 3, 6]),
    ("internet", &[1, 3, 6, 1]),
    ("directory", &[1, 3, 6, 1, 1]),
    ("mgmt", &[1, 3, 6, 1, 2]),
    ("mib-2", &[1, 3, 6, 1, 2, 1]),
    ("transmission", &[1, 3, 6, 1, 2, 1, 10]),
    ("experimental", &[1, 3, 6, 1, 3]),
    ("private", &[1, 3, 6, 1, 4]),
    ("enterprises", &[1, 3, 6, 1, 4, 1]),
    ("security", &[1, 3, 6, 1, 5]),
    ("snmpV2", &[1, 3, 6, 1, 6]),
    ("snmpDomains", &[1, 3, 6, 1, 6, 1]),
    ("snmpProxys", &[1, 3, 6, 1, 6, 2]),
    ("snmpModules", &[1, 3, 6, 1, 6, 3]),
    ("joint-iso-ccitt", &[2]),
];

/// Replace every character that is not a digit, hex letter, dot or space with `1`.
///
/// Anonymized captures often obscure parts of addresses (`192.168.x.1`). Sanitizing
/// turns those bytes into a stable placeholder so the record still loads. Hex letters
/// survive untouched, so `192.168.a.1` is left for the parser to reject.
///
/// The transform is idempotent and borrows when nothing needs replacing.
///
/// # Examples
///
/// ```
/// use snmposter::oid::sanitize;
///
/// assert_eq!(sanitize("192.168.x.1"), "192.168.1.1");
/// assert_eq!(sanitize("1.3.6.1"), "1.3.6.1");
/// assert_eq!(sanitize("00 1B zz"), "00 1B 11");
/// ```
pub fn sanitize(s: &str) -> Cow<'_, str> {
    if s.chars().all(is_dotted_char) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| if is_dotted_char(c) { c } else { '1' })
            .collect(),
    )
}

#[inline]
fn is_dotted_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '.' || c == ' '
}

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    ///
    /// The empty OID sorts before every other OID, which makes it the
    /// starting point of a full tree walk.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::oid::Oid;
    ///
    /// let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// A single leading dot is accepted (`snmpwalk -On` renders OIDs that way).
    /// Empty input, empty arcs and non-decimal arcs are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::oid::Oid;
    ///
    /// let oid = Oid::parse(".1.3.6.1.2.1.1.1.0").unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.1.0");
    ///
    /// assert!(Oid::parse("1..3").is_err());
    /// assert!(Oid::parse("1.3.x").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let body = s.strip_prefix('.').unwrap_or(s);
        if body.is_empty() {
            return Err(Error::malformed_identifier_with_input(
                IdentifierErrorKind::Empty,
                s,
            ));
        }

        let mut arcs = SmallVec::new();

        for part in body.split('.') {
            if part.is_empty() {
                return Err(Error::malformed_identifier_with_input(
                    IdentifierErrorKind::EmptyArc,
                    s,
                ));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::malformed_identifier_with_input(
                    IdentifierErrorKind::InvalidArc,
                    s,
                ));
            }

            let arc: u32 = part.parse().map_err(|_| {
                Error::malformed_identifier_with_input(IdentifierErrorKind::ArcOverflow, s)
            })?;

            arcs.push(arc);
        }

        let oid = Self { arcs };
        oid.validate_length().map_err(|_| oid.too_long_error(s))?;
        Ok(oid)
    }

    /// Sanitize, then parse.
    ///
    /// This is how identifiers on the left-hand side of a capture line are read.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::oid::Oid;
    ///
    /// let oid = Oid::parse_sanitized("1.3.6.1.4.1.9.x.1").unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1.4.1.9.1.1");
    /// ```
    pub fn parse_sanitized(s: &str) -> Result<Self> {
        Self::parse(&sanitize(s))
    }

    /// Parse an OID value that may start with a symbolic root.
    ///
    /// Accepts dotted notation as [`parse`](Self::parse) does, plus
    /// `MODULE::name.arcs` and `name.arcs` forms where `name` is one of the
    /// well-known registration roots (`enterprises`, `mib-2`, `iso`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use snmposter::oid::Oid;
    ///
    /// let oid = Oid::resolve("SNMPv2-SMI::enterprises.9.1.1").unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1.4.1.9.1.1");
    ///
    /// let oid = Oid::resolve("iso.3.6.1.2.1").unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1.2.1");
    /// ```
    pub fn resolve(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return Self::parse(s);
        }

        let unqualified = s.rsplit_once("::").map(|(_, rest)| rest).unwrap_or(s);
        let (name, rest) = match unqualified.split_once('.') {
            Some((name, rest)) => (name, Some(rest)),
            None => (unqualified, None),
        };

        let root = WELL_KNOWN_ROOTS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, arcs)| *arcs)
            .ok_or_else(|| {
                Error::malformed_identifier_with_input(IdentifierErrorKind::UnknownName, s)
            })?;

        let mut oid = Self::from_slice(root);
        if let Some(rest) = rest {
            let tail = Self::parse(rest).map_err(|e| match e {
                Error::MalformedIdentifier { kind, .. } => {
                    Error::malformed_identifier_with_input(kind, s)
                }
                other => other,
            })?;
            oid.arcs.extend_from_slice(tail.arcs());
        }
        oid.validate_length().map_err(|_| oid.too_long_error(s))?;
        Ok(oid)
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// An OID always starts with itself, and any OID starts with an empty OID.
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Get the parent OID (all arcs except the last).
    ///
    /// Returns `None` if the OID is empty.
    pub fn parent(&self) -> Option<Oid> {
        if self.arcs.is_empty() {
            None
        } else {
            Some(Oid {
                arcs: SmallVec::from_slice(&self.arcs[..self.arcs.len() - 1]),
            })
        }
    }

    /// Create a child OID by appending an arc.
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }

    /// Validate that the OID doesn't exceed the maximum arc count.
    pub fn validate_length(&self) -> Result<()> {
        if self.arcs.len() > MAX_OID_LEN {
            return Err(Error::malformed_identifier(IdentifierErrorKind::TooManyArcs {
                count: self.arcs.len(),
                max: MAX_OID_LEN,
            }));
        }
        Ok(())
    }

    fn too_long_error(&self, input: &str) -> Error {
        Error::malformed_identifier_with_input(
            IdentifierErrorKind::TooManyArcs {
                count: self.arcs.len(),
                max: MAX_OID_LEN,
            },
            input,
        )
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Slice ordering on u32 is arc-wise numeric with shorter prefixes first.
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID at compile time.
///
/// # Examples
///
/// ```
/// use snmposter::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
/// assert!(sys_descr.starts_with(&oid!(1, 3, 6, 1, 2, 1, 1)));
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
