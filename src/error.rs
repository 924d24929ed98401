//! Error types for snmposter.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.
//!
//! Lookup misses are not errors: see [`GetResult::NotFound`](crate::handler::GetResult)
//! and [`GetNextResult::EndOfTree`](crate::handler::GetNextResult).

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::oid::Oid;
use crate::walk::{RecordError, TypeTag};

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Identifier parse error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierErrorKind {
    /// Empty identifier string.
    Empty,
    /// Empty component between two dots (e.g. `1..3`).
    EmptyArc,
    /// Component is not a decimal integer after sanitizing.
    InvalidArc,
    /// Component does not fit in 32 bits.
    ArcOverflow,
    /// Identifier has too many arcs (exceeds MAX_OID_LEN).
    TooManyArcs { count: usize, max: usize },
    /// Symbolic prefix (`MODULE::name`) is not a known root.
    UnknownName,
}

impl std::fmt::Display for IdentifierErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty identifier"),
            Self::EmptyArc => write!(f, "empty arc"),
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::ArcOverflow => write!(f, "arc value exceeds 32 bits"),
            Self::TooManyArcs { count, max } => {
                write!(f, "identifier has {} arcs, exceeds maximum {}", count, max)
            }
            Self::UnknownName => write!(f, "unknown symbolic name"),
        }
    }
}

/// Value coercion error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueErrorKind {
    /// Type tag is not one the capture format supports.
    UnsupportedType,
    /// Counter64 text is not an unsigned 64-bit integer.
    InvalidCounter64,
    /// Hex-STRING token is not a one-byte hex pair.
    InvalidHexToken,
    /// OID value could not be parsed as an identifier.
    InvalidOid(IdentifierErrorKind),
}

impl std::fmt::Display for ValueErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType => write!(f, "unsupported type tag"),
            Self::InvalidCounter64 => write!(f, "invalid Counter64"),
            Self::InvalidHexToken => write!(f, "invalid hex byte"),
            Self::InvalidOid(kind) => write!(f, "invalid OID value: {}", kind),
        }
    }
}

/// Agents list error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Line has no bind address field.
    MissingField,
    /// Capture path field is empty.
    EmptyPath,
    /// Bind address is not an IP address or socket address.
    InvalidAddress,
}

impl std::fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "expected `<capture file>,<address>`"),
            Self::EmptyPath => write!(f, "empty capture file path"),
            Self::InvalidAddress => write!(f, "invalid bind address"),
        }
    }
}

/// Why an instance could not be brought up.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoadFailure {
    /// The capture file could not be read.
    #[error("cannot read capture: {0}")]
    Io(#[source] std::io::Error),

    /// Parsing produced no usable records.
    #[error("no usable records ({skipped} skipped)")]
    Empty { skipped: usize },

    /// Two records share an identifier.
    #[error("duplicate identifier {0}")]
    Duplicate(Oid),

    /// The load task was cancelled before it finished.
    #[error("load task cancelled")]
    Cancelled,
}

/// Instance-level load failure.
///
/// Fatal to the instance it names only; other instances keep loading.
#[derive(Debug, thiserror::Error)]
#[error("failed to load {} for {bind}: {reason}", capture.display())]
pub struct LoadError {
    /// Capture file the instance was configured with.
    pub capture: PathBuf,
    /// Address the instance would have been bound to.
    pub bind: SocketAddr,
    /// What went wrong.
    #[source]
    pub reason: LoadFailure,
    /// Per-record errors collected before the failure.
    pub skipped: Vec<RecordError>,
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error reading a capture or configuration file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Identifier is not dotted-decimal, even after sanitizing.
    #[error("malformed identifier{}: {kind}", input.as_ref().map(|i| format!(" '{}'", i)).unwrap_or_default())]
    MalformedIdentifier {
        kind: IdentifierErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },

    /// Value text could not be coerced to its declared type.
    #[error("malformed {tag} value '{input}': {kind}")]
    MalformedValue {
        tag: TypeTag,
        kind: ValueErrorKind,
        input: Box<str>,
    },

    /// Timeticks value without a `(N)` prefix.
    #[error("malformed time interval '{input}': expected '(<ticks>) ...'")]
    MalformedTimeInterval { input: Box<str> },

    /// Two records share an identifier.
    #[error("duplicate identifier {oid}")]
    DuplicateIdentifier { oid: Oid },

    /// Invalid agents list entry.
    #[error("config line {line}: {kind}")]
    Config { line: usize, kind: ConfigErrorKind },

    /// Instance failed to load.
    #[error(transparent)]
    Load(Box<LoadError>),
}

impl Error {
    /// Create a malformed identifier error from a kind (no input string).
    pub fn malformed_identifier(kind: IdentifierErrorKind) -> Self {
        Self::MalformedIdentifier { kind, input: None }
    }

    /// Create a malformed identifier error with the input string that failed.
    pub fn malformed_identifier_with_input(
        kind: IdentifierErrorKind,
        input: impl Into<Box<str>>,
    ) -> Self {
        Self::MalformedIdentifier {
            kind,
            input: Some(input.into()),
        }
    }

    /// Create a malformed value error.
    pub fn malformed_value(tag: TypeTag, kind: ValueErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::MalformedValue {
            tag,
            kind,
            input: input.into(),
        }
    }

    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error affects a single record rather than a whole file.
    pub fn is_per_record(&self) -> bool {
        matches!(
            self,
            Self::MalformedIdentifier { .. }
                | Self::MalformedValue { .. }
                | Self::MalformedTimeInterval { .. }
        )
    }
}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Self::Load(Box::new(err))
    }
}
