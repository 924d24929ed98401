//! snmpwalk capture parsing.
//!
//! A capture is the text output of `snmpwalk` (numeric OIDs, `-On` or the
//! default numeric rendering) taken from a real device:
//!
//! ```text
//! 1.3.6.1.2.1.1.1.0 = STRING: "Cisco IOS Software, C2960 Software
//! Technical Support: http://www.cisco.com/techsupport"
//! 1.3.6.1.2.1.1.3.0 = Timeticks: (12345) 0:02:03.45
//! 1.3.6.1.2.1.2.2.1.6.1 = Hex-STRING: 00 1B 63 84 45 E6
//! 1.3.6.1.2.1.2.1.0 = 2
//! ```
//!
//! Parsing is best-effort: a record with a malformed identifier or value is
//! reported as a [`RecordError`] and skipped, and scanning continues.
//!
//! - [`WalkParser`] - the line-at-a-time state machine
//! - [`coerce`] - raw text to [`Value`](crate::Value) for a [`TypeTag`]
//! - [`parse_str`], [`parse_reader`], [`parse_file`] - whole-capture helpers

mod coerce;
mod line;
mod parser;
mod tag;

pub use coerce::{UNPARSABLE_INTEGER, coerce, lenient_integer, lenient_unsigned};
pub use parser::{Flushed, ParseState, WalkParser};
pub use tag::TypeTag;

use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::varbind::VarBind;

/// A record dropped during parsing.
#[derive(Debug, thiserror::Error)]
#[error("line {line} ({identifier}): {error}")]
pub struct RecordError {
    /// 1-based line the record started on.
    pub line: usize,
    /// Identifier text as captured, before sanitizing.
    pub identifier: String,
    /// Why the record was dropped.
    #[source]
    pub error: Error,
}

/// Records parsed from one capture, in file order, plus the records that were dropped.
#[derive(Debug, Default)]
pub struct ParseOutput {
    /// Successfully parsed records.
    pub records: Vec<VarBind>,
    /// Per-record failures.
    pub errors: Vec<RecordError>,
}

impl ParseOutput {
    fn push(&mut self, flushed: Flushed) {
        match flushed {
            Ok(record) => self.records.push(record),
            Err(err) => {
                tracing::warn!(
                    snmposter.line = err.line,
                    snmposter.identifier = %err.identifier,
                    error = %err.error,
                    "dropping malformed record"
                );
                self.errors.push(err);
            }
        }
    }
}

/// Parse a whole capture held in memory.
///
/// # Example
///
/// ```
/// use snmposter::walk::parse_str;
/// use snmposter::{Value, oid};
///
/// let out = parse_str("1.3.6.1.2.1.1.3.0 = Timeticks: (12345) 0:02:03.45\n");
/// assert!(out.errors.is_empty());
/// assert_eq!(out.records[0].oid, oid!(1, 3, 6, 1, 2, 1, 1, 3, 0));
/// assert_eq!(out.records[0].value, Value::TimeTicks(12345));
/// ```
pub fn parse_str(text: &str) -> ParseOutput {
    let mut parser = WalkParser::new();
    let mut out = ParseOutput::default();

    for line in text.lines() {
        if let Some(flushed) = parser.feed_line(line) {
            out.push(flushed);
        }
    }
    if let Some(flushed) = parser.finish() {
        out.push(flushed);
    }
    out
}

/// Parse a capture from a buffered reader.
///
/// Lines are split on `\n`; bytes that are not valid UTF-8 are replaced
/// rather than failing the load. Only I/O errors are returned.
pub fn parse_reader<R: BufRead>(reader: R) -> std::io::Result<ParseOutput> {
    let mut parser = WalkParser::new();
    let mut out = ParseOutput::default();

    for chunk in reader.split(b'\n') {
        let bytes = chunk?;
        let line = String::from_utf8_lossy(&bytes);
        if let Some(flushed) = parser.feed_line(&line) {
            out.push(flushed);
        }
    }
    if let Some(flushed) = parser.finish() {
        out.push(flushed);
    }
    Ok(out)
}

/// Parse a capture file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseOutput> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| Error::io(path, e))?;
    let out = parse_reader(std::io::BufReader::new(file)).map_err(|e| Error::io(path, e))?;

    tracing::debug!(
        snmposter.file = %path.display(),
        snmposter.records = out.records.len(),
        snmposter.skipped = out.errors.len(),
        "parsed capture"
    );
    Ok(out)
}
