//! Line-driven walk parser.
//!
//! A record has no terminator: it stays open until the next record starts or
//! input ends. [`WalkParser`] makes that explicit as a two-state machine
//! ([`ParseState::Idle`] / [`ParseState::Accumulating`]) and reports every
//! flush as the return value of [`feed_line`](WalkParser::feed_line) or
//! [`finish`](WalkParser::finish).

use crate::oid::Oid;
use crate::varbind::VarBind;

use super::coerce::coerce;
use super::line::{Line, classify};
use super::{RecordError, TypeTag};

/// Outcome of flushing one record.
pub type Flushed = Result<VarBind, RecordError>;

/// Whether a record is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// No record open; continuation lines are discarded.
    Idle,
    /// A record is open and collecting value lines.
    Accumulating,
}

/// Record being assembled from one or more physical lines.
#[derive(Debug)]
struct PendingRecord {
    /// 1-based line the record started on.
    line: usize,
    identifier: String,
    tag: TypeTag,
    lines: Vec<String>,
}

impl PendingRecord {
    fn flush(self) -> Flushed {
        let fail = |error| RecordError {
            line: self.line,
            identifier: self.identifier.clone(),
            error,
        };

        let oid = Oid::parse_sanitized(&self.identifier).map_err(fail)?;
        let value = coerce(&self.tag, &self.lines).map_err(fail)?;
        Ok(VarBind::new(oid, value))
    }
}

/// Streaming parser for snmpwalk capture text.
///
/// Feed lines in file order; collect whatever each call flushes.
///
/// # Example
///
/// ```
/// use snmposter::walk::{ParseState, WalkParser};
///
/// let mut parser = WalkParser::new();
/// assert!(parser.feed_line("1.3.6.1.2.1.1.1.0 = STRING: \"Linux").is_none());
/// assert_eq!(parser.state(), ParseState::Accumulating);
/// assert!(parser.feed_line("router 5.4\"").is_none());
///
/// let flushed = parser.feed_line("1.3.6.1.2.1.1.3.0 = Timeticks: (5) 0:00:00.05");
/// let record = flushed.unwrap().unwrap();
/// assert_eq!(record.value.as_str(), Some("Linux\nrouter 5.4"));
///
/// let last = parser.finish().unwrap().unwrap();
/// assert_eq!(last.value.as_u32(), Some(5));
/// ```
#[derive(Debug, Default)]
pub struct WalkParser {
    pending: Option<PendingRecord>,
    line_no: usize,
}

impl WalkParser {
    /// Create a parser in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> ParseState {
        if self.pending.is_some() {
            ParseState::Accumulating
        } else {
            ParseState::Idle
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Consume one physical line (without its line terminator).
    ///
    /// Returns the previous record if this line started a new one.
    pub fn feed_line(&mut self, line: &str) -> Option<Flushed> {
        self.line_no += 1;
        let line = line.trim_end();

        match classify(line) {
            Line::Typed {
                identifier,
                tag,
                value,
            } => self.start(identifier, TypeTag::parse(tag), value),
            Line::Untyped { identifier, value } => {
                let tag = if value.starts_with('"') && value.ends_with('"') {
                    TypeTag::String
                } else {
                    TypeTag::Integer
                };
                self.start(identifier, tag, value)
            }
            Line::Continuation(text) => {
                match self.pending.as_mut() {
                    Some(pending) => pending.lines.push(strip_quotes(text).to_string()),
                    None => tracing::trace!(
                        snmposter.line = self.line_no,
                        "discarding line outside any record"
                    ),
                }
                None
            }
        }
    }

    /// Flush the record still open at end of input, if any.
    pub fn finish(mut self) -> Option<Flushed> {
        self.pending.take().map(PendingRecord::flush)
    }

    fn start(&mut self, identifier: &str, tag: TypeTag, value: &str) -> Option<Flushed> {
        tracing::trace!(
            snmposter.line = self.line_no,
            snmposter.identifier = identifier,
            snmposter.tag = %tag,
            "record start"
        );

        let previous = self.pending.replace(PendingRecord {
            line: self.line_no,
            identifier: identifier.to_string(),
            tag,
            lines: vec![strip_quotes(value).to_string()],
        });
        previous.map(PendingRecord::flush)
    }
}

fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"')
}
