//! Output formatting for CLI tools.
//!
//! Supports human-readable, JSON, and raw output formats.

use crate::cli::args::OutputFormat;
use crate::cli::hints;
use crate::util::{format_hex_string, hex_string};
use crate::value::format_timeticks;
use crate::{InstanceManager, RecordError, Value, VarBind};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Records read from one capture, ready for output.
#[derive(Debug, Serialize)]
pub struct DumpResult {
    pub capture: String,
    pub records: usize,
    pub skipped: usize,
    pub results: Vec<VarBindResult>,
}

/// A single varbind result.
#[derive(Debug, Serialize)]
pub struct VarBindResult {
    pub oid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_hex: Option<String>,
}

/// Load outcome of one configured instance.
#[derive(Debug, Serialize)]
pub struct InstanceReport {
    pub capture: String,
    pub bind: String,
    pub status: &'static str,
    pub records: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output context for formatting.
pub struct OutputContext {
    pub format: OutputFormat,
    pub show_hints: bool,
    pub force_hex: bool,
}

impl OutputContext {
    /// Create a new output context with default settings.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_hints: true,
            force_hex: false,
        }
    }

    /// Write records from one capture to stdout.
    pub fn write_varbinds(
        &self,
        capture: &Path,
        varbinds: &[VarBind],
        skipped: usize,
    ) -> io::Result<()> {
        let result = DumpResult {
            capture: capture.display().to_string(),
            records: varbinds.len(),
            skipped,
            results: varbinds.iter().map(|vb| self.format_varbind(vb)).collect(),
        };
        let mut stdout = io::stdout().lock();

        match self.format {
            OutputFormat::Human => self.write_human(&mut stdout, &result.results),
            OutputFormat::Json => write_json(&mut stdout, &result),
            OutputFormat::Raw => self.write_raw(&mut stdout, &result.results),
        }
    }

    /// Write a load summary for every configured instance to stdout.
    pub fn write_instances(&self, manager: &InstanceManager) -> io::Result<()> {
        let reports = instance_reports(manager);
        let mut stdout = io::stdout().lock();

        match self.format {
            OutputFormat::Human => write_instances_human(&mut stdout, &reports),
            OutputFormat::Json => write_json(&mut stdout, &reports),
            OutputFormat::Raw => {
                for r in &reports {
                    writeln!(
                        stdout,
                        "{}\t{}\t{}\t{}\t{}",
                        r.bind, r.capture, r.status, r.records, r.skipped
                    )?;
                }
                Ok(())
            }
        }
    }

    fn format_varbind(&self, vb: &VarBind) -> VarBindResult {
        let hint = if self.show_hints {
            hints::lookup(&vb.oid)
        } else {
            None
        };

        let (value_type, value, formatted, raw_hex) = format_value(&vb.value, self.force_hex);

        VarBindResult {
            oid: vb.oid.to_string(),
            hint,
            value_type,
            value,
            formatted,
            raw_hex,
        }
    }

    fn write_human<W: Write>(&self, w: &mut W, results: &[VarBindResult]) -> io::Result<()> {
        for vb in results {
            if let Some(ref hint) = vb.hint {
                write!(w, ".{} ({})", vb.oid, hint)?;
            } else {
                write!(w, ".{}", vb.oid)?;
            }

            write!(w, " = {}: ", vb.value_type)?;

            if let Some(ref formatted) = vb.formatted {
                writeln!(w, "{}", formatted)?;
            } else {
                match &vb.value {
                    serde_json::Value::String(s) => writeln!(w, "\"{}\"", s)?,
                    other => writeln!(w, "{}", other)?,
                }
            }
        }
        Ok(())
    }

    fn write_raw<W: Write>(&self, w: &mut W, results: &[VarBindResult]) -> io::Result<()> {
        for vb in results {
            let value_str = match &vb.value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            writeln!(w, "{}\t{}", vb.oid, value_str)?;
        }
        Ok(())
    }
}

fn instance_reports(manager: &InstanceManager) -> Vec<InstanceReport> {
    let active = manager.active().iter().map(|instance| InstanceReport {
        capture: instance.capture().display().to_string(),
        bind: instance.bind_addr().to_string(),
        status: "ok",
        records: instance.store().len(),
        skipped: instance.skipped().len(),
        error: None,
    });
    let failed = manager.failed().iter().map(|err| InstanceReport {
        capture: err.capture.display().to_string(),
        bind: err.bind.to_string(),
        status: "failed",
        records: 0,
        skipped: err.skipped.len(),
        error: Some(err.reason.to_string()),
    });
    active.chain(failed).collect()
}

fn write_instances_human<W: Write>(w: &mut W, reports: &[InstanceReport]) -> io::Result<()> {
    for r in reports {
        match &r.error {
            None => writeln!(
                w,
                "{}  {}  {} records, {} skipped",
                r.bind, r.capture, r.records, r.skipped
            )?,
            Some(error) => writeln!(w, "{}  {}  FAILED: {}", r.bind, r.capture, error)?,
        }
    }
    let ok = reports.iter().filter(|r| r.error.is_none()).count();
    writeln!(w, "\n{} of {} instances loaded", ok, reports.len())
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(w, "{}", json)
}

/// Write skipped records to stderr, one per line.
pub fn write_skipped(capture: &Path, errors: &[RecordError]) {
    let mut stderr = io::stderr().lock();
    for err in errors {
        let _ = writeln!(stderr, "{}: {}", capture.display(), err);
    }
}

/// Format a value, returning (type_name, json_value, formatted_string, raw_hex).
fn format_value(
    value: &Value,
    force_hex: bool,
) -> (String, serde_json::Value, Option<String>, Option<String>) {
    let type_name = value.type_name().to_string();
    match value {
        Value::Integer(v) => (type_name, (*v).into(), None, None),

        Value::Counter32(v) | Value::Gauge32(v) => (type_name, (*v).into(), None, None),

        Value::Counter64(v) => (type_name, (*v).into(), None, None),

        Value::TimeTicks(v) => (
            type_name,
            (*v).into(),
            Some(format!("({}) {}", v, format_timeticks(*v))),
            None,
        ),

        Value::IpAddress(s) => (type_name, serde_json::Value::String(s.clone()), None, None),

        Value::ObjectIdentifier(oid) => (
            type_name,
            serde_json::Value::String(oid.to_string()),
            Some(format!(".{}", oid)),
            None,
        ),

        Value::OctetString(bytes) => {
            let hex = hex_string(bytes);
            (
                type_name,
                serde_json::Value::String(hex.clone()),
                Some(format_hex_string(bytes)),
                Some(hex),
            )
        }

        Value::Text(s) if force_hex => {
            let hex = hex_string(s.as_bytes());
            (
                "Hex-STRING".into(),
                serde_json::Value::String(hex.clone()),
                Some(format_hex_string(s.as_bytes())),
                Some(hex),
            )
        }

        Value::Text(s) => (type_name, serde_json::Value::String(s.clone()), None, None),
    }
}

/// Write an error message to stderr.
pub fn write_error(err: &dyn std::error::Error) {
    eprintln!("Error: {}", err);
}
