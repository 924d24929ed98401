//! snmposter-dump: Print the records a capture would serve.
//!
//! Part of the snmposter CLI utilities.

use clap::Parser;
use snmposter::cli::args::OutputArgs;
use snmposter::cli::hints::parse_oid;
use snmposter::cli::output::{OutputContext, write_error, write_skipped};
use snmposter::{GetResult, MibView, OidStore, VarBind, walk};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parse an snmpwalk capture and print its records in OID order.
#[derive(Debug, Parser)]
#[command(name = "snmposter-dump", version, about)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,

    /// Look up OID exactly instead of walking the subtree below it.
    #[arg(long = "get", requires = "oid")]
    get: bool,

    /// Capture file (output of `snmpwalk -On`).
    #[arg(value_name = "CAPTURE")]
    capture: PathBuf,

    /// OID subtree to print (dotted notation or well-known name); whole capture if omitted.
    #[arg(value_name = "OID")]
    oid: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    let oid = match args.oid.as_deref().map(parse_oid).transpose() {
        Ok(oid) => oid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let parsed = match walk::parse_file(&args.capture) {
        Ok(parsed) => parsed,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };
    if args.output.verbose {
        write_skipped(&args.capture, &parsed.errors);
    }
    let skipped = parsed.errors.len();

    let store = match OidStore::build(parsed.records) {
        Ok(store) => store,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let varbinds: Vec<VarBind> = match (&oid, args.get) {
        (Some(oid), true) => match MibView::get(&store, oid) {
            GetResult::Value(value) => vec![VarBind::new(oid.clone(), value)],
            GetResult::NotFound => {
                eprintln!("{}: No Such Object available", oid);
                return ExitCode::FAILURE;
            }
        },
        (Some(oid), false) => store
            .subtree(oid)
            .map(|(oid, value)| VarBind::new(oid.clone(), value.clone()))
            .collect(),
        (None, _) => store.all(),
    };

    let output_ctx = OutputContext {
        format: args.output.format,
        show_hints: !args.output.no_hints,
        force_hex: args.output.hex,
    };
    if let Err(e) = output_ctx.write_varbinds(&args.capture, &varbinds, skipped) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
