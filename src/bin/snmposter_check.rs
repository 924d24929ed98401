//! snmposter-check: Load an agents list and report every instance.
//!
//! Part of the snmposter CLI utilities.

use clap::Parser;
use snmposter::cli::args::OutputArgs;
use snmposter::cli::output::{OutputContext, write_error, write_skipped};
use snmposter::{Config, InstanceManager};
use std::path::PathBuf;
use std::process::ExitCode;

/// Load every capture named in an agents list and report which instances come up.
#[derive(Debug, Parser)]
#[command(name = "snmposter-check", version, about)]
struct Args {
    #[command(flatten)]
    output: OutputArgs,

    /// Load captures one at a time instead of in parallel.
    #[arg(long = "sequential")]
    sequential: bool,

    /// Agents list: one `<capture file>,<bind address>` per line.
    #[arg(value_name = "CONFIG")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    let config = match Config::from_path(&args.config) {
        Ok(config) => config,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let manager = if args.sequential {
        InstanceManager::from_config(&config)
    } else {
        InstanceManager::load_concurrent(config.instances).await
    };

    if args.output.verbose {
        for instance in manager.active() {
            write_skipped(instance.capture(), instance.skipped());
        }
        for failed in manager.failed() {
            write_skipped(&failed.capture, &failed.skipped);
        }
    }

    let output_ctx = OutputContext {
        format: args.output.format,
        show_hints: !args.output.no_hints,
        force_hex: args.output.hex,
    };
    if let Err(e) = output_ctx.write_instances(&manager) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    if !manager.failed().is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
