//! portsweep binary entry point.
//!
//! Thin glue around the library: parse arguments, run the engine,
//! render the report, map failure to the exit code.

use anyhow::Result;
use clap::Parser;
use portsweep::cli::Args;
use portsweep::config::ProbeConfig;
use portsweep::output::{self, ScanReport};
use portsweep::scanner::ScanEngine;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let (start_port, end_port) = args.port_bounds();
    let config = ProbeConfig::new(&args.target, start_port, end_port, args.concurrency, args.timeout)?;

    let mut engine = ScanEngine::new(config);
    if args.verbose {
        output::print_scan_header(&args.target, start_port, end_port, args.concurrency);
        engine = engine.with_progress();
    }

    let started = Instant::now();
    engine.run().await?;
    let duration_ms = started.elapsed().as_millis() as u64;

    let ip_address = engine
        .target()
        .map(|t| t.ip.to_string())
        .unwrap_or_default();
    let report = ScanReport::new(args.target, ip_address, duration_ms, engine.results(), args.show);
    output::print_results(&report, args.output)?;

    Ok(())
}
