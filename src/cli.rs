//! Command-line interface definitions for portsweep.
//!
//! Uses `clap` derive macros for declarative argument parsing. The
//! engine requires an ascending port range; normalizing a reversed
//! one is this layer's job.

use clap::{Parser, ValueEnum};

/// A concurrent TCP connect port scanner with banner grabbing.
#[derive(Parser, Debug)]
#[command(name = "portsweep")]
#[command(version)]
#[command(about = "Scan a host's TCP ports and grab service banners", long_about = None)]
pub struct Args {
    /// Target IP address or hostname to scan
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// First port of the range (inclusive)
    #[arg(value_name = "START_PORT")]
    pub start_port: u16,

    /// Last port of the range (inclusive); may be given below START_PORT
    #[arg(value_name = "END_PORT")]
    pub end_port: u16,

    /// Maximum number of simultaneously open probe sockets
    #[arg(short = 'c', long, default_value = "100")]
    pub concurrency: usize,

    /// Per-probe timeout in milliseconds
    #[arg(short = 't', long, default_value = "500")]
    pub timeout: u64,

    /// Output format for results
    #[arg(short = 'o', long, value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Which outcomes to display
    #[arg(long, value_enum, default_value = "open")]
    pub show: OutputMode,

    /// Show scanning progress
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Port bounds in ascending order, whichever way they were given.
    pub fn port_bounds(&self) -> (u16, u16) {
        if self.start_port <= self.end_port {
            (self.start_port, self.end_port)
        } else {
            (self.end_port, self.start_port)
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Which outcomes make it into the report.
///
/// Presentation only; the engine records everything regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Only open ports
    Open,
    /// Only closed ports
    Closed,
    /// Everything
    All,
}
