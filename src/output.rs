//! Output formatting module.
//!
//! Presentation only: filters outcomes by output mode and renders
//! plain text, JSON, or CSV. The engine never sees any of this.

use crate::cli::{OutputFormat, OutputMode};
use crate::types::PortOutcome;
use console::{style, Style};
use serde::Serialize;
use std::io::{self, Write};

/// Summary of a finished scan, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub target: String,
    pub ip_address: String,
    pub ports_scanned: usize,
    pub open_ports: usize,
    pub closed_ports: usize,
    pub timed_out_ports: usize,
    pub duration_ms: u64,
    pub results: Vec<PortOutcome>,
}

impl ScanReport {
    /// Build a report from sorted outcomes, keeping only those the
    /// output mode selects. Counters always reflect the full set.
    pub fn new(
        target: impl Into<String>,
        ip_address: impl Into<String>,
        duration_ms: u64,
        outcomes: Vec<PortOutcome>,
        mode: OutputMode,
    ) -> Self {
        let ports_scanned = outcomes.len();
        let open_ports = outcomes.iter().filter(|o| o.open).count();
        let timed_out_ports = outcomes.iter().filter(|o| o.error.is_timeout()).count();
        let closed_ports = ports_scanned - open_ports;

        let results = outcomes
            .into_iter()
            .filter(|o| match mode {
                OutputMode::Open => o.open,
                OutputMode::Closed => !o.open,
                OutputMode::All => true,
            })
            .collect();

        Self {
            target: target.into(),
            ip_address: ip_address.into(),
            ports_scanned,
            open_ports,
            closed_ports,
            timed_out_ports,
            duration_ms,
            results,
        }
    }
}

/// Format and print a report according to the specified format.
pub fn print_results(report: &ScanReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_plain(report),
        OutputFormat::Json => print_json(report),
        OutputFormat::Csv => print_csv(report),
    }
}

/// Print results in human-readable plain text format.
fn print_plain(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(
        out,
        "  {} {} ({})",
        style("Target:").bold(),
        report.target,
        report.ip_address
    )?;
    writeln!(
        out,
        "  {} {} ports scanned in {:.2}s",
        style("Statistics:").bold(),
        report.ports_scanned,
        report.duration_ms as f64 / 1000.0
    )?;
    writeln!(
        out,
        "               {} open, {} closed ({} timed out)",
        style(report.open_ports).green().bold(),
        style(report.closed_ports).red(),
        style(report.timed_out_ports).yellow()
    )?;
    writeln!(out)?;

    if report.results.is_empty() {
        writeln!(out, "  {}", style("No ports to display.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "  {:>6}  {:^8}  {:<12}  {}",
        style("PORT").bold(),
        style("STATE").bold(),
        style("ERROR").bold(),
        style("BANNER").bold()
    )?;
    writeln!(
        out,
        "  {}",
        style("──────────────────────────────────────────────────").dim()
    )?;

    for outcome in &report.results {
        let (state, state_style) = if outcome.open {
            ("open", Style::new().green().bold())
        } else {
            ("closed", Style::new().red())
        };

        let banner_display = outcome
            .banner
            .as_ref()
            .map(|b| truncate_string(&b.replace(['\r', '\n'], " "), 40))
            .unwrap_or_default();

        writeln!(
            out,
            "  {:>6}  {:^8}  {:<12}  {}",
            outcome.port,
            state_style.apply_to(state),
            outcome.error.to_string(),
            style(banner_display).dim()
        )?;
    }

    writeln!(out)?;
    Ok(())
}

/// Print results in JSON format.
fn print_json(report: &ScanReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}

/// Print results in CSV format.
fn print_csv(report: &ScanReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["port", "state", "error", "code", "banner"])?;
    for outcome in &report.results {
        wtr.write_record([
            outcome.port.to_string(),
            if outcome.open { "open" } else { "closed" }.to_string(),
            outcome.error.to_string(),
            outcome.error.raw_code().to_string(),
            outcome.banner.as_deref().unwrap_or("").to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Truncate a string to a maximum length, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(target: &str, start_port: u16, end_port: u16, concurrency: usize) {
    println!();
    println!(
        "{} {}",
        style("Starting").cyan(),
        style("portsweep").cyan().bold()
    );
    println!(
        "{} Target: {}",
        style("•").dim(),
        style(target).white().bold()
    );
    println!(
        "{} Ports {}-{}, {} at a time",
        style("•").dim(),
        start_port,
        end_port,
        concurrency
    );
    println!();
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}
