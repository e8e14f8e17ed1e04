//! Scan engine: orchestrates resolution, batch scheduling, and
//! result aggregation.
//!
//! A single coordinating flow drives batches sequentially; within a
//! batch, sockets are probed concurrently through the tokio reactor
//! rather than one thread per socket, bounding resource usage
//! independent of range size.

pub mod batch;
pub mod probe;
pub mod store;

pub use probe::{ConnectProbe, Probe};
pub use store::ResultStore;

use crate::config::ProbeConfig;
use crate::error::ScanResult;
use crate::resolver;
use crate::types::{PortOutcome, ScanTarget};
use indicatif::{ProgressBar, ProgressStyle};
use std::net::IpAddr;
use std::time::Instant;

/// The scan engine.
///
/// Resolves the target once, then feeds the port range through the
/// batch scheduler, collecting exactly one outcome per port. `run`
/// fails only when resolution does; in that case no outcomes are
/// produced and `results` stays empty, so callers never see a
/// silently truncated result set.
pub struct ScanEngine {
    config: ProbeConfig,
    store: ResultStore,
    resolved: Option<ScanTarget>,
    show_progress: bool,
}

impl ScanEngine {
    /// Create an engine for the given configuration.
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            config,
            store: ResultStore::new(),
            resolved: None,
            show_progress: false,
        }
    }

    /// Display a progress bar while scanning.
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// The configuration this engine runs with.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// The resolved target, available after a successful `run`.
    pub fn target(&self) -> Option<&ScanTarget> {
        self.resolved.as_ref()
    }

    /// Execute the scan, blocking until every port in the range has
    /// produced an outcome.
    pub async fn run(&mut self) -> ScanResult<()> {
        let target = resolver::resolve(self.config.target()).await?;

        tracing::info!(
            target = %target,
            ports = self.config.port_count(),
            concurrency = self.config.concurrency(),
            timeout_ms = self.config.timeout().as_millis() as u64,
            "starting scan"
        );
        let started = Instant::now();

        let progress = self.show_progress.then(|| {
            let pb = ProgressBar::new(self.config.port_count() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
                    .unwrap()
                    .progress_chars("=>-"),
            );
            pb
        });

        let probe = ConnectProbe::new(IpAddr::V4(target.ip), self.config.timeout());
        batch::scan_range(&probe, &self.config, &self.store, progress.as_ref()).await;

        if let Some(pb) = progress {
            pb.finish_with_message("scan complete");
        }

        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            outcomes = self.store.len(),
            "scan finished"
        );
        self.resolved = Some(target);
        Ok(())
    }

    /// All outcomes, sorted ascending by port.
    pub fn results(&self) -> Vec<PortOutcome> {
        self.store.sorted()
    }
}
