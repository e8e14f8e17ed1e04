//! Batch scheduling: bounded fan-out over the port range.
//!
//! The port range is partitioned into contiguous batches no larger
//! than the concurrency budget, and batches run strictly one after
//! another. The budget caps both the sockets open at once and the
//! reactor registrations per wait loop, so a scan of thousands of
//! ports cannot exhaust file descriptors or ephemeral ports.

use crate::config::ProbeConfig;
use crate::scanner::probe::Probe;
use crate::scanner::store::ResultStore;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::ops::RangeInclusive;

/// Partition an inclusive port range into contiguous batches of at
/// most `size` ports.
pub(crate) fn batches(start: u16, end: u16, size: usize) -> Vec<RangeInclusive<u16>> {
    debug_assert!(start <= end);
    debug_assert!(size >= 1);

    // u32 arithmetic so that end = 65535 cannot overflow
    let mut out = Vec::new();
    let mut lo = start as u32;
    let end = end as u32;
    while lo <= end {
        let hi = (lo + size as u32 - 1).min(end);
        out.push(lo as u16..=hi as u16);
        lo = hi + 1;
    }
    out
}

/// Drive the whole range through sequential batches.
///
/// Within a batch every port probes concurrently; the next batch
/// starts only once the current one has an outcome for every port.
/// Each completed probe appends to the store immediately, so closed
/// and timed-out ports are recorded the moment they resolve.
pub(crate) async fn scan_range<P: Probe>(
    probe: &P,
    config: &ProbeConfig,
    store: &ResultStore,
    progress: Option<&ProgressBar>,
) {
    for batch in batches(config.port_start(), config.port_end(), config.concurrency()) {
        tracing::debug!(start = *batch.start(), end = *batch.end(), "scanning batch");

        stream::iter(batch)
            .map(|port| async move {
                let outcome = probe.probe(port).await;
                if let Some(pb) = progress {
                    pb.inc(1);
                    if outcome.open {
                        pb.set_message(format!("found open port: {}", outcome.port));
                    }
                }
                store.push(outcome);
            })
            .buffer_unordered(config.concurrency())
            .collect::<()>()
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorClass;
    use crate::types::PortOutcome;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Probe that records its peak number of in-flight calls.
    #[derive(Default)]
    struct CountingProbe {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl Probe for CountingProbe {
        async fn probe(&self, port: u16) -> PortOutcome {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if port % 3 == 0 {
                PortOutcome::closed(port, ErrorClass::TimedOut)
            } else {
                PortOutcome::closed(port, ErrorClass::Refused(libc::ECONNREFUSED))
            }
        }
    }

    #[test]
    fn test_batches_partition_range() {
        let parts = batches(1, 10, 4);
        assert_eq!(parts, vec![1..=4, 5..=8, 9..=10]);
    }

    #[test]
    fn test_batches_single_port() {
        assert_eq!(batches(80, 80, 100), vec![80..=80]);
    }

    #[test]
    fn test_batches_size_one() {
        assert_eq!(batches(1, 3, 1), vec![1..=1, 2..=2, 3..=3]);
    }

    #[test]
    fn test_batches_top_of_range() {
        // must not overflow at 65535
        let parts = batches(65530, 65535, 100);
        assert_eq!(parts, vec![65530..=65535]);

        let parts = batches(65530, 65535, 4);
        assert_eq!(parts, vec![65530..=65533, 65534..=65535]);
    }

    #[test]
    fn test_batches_cover_every_port_once() {
        let parts = batches(100, 999, 77);
        let mut seen = HashSet::new();
        for part in parts {
            for port in part {
                assert!(seen.insert(port), "port {} appeared twice", port);
            }
        }
        assert_eq!(seen.len(), 900);
        assert!(seen.contains(&100));
        assert!(seen.contains(&999));
    }

    #[tokio::test]
    async fn test_scan_range_is_exhaustive() {
        let probe = CountingProbe::default();
        let config = ProbeConfig::new("127.0.0.1", 1, 64, 8, 100).unwrap();
        let store = ResultStore::new();

        scan_range(&probe, &config, &store, None).await;

        let results = store.sorted();
        assert_eq!(results.len(), 64);
        let ports: Vec<u16> = results.iter().map(|o| o.port).collect();
        assert_eq!(ports, (1..=64).collect::<Vec<u16>>());
    }

    #[tokio::test]
    async fn test_concurrency_budget_is_enforced() {
        let probe = CountingProbe::default();
        let config = ProbeConfig::new("127.0.0.1", 1, 100, 8, 100).unwrap();
        let store = ResultStore::new();

        scan_range(&probe, &config, &store, None).await;

        assert!(
            probe.peak.load(Ordering::SeqCst) <= 8,
            "peak in-flight probes {} exceeded budget",
            probe.peak.load(Ordering::SeqCst)
        );
        assert_eq!(store.len(), 100);
    }

    #[tokio::test]
    async fn test_timeout_classification_is_preserved() {
        let probe = CountingProbe::default();
        let config = ProbeConfig::new("127.0.0.1", 1, 12, 4, 100).unwrap();
        let store = ResultStore::new();

        scan_range(&probe, &config, &store, None).await;

        for outcome in store.sorted() {
            if outcome.port % 3 == 0 {
                assert!(outcome.error.is_timeout());
            } else {
                assert_eq!(outcome.error, ErrorClass::Refused(libc::ECONNREFUSED));
            }
        }
    }
}
