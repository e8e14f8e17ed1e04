//! Immutable scan configuration.

use crate::error::{ScanError, ScanResult};
use std::time::Duration;

/// Lowest accepted per-probe timeout.
const MIN_TIMEOUT_MS: u64 = 100;

/// Configuration carried through a whole scan, read-only after
/// construction.
///
/// The port bounds must already be in ascending order; normalizing a
/// reversed range is the caller's job. Concurrency and timeout are
/// floored rather than rejected.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    target: String,
    port_start: u16,
    port_end: u16,
    concurrency: usize,
    timeout_ms: u64,
}

impl ProbeConfig {
    /// Create a scan configuration.
    pub fn new(
        target: impl Into<String>,
        port_start: u16,
        port_end: u16,
        concurrency: usize,
        timeout_ms: u64,
    ) -> ScanResult<Self> {
        if port_start > port_end {
            return Err(ScanError::InvalidConfig(format!(
                "port range start {} exceeds end {}",
                port_start, port_end
            )));
        }

        Ok(Self {
            target: target.into(),
            port_start,
            port_end,
            concurrency: concurrency.max(1),
            timeout_ms: timeout_ms.max(MIN_TIMEOUT_MS),
        })
    }

    /// The hostname or IP string to scan.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// First port of the range, inclusive.
    pub fn port_start(&self) -> u16 {
        self.port_start
    }

    /// Last port of the range, inclusive.
    pub fn port_end(&self) -> u16 {
        self.port_end
    }

    /// Total number of ports in the range.
    pub fn port_count(&self) -> usize {
        (self.port_end - self.port_start) as usize + 1
    }

    /// Maximum number of simultaneously open probe sockets.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Per-probe timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ProbeConfig::new("127.0.0.1", 20, 25, 100, 500).unwrap();
        assert_eq!(config.port_start(), 20);
        assert_eq!(config.port_end(), 25);
        assert_eq!(config.port_count(), 6);
        assert_eq!(config.concurrency(), 100);
        assert_eq!(config.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = ProbeConfig::new("127.0.0.1", 100, 50, 100, 500);
        assert!(matches!(result, Err(ScanError::InvalidConfig(_))));
    }

    #[test]
    fn test_single_port_range() {
        let config = ProbeConfig::new("127.0.0.1", 80, 80, 100, 500).unwrap();
        assert_eq!(config.port_count(), 1);
    }

    #[test]
    fn test_concurrency_floored_to_one() {
        let config = ProbeConfig::new("127.0.0.1", 1, 10, 0, 500).unwrap();
        assert_eq!(config.concurrency(), 1);
    }

    #[test]
    fn test_timeout_floored() {
        let config = ProbeConfig::new("127.0.0.1", 1, 10, 100, 5).unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(100));
    }

    #[test]
    fn test_full_range() {
        let config = ProbeConfig::new("127.0.0.1", 0, u16::MAX, 500, 500).unwrap();
        assert_eq!(config.port_count(), 65536);
    }
}
