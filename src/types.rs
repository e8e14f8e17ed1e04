//! Core result and target types.

use crate::error::ErrorClass;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// A scan target resolved to a single IPv4 address.
///
/// Created once at scan start and immutable for the scan's duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanTarget {
    /// The original input (hostname or IP string).
    pub original: String,
    /// The resolved address.
    pub ip: Ipv4Addr,
}

impl ScanTarget {
    /// Create a new scan target.
    pub fn new(original: impl Into<String>, ip: Ipv4Addr) -> Self {
        Self {
            original: original.into(),
            ip,
        }
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original == self.ip.to_string() {
            write!(f, "{}", self.ip)
        } else {
            write!(f, "{} ({})", self.original, self.ip)
        }
    }
}

/// Final outcome for one scanned port.
///
/// Exactly one of these is produced per port in the scanned range,
/// and it is never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub struct PortOutcome {
    /// The port number that was probed.
    pub port: u16,
    /// Whether the port accepted a connection.
    pub open: bool,
    /// Captured service banner, present only if bytes were retrieved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    /// Failure classification, `ErrorClass::None` for open ports.
    pub error: ErrorClass,
}

impl PortOutcome {
    /// Outcome for a port that accepted the connection.
    pub fn open(port: u16, banner: Option<String>) -> Self {
        Self {
            port,
            open: true,
            banner,
            error: ErrorClass::None,
        }
    }

    /// Outcome for a port that did not accept the connection.
    pub fn closed(port: u16, error: ErrorClass) -> Self {
        Self {
            port,
            open: false,
            banner: None,
            error,
        }
    }
}
