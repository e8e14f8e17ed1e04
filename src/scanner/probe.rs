//! Per-port connection probing.

use crate::banner::grab_banner;
use crate::error::ErrorClass;
use crate::types::PortOutcome;
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// A strategy for determining the state of a single port.
///
/// Abstracting the probe lets the batch scheduler be exercised
/// without touching the network.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probe one port, producing exactly one outcome.
    async fn probe(&self, port: u16) -> PortOutcome;
}

/// TCP connect probe.
///
/// `TcpStream::connect` issues a non-blocking connect and registers
/// the socket with the runtime reactor for write-readiness; the
/// surrounding `timeout` force-resolves probes that never signal.
/// The socket is released on every exit path: dropped after the
/// banner grab on success, dropped with the failed connect future
/// otherwise.
pub struct ConnectProbe {
    addr: IpAddr,
    timeout: Duration,
}

impl ConnectProbe {
    /// Create a probe for the given address with a per-port timeout.
    pub fn new(addr: IpAddr, timeout: Duration) -> Self {
        Self { addr, timeout }
    }
}

#[async_trait]
impl Probe for ConnectProbe {
    async fn probe(&self, port: u16) -> PortOutcome {
        let addr = SocketAddr::new(self.addr, port);

        match timeout(self.timeout, TcpStream::connect(addr)).await {
            Ok(Ok(mut stream)) => {
                tracing::debug!(port, "connection accepted");
                let banner = grab_banner(&mut stream, self.timeout).await;
                PortOutcome::open(port, banner)
            }
            Ok(Err(e)) => {
                tracing::trace!(port, error = %e, "connect failed");
                PortOutcome::closed(port, ErrorClass::from_io(&e))
            }
            Err(_) => {
                tracing::trace!(port, "connect timed out");
                PortOutcome::closed(port, ErrorClass::TimedOut)
            }
        }
    }
}
