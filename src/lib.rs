//! # portsweep - A Concurrent TCP Port Scanner
//!
//! portsweep determines which TCP ports on a single host accept
//! connections within a bounded time budget, and opportunistically
//! captures a short service banner for each open port.
//!
//! ## Features
//!
//! - **Bounded Concurrency**: the port range is scanned in batches no
//!   larger than the concurrency budget, capping open sockets
//! - **Async I/O**: non-blocking connects multiplexed through the
//!   tokio reactor, never one thread per socket
//! - **Per-Probe Timeouts**: slow or filtered ports cannot stall a
//!   batch; they resolve as closed with a timeout classification
//! - **Banner Grabbing**: passive read first, then a protocol-agnostic
//!   HEAD probe for services that stay silent
//! - **Exhaustive Results**: exactly one outcome per port in the
//!   range, or an explicit resolution error with no outcomes at all
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use portsweep::{ProbeConfig, ScanEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ProbeConfig::new("scanme.example", 1, 1024, 100, 500).unwrap();
//!     let mut engine = ScanEngine::new(config);
//!
//!     engine.run().await.expect("resolution failed");
//!     for outcome in engine.results() {
//!         if outcome.open {
//!             println!("{} open {:?}", outcome.port, outcome.banner);
//!         }
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Core target and outcome types
//! - [`config`] - Immutable scan configuration
//! - [`resolver`] - One-shot IPv4 target resolution
//! - [`scanner`] - The scan engine, probe, batch scheduler, and store
//! - [`banner`] - Two-phase banner grabbing
//! - [`error`] - Scan errors and per-port failure classification
//! - [`cli`] / [`output`] - Command-line surface and result rendering

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod resolver;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::ProbeConfig;
pub use error::{ErrorClass, ScanError};
pub use scanner::{ConnectProbe, Probe, ResultStore, ScanEngine};
pub use types::{PortOutcome, ScanTarget};
