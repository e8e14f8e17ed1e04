//! Error types for portsweep.
//!
//! Uses `thiserror` for ergonomic error definitions. Only resolution
//! and configuration problems are fatal to a scan; every per-port
//! failure is classified and recorded as part of its outcome instead.

use serde::Serialize;
use std::fmt;
use std::io;
use thiserror::Error;

/// Scan-fatal errors.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to resolve '{target}': {reason}")]
    Resolution { target: String, reason: String },

    #[error("no IPv4 addresses found for '{0}'")]
    NoAddresses(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Classification of a per-port probe failure.
///
/// Tagged classification rather than a bare errno: the numeric OS
/// code rides along as auxiliary context where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "code", rename_all = "snake_case")]
pub enum ErrorClass {
    /// No error (the port accepted the connection).
    None,
    /// Connection refused by the peer.
    Refused(i32),
    /// Host or network unreachable.
    Unreachable(i32),
    /// Socket creation failed, typically file-descriptor exhaustion.
    SocketCreation(i32),
    /// No readiness signal within the configured window.
    TimedOut,
    /// Any other immediate connect error.
    Other(i32),
}

impl ErrorClass {
    /// Classify an immediate connect error.
    pub fn from_io(err: &io::Error) -> Self {
        let code = err.raw_os_error().unwrap_or(0);
        if err.kind() == io::ErrorKind::ConnectionRefused {
            return Self::Refused(code);
        }
        match code {
            c if c == libc::EHOSTUNREACH || c == libc::ENETUNREACH => Self::Unreachable(c),
            c if c == libc::EMFILE || c == libc::ENFILE => Self::SocketCreation(c),
            _ => Self::Other(code),
        }
    }

    /// The underlying OS error code, 0 when none applies.
    pub fn raw_code(&self) -> i32 {
        match *self {
            Self::None | Self::TimedOut => 0,
            Self::Refused(c) | Self::Unreachable(c) | Self::SocketCreation(c) | Self::Other(c) => {
                c
            }
        }
    }

    /// Whether this is the timeout classification.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut)
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "-"),
            Self::Refused(_) => write!(f, "refused"),
            Self::Unreachable(_) => write!(f, "unreachable"),
            Self::SocketCreation(_) => write!(f, "no-socket"),
            Self::TimedOut => write!(f, "timeout"),
            Self::Other(c) => write!(f, "error({})", c),
        }
    }
}
