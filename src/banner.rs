//! Banner grabbing for open ports.
//!
//! Two-phase heuristic: read whatever the service volunteers, and if
//! it stays silent, try to elicit a response with a minimal HEAD
//! request. Captured bytes are displayed as-is; nothing is parsed or
//! validated.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Maximum bytes to read for a banner.
const MAX_BANNER_SIZE: usize = 1024;

/// Probe sent when a service does not speak first.
const HEAD_PROBE: &[u8] = b"HEAD / HTTP/1.0\r\n\r\n";

/// Grab a banner from an established connection.
///
/// Phase 1 waits up to `window` for the service to send something on
/// its own (SSH, SMTP and friends do). Phase 2 sends the HEAD probe
/// and waits again. Returns `None` when neither phase yields bytes;
/// an absent banner is not an error.
pub async fn grab_banner(stream: &mut TcpStream, window: Duration) -> Option<String> {
    let mut buffer = vec![0u8; MAX_BANNER_SIZE];

    if let Ok(Ok(n)) = timeout(window, stream.read(&mut buffer)).await {
        if n > 0 {
            return Some(trim_banner(&buffer[..n]));
        }
    }

    // Service stayed silent; ask it to say something.
    if stream.write_all(HEAD_PROBE).await.is_err() {
        return None;
    }
    if let Ok(Ok(n)) = timeout(window, stream.read(&mut buffer)).await {
        if n > 0 {
            return Some(trim_banner(&buffer[..n]));
        }
    }

    None
}

/// Decode captured bytes and strip trailing line endings.
fn trim_banner(data: &[u8]) -> String {
    String::from_utf8_lossy(data)
        .trim_end_matches(['\r', '\n'])
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[test]
    fn test_trim_banner() {
        assert_eq!(trim_banner(b"SSH-2.0-OpenSSH_8.9\r\n"), "SSH-2.0-OpenSSH_8.9");
        assert_eq!(trim_banner(b"220 mail ready\n"), "220 mail ready");
        assert_eq!(trim_banner(b"no trailing newline"), "no trailing newline");
        assert_eq!(trim_banner(b"\r\n"), "");
    }

    #[test]
    fn test_trim_banner_keeps_interior_newlines() {
        assert_eq!(trim_banner(b"line one\r\nline two\r\n"), "line one\r\nline two");
    }

    #[tokio::test]
    async fn test_passive_banner() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut peer, _) = listener.accept().await.unwrap();
            peer.write_all(b"SSH-2.0-TestServer\r\n").await.unwrap();
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        let banner = grab_banner(&mut stream, Duration::from_millis(500)).await;
        assert_eq!(banner.as_deref(), Some("SSH-2.0-TestServer"));
    }

    #[tokio::test]
    async fn test_head_probe_fallback() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // HTTP-style service: silent until it gets a request
            let (mut peer, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 256];
            let n = peer.read(&mut buf).await.unwrap();
            assert!(buf[..n].starts_with(b"HEAD / HTTP/1.0"));
            peer.write_all(b"HTTP/1.0 200 OK\r\nServer: test\r\n\r\n")
                .await
                .unwrap();
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        let banner = grab_banner(&mut stream, Duration::from_millis(300)).await;
        let banner = banner.expect("HEAD probe should elicit a response");
        assert!(banner.starts_with("HTTP/1.0 200 OK"));
    }

    #[tokio::test]
    async fn test_silent_service_yields_no_banner() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_peer, _) = listener.accept().await.unwrap();
            // hold the connection open without sending anything
            tokio::time::sleep(Duration::from_secs(2)).await;
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        let banner = grab_banner(&mut stream, Duration::from_millis(150)).await;
        assert!(banner.is_none());
    }
}
