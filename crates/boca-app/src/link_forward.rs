//! Single-instance deep-link forwarding over loopback TCP.
//!
//! The running instance listens on `127.0.0.1:<forward_port>`. A second
//! launch that carries a link connects, writes the link as one line, and
//! exits. Each accepted line is published as `ShellEvent::LinkActivated`.

use std::io::Write;
use std::net::{Ipv4Addr, SocketAddr, TcpStream};
use std::time::Duration;

use boca_common::ShellEvent;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::broadcast;

const CONNECT_TIMEOUT: Duration = Duration::from_millis(300);
const MAX_LINK_LEN: usize = 4096;

fn loopback(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, port))
}

/// Hand `link` to an already running instance. Returns `false` when none
/// is listening (or forwarding is disabled), in which case this process
/// should start normally.
pub fn forward_to_running(port: u16, link: &str) -> bool {
    if port == 0 {
        return false;
    }
    let mut stream = match TcpStream::connect_timeout(&loopback(port), CONNECT_TIMEOUT) {
        Ok(s) => s,
        Err(e) => {
            tracing::debug!(port, "no running instance: {e}");
            return false;
        }
    };
    let line = format!("{}\n", link.trim());
    match stream.write_all(line.as_bytes()).and_then(|_| stream.flush()) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("failed to forward link: {e}");
            false
        }
    }
}

/// Bind the forwarding listener. Binding fails when another instance owns
/// the port; the caller logs and carries on without live links.
pub async fn bind(port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind(loopback(port)).await
}

/// Accept forwarded links until the listener errors or the task is dropped.
pub async fn serve(listener: TcpListener, events: broadcast::Sender<ShellEvent>) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::warn!("link listener stopped: {e}");
                return;
            }
        };
        if !peer.ip().is_loopback() {
            continue;
        }
        let events = events.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stream.take(MAX_LINK_LEN as u64)).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let link = line.trim();
                if link.is_empty() {
                    continue;
                }
                tracing::info!(link, "forwarded link received");
                let _ = events.send(ShellEvent::LinkActivated(link.to_string()));
            }
        });
    }
}
