use std::time::Duration;

use async_trait::async_trait;
use boca_common::{BocaError, ShellEvent};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// A source of "is the site reachable" answers.
#[async_trait]
pub trait Reachability: Send + Sync {
    async fn check(&self) -> bool;
}

/// Probes a URL over HTTP. Any HTTP response counts as reachable; only
/// transport failures (DNS, connect, timeout, TLS) count as offline.
#[derive(Clone)]
pub struct HttpReachability {
    client: reqwest::Client,
    url: String,
}

impl HttpReachability {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BocaError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BocaError::Network(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl Reachability for HttpReachability {
    async fn check(&self) -> bool {
        match self.client.head(&self.url).send().await {
            Ok(resp) => {
                trace!(status = %resp.status(), "probe ok");
                true
            }
            Err(e) => {
                debug!(url = %self.url, "probe failed: {e}");
                false
            }
        }
    }
}

/// Check once and publish the result, changed or not. Used when the user
/// asks to retry instead of waiting for the next tick.
pub async fn check_now<R>(reachability: &R, events: &broadcast::Sender<ShellEvent>) -> bool
where
    R: Reachability + ?Sized,
{
    let connected = reachability.check().await;
    debug!(connected, "on-demand reachability check");
    let _ = events.send(ShellEvent::Connectivity { connected });
    connected
}

/// Probe every `interval`, publishing the first result and every change.
pub fn spawn_probe<R>(
    probe: R,
    interval: Duration,
    events: broadcast::Sender<ShellEvent>,
) -> JoinHandle<()>
where
    R: Reachability + 'static,
{
    tokio::spawn(async move {
        let mut last = None;
        loop {
            let connected = probe.check().await;
            if last != Some(connected) {
                last = Some(connected);
                // No receivers just means the UI has not subscribed yet.
                let _ = events.send(ShellEvent::Connectivity { connected });
            }
            tokio::time::sleep(interval).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Scripted {
        answers: Mutex<Vec<bool>>,
    }

    #[async_trait]
    impl Reachability for Scripted {
        async fn check(&self) -> bool {
            let mut answers = self.answers.lock().unwrap();
            if answers.len() > 1 {
                answers.remove(0)
            } else {
                answers[0]
            }
        }
    }

    async fn next(rx: &mut broadcast::Receiver<ShellEvent>) -> ShellEvent {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("probe event")
            .unwrap()
    }

    #[tokio::test]
    async fn publishes_first_result_and_changes_only() {
        let (tx, mut rx) = broadcast::channel(16);
        let probe = Scripted {
            answers: Mutex::new(vec![true, true, false, false, true]),
        };
        let handle = spawn_probe(probe, Duration::from_millis(5), tx);

        assert_eq!(next(&mut rx).await, ShellEvent::Connectivity { connected: true });
        assert_eq!(next(&mut rx).await, ShellEvent::Connectivity { connected: false });
        assert_eq!(next(&mut rx).await, ShellEvent::Connectivity { connected: true });

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(rx.try_recv().is_err());
        handle.abort();
    }

    #[tokio::test]
    async fn check_now_publishes_even_without_change() {
        let (tx, mut rx) = broadcast::channel(4);
        let probe = Scripted {
            answers: Mutex::new(vec![false]),
        };
        assert!(!check_now(&probe, &tx).await);
        assert!(!check_now(&probe, &tx).await);
        assert_eq!(next(&mut rx).await, ShellEvent::Connectivity { connected: false });
        assert_eq!(next(&mut rx).await, ShellEvent::Connectivity { connected: false });
    }

    #[tokio::test]
    async fn check_now_reports_restored_network() {
        let (tx, mut rx) = broadcast::channel(4);
        let probe = Scripted {
            answers: Mutex::new(vec![true]),
        };
        assert!(check_now(&probe, &tx).await);
        assert_eq!(next(&mut rx).await, ShellEvent::Connectivity { connected: true });
    }

    #[tokio::test]
    async fn unreachable_host_reports_offline() {
        let probe = HttpReachability::new("http://127.0.0.1:9/", Duration::from_millis(500)).unwrap();
        assert!(!probe.check().await);
    }
}
