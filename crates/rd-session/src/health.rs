//! Periodic service availability probe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use rd_client::RiskService;

/// Displayed connectivity status. Probe failures land here and nowhere else;
/// they are never surfaced as user-facing errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub online: bool,
    /// True until the very first probe has resolved.
    pub checking: bool,
    /// Cached-asset count from the service's diagnostic payload, when the
    /// last successful probe carried one.
    pub cached_assets: Option<u64>,
    pub last_checked: Option<DateTime<Utc>>,
}

impl ServiceHealth {
    fn unknown() -> Self {
        Self {
            online: false,
            checking: true,
            cached_assets: None,
            last_checked: None,
        }
    }
}

/// Polls the service on a fixed interval and publishes [`ServiceHealth`]
/// through a watch channel.
///
/// The first probe fires immediately on start. Stopping (or dropping) the
/// monitor aborts the task, so no probe fires after teardown.
pub struct HealthMonitor {
    status_rx: watch::Receiver<ServiceHealth>,
    task: JoinHandle<()>,
}

impl HealthMonitor {
    pub fn start<S>(service: Arc<S>, interval: Duration) -> Self
    where
        S: RiskService + 'static,
    {
        let (tx, status_rx) = watch::channel(ServiceHealth::unknown());

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let health = match service.health().await {
                    Ok(report) => ServiceHealth {
                        online: true,
                        checking: false,
                        cached_assets: report.cache_info.map(|c| c.cached_assets),
                        last_checked: Some(Utc::now()),
                    },
                    Err(err) => {
                        debug!(error = %err, "health probe failed");
                        ServiceHealth {
                            online: false,
                            checking: false,
                            cached_assets: None,
                            last_checked: Some(Utc::now()),
                        }
                    }
                };
                if tx.send(health).is_err() {
                    break;
                }
            }
        });

        Self { status_rx, task }
    }

    /// Latest published status.
    pub fn status(&self) -> ServiceHealth {
        self.status_rx.borrow().clone()
    }

    /// A receiver the view layer can await change notifications on.
    pub fn subscribe(&self) -> watch::Receiver<ServiceHealth> {
        self.status_rx.clone()
    }

    /// Cancel the polling task. Idempotent.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.task.abort();
    }
}
