//! Calculate-request lifecycle state machine.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use rd_client::RiskService;
use rd_state::{build_risk_request, MarketDataStore, PortfolioStore};
use rd_types::{RiskResult, ValidationError};

/// Lifecycle of the (at most one) displayed risk calculation. Exactly one
/// variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CalculationState {
    #[default]
    Idle,
    Loading,
    Succeeded(RiskResult),
    Failed {
        message: String,
    },
}

impl CalculationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CalculationState::Loading)
    }
}

#[derive(Debug, Default)]
struct Lifecycle {
    state: CalculationState,
    /// Token of the most recently issued request. A response only commits if
    /// its token still matches; stale responses are discarded.
    latest_token: u64,
}

/// Owns the request lifecycle and invokes the remote service.
///
/// `calculate` takes `&self`, so triggers may overlap; the token check
/// guarantees the displayed state always corresponds to the most recently
/// *triggered* request, regardless of completion order.
pub struct RiskOrchestrator<S> {
    service: Arc<S>,
    lifecycle: Arc<Mutex<Lifecycle>>,
}

impl<S: RiskService> RiskOrchestrator<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            lifecycle: Arc::new(Mutex::new(Lifecycle::default())),
        }
    }

    /// Validate, submit, and await one risk calculation.
    ///
    /// A validation failure is returned to the caller without touching the
    /// lifecycle state and without contacting the service; `Failed` is
    /// reserved for requests that were actually sent. On success the previous
    /// result or error is discarded immediately and the state goes through
    /// `Loading` to `Succeeded` or `Failed`.
    pub async fn calculate(
        &self,
        portfolio: &PortfolioStore,
        market_data: &MarketDataStore,
    ) -> Result<(), ValidationError> {
        let request = build_risk_request(portfolio, market_data)?;

        let token = {
            let mut lifecycle = self.lifecycle.lock().await;
            lifecycle.latest_token += 1;
            lifecycle.state = CalculationState::Loading;
            lifecycle.latest_token
        };

        debug!(token, instruments = request.portfolio.len(), "risk calculation started");

        let outcome = self.service.calculate(&request).await;

        let mut lifecycle = self.lifecycle.lock().await;
        if lifecycle.latest_token != token {
            debug!(
                token,
                latest = lifecycle.latest_token,
                "discarding superseded risk response"
            );
            return Ok(());
        }

        lifecycle.state = match outcome {
            Ok(result) => {
                debug!(token, "risk calculation succeeded");
                CalculationState::Succeeded(result)
            }
            Err(err) => {
                warn!(token, error = %err, "risk calculation failed");
                CalculationState::Failed {
                    message: err.user_message(),
                }
            }
        };
        Ok(())
    }

    /// Explicit user dismissal of a failure. `Failed -> Idle`; a no-op in any
    /// other state (errors are never auto-cleared, successes never dismissed).
    pub async fn dismiss_error(&self) {
        let mut lifecycle = self.lifecycle.lock().await;
        if matches!(lifecycle.state, CalculationState::Failed { .. }) {
            lifecycle.state = CalculationState::Idle;
        }
    }

    /// Snapshot of the current lifecycle state for the view layer.
    pub async fn state(&self) -> CalculationState {
        self.lifecycle.lock().await.state.clone()
    }
}
