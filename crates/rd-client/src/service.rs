use async_trait::async_trait;

use rd_types::{HealthReport, RiskRequest, RiskResult, ServiceError};

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Interface to the remote risk computation service.
///
/// Implementations may talk HTTP (see [`crate::HttpRiskService`]) or simulate
/// the service locally for tests. Timeouts and retries are the transport's
/// concern; callers only react to eventual success or failure.
#[async_trait]
pub trait RiskService: Send + Sync {
    /// Probe service availability. Any error means offline.
    async fn health(&self) -> ServiceResult<HealthReport>;

    /// Submit a portfolio valuation request and await the aggregated result.
    async fn calculate(&self, request: &RiskRequest) -> ServiceResult<RiskResult>;
}
