use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use rd_types::{HealthReport, RiskRequest, RiskResult, ServiceError};

use crate::service::{RiskService, ServiceResult};

/// HTTP implementation of [`RiskService`].
#[derive(Debug, Clone)]
pub struct HttpRiskService {
    base_url: String,
    client: reqwest::Client,
}

/// Error body shapes the service has been seen to return. FastAPI puts the
/// message under `detail`; older revisions used `error` or `message`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiErrorBody {
    fn into_message(self) -> Option<String> {
        self.detail.or(self.error).or(self.message)
    }
}

impl HttpRiskService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn error_from_response(response: reqwest::Response) -> ServiceError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or_else(|| format!("risk service returned HTTP {status}"));
        ServiceError::Api { status, message }
    }
}

#[async_trait]
impl RiskService for HttpRiskService {
    async fn health(&self) -> ServiceResult<HealthReport> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<HealthReport>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }

    async fn calculate(&self, request: &RiskRequest) -> ServiceResult<RiskResult> {
        debug!(
            instruments = request.portfolio.len(),
            assets = request.market_data.len(),
            "submitting risk calculation"
        );

        let response = self
            .client
            .post(self.url("/calculate_risk"))
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<RiskResult>()
            .await
            .map_err(|e| ServiceError::InvalidResponse(e.to_string()))
    }
}
