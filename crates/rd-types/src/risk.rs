use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::instrument::Instrument;
use crate::market::MarketDataEntry;

/// Body of a `POST /calculate_risk` call: the full instrument sequence plus
/// the market entries backing it. Built fresh per calculation, never retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRequest {
    pub portfolio: Vec<Instrument>,
    pub market_data: HashMap<String, MarketDataEntry>,
}

/// Parameters of the Value-at-Risk simulation, echoed back by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarParameters {
    pub simulations: u64,
    /// In (0, 1), e.g. 0.95.
    pub confidence_level: Decimal,
    pub time_horizon_days: u32,
}

/// Aggregated valuation and sensitivities for the whole portfolio.
///
/// Immutable once received; replaced wholesale by the next successful
/// calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub total_pv: Decimal,
    pub total_delta: Decimal,
    pub total_gamma: Decimal,
    pub total_vega: Decimal,
    pub total_theta: Decimal,
    /// Typically negative (magnitude of loss at 95% confidence).
    pub value_at_risk_95: Decimal,
    #[serde(default)]
    pub portfolio_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_parameters: Option<VarParameters>,
}

/// Diagnostic payload of a `GET /health` probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub cache_info: Option<CacheInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInfo {
    pub cached_assets: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn risk_result_parses_service_payload() {
        let json = r#"{
            "total_pv": 1234.56,
            "total_delta": 6.2,
            "total_gamma": 0.8,
            "total_vega": 15.3,
            "total_theta": -3.1,
            "value_at_risk_95": -210.4,
            "portfolio_size": 1
        }"#;
        let result: RiskResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_pv, dec!(1234.56));
        assert_eq!(result.value_at_risk_95, dec!(-210.4));
        assert_eq!(result.portfolio_size, 1);
        assert!(result.var_parameters.is_none());
    }

    #[test]
    fn risk_result_parses_var_parameters() {
        let json = r#"{
            "total_pv": 10.0,
            "total_delta": 0.5,
            "total_gamma": 0.01,
            "total_vega": 1.2,
            "total_theta": -0.2,
            "value_at_risk_95": -3.4,
            "var_parameters": {
                "simulations": 10000,
                "confidence_level": 0.95,
                "time_horizon_days": 1
            }
        }"#;
        let result: RiskResult = serde_json::from_str(json).unwrap();
        let params = result.var_parameters.unwrap();
        assert_eq!(params.simulations, 10_000);
        assert_eq!(params.confidence_level, dec!(0.95));
        assert_eq!(params.time_horizon_days, 1);
        // Field absent from older service revisions.
        assert_eq!(result.portfolio_size, 0);
    }

    #[test]
    fn health_report_parses_cache_info() {
        let report: HealthReport =
            serde_json::from_str(r#"{"status": "ok", "cache_info": {"cached_assets": 7}}"#)
                .unwrap();
        assert_eq!(report.cache_info.unwrap().cached_assets, 7);
    }

    #[test]
    fn health_report_tolerates_empty_body() {
        let report: HealthReport = serde_json::from_str("{}").unwrap();
        assert!(report.status.is_none());
        assert!(report.cache_info.is_none());
    }
}
