use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market::MarketDataEntry;

/// Externally supplied dashboard configuration. The core only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the risk computation service.
    pub api_base_url: String,
    /// Health-check polling interval in milliseconds.
    pub health_check_interval_ms: u64,
    /// Values used to seed a market-data entry the first time an asset
    /// appears in the portfolio.
    pub default_market_data: MarketDataEntry,
    /// Asset shown on the market-data form when the portfolio is empty.
    pub placeholder_asset: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            health_check_interval_ms: 30_000,
            default_market_data: MarketDataEntry::new(
                Decimal::from(100),
                Decimal::new(5, 2),  // 0.05
                Decimal::new(25, 2), // 0.25
                Decimal::ZERO,
            ),
            placeholder_asset: "AAPL".to_string(),
        }
    }
}
