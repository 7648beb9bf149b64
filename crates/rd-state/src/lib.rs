//! Client-side state for the RiskDesk dashboard.
//!
//! Provides:
//! - [`PortfolioStore`]: the ordered sequence of instrument positions
//! - [`MarketDataStore`]: per-asset pricing inputs with typed field updates
//! - [`build_risk_request`]: the pre-flight validation gate and payload builder

pub mod market_data;
pub mod portfolio;
pub mod request;

pub use market_data::{MarketDataStore, MarketDataUpdate};
pub use portfolio::PortfolioStore;
pub use request::build_risk_request;
