//! Pre-flight validation and request construction.
//!
//! This is the single decision point gating remote calls. The policy here is
//! *strict*: any asset whose market data is missing or incomplete blocks the
//! whole request; incomplete entries are never silently dropped from the
//! payload.

use std::collections::HashMap;

use rd_types::{RiskRequest, ValidationError};

use crate::market_data::MarketDataStore;
use crate::portfolio::PortfolioStore;

/// Decide whether a risk request may be issued and, if so, build its payload.
///
/// Pure: no side effects, no network access, deterministic in its inputs.
/// The payload carries a clone of the full instrument sequence plus the
/// market entries for exactly the assets the portfolio references.
pub fn build_risk_request(
    portfolio: &PortfolioStore,
    market_data: &MarketDataStore,
) -> Result<RiskRequest, ValidationError> {
    if portfolio.is_empty() {
        return Err(ValidationError::EmptyPortfolio);
    }

    let assets = portfolio.distinct_assets();

    let incomplete: Vec<String> = assets
        .iter()
        .filter(|asset| !market_data.contains(asset) || !market_data.get(asset).is_complete())
        .cloned()
        .collect();

    if !incomplete.is_empty() {
        return Err(ValidationError::IncompleteMarketData { assets: incomplete });
    }

    let entries: HashMap<_, _> = assets
        .into_iter()
        .map(|asset| {
            let entry = market_data.get(&asset);
            (asset, entry)
        })
        .collect();

    Ok(RiskRequest {
        portfolio: portfolio.instruments().to_vec(),
        market_data: entries,
    })
}
