use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use rd_types::{DashboardConfig, MarketDataEntry};

/// A typed update to exactly one field of a market-data entry.
///
/// Unknown fields and non-numeric values are unrepresentable here, so the
/// store can never be asked to hold anything it shouldn't.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDataUpdate {
    Spot(Decimal),
    Rate(Decimal),
    Volatility(Decimal),
    Dividend(Decimal),
}

/// Keyed map of asset identifier to market parameters.
///
/// Entries are lazily created from the configured defaults the first time an
/// asset needs one; reads never persist. Entries for assets no longer in the
/// portfolio are left inert rather than pruned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataStore {
    entries: HashMap<String, MarketDataEntry>,
    defaults: MarketDataEntry,
}

impl MarketDataStore {
    pub fn new(defaults: MarketDataEntry) -> Self {
        Self {
            entries: HashMap::new(),
            defaults,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.default_market_data)
    }

    /// Apply one field update to the entry for `asset_id`, creating the entry
    /// from the defaults first if absent.
    ///
    /// Negative spot, volatility, or dividend values are ignored and the
    /// previous value kept; zero is allowed (it marks the entry incomplete).
    /// Rates may be negative.
    pub fn apply(&mut self, asset_id: &str, update: MarketDataUpdate) {
        let entry = self
            .entries
            .entry(asset_id.to_string())
            .or_insert(self.defaults);

        match update {
            MarketDataUpdate::Spot(v) if v >= Decimal::ZERO => entry.spot = v,
            MarketDataUpdate::Rate(v) => entry.rate = v,
            MarketDataUpdate::Volatility(v) if v >= Decimal::ZERO => entry.volatility = v,
            MarketDataUpdate::Dividend(v) if v >= Decimal::ZERO => entry.dividend = v,
            _ => {
                debug!(asset = asset_id, ?update, "ignoring out-of-range market data update");
            }
        }
    }

    /// The entry for `asset_id`, or a copy of the defaults if none exists.
    /// Reading does not create an entry.
    pub fn get(&self, asset_id: &str) -> MarketDataEntry {
        self.entries
            .get(asset_id)
            .copied()
            .unwrap_or(self.defaults)
    }

    /// Whether an entry has been persisted for `asset_id`.
    pub fn contains(&self, asset_id: &str) -> bool {
        self.entries.contains_key(asset_id)
    }

    /// Create default-valued entries for every listed asset that lacks one.
    /// Called whenever the set of portfolio assets changes.
    pub fn seed<I, A>(&mut self, assets: I)
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        for asset in assets {
            self.entries
                .entry(asset.as_ref().to_string())
                .or_insert(self.defaults);
        }
    }

    pub fn entries(&self) -> &HashMap<String, MarketDataEntry> {
        &self.entries
    }

    pub fn defaults(&self) -> MarketDataEntry {
        self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn store() -> MarketDataStore {
        MarketDataStore::from_config(&DashboardConfig::default())
    }

    #[test]
    fn apply_creates_entry_from_defaults() {
        let mut store = store();
        store.apply("AAPL", MarketDataUpdate::Spot(dec!(182.5)));

        let entry = store.get("AAPL");
        assert_eq!(entry.spot, dec!(182.5));
        // Untouched fields come from the defaults.
        assert_eq!(entry.rate, dec!(0.05));
        assert_eq!(entry.volatility, dec!(0.25));
    }

    #[test]
    fn apply_overwrites_only_the_named_field() {
        let mut store = store();
        store.apply("AAPL", MarketDataUpdate::Volatility(dec!(0.4)));
        store.apply("AAPL", MarketDataUpdate::Rate(dec!(-0.01)));

        let entry = store.get("AAPL");
        assert_eq!(entry.volatility, dec!(0.4));
        assert_eq!(entry.rate, dec!(-0.01));
        assert_eq!(entry.spot, dec!(100));
    }

    #[test]
    fn negative_spot_update_is_ignored() {
        let mut store = store();
        store.apply("AAPL", MarketDataUpdate::Spot(dec!(120)));
        store.apply("AAPL", MarketDataUpdate::Spot(dec!(-5)));
        assert_eq!(store.get("AAPL").spot, dec!(120));
    }

    #[test]
    fn zero_spot_is_allowed_and_marks_entry_incomplete() {
        let mut store = store();
        store.apply("AAPL", MarketDataUpdate::Spot(dec!(0)));
        let entry = store.get("AAPL");
        assert_eq!(entry.spot, dec!(0));
        assert!(!entry.is_complete());
    }

    #[test]
    fn read_does_not_persist() {
        let store = store();
        let entry = store.get("MSFT");
        assert_eq!(entry, DashboardConfig::default().default_market_data);
        assert!(!store.contains("MSFT"));
    }

    #[test]
    fn seed_fills_missing_entries_only() {
        let mut store = store();
        store.apply("AAPL", MarketDataUpdate::Spot(dec!(190)));
        store.seed(["AAPL", "MSFT"]);

        // Existing entry untouched, missing entry seeded with defaults.
        assert_eq!(store.get("AAPL").spot, dec!(190));
        assert!(store.contains("MSFT"));
        assert_eq!(store.get("MSFT").spot, dec!(100));
    }
}
