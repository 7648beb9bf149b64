use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-asset pricing inputs required to value instruments on that asset.
///
/// An entry with zero spot or zero volatility is *incomplete*: it exists (the
/// user has a form row for it) but cannot back a risk calculation yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketDataEntry {
    pub spot: Decimal,
    /// Risk-free rate. May be negative.
    pub rate: Decimal,
    /// `vol` on the wire.
    #[serde(rename = "vol")]
    pub volatility: Decimal,
    /// Continuous dividend yield. Absent on the wire means zero.
    #[serde(default)]
    pub dividend: Decimal,
}

impl MarketDataEntry {
    pub fn new(spot: Decimal, rate: Decimal, volatility: Decimal, dividend: Decimal) -> Self {
        Self {
            spot,
            rate,
            volatility,
            dividend,
        }
    }

    /// Whether this entry can back a risk calculation.
    pub fn is_complete(&self) -> bool {
        self.spot > Decimal::ZERO && self.volatility > Decimal::ZERO
    }
}
