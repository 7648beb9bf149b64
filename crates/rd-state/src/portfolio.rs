use serde::{Deserialize, Serialize};

use rd_types::{DashboardConfig, Instrument, InstrumentError};

/// Ordered sequence of instrument positions.
///
/// This store is the only owner of the instruments; views render from it and
/// derive removal indices from the current sequence, never from a cached one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStore {
    instruments: Vec<Instrument>,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instrument to the end of the sequence.
    ///
    /// Duplicate positions in the same asset are allowed; aggregation is the
    /// risk service's job, not the store's.
    pub fn add(&mut self, instrument: Instrument) -> Result<(), InstrumentError> {
        instrument.validate()?;
        self.instruments.push(instrument);
        Ok(())
    }

    /// Remove the position at `index`, shifting later positions down.
    ///
    /// Out-of-bounds indices are a silent no-op: the view always derives
    /// indices from the currently rendered list, so an OOB index means the
    /// list already changed underneath it.
    pub fn remove(&mut self, index: usize) -> Option<Instrument> {
        if index < self.instruments.len() {
            Some(self.instruments.remove(index))
        } else {
            None
        }
    }

    /// Unique asset identifiers across all current positions, in order of
    /// first appearance. Empty portfolio yields an empty vec.
    pub fn distinct_assets(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for inst in &self.instruments {
            if !seen.contains(&inst.asset_id) {
                seen.push(inst.asset_id.clone());
            }
        }
        seen
    }

    /// Assets the market-data form should render: the distinct assets of the
    /// portfolio, or the configured placeholder when the portfolio is empty.
    pub fn assets_or_placeholder(&self, config: &DashboardConfig) -> Vec<String> {
        if self.instruments.is_empty() {
            vec![config.placeholder_asset.clone()]
        } else {
            self.distinct_assets()
        }
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
