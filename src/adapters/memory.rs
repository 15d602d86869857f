use async_trait::async_trait;

use crate::domain::model::{DateRange, Port, PortPairFilter, PriceObservation, Region};
use crate::domain::ports::RateStore;
use crate::utils::error::Result;

/// In-memory snapshot of the three relations. Immutable after construction,
/// so every query sees a consistent view.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    regions: Vec<Region>,
    ports: Vec<Port>,
    observations: Vec<PriceObservation>,
}

impl MemoryStore {
    pub fn new(
        regions: Vec<Region>,
        ports: Vec<Port>,
        observations: Vec<PriceObservation>,
    ) -> Self {
        Self {
            regions,
            ports,
            observations,
        }
    }
}

#[async_trait]
impl RateStore for MemoryStore {
    async fn fetch_regions(&self) -> Result<Vec<Region>> {
        Ok(self.regions.clone())
    }

    async fn fetch_ports(&self) -> Result<Vec<Port>> {
        Ok(self.ports.clone())
    }

    async fn fetch_price_observations(
        &self,
        range: &DateRange,
        filter: &PortPairFilter,
    ) -> Result<Vec<PriceObservation>> {
        Ok(self
            .observations
            .iter()
            .filter(|observation| range.contains(observation.day) && filter.matches(observation))
            .cloned()
            .collect())
    }
}
