use crate::core::aggregate;
use crate::core::resolver::RegionIndex;
use crate::domain::model::{DailyAverage, PortPairFilter, RateQuery};
use crate::domain::ports::RateStore;
use crate::utils::error::Result;

/// The rate resolution and aggregation engine, generic over its backing
/// store. Holds no state between queries; concurrent calls are independent.
pub struct RatesEngine<S: RateStore> {
    store: S,
}

impl<S: RateStore> RatesEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resolves both references against the current snapshot and returns the
    /// daily averages for every day in the range with at least one
    /// qualifying observation, ascending by day.
    pub async fn get_daily_averages(&self, query: &RateQuery) -> Result<Vec<DailyAverage>> {
        query.validate()?;

        let regions = self.store.fetch_regions().await?;
        let ports = self.store.fetch_ports().await?;
        let index = RegionIndex::build(&regions, &ports);

        let filter = PortPairFilter {
            origins: index.resolve(&query.origin),
            destinations: index.resolve(&query.destination),
        };
        tracing::debug!(
            origin = %query.origin,
            destination = %query.destination,
            origin_ports = filter.origins.len(),
            destination_ports = filter.destinations.len(),
            "resolved references"
        );

        // A reference matching nothing is an empty result, not an error.
        if filter.origins.is_empty() || filter.destinations.is_empty() {
            return Ok(Vec::new());
        }

        let observations = self
            .store
            .fetch_price_observations(&query.range, &filter)
            .await?;
        tracing::debug!(count = observations.len(), "fetched price observations");

        Ok(aggregate::daily_averages(
            &observations,
            &query.range,
            &filter,
            query.min_count,
        ))
    }
}
