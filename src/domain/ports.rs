use crate::domain::model::{DateRange, Port, PortPairFilter, PriceObservation, Region};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only query capabilities the rates engine consumes but does not
/// implement. One engine call is expected to observe a mutually consistent
/// snapshot across the three fetches; stores that load once up front get
/// this for free.
#[async_trait]
pub trait RateStore: Send + Sync {
    async fn fetch_regions(&self) -> Result<Vec<Region>>;

    async fn fetch_ports(&self) -> Result<Vec<Port>>;

    /// Observations within `range` whose origin/destination fall inside the
    /// filter sets. Stores may return a superset (e.g. ignore the filter);
    /// the aggregation core re-applies both predicates.
    async fn fetch_price_observations(
        &self,
        range: &DateRange,
        filter: &PortPairFilter,
    ) -> Result<Vec<PriceObservation>>;
}
