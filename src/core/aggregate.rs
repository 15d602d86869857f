use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::model::{DailyAverage, DateRange, PortPairFilter, PriceObservation};

/// Groups qualifying observations by day and averages them, ascending by day.
///
/// A day inside the range with no qualifying observation is omitted; a day
/// with some, but fewer than `min_count`, is emitted with an absent average.
/// The mean is the unweighted arithmetic mean over all raw prices for that
/// day, whichever port pair they belong to.
pub fn daily_averages(
    observations: &[PriceObservation],
    range: &DateRange,
    filter: &PortPairFilter,
    min_count: usize,
) -> Vec<DailyAverage> {
    let mut prices_by_day: BTreeMap<NaiveDate, Vec<Decimal>> = BTreeMap::new();

    for observation in observations {
        if range.contains(observation.day) && filter.matches(observation) {
            prices_by_day
                .entry(observation.day)
                .or_default()
                .push(observation.price);
        }
    }

    prices_by_day
        .into_iter()
        .map(|(day, prices)| {
            let average_price = if prices.len() >= min_count {
                Some(mean(&prices))
            } else {
                None
            };
            DailyAverage { day, average_price }
        })
        .collect()
}

fn mean(prices: &[Decimal]) -> Decimal {
    let total: Decimal = prices.iter().copied().sum();
    total / Decimal::from(prices.len() as u64)
}
