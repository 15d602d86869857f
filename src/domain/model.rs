use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::utils::error::{RatesError, Result};

/// Default statistical-significance floor: a day with fewer qualifying
/// observations reports an absent average instead of a misleading one.
pub const DEFAULT_MIN_SAMPLE: usize = 3;

/// A named grouping of ports and/or sub-regions. Regions form a forest;
/// `parent_slug = None` marks a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    pub name: String,
    pub parent_slug: Option<String>,
}

/// A terminal shipping location, attached to exactly one region. That region
/// may sit at any depth of the tree, including mid-tier regions that also
/// have child regions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    pub code: String,
    pub name: String,
    pub parent_slug: String,
}

/// One recorded price between two ports on one day. Multiple observations
/// per (day, origin, destination) are expected; that is what gets averaged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub day: NaiveDate,
    pub price: Decimal,
    pub origin_code: String,
    pub destination_code: String,
}

/// Inclusive calendar-day range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }
}

/// Resolved origin/destination port-code sets an observation must fall into
/// to qualify. Stores may push the filter down; the aggregation core applies
/// it again regardless.
#[derive(Debug, Clone, Default)]
pub struct PortPairFilter {
    pub origins: HashSet<String>,
    pub destinations: HashSet<String>,
}

impl PortPairFilter {
    pub fn matches(&self, observation: &PriceObservation) -> bool {
        self.origins.contains(&observation.origin_code)
            && self.destinations.contains(&observation.destination_code)
    }
}

/// One daily-average request: a date range, two references (port codes or
/// region slugs) and the sample floor.
#[derive(Debug, Clone)]
pub struct RateQuery {
    pub range: DateRange,
    pub origin: String,
    pub destination: String,
    pub min_count: usize,
}

impl RateQuery {
    pub fn new(
        date_from: NaiveDate,
        date_to: NaiveDate,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            range: DateRange::new(date_from, date_to),
            origin: origin.into(),
            destination: destination.into(),
            min_count: DEFAULT_MIN_SAMPLE,
        }
    }

    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// A swapped range is rejected rather than silently treated as empty.
    pub fn validate(&self) -> Result<()> {
        if self.range.from > self.range.to {
            return Err(RatesError::InvalidDateRangeError {
                date_from: self.range.from,
                date_to: self.range.to,
            });
        }
        Ok(())
    }
}

/// Average price for one day within the requested range. `None` means the
/// day had observations, but fewer than the sample floor; a day with no
/// observations at all never appears in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAverage {
    pub day: NaiveDate,
    pub average_price: Option<Decimal>,
}

impl DailyAverage {
    /// Presentation row with the price rounded to 3 decimal places. The
    /// engine keeps full precision; rounding happens only here.
    pub fn to_row(&self) -> RateRow {
        RateRow {
            day: self.day,
            average_price: self.average_price.map(|price| price.round_dp(3)),
        }
    }
}

/// Serializable output row: `{"day": "YYYY-MM-DD", "average_price": number | null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRow {
    pub day: NaiveDate,
    pub average_price: Option<Decimal>,
}
