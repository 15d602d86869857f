pub mod aggregate;
pub mod engine;
pub mod resolver;

pub use crate::domain::model::{DailyAverage, PriceObservation, RateQuery};
pub use crate::domain::ports::RateStore;
pub use crate::utils::error::Result;
