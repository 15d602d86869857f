pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CsvStore, MemoryStore};
pub use config::toml_config::DatasetManifest;
pub use crate::core::engine::RatesEngine;
pub use domain::model::{
    DailyAverage, DateRange, Port, PriceObservation, RateQuery, RateRow, Region,
};
pub use domain::ports::RateStore;
pub use utils::error::{RatesError, Result};
