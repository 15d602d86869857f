use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::adapters::memory::MemoryStore;
use crate::domain::model::{DateRange, Port, PortPairFilter, PriceObservation, Region};
use crate::domain::ports::RateStore;
use crate::utils::error::{RatesError, Result};

// Prices are parsed from the raw field text so no float round-trip happens
// on ingest.
#[derive(Debug, Deserialize)]
struct RegionRecord {
    slug: String,
    name: String,
    parent_slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PortRecord {
    code: String,
    name: String,
    parent_slug: String,
}

#[derive(Debug, Deserialize)]
struct PriceRecord {
    day: NaiveDate,
    origin_code: String,
    destination_code: String,
    price: String,
}

/// RateStore backed by a directory of CSV files (`regions.csv`, `ports.csv`,
/// `prices.csv`). The dataset is loaded into an in-memory snapshot at open
/// time and is read-only afterwards.
#[derive(Debug, Clone)]
pub struct CsvStore {
    snapshot: MemoryStore,
}

impl CsvStore {
    /// Opens a dataset directory using the conventional file names.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        Self::from_files(
            dir.join("regions.csv"),
            dir.join("ports.csv"),
            dir.join("prices.csv"),
        )
    }

    pub fn from_files(
        regions_path: PathBuf,
        ports_path: PathBuf,
        prices_path: PathBuf,
    ) -> Result<Self> {
        let regions = load_regions(&regions_path)?;
        let ports = load_ports(&ports_path)?;
        let observations = load_prices(&prices_path)?;

        tracing::info!(
            regions = regions.len(),
            ports = ports.len(),
            observations = observations.len(),
            "loaded rates dataset"
        );

        Ok(Self {
            snapshot: MemoryStore::new(regions, ports, observations),
        })
    }
}

fn load_regions(path: &Path) -> Result<Vec<Region>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut regions = Vec::new();
    for record in reader.deserialize() {
        let record: RegionRecord = record?;
        regions.push(Region {
            slug: record.slug,
            name: record.name,
            parent_slug: record.parent_slug,
        });
    }
    Ok(regions)
}

fn load_ports(path: &Path) -> Result<Vec<Port>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut ports = Vec::new();
    for record in reader.deserialize() {
        let record: PortRecord = record?;
        ports.push(Port {
            code: record.code,
            name: record.name,
            parent_slug: record.parent_slug,
        });
    }
    Ok(ports)
}

fn load_prices(path: &Path) -> Result<Vec<PriceObservation>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut observations = Vec::new();
    for record in reader.deserialize() {
        let record: PriceRecord = record?;
        let price = Decimal::from_str(record.price.trim()).map_err(|e| RatesError::StoreError {
            message: format!(
                "invalid price {:?} in {}: {}",
                record.price,
                path.display(),
                e
            ),
        })?;
        observations.push(PriceObservation {
            day: record.day,
            price,
            origin_code: record.origin_code,
            destination_code: record.destination_code,
        });
    }
    Ok(observations)
}

#[async_trait]
impl RateStore for CsvStore {
    async fn fetch_regions(&self) -> Result<Vec<Region>> {
        self.snapshot.fetch_regions().await
    }

    async fn fetch_ports(&self) -> Result<Vec<Port>> {
        self.snapshot.fetch_ports().await
    }

    async fn fetch_price_observations(
        &self,
        range: &DateRange,
        filter: &PortPairFilter,
    ) -> Result<Vec<PriceObservation>> {
        self.snapshot.fetch_price_observations(range, filter).await
    }
}
