use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};

/// TOML manifest describing a rates dataset: where the three CSV files live
/// and an optional dataset-level sample floor.
///
/// ```toml
/// [dataset]
/// regions = "regions.csv"
/// ports = "ports.csv"
/// prices = "prices.csv"
///
/// [query]
/// min_count = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub dataset: DatasetSection,
    pub query: Option<QuerySection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSection {
    pub regions: String,
    pub ports: String,
    pub prices: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuerySection {
    pub min_count: Option<usize>,
}

impl DatasetManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// CSV file paths resolved against the manifest's own directory.
    pub fn file_paths(&self, base_dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
        (
            base_dir.join(&self.dataset.regions),
            base_dir.join(&self.dataset.ports),
            base_dir.join(&self.dataset.prices),
        )
    }

    pub fn default_min_count(&self) -> Option<usize> {
        self.query.as_ref().and_then(|query| query.min_count)
    }
}

impl Validate for DatasetManifest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dataset.regions", &self.dataset.regions)?;
        validate_non_empty_string("dataset.ports", &self.dataset.ports)?;
        validate_non_empty_string("dataset.prices", &self.dataset.prices)?;

        if let Some(min_count) = self.default_min_count() {
            validate_positive_number("query.min_count", min_count, 1)?;
        }

        Ok(())
    }
}
