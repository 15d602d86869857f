use crate::domain::model::RateQuery;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_date, validate_date_order, validate_non_empty_string, validate_positive_number,
    Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ocean-rates")]
#[command(about = "Daily average shipping rates between ports and regions")]
pub struct CliConfig {
    /// Dataset directory holding regions.csv, ports.csv and prices.csv
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Dataset manifest (TOML); overrides --data-dir
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub date_from: String,

    #[arg(long)]
    pub date_to: String,

    /// Origin port code or region slug
    #[arg(long)]
    pub origin: String,

    /// Destination port code or region slug
    #[arg(long)]
    pub destination: String,

    /// Minimum observations per day for a numeric average (default 3)
    #[arg(long)]
    pub min_count: Option<usize>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let date_from = validate_date("date_from", &self.date_from)?;
        let date_to = validate_date("date_to", &self.date_to)?;
        validate_date_order(date_from, date_to)?;

        validate_non_empty_string("origin", &self.origin)?;
        validate_non_empty_string("destination", &self.destination)?;

        if self.config.is_none() {
            validate_non_empty_string("data_dir", &self.data_dir)?;
        }
        if let Some(min_count) = self.min_count {
            validate_positive_number("min_count", min_count, 1)?;
        }

        Ok(())
    }
}

impl CliConfig {
    /// Builds the engine query. Reparses the dates so the call stays usable
    /// without a prior `validate`.
    pub fn to_query(&self) -> Result<RateQuery> {
        let date_from = validate_date("date_from", &self.date_from)?;
        let date_to = validate_date("date_to", &self.date_to)?;

        let query = RateQuery::new(date_from, date_to, &self.origin, &self.destination);
        Ok(match self.min_count {
            Some(min_count) => query.with_min_count(min_count),
            None => query,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_MIN_SAMPLE;

    fn base_config() -> CliConfig {
        CliConfig {
            data_dir: "./data".to_string(),
            config: None,
            date_from: "2021-01-01".to_string(),
            date_to: "2021-01-31".to_string(),
            origin: "CNSGH".to_string(),
            destination: "north_europe_main".to_string(),
            min_count: None,
            pretty: false,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_builds_query() {
        let config = base_config();
        assert!(config.validate().is_ok());

        let query = config.to_query().unwrap();
        assert_eq!(query.origin, "CNSGH");
        assert_eq!(query.min_count, DEFAULT_MIN_SAMPLE);
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let mut config = base_config();
        config.date_from = "01/01/2021".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_swapped_dates_rejected() {
        let mut config = base_config();
        config.date_from = "2021-02-01".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_reference_rejected() {
        let mut config = base_config();
        config.destination = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_count_override() {
        let mut config = base_config();
        config.min_count = Some(5);
        assert!(config.validate().is_ok());
        assert_eq!(config.to_query().unwrap().min_count, 5);

        config.min_count = Some(0);
        assert!(config.validate().is_err());
    }
}
