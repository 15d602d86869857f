use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatesError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Manifest parsing error: {0}")]
    ManifestParseError(#[from] toml::de::Error),

    #[error("Invalid date range: date_from {date_from} is after date_to {date_to}")]
    InvalidDateRangeError {
        date_from: NaiveDate,
        date_to: NaiveDate,
    },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Store error: {message}")]
    StoreError { message: String },
}

pub type Result<T> = std::result::Result<T, RatesError>;
