use crate::utils::error::{RatesError, Result};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_date(field_name: &str, str_date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(str_date, DATE_FORMAT).map_err(|_| {
        RatesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: str_date.to_string(),
            reason: "Invalid date format, expected YYYY-MM-DD".to_string(),
        }
    })
}

pub fn validate_date_order(date_from: NaiveDate, date_to: NaiveDate) -> Result<()> {
    if date_from > date_to {
        return Err(RatesError::InvalidDateRangeError { date_from, date_to });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RatesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(RatesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert_eq!(
            validate_date("date_from", "2021-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
        );
        assert!(validate_date("date_from", "01/01/2021").is_err());
        assert!(validate_date("date_from", "2021-13-01").is_err());
        assert!(validate_date("date_from", "").is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let jan_1 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        let jan_2 = NaiveDate::from_ymd_opt(2021, 1, 2).unwrap();
        assert!(validate_date_order(jan_1, jan_2).is_ok());
        assert!(validate_date_order(jan_1, jan_1).is_ok());
        assert!(validate_date_order(jan_2, jan_1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("origin", "CNSGH").is_ok());
        assert!(validate_non_empty_string("origin", "").is_err());
        assert!(validate_non_empty_string("origin", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("min_count", 3, 1).is_ok());
        assert!(validate_positive_number("min_count", 0, 1).is_err());
    }
}
