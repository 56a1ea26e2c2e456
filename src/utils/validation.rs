use crate::domain::model::ChartRequest;
use crate::utils::error::{ChartError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Presence check for the four required form fields, then category
/// membership. Runs before any geocoding or ephemeris work; a single
/// combined error covers all absent fields.
impl Validate for ChartRequest {
    fn validate(&self) -> Result<()> {
        let required = [self.date(), self.time(), self.city(), self.category.trim()];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ChartError::MissingRequiredFields);
        }
        self.category()?;
        Ok(())
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ChartError::ConfigError {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ChartError::ConfigError {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ChartError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ChartError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> ChartRequest {
        ChartRequest {
            birth_date: "2000-01-01".to_string(),
            birth_time: "12:00".to_string(),
            birth_city: "Kathmandu".to_string(),
            birth_timezone: "Asia/Kathmandu".to_string(),
            category: "career".to_string(),
        }
    }

    #[test]
    fn complete_request_passes() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn missing_city_is_a_single_combined_error() {
        let request = ChartRequest {
            birth_city: "   ".to_string(),
            ..complete_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ChartError::MissingRequiredFields)
        ));
    }

    #[test]
    fn missing_timezone_is_not_an_error() {
        let request = ChartRequest {
            birth_timezone: String::new(),
            ..complete_request()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let request = ChartRequest {
            category: "gambling".to_string(),
            ..complete_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ChartError::InvalidCategory { value }) if value == "gambling"
        ));
    }

    #[test]
    fn missing_fields_take_precedence_over_bad_category() {
        let request = ChartRequest {
            birth_date: String::new(),
            category: "gambling".to_string(),
            ..complete_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ChartError::MissingRequiredFields)
        ));
    }

    #[test]
    fn validate_url_accepts_http_schemes() {
        assert!(validate_url("endpoint", "https://nominatim.openstreetmap.org/search").is_ok());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
        assert!(validate_url("endpoint", "").is_err());
    }

    #[test]
    fn validate_positive_number_enforces_minimum() {
        assert!(validate_positive_number("timeout", 10, 1).is_ok());
        assert!(validate_positive_number("timeout", 0, 1).is_err());
    }
}
