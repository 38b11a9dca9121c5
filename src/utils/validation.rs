use crate::utils::error::{ArenaError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ArenaError::InvalidField {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ArenaError::InvalidField {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ArenaError::InvalidField {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ArenaError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ArenaError::InvalidField {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a positive number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("random.endpoint", "https://example.com").is_ok());
        assert!(validate_url("random.endpoint", "http://example.com").is_ok());
        assert!(validate_url("random.endpoint", "").is_err());
        assert!(validate_url("random.endpoint", "invalid-url").is_err());
        assert!(validate_url("random.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Pasta").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_positive_price() {
        assert!(validate_positive_price("price", 12.99).is_ok());
        assert!(validate_positive_price("price", 0.0).is_err());
        assert!(validate_positive_price("price", -5.0).is_err());
        assert!(validate_positive_price("price", f64::NAN).is_err());
    }
}
