use crate::utils::error::{DeployError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DeployError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max_chars {
        return Err(DeployError::ConfigError {
            field: field_name.to_string(),
            message: format!("Value has {} characters, maximum is {}", len, max_chars),
        });
    }
    Ok(())
}

/// Display colors are `#RRGGBB` strings. Presence/length only, no color theory.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let digits = value.strip_prefix('#').unwrap_or("");
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DeployError::ConfigError {
            field: field_name.to_string(),
            message: format!("'{}' is not a #RRGGBB color", value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DeployError::ConfigError {
        field: field_name.to_string(),
        message: "Required field is missing".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("client", "Acme SA").is_ok());
        assert!(validate_non_empty_string("client", "").is_err());
        assert!(validate_non_empty_string("client", "   ").is_err());
    }

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("siret", "123 456 789 00012", 17).is_ok());
        assert!(validate_max_length("siret", "123 456 789 000123", 17).is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("color", "#FF6B6B").is_ok());
        assert!(validate_hex_color("color", "#96CEB4").is_ok());
        assert!(validate_hex_color("color", "FF6B6B").is_err());
        assert!(validate_hex_color("color", "#FF6B").is_err());
        assert!(validate_hex_color("color", "#GGGGGG").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("Pixid".to_string());
        let absent: Option<String> = None;
        assert_eq!(validate_required_field("platform", &present).unwrap(), "Pixid");
        assert!(validate_required_field("platform", &absent).is_err());
    }
}
