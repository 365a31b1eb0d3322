use crate::utils::error::{AgencyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgencyError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AgencyError::validation(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_char_length(field_name: &str, value: &str, min: usize, max: usize) -> Result<()> {
    let length = value.chars().count();
    if length < min || length > max {
        return Err(AgencyError::validation(
            field_name,
            value,
            format!("Length must be between {} and {} characters", min, max),
        ));
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AgencyError::validation(field_name, value, "Amount must be a finite number"));
    }
    if value < 0.0 {
        return Err(AgencyError::validation(field_name, value, "Amount cannot be negative"));
    }
    Ok(())
}
