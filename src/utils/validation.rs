use crate::utils::error::{ConverterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses user input and enforces the unit's lower bound.
///
/// Surrounding whitespace is ignored. The bound is inclusive, so a value equal
/// to `min_value` is accepted. `NaN` and infinities are reported as parse
/// failures since they never describe a physical quantity.
pub fn parse_and_validate(raw_text: &str, min_value: f64) -> Result<f64> {
    let trimmed = raw_text.trim();

    let value = trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConverterError::ParseError {
            input: trimmed.to_string(),
        })?;

    if value < min_value {
        return Err(ConverterError::BelowMinimumError {
            value,
            minimum: min_value,
        });
    }

    Ok(value)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ConverterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}
