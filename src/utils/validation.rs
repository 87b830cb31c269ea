use crate::core::normalize::normalize_display;
use crate::utils::error::{MinutasError, Result};

/// Cleans a user-entered name and rejects blank input. Returns the
/// whitespace-collapsed display form that gets stored.
pub fn validate_non_empty_name(field_name: &str, raw: &str) -> Result<String> {
    let clean = normalize_display(raw);
    if clean.is_empty() {
        return Err(MinutasError::validation(
            field_name,
            "name cannot be empty or whitespace-only",
        ));
    }
    Ok(clean)
}

/// Parses a gram quantity accepting either comma or dot as the decimal
/// separator ("12,5" and "12.5" are both 12.5).
pub fn parse_quantity(field_name: &str, raw: &str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized.parse::<f64>().map_err(|_| {
        MinutasError::validation(field_name, format!("'{}' is not a valid number", raw.trim()))
    })
}

/// Direct-edit quantity: must parse and be strictly positive.
pub fn parse_positive_quantity(field_name: &str, raw: &str) -> Result<f64> {
    let value = parse_quantity(field_name, raw)?;
    if value <= 0.0 {
        return Err(MinutasError::validation(
            field_name,
            "quantity must be greater than 0",
        ));
    }
    Ok(value)
}

/// Headcounts are whole numbers of children, zero allowed.
pub fn parse_headcount(field_name: &str, raw: &str) -> Result<u32> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        MinutasError::validation(
            field_name,
            "must be an integer greater than or equal to 0",
        )
    })?;
    if value < 0 {
        return Err(MinutasError::validation(
            field_name,
            "must be an integer greater than or equal to 0",
        ));
    }
    Ok(value as u32)
}
