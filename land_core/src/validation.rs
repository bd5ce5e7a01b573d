//! # Input Validation
//!
//! The engine assumes positive finite numbers. These helpers enforce that
//! at the boundary, turning raw form text into `f64` or a structured error:
//!
//! - empty text -> [`LandError::MissingField`]
//! - non-numeric, zero, negative, NaN or infinite -> [`LandError::InvalidInput`]
//!
//! ## Example
//!
//! ```rust
//! use land_core::validation::parse_positive;
//!
//! assert_eq!(parse_positive("length", "42.5").unwrap(), 42.5);
//! assert!(parse_positive("length", "").is_err());
//! assert!(parse_positive("length", "0").is_err());
//! ```

use crate::errors::{LandError, LandResult};

/// Parse a required, strictly positive number from user text.
pub fn parse_positive(field: &str, raw: &str) -> LandResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LandError::missing_field(field));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| LandError::invalid_input(field, trimmed, "Not a number"))?;

    ensure_positive(field, value)?;
    Ok(value)
}

/// Check that an already-numeric value is finite and greater than zero.
pub fn ensure_positive(field: &str, value: f64) -> LandResult<()> {
    if !value.is_finite() {
        return Err(LandError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(LandError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_numbers() {
        assert_eq!(parse_positive("length", "100").unwrap(), 100.0);
        assert_eq!(parse_positive("length", " 0.25 ").unwrap(), 0.25);
        assert_eq!(parse_positive("length", "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_empty_is_missing() {
        assert_eq!(parse_positive("breadth", ""), Err(LandError::missing_field("breadth")));
        assert_eq!(parse_positive("breadth", "   "), Err(LandError::missing_field("breadth")));
    }

    #[test]
    fn test_rejects_zero_and_negative() {
        for raw in ["0", "0.0", "-5", "-0.001"] {
            let err = parse_positive("length", raw).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "{} should be invalid", raw);
        }
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in ["abc", "12abc", "1,000", "NaN", "inf", "-inf"] {
            assert!(
                matches!(parse_positive("value", raw), Err(LandError::InvalidInput { .. })),
                "{} should be invalid",
                raw
            );
        }
    }

    #[test]
    fn test_error_carries_field_and_value() {
        match parse_positive("breadth", "-5") {
            Err(LandError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "breadth");
                assert_eq!(value, "-5");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
