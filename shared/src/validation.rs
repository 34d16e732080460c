//! Validation utilities for the Agricultural Management Platform

use rust_decimal::Decimal;

use crate::models::ToleranceProfile;

// ============================================================================
// Crop Validations
// ============================================================================

/// Validate that a tolerance profile is internally consistent
///
/// Each range must satisfy min <= max when both bounds are present; a single
/// bound (or none) is always valid.
pub fn validate_crop_tolerances(tolerances: &ToleranceProfile) -> Result<(), &'static str> {
    if let (Some(min), Some(max)) = (
        tolerances.temperature_min_celsius,
        tolerances.temperature_max_celsius,
    ) {
        if min > max {
            return Err("Temperature minimum exceeds maximum");
        }
    }

    if let (Some(min), Some(max)) = (tolerances.soil_ph_min, tolerances.soil_ph_max) {
        if min > max {
            return Err("Soil pH minimum exceeds maximum");
        }
    }

    for ph in [tolerances.soil_ph_min, tolerances.soil_ph_max]
        .into_iter()
        .flatten()
    {
        validate_soil_ph(ph)?;
    }

    if let Some(rainfall) = tolerances.rainfall_requirement_mm {
        if rainfall < Decimal::ZERO {
            return Err("Rainfall requirement cannot be negative");
        }
    }

    Ok(())
}

/// Validate a soil pH value is on the 0-14 scale
pub fn validate_soil_ph(ph: Decimal) -> Result<(), &'static str> {
    if ph < Decimal::ZERO || ph > Decimal::from(14) {
        return Err("Soil pH must be between 0 and 14");
    }
    Ok(())
}

// ============================================================================
// Measurement Validations
// ============================================================================

/// Validate a climate event severity is on the 1-5 scale
pub fn validate_severity(severity: i32) -> Result<(), &'static str> {
    if !(1..=5).contains(&severity) {
        return Err("Severity must be between 1 and 5");
    }
    Ok(())
}

/// Validate a quantity (yield, inventory, loss) is non-negative
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a planted area is positive
pub fn validate_area(area_hectares: Decimal) -> Result<(), &'static str> {
    if area_hectares <= Decimal::ZERO {
        return Err("Area must be positive");
    }
    Ok(())
}

/// Validate a percentage is between 0 and 100
pub fn validate_percent(percent: Decimal) -> Result<(), &'static str> {
    if percent < Decimal::ZERO || percent > Decimal::from(100) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate a farm code format (3-10 uppercase alphanumeric)
pub fn validate_farm_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 3 {
        return Err("Farm code must be at least 3 characters");
    }
    if code.len() > 10 {
        return Err("Farm code must be at most 10 characters");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err("Farm code must be uppercase alphanumeric only");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    // ========================================================================
    // Crop Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_tolerances_valid() {
        let tolerances = ToleranceProfile {
            temperature_min_celsius: Some(dec("10")),
            temperature_max_celsius: Some(dec("30")),
            soil_ph_min: Some(dec("5.5")),
            soil_ph_max: Some(dec("7.0")),
            rainfall_requirement_mm: Some(dec("600")),
        };
        assert!(validate_crop_tolerances(&tolerances).is_ok());
    }

    #[test]
    fn test_validate_tolerances_one_sided() {
        let tolerances = ToleranceProfile {
            temperature_min_celsius: Some(dec("5")),
            ..Default::default()
        };
        assert!(validate_crop_tolerances(&tolerances).is_ok());
    }

    #[test]
    fn test_validate_tolerances_empty() {
        assert!(validate_crop_tolerances(&ToleranceProfile::default()).is_ok());
    }

    #[test]
    fn test_validate_tolerances_inverted_temperature() {
        let tolerances = ToleranceProfile {
            temperature_min_celsius: Some(dec("30")),
            temperature_max_celsius: Some(dec("10")),
            ..Default::default()
        };
        assert!(validate_crop_tolerances(&tolerances).is_err());
    }

    #[test]
    fn test_validate_tolerances_inverted_ph() {
        let tolerances = ToleranceProfile {
            soil_ph_min: Some(dec("7.5")),
            soil_ph_max: Some(dec("5.0")),
            ..Default::default()
        };
        assert!(validate_crop_tolerances(&tolerances).is_err());
    }

    #[test]
    fn test_validate_tolerances_ph_off_scale() {
        let tolerances = ToleranceProfile {
            soil_ph_min: Some(dec("2.0")),
            soil_ph_max: Some(dec("15.0")),
            ..Default::default()
        };
        assert!(validate_crop_tolerances(&tolerances).is_err());
    }

    #[test]
    fn test_validate_tolerances_negative_rainfall() {
        let tolerances = ToleranceProfile {
            rainfall_requirement_mm: Some(dec("-10")),
            ..Default::default()
        };
        assert!(validate_crop_tolerances(&tolerances).is_err());
    }

    #[test]
    fn test_validate_soil_ph_bounds() {
        assert!(validate_soil_ph(dec("0")).is_ok());
        assert!(validate_soil_ph(dec("7")).is_ok());
        assert!(validate_soil_ph(dec("14")).is_ok());
        assert!(validate_soil_ph(dec("-0.1")).is_err());
        assert!(validate_soil_ph(dec("14.1")).is_err());
    }

    // ========================================================================
    // Measurement Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_severity() {
        assert!(validate_severity(1).is_ok());
        assert!(validate_severity(5).is_ok());
        assert!(validate_severity(0).is_err());
        assert!(validate_severity(6).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(Decimal::ZERO).is_ok());
        assert!(validate_quantity(dec("120.5")).is_ok());
        assert!(validate_quantity(dec("-1")).is_err());
    }

    #[test]
    fn test_validate_area() {
        assert!(validate_area(dec("0.25")).is_ok());
        assert!(validate_area(Decimal::ZERO).is_err());
        assert!(validate_area(dec("-2")).is_err());
    }

    #[test]
    fn test_validate_percent() {
        assert!(validate_percent(Decimal::ZERO).is_ok());
        assert!(validate_percent(dec("100")).is_ok());
        assert!(validate_percent(dec("100.01")).is_err());
        assert!(validate_percent(dec("-0.01")).is_err());
    }

    // ========================================================================
    // General Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_farm_code_valid() {
        assert!(validate_farm_code("NKR").is_ok());
        assert!(validate_farm_code("FARM01").is_ok());
        assert!(validate_farm_code("ABCDEFGHIJ").is_ok());
    }

    #[test]
    fn test_validate_farm_code_invalid() {
        assert!(validate_farm_code("AB").is_err()); // Too short
        assert!(validate_farm_code("ABCDEFGHIJK").is_err()); // Too long
        assert!(validate_farm_code("abc").is_err()); // Lowercase
        assert!(validate_farm_code("AB-C").is_err()); // Special char
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("farmer@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
    }

    proptest! {
        #[test]
        fn severity_accepts_exactly_one_to_five(severity in -100i32..100) {
            let result = validate_severity(severity);
            prop_assert_eq!(result.is_ok(), (1..=5).contains(&severity));
        }

        #[test]
        fn ordered_temperature_bounds_always_validate(lo in -50i64..50, span in 0i64..50) {
            let tolerances = ToleranceProfile {
                temperature_min_celsius: Some(Decimal::from(lo)),
                temperature_max_celsius: Some(Decimal::from(lo + span)),
                ..Default::default()
            };
            prop_assert!(validate_crop_tolerances(&tolerances).is_ok());
        }
    }
}
