//! Tests for operational and food-security risk assessment

use analytics::{
    assess_food_security_risk, assess_risk, food_security_level_for, food_security_points,
    operational_risk_points, risk_level_for, FoodSecurityRisk, RiskLevel,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{CropProduction, ProductionMethod, ProductionStatus};
use uuid::Uuid;

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn as_of() -> NaiveDate {
    date(2025, 6, 1)
}

fn production() -> CropProduction {
    CropProduction::new(Uuid::new_v4(), Uuid::new_v4(), ProductionMethod::Conventional)
}

// =============================================================================
// Bucket Boundary Tests
// =============================================================================

mod operational_buckets {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(risk_level_for(50), RiskLevel::High);
        assert_eq!(risk_level_for(49), RiskLevel::Medium);
        assert_eq!(risk_level_for(25), RiskLevel::Medium);
        assert_eq!(risk_level_for(24), RiskLevel::Low);
        assert_eq!(risk_level_for(0), RiskLevel::Low);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }
}

mod food_security_buckets {
    use super::*;

    #[test]
    fn boundaries_are_exact() {
        assert_eq!(food_security_level_for(50), FoodSecurityRisk::Critical);
        assert_eq!(food_security_level_for(49), FoodSecurityRisk::High);
        assert_eq!(food_security_level_for(30), FoodSecurityRisk::High);
        assert_eq!(food_security_level_for(29), FoodSecurityRisk::Medium);
        assert_eq!(food_security_level_for(15), FoodSecurityRisk::Medium);
        assert_eq!(food_security_level_for(14), FoodSecurityRisk::Low);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(FoodSecurityRisk::Low < FoodSecurityRisk::Medium);
        assert!(FoodSecurityRisk::Medium < FoodSecurityRisk::High);
        assert!(FoodSecurityRisk::High < FoodSecurityRisk::Critical);
    }
}

// =============================================================================
// Operational Risk Scenarios
// =============================================================================

mod operational_risk {
    use super::*;

    #[test]
    fn all_null_production_is_low() {
        // Fresh Planned production with no dates or quantities
        let p = production();
        assert_eq!(assess_risk(&p, as_of()), RiskLevel::Low);
    }

    #[test]
    fn overdue_growing_production_scores_overdue_points() {
        let mut p = production();
        p.status = ProductionStatus::Growing;
        p.expected_harvest_date = Some(date(2025, 5, 20));
        assert_eq!(operational_risk_points(&p, as_of()), 30);
        assert_eq!(assess_risk(&p, as_of()), RiskLevel::Medium);
    }

    #[test]
    fn harvested_production_cannot_be_overdue() {
        let mut p = production();
        p.status = ProductionStatus::Harvested;
        p.expected_harvest_date = Some(date(2025, 5, 20));
        assert_eq!(operational_risk_points(&p, as_of()), 0);
    }

    #[test]
    fn days_to_harvest_brackets() {
        let mut p = production();
        p.status = ProductionStatus::Growing;

        p.expected_harvest_date = Some(date(2025, 6, 8)); // 7 days out
        assert_eq!(operational_risk_points(&p, as_of()), 20);

        p.expected_harvest_date = Some(date(2025, 6, 9)); // 8 days out
        assert_eq!(operational_risk_points(&p, as_of()), 10);

        p.expected_harvest_date = Some(date(2025, 6, 15)); // 14 days out
        assert_eq!(operational_risk_points(&p, as_of()), 10);

        p.expected_harvest_date = Some(date(2025, 6, 16)); // 15 days out
        assert_eq!(operational_risk_points(&p, as_of()), 0);
    }

    #[test]
    fn area_brackets() {
        let mut p = production();
        p.status = ProductionStatus::Growing;

        p.area_planted_hectares = Some(dec("50"));
        assert_eq!(operational_risk_points(&p, as_of()), 0);

        p.area_planted_hectares = Some(dec("50.5"));
        assert_eq!(operational_risk_points(&p, as_of()), 10);

        p.area_planted_hectares = Some(dec("100"));
        assert_eq!(operational_risk_points(&p, as_of()), 10);

        p.area_planted_hectares = Some(dec("100.5"));
        assert_eq!(operational_risk_points(&p, as_of()), 15);
    }

    #[test]
    fn efficiency_shortfall_is_strict() {
        let mut p = production();
        p.status = ProductionStatus::Harvested;
        p.expected_yield_kg = Some(dec("100"));

        p.actual_yield_kg = Some(dec("70")); // exactly 0.7
        assert_eq!(operational_risk_points(&p, as_of()), 0);

        p.actual_yield_kg = Some(dec("69.9"));
        assert_eq!(operational_risk_points(&p, as_of()), 25);
    }

    #[test]
    fn compounding_conditions_reach_high() {
        // Overdue (+30) with a large shortfall (+25) = 55
        let mut p = production();
        p.status = ProductionStatus::Growing;
        p.expected_harvest_date = Some(date(2025, 5, 1));
        p.expected_yield_kg = Some(dec("100"));
        p.actual_yield_kg = Some(dec("40"));
        assert_eq!(operational_risk_points(&p, as_of()), 55);
        assert_eq!(assess_risk(&p, as_of()), RiskLevel::High);
    }
}

// =============================================================================
// Food-Security Risk Scenarios
// =============================================================================

mod food_security {
    use super::*;

    #[test]
    fn all_null_production_is_low() {
        let p = production();
        assert_eq!(assess_food_security_risk(&p, as_of()), FoodSecurityRisk::Low);
    }

    #[test]
    fn shortfall_brackets() {
        let mut p = production();
        p.status = ProductionStatus::Harvested;
        p.expected_yield_kg = Some(dec("100"));

        p.actual_yield_kg = Some(dec("80")); // exactly 0.8, no shortfall
        assert_eq!(food_security_points(&p, as_of()), 0);

        p.actual_yield_kg = Some(dec("79")); // mild shortfall
        assert_eq!(food_security_points(&p, as_of()), 15);

        p.actual_yield_kg = Some(dec("49")); // severe shortfall
        assert_eq!(food_security_points(&p, as_of()), 30);
    }

    #[test]
    fn large_area_with_severe_shortfall_is_critical() {
        let mut p = production();
        p.status = ProductionStatus::Harvested;
        p.area_planted_hectares = Some(dec("150"));
        p.expected_yield_kg = Some(dec("1000"));
        p.actual_yield_kg = Some(dec("400"));

        // area > 100 (+20) + severe shortfall (+30) = 50
        assert_eq!(food_security_points(&p, as_of()), 50);
        assert_eq!(
            assess_food_security_risk(&p, as_of()),
            FoodSecurityRisk::Critical
        );
    }

    #[test]
    fn overdue_planned_production_is_high() {
        // Overdue (+20) + still planned (+5) + mid-size area (+10) = 35
        let mut p = production();
        p.expected_harvest_date = Some(date(2025, 5, 1));
        p.area_planted_hectares = Some(dec("60"));
        assert_eq!(food_security_points(&p, as_of()), 35);
        assert_eq!(
            assess_food_security_risk(&p, as_of()),
            FoodSecurityRisk::High
        );
    }

    #[test]
    fn imminent_harvest_is_medium() {
        // Within a week (+15), nothing else
        let mut p = production();
        p.status = ProductionStatus::Growing;
        p.expected_harvest_date = Some(date(2025, 6, 5));
        assert_eq!(
            assess_food_security_risk(&p, as_of()),
            FoodSecurityRisk::Medium
        );
    }
}
