//! Income-derived safe budget and payment comparison

use serde::{Deserialize, Serialize};

use crate::finance::terms::AffordabilityGuideline;

/// Result of comparing a payment against the safe budget
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Affordability {
    /// True when the payment fits inside the safe budget
    pub within_budget: bool,

    /// safe budget minus payment; negative when over
    pub gap: f64,
}

impl AffordabilityGuideline {
    /// Safe monthly car budget for a gross annual income, rounded to whole
    /// currency units (60_000 -> 500 at the default 10% ratio)
    pub fn safe_monthly_budget(&self, annual_income: f64) -> f64 {
        let monthly_income = annual_income.max(0.0) / 12.0;
        (monthly_income * self.income_ratio).round()
    }
}

/// Compare an estimated payment to the safe budget. Pure comparison, no
/// rounding or side effects.
pub fn evaluate(safe_budget: f64, estimated_payment: f64) -> Affordability {
    Affordability {
        within_budget: estimated_payment <= safe_budget,
        gap: safe_budget - estimated_payment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_budget_ten_percent_rule() {
        let guideline = AffordabilityGuideline::default();
        assert_eq!(guideline.safe_monthly_budget(60_000.0), 500.0);
        assert_eq!(guideline.safe_monthly_budget(0.0), 0.0);
        // Rounds to whole units: 47_500 / 12 * 0.10 = 395.83...
        assert_eq!(guideline.safe_monthly_budget(47_500.0), 396.0);
    }

    #[test]
    fn test_negative_income_treated_as_zero() {
        let guideline = AffordabilityGuideline::default();
        assert_eq!(guideline.safe_monthly_budget(-10_000.0), 0.0);
    }

    #[test]
    fn test_evaluate_within_and_over() {
        let ok = evaluate(500.0, 420.0);
        assert!(ok.within_budget);
        assert_eq!(ok.gap, 80.0);

        let over = evaluate(500.0, 610.0);
        assert!(!over.within_budget);
        assert_eq!(over.gap, -110.0);

        // Exactly at budget counts as within
        assert!(evaluate(500.0, 500.0).within_budget);
    }
}
