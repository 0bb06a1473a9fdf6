//! Configurable terms and guideline thresholds
//!
//! The source application hard-codes these as "simulated" constants (the
//! money factor, the residual percent, the APR tier table, the 10% income
//! rule, the 75% budget warning). They are modeled as data here so callers
//! can override them; the defaults reproduce the application's values.

use serde::{Deserialize, Serialize};

use crate::records::{MAX_CREDIT_SCORE, MIN_CREDIT_SCORE};

/// Tiered credit-score-to-APR lookup
///
/// Simplified, publicly documented tiers, not an underwriting model. The
/// output is a quote for simulation, never a financial guarantee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AprTiers {
    /// (minimum score, annual rate percent), walked in descending score order
    tiers: Vec<(u16, f64)>,

    /// Rate applied below the lowest tier
    fallback: f64,
}

impl AprTiers {
    pub fn new(mut tiers: Vec<(u16, f64)>, fallback: f64) -> Self {
        tiers.sort_by(|a, b| b.0.cmp(&a.0));
        Self { tiers, fallback }
    }

    /// Annual rate percent for a credit score (clamped to [300, 850])
    ///
    /// The highest qualifying tier wins regardless of list order, so tables
    /// arriving through deserialization need no particular ordering.
    pub fn apr_for_score(&self, score: u16) -> f64 {
        let score = score.clamp(MIN_CREDIT_SCORE, MAX_CREDIT_SCORE);
        self.tiers
            .iter()
            .filter(|&&(min_score, _)| score >= min_score)
            .max_by_key(|&&(min_score, _)| min_score)
            .map(|&(_, rate)| rate)
            .unwrap_or(self.fallback)
    }
}

impl Default for AprTiers {
    fn default() -> Self {
        Self::new(
            vec![
                (750, 2.9), // excellent
                (700, 3.9), // good
            ],
            5.9, // everyone else
        )
    }
}

/// Lease structure parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseTerms {
    /// Lease length in months
    pub term_months: u32,

    /// Residual value as a fraction of price at lease end
    pub residual_percent: f64,

    /// Per-period rent charge (stand-in money factor)
    pub rent_charge: f64,
}

impl Default for LeaseTerms {
    fn default() -> Self {
        Self {
            term_months: 36,
            residual_percent: 0.55,
            rent_charge: 0.0025,
        }
    }
}

/// "Total car costs at most this fraction of gross monthly income"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityGuideline {
    pub income_ratio: f64,
}

impl Default for AffordabilityGuideline {
    fn default() -> Self {
        Self { income_ratio: 0.10 }
    }
}

/// Badge thresholds for saved-amount and streak milestones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneThresholds {
    /// (minimum saved total, badge id), evaluated in listed order
    pub saved_tiers: Vec<(f64, String)>,

    /// Streak length that earns the streak badge
    pub streak_days: u32,

    /// Badge id for the streak milestone
    pub streak_badge: String,
}

impl Default for MilestoneThresholds {
    fn default() -> Self {
        Self {
            saved_tiers: vec![
                (100.0, "Saved $100!".to_string()),
                (500.0, "Saved $500!".to_string()),
            ],
            streak_days: 5,
            streak_badge: "5-day streak!".to_string(),
        }
    }
}

/// Budget warning threshold: flag categories at or above this percent of limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetWarning {
    pub warn_percent: u32,
}

impl Default for BudgetWarning {
    fn default() -> Self {
        Self { warn_percent: 75 }
    }
}

/// Container for all engine terms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineTerms {
    pub apr_tiers: AprTiers,
    pub lease: LeaseTerms,
    pub affordability: AffordabilityGuideline,
    pub milestones: MilestoneThresholds,
    pub budget_warning: BudgetWarning,
}

impl EngineTerms {
    /// Terms matching the application's documented guideline values
    pub fn default_guidelines() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apr_tier_boundaries() {
        let tiers = AprTiers::default();

        assert_eq!(tiers.apr_for_score(800), 2.9);
        assert_eq!(tiers.apr_for_score(750), 2.9);
        assert_eq!(tiers.apr_for_score(749), 3.9);
        assert_eq!(tiers.apr_for_score(700), 3.9);
        assert_eq!(tiers.apr_for_score(699), 5.9);
        assert_eq!(tiers.apr_for_score(300), 5.9);
    }

    #[test]
    fn test_apr_out_of_range_scores_clamp() {
        let tiers = AprTiers::default();

        // Below 300 clamps up, above 850 clamps down
        assert_eq!(tiers.apr_for_score(0), 5.9);
        assert_eq!(tiers.apr_for_score(u16::MAX), 2.9);
    }

    #[test]
    fn test_unsorted_tiers_are_ordered() {
        let tiers = AprTiers::new(vec![(700, 3.9), (750, 2.9)], 5.9);
        assert_eq!(tiers.apr_for_score(760), 2.9);
    }

    #[test]
    fn test_deserialized_unsorted_table_picks_highest_tier() {
        // Deserialization bypasses new(); the lookup must not depend on order
        let tiers: AprTiers =
            serde_json::from_str(r#"{"tiers":[[700,3.9],[750,2.9]],"fallback":5.9}"#).unwrap();

        assert_eq!(tiers.apr_for_score(760), 2.9);
        assert_eq!(tiers.apr_for_score(710), 3.9);
        assert_eq!(tiers.apr_for_score(650), 5.9);
    }

    #[test]
    fn test_default_lease_terms() {
        let lease = LeaseTerms::default();
        assert_eq!(lease.term_months, 36);
        assert_eq!(lease.residual_percent, 0.55);
        assert_eq!(lease.rent_charge, 0.0025);
    }
}
