//! Record structures matching the application's data store shapes
//!
//! These arrive already authenticated and scoped to one user; the engine
//! consumes them read-only. Sign convention: positive transaction amounts are
//! savings/credits, negative amounts are expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Credit score floor and ceiling used when clamping profile scores
pub const MIN_CREDIT_SCORE: u16 = 300;
pub const MAX_CREDIT_SCORE: u16 = 850;

/// A single recorded transaction, immutable once written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Signed amount: positive = saving/credit, negative = expense
    pub amount: f64,

    /// Calendar date the transaction posted
    #[serde(rename = "posted_date")]
    pub date: NaiveDate,

    /// Spend/saving category (e.g. "Food", "Savings")
    #[serde(default)]
    pub category: String,

    /// Free-form note
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a transaction with just the fields the calculators need
    pub fn new(amount: f64, date: NaiveDate, category: impl Into<String>) -> Self {
        Self {
            amount,
            date,
            category: category.into(),
            description: String::new(),
        }
    }

    /// Positive amounts count toward savings totals
    pub fn is_saving(&self) -> bool {
        self.amount > 0.0
    }

    /// Negative amounts count toward category spend
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// Lifestyle tag chosen during onboarding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    Budget,
    #[default]
    Balanced,
    Premium,
    Eco,
    Family,
    Performance,
}

/// User financial profile from onboarding/settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Gross annual income
    pub annual_income: f64,

    /// Self-reported credit score, nominally 300-850
    pub credit_score: u16,

    /// Lifestyle tag (display/segmentation only)
    #[serde(default)]
    pub lifestyle: Lifestyle,
}

impl Profile {
    pub fn new(annual_income: f64, credit_score: u16, lifestyle: Lifestyle) -> Self {
        Self {
            annual_income,
            credit_score,
            lifestyle,
        }
    }

    /// Credit score clamped to the [300, 850] range the APR tiers expect
    pub fn clamped_credit_score(&self) -> u16 {
        self.credit_score.clamp(MIN_CREDIT_SCORE, MAX_CREDIT_SCORE)
    }
}

/// Monthly spending limit for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,

    /// Non-negative monthly limit; a zero limit never flags
    pub monthly_limit: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, monthly_limit: f64) -> Self {
        Self {
            category: category.into(),
            monthly_limit,
        }
    }
}

/// Savings goal toward a vehicle purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Display name, e.g. "RAV4"
    pub name: String,

    /// Amount needed to hit the goal
    pub target_amount: f64,

    /// Amount saved so far (computed and stored externally)
    pub total_saved: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64, total_saved: f64) -> Self {
        Self {
            name: name.into(),
            target_amount,
            total_saved,
        }
    }

    /// Completion percent, clamped to [0, 100]
    pub fn percent_complete(&self) -> u32 {
        if self.target_amount <= 0.0 {
            return 0;
        }
        let pct = (self.total_saved / self.target_amount * 100.0).round();
        pct.clamp(0.0, 100.0) as u32
    }
}

/// Vehicle models offered by the selector, with catalog prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleModel {
    Camry,
    Corolla,
    Prius,
    Highlander,
    Rav4,
}

impl VehicleModel {
    /// All models in selector display order
    pub fn all() -> [VehicleModel; 5] {
        [
            VehicleModel::Camry,
            VehicleModel::Corolla,
            VehicleModel::Prius,
            VehicleModel::Highlander,
            VehicleModel::Rav4,
        ]
    }

    /// Estimated purchase price
    pub fn est_price(&self) -> f64 {
        match self {
            VehicleModel::Camry => 30_000.0,
            VehicleModel::Corolla => 23_000.0,
            VehicleModel::Prius => 28_000.0,
            VehicleModel::Highlander => 38_000.0,
            VehicleModel::Rav4 => 32_000.0,
        }
    }

    /// One-line description shown next to the model
    pub fn blurb(&self) -> &'static str {
        match self {
            VehicleModel::Camry => "Comfort + efficiency",
            VehicleModel::Corolla => "Reliable + budget-friendly",
            VehicleModel::Prius => "Hybrid fuel saver",
            VehicleModel::Highlander => "Family SUV space",
            VehicleModel::Rav4 => "Popular compact SUV",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleModel::Camry => "Camry",
            VehicleModel::Corolla => "Corolla",
            VehicleModel::Prius => "Prius",
            VehicleModel::Highlander => "Highlander",
            VehicleModel::Rav4 => "RAV4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_transaction_sign_convention() {
        let saving = Transaction::new(50.0, d("2024-03-01"), "Savings");
        let expense = Transaction::new(-12.5, d("2024-03-01"), "Food");

        assert!(saving.is_saving());
        assert!(!saving.is_expense());
        assert!(expense.is_expense());
        assert!(!expense.is_saving());
    }

    #[test]
    fn test_credit_score_clamp() {
        let low = Profile::new(40_000.0, 150, Lifestyle::Budget);
        let high = Profile::new(40_000.0, 900, Lifestyle::Budget);
        let mid = Profile::new(40_000.0, 720, Lifestyle::Budget);

        assert_eq!(low.clamped_credit_score(), 300);
        assert_eq!(high.clamped_credit_score(), 850);
        assert_eq!(mid.clamped_credit_score(), 720);
    }

    #[test]
    fn test_goal_percent_clamped() {
        assert_eq!(Goal::new("RAV4", 25_000.0, 5_000.0).percent_complete(), 20);
        assert_eq!(Goal::new("RAV4", 25_000.0, 30_000.0).percent_complete(), 100);
        assert_eq!(Goal::new("RAV4", 0.0, 5_000.0).percent_complete(), 0);
    }

    #[test]
    fn test_vehicle_catalog() {
        assert_eq!(VehicleModel::Rav4.est_price(), 32_000.0);
        assert_eq!(VehicleModel::Corolla.est_price(), 23_000.0);
        assert_eq!(VehicleModel::all().len(), 5);
    }

    #[test]
    fn test_transaction_deserializes_store_shape() {
        let json = r#"{"amount":-42.0,"posted_date":"2024-03-02","category":"Food","description":"lunch"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.date, d("2024-03-02"));
        assert!(tx.is_expense());
    }
}
