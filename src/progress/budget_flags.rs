//! Category spend aggregation and near/over-budget warning flags

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::records::{Budget, Transaction};

/// Warning emitted when a category's spend approaches or exceeds its limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetFlag {
    pub category: String,

    /// Spend in the period (absolute value of expenses)
    pub used: f64,

    /// Configured monthly limit
    pub limit: f64,

    /// round(used / limit * 100); deliberately not capped at 100 so
    /// over-budget categories remain distinguishable
    pub percent: u32,
}

/// Sum expense amounts (absolute values) per category for dates on or after
/// `period_start` (first day of the current month, by caller convention)
///
/// Categories with no expenses in the period are absent from the map.
pub fn aggregate_spend(
    transactions: &[Transaction],
    period_start: NaiveDate,
) -> HashMap<String, f64> {
    let mut spend = HashMap::new();
    for tx in transactions {
        if tx.is_expense() && tx.date >= period_start {
            *spend.entry(tx.category.clone()).or_insert(0.0) += tx.amount.abs();
        }
    }
    spend
}

/// Flag every configured budget whose spend is at or above `warn_percent` of
/// its limit. Output follows the budget list order, not severity. A zero
/// limit reports 0% and never flags.
pub fn flag_budgets(
    spend_by_category: &HashMap<String, f64>,
    budgets: &[Budget],
    warn_percent: u32,
) -> Vec<BudgetFlag> {
    budgets
        .iter()
        .map(|budget| {
            let used = spend_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or(0.0);
            let percent = if budget.monthly_limit > 0.0 {
                (used / budget.monthly_limit * 100.0).round() as u32
            } else {
                0
            };
            BudgetFlag {
                category: budget.category.clone(),
                used,
                limit: budget.monthly_limit,
                percent,
            }
        })
        .filter(|flag| flag.percent >= warn_percent)
        .collect()
}
