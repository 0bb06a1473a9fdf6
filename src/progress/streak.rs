//! Consecutive-activity-day streaks and milestone badges

use std::collections::BTreeSet;

use crate::finance::MilestoneThresholds;
use crate::records::Transaction;

/// Length of the longest run of consecutive calendar days with at least one
/// transaction, anywhere in the history (not necessarily ending today)
///
/// Dates are deduplicated first so multiple same-day transactions count once.
pub fn compute_streak(transactions: &[Transaction]) -> u32 {
    let dates: BTreeSet<_> = transactions.iter().map(|tx| tx.date).collect();
    if dates.is_empty() {
        return 0;
    }

    let mut max_streak = 1u32;
    let mut current = 1u32;
    let mut prev: Option<chrono::NaiveDate> = None;

    for date in dates {
        if let Some(prev_date) = prev {
            if (date - prev_date).num_days() == 1 {
                current += 1;
                max_streak = max_streak.max(current);
            } else {
                current = 1;
            }
        }
        prev = Some(date);
    }

    max_streak
}

/// Sum of all positive (saving) amounts; expenses are excluded
pub fn total_saved(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|tx| tx.is_saving())
        .map(|tx| tx.amount)
        .sum()
}

/// Badge identifiers earned by the saved total and current streak
///
/// Additive: every qualifying badge is returned, saved tiers first in their
/// configured order, then the streak badge.
pub fn compute_milestones(
    transactions: &[Transaction],
    streak: u32,
    thresholds: &MilestoneThresholds,
) -> Vec<String> {
    let saved = total_saved(transactions);

    let mut badges = Vec::new();
    for (min_saved, badge) in &thresholds.saved_tiers {
        if saved >= *min_saved {
            badges.push(badge.clone());
        }
    }
    if streak >= thresholds.streak_days {
        badges.push(thresholds.streak_badge.clone());
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(amount: f64, day: u32) -> Transaction {
        Transaction::new(
            amount,
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            "Savings",
        )
    }

    #[test]
    fn test_empty_history_has_no_streak() {
        assert_eq!(compute_streak(&[]), 0);
    }

    #[test]
    fn test_single_day_streak() {
        assert_eq!(compute_streak(&[tx(10.0, 5)]), 1);
    }

    #[test]
    fn test_consecutive_then_gap() {
        // Days 1, 2, then 4: longest run is 2
        let txs = vec![tx(10.0, 1), tx(10.0, 2), tx(10.0, 4)];
        assert_eq!(compute_streak(&txs), 2);
    }

    #[test]
    fn test_longest_run_found_anywhere() {
        // 1-2, gap, 10-11-12: longest is the later 3-day run
        let txs = vec![tx(5.0, 1), tx(5.0, 2), tx(5.0, 10), tx(5.0, 11), tx(5.0, 12)];
        assert_eq!(compute_streak(&txs), 3);
    }

    #[test]
    fn test_same_day_duplicates_not_double_counted() {
        // Three transactions on day 7, one on day 8: streak is 2, not 4
        let txs = vec![tx(5.0, 7), tx(-3.0, 7), tx(8.0, 7), tx(1.0, 8)];
        assert_eq!(compute_streak(&txs), 2);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let txs = vec![
            Transaction::new(5.0, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), "Savings"),
            Transaction::new(5.0, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(), "Savings"),
        ];
        assert_eq!(compute_streak(&txs), 2);
    }

    #[test]
    fn test_total_saved_excludes_expenses() {
        let txs = vec![tx(100.0, 1), tx(-40.0, 2), tx(50.0, 3)];
        assert_eq!(total_saved(&txs), 150.0);
    }

    #[test]
    fn test_milestones_fixed_order() {
        // 150 saved, streak 6: first saved tier plus streak badge, no $500
        let txs = vec![tx(100.0, 1), tx(50.0, 2)];
        let badges = compute_milestones(&txs, 6, &MilestoneThresholds::default());
        assert_eq!(badges, vec!["Saved $100!", "5-day streak!"]);
    }

    #[test]
    fn test_milestones_additive() {
        let txs = vec![tx(600.0, 1)];
        let badges = compute_milestones(&txs, 5, &MilestoneThresholds::default());
        assert_eq!(badges, vec!["Saved $100!", "Saved $500!", "5-day streak!"]);
    }

    #[test]
    fn test_no_milestones_below_thresholds() {
        let txs = vec![tx(99.0, 1)];
        assert!(compute_milestones(&txs, 4, &MilestoneThresholds::default()).is_empty());
    }
}
