//! Activity streaks, milestone badges, and budget warning flags

mod budget_flags;
mod streak;

pub use budget_flags::{aggregate_spend, flag_budgets, BudgetFlag};
pub use streak::{compute_milestones, compute_streak, total_saved};
