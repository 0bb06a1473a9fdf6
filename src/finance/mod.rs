//! Payment, affordability, and time-to-goal calculations

mod affordability;
mod amortization;
mod projection;
mod terms;

pub use affordability::{evaluate, Affordability};
pub use amortization::{finance_payment, lease_payment};
pub use projection::{months_to_goal, TimeToGoal};
pub use terms::{
    AffordabilityGuideline, AprTiers, BudgetWarning, EngineTerms, LeaseTerms, MilestoneThresholds,
};
