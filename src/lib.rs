//! DriveGoal Engine - Financial projection and progress engine for car-savings goals
//!
//! This library provides:
//! - Loan and lease payment calculations with credit-tier APR lookup
//! - Income-derived affordability evaluation (10%-of-gross guideline)
//! - Time-to-goal projection for a steady monthly contribution
//! - Streak and milestone tracking from transaction history
//! - Near/over-budget category flagging
//! - A summary assembler composing everything into one response payload

pub mod error;
pub mod finance;
pub mod progress;
pub mod records;
pub mod summary;

// Re-export commonly used types
pub use error::EngineError;
pub use finance::{EngineTerms, TimeToGoal};
pub use records::{Budget, Goal, Profile, Transaction};
pub use summary::{PaymentPlan, PaymentSimulation, ProgressSummary, SummaryAssembler, SummaryInput};
