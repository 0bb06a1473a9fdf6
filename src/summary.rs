//! Progress summary assembly
//!
//! Composes the payment, affordability, projection, streak, and budget-flag
//! calculators into the single payload a presentation layer consumes. The
//! assembler holds pre-built terms so one instance can serve many requests.
//!
//! # Example
//! ```ignore
//! let assembler = SummaryAssembler::new();
//! let summary = assembler.assemble(&input);
//! println!("{}", serde_json::to_string(&summary)?);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::finance::{self, EngineTerms, TimeToGoal};
use crate::progress;
use crate::records::{Budget, Goal, Profile, Transaction};

/// Requested payment simulation for the affordability section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSimulation {
    /// Vehicle price
    pub price: f64,

    /// Up-front payment
    #[serde(default)]
    pub down_payment: f64,

    /// Finance or lease structure
    #[serde(default)]
    pub plan: PaymentPlan,
}

/// Structure of a simulated payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPlan {
    /// Amortized loan over the given term
    Finance { term_years: u32 },
    /// Lease using the engine's lease terms
    Lease,
}

impl Default for PaymentPlan {
    fn default() -> Self {
        // The simulator's default: a 60-month loan
        PaymentPlan::Finance { term_years: 5 }
    }
}

/// Everything the assembler needs for one summary
///
/// Absent records yield zero/empty output fields rather than errors.
/// `period_start` is supplied by the caller (first day of the current month
/// by convention) so the engine itself never reads a clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryInput {
    #[serde(default)]
    pub profile: Option<Profile>,

    #[serde(default)]
    pub goal: Option<Goal>,

    #[serde(default)]
    pub budgets: Vec<Budget>,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    /// Planned monthly contribution toward the goal
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Optional payment simulation; absent means no payment section
    #[serde(default)]
    pub simulation: Option<PaymentSimulation>,

    /// Start of the spend-aggregation period
    pub period_start: NaiveDate,
}

/// The aggregate payload returned to the presentation layer,
/// recomputed per request
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    /// Safe monthly car budget in whole currency units
    pub safe_budget: i64,

    /// Simulated monthly payment; absent when no simulation ran (or the
    /// simulation inputs were unusable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_payment: Option<f64>,

    /// True when the estimated payment fits the safe budget
    pub within_budget: bool,

    /// safe_budget minus the estimated payment (payment treated as 0 when
    /// absent)
    pub affordability_gap: f64,

    /// Months to goal, or the "∞" sentinel
    pub projection_months: TimeToGoal,

    /// Years label for display ("5.6" or "∞")
    pub projection_years: String,

    /// Longest consecutive-activity-day streak
    pub streak: u32,

    /// Earned badge ids in evaluation order
    pub milestones: Vec<String>,

    /// Near/over-budget categories in budget list order
    pub budget_flags: Vec<progress::BudgetFlag>,

    /// Goal completion percent, clamped to [0, 100]
    pub goal_percent: u32,
}

/// Assembles progress summaries from pre-built engine terms
///
/// Stateless between calls; `assemble` is a pure function of its input and
/// the held terms, and it never fails - missing sub-inputs produce empty or
/// zero defaults.
#[derive(Debug, Clone, Default)]
pub struct SummaryAssembler {
    terms: EngineTerms,
}

impl SummaryAssembler {
    /// Assembler with the default guideline terms
    pub fn new() -> Self {
        Self {
            terms: EngineTerms::default_guidelines(),
        }
    }

    /// Assembler with custom terms
    pub fn with_terms(terms: EngineTerms) -> Self {
        Self { terms }
    }

    /// Terms in use, for inspection
    pub fn terms(&self) -> &EngineTerms {
        &self.terms
    }

    /// Build the full summary for one user's records
    pub fn assemble(&self, input: &SummaryInput) -> ProgressSummary {
        let safe_budget = match &input.profile {
            Some(profile) => self
                .terms
                .affordability
                .safe_monthly_budget(profile.annual_income),
            None => 0.0,
        };

        let estimated_payment = input
            .simulation
            .as_ref()
            .and_then(|sim| self.simulated_payment(sim, input.profile.as_ref()));

        let affordability = finance::evaluate(safe_budget, estimated_payment.unwrap_or(0.0));

        let projection = match &input.goal {
            Some(goal) => finance::months_to_goal(
                goal.target_amount,
                goal.total_saved,
                input.monthly_contribution,
            ),
            None => TimeToGoal::Months(0),
        };

        let streak = progress::compute_streak(&input.transactions);
        let milestones =
            progress::compute_milestones(&input.transactions, streak, &self.terms.milestones);

        let spend = progress::aggregate_spend(&input.transactions, input.period_start);
        let budget_flags = progress::flag_budgets(
            &spend,
            &input.budgets,
            self.terms.budget_warning.warn_percent,
        );

        let goal_percent = input
            .goal
            .as_ref()
            .map(|g| g.percent_complete())
            .unwrap_or(0);

        log::debug!(
            "assembled summary: streak={} flags={} projection={}",
            streak,
            budget_flags.len(),
            projection
        );

        ProgressSummary {
            safe_budget: safe_budget as i64,
            estimated_payment,
            within_budget: affordability.within_budget,
            affordability_gap: affordability.gap,
            projection_months: projection,
            projection_years: projection.years_label(),
            streak,
            milestones,
            budget_flags,
            goal_percent,
        }
    }

    /// Run the requested payment simulation, clamping lease results to 0 for
    /// display. Unusable inputs (e.g. a zero term) yield None rather than an
    /// error so the summary stays total.
    fn simulated_payment(&self, sim: &PaymentSimulation, profile: Option<&Profile>) -> Option<f64> {
        let result = match &sim.plan {
            PaymentPlan::Finance { term_years } => {
                // Missing profile falls back to the lowest tier's rate
                let apr = match profile {
                    Some(p) => self.terms.apr_tiers.apr_for_score(p.clamped_credit_score()),
                    None => self.terms.apr_tiers.apr_for_score(0),
                };
                finance::finance_payment(sim.price, sim.down_payment, apr, *term_years)
            }
            PaymentPlan::Lease => {
                finance::lease_payment(sim.price, sim.down_payment, &self.terms.lease)
                    .map(|pmt| pmt.max(0.0))
            }
        };

        match result {
            Ok(payment) => Some(payment),
            Err(err) => {
                log::warn!("payment simulation skipped: {err}");
                None
            }
        }
    }
}
