//! Time-to-goal estimation for a steady monthly contribution

use serde::{Serialize, Serializer};
use std::fmt;

/// Months needed to reach a savings goal
///
/// `Unbounded` is the no-progress sentinel (zero or negative contribution
/// with a remaining balance); it serializes and renders as "∞" rather than a
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeToGoal {
    Months(u32),
    Unbounded,
}

impl TimeToGoal {
    pub fn is_unbounded(&self) -> bool {
        matches!(self, TimeToGoal::Unbounded)
    }

    /// Month count, None when unbounded
    pub fn months(&self) -> Option<u32> {
        match self {
            TimeToGoal::Months(m) => Some(*m),
            TimeToGoal::Unbounded => None,
        }
    }

    /// Years rounded to one decimal for display, "∞" when unbounded
    pub fn years_label(&self) -> String {
        match self {
            TimeToGoal::Months(m) => format!("{:.1}", *m as f64 / 12.0),
            TimeToGoal::Unbounded => "∞".to_string(),
        }
    }
}

impl fmt::Display for TimeToGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeToGoal::Months(m) => write!(f, "{} mo ({} yr)", m, self.years_label()),
            TimeToGoal::Unbounded => write!(f, "∞"),
        }
    }
}

impl Serialize for TimeToGoal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TimeToGoal::Months(m) => serializer.serialize_u32(*m),
            TimeToGoal::Unbounded => serializer.serialize_str("∞"),
        }
    }
}

/// Months to reach `target_amount` from `current_saved` at a steady monthly
/// contribution. A met goal is 0 months; a non-positive contribution against
/// a remaining balance is `Unbounded` rather than a division by zero.
pub fn months_to_goal(target_amount: f64, current_saved: f64, monthly_contribution: f64) -> TimeToGoal {
    let remaining = (target_amount - current_saved).max(0.0);
    if remaining == 0.0 {
        return TimeToGoal::Months(0);
    }
    if monthly_contribution <= 0.0 {
        return TimeToGoal::Unbounded;
    }
    TimeToGoal::Months((remaining / monthly_contribution).ceil() as u32)
}
