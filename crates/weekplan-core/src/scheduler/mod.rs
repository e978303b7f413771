//! The schedule assembly pipeline.
//!
//! Placement runs in a fixed order -- fixed commitments, then learning
//! goals, then breaks and free time -- because each phase's view of free
//! time depends on everything placed before it. [`WeekScheduler::generate`]
//! is the single entry point.

mod commitments;
mod goals;
mod leisure;

use crate::error::CoreError;
use crate::plan::{ActiveWindow, WeekPlan};
use crate::prefs::UserPreferences;
use crate::time::parse_time;

/// Builds a week timetable from one preferences snapshot.
pub struct WeekScheduler;

impl WeekScheduler {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline.
    ///
    /// Borrows the preferences read-only; the same snapshot always produces
    /// the same plan. Goals and leisure that find no room are silently
    /// short -- compare against [`crate::report::fulfillment`] to detect it.
    pub fn generate(&self, prefs: &UserPreferences) -> Result<WeekPlan, CoreError> {
        let wake = parse_time(&prefs.wake_time)?;
        let window = ActiveWindow::new(wake, prefs.sleep_hours);

        let mut plan = WeekPlan::new();
        commitments::place(&mut plan, prefs)?;
        goals::place(&mut plan, prefs, window);
        leisure::place(&mut plan, prefs, window);

        plan.sort_days();
        Ok(plan)
    }
}

impl Default for WeekScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around [`WeekScheduler::generate`].
pub fn generate_week(prefs: &UserPreferences) -> Result<WeekPlan, CoreError> {
    WeekScheduler::new().generate(prefs)
}
