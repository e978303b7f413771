//! Greedy weekly allocation of learning goals.
//!
//! Goals are processed highest-priority first. Each goal walks the week
//! Monday to Sunday, taking at most one session per day from the earliest
//! gap that can hold its minimum session length, until its weekly target is
//! spent. Goals that run out of free capacity simply end the week short;
//! callers read the shortfall off [`crate::report::fulfillment`].

use crate::plan::{free_gaps, ActiveWindow, Interval, IntervalKind, WeekPlan, Weekday};
use crate::prefs::{LearningGoal, UserPreferences};

pub(super) fn place(plan: &mut WeekPlan, prefs: &UserPreferences, window: ActiveWindow) {
    // Highest priority first; the sort is stable, so ties keep input order.
    let mut goals: Vec<&LearningGoal> = prefs.goals.iter().collect();
    goals.sort_by(|a, b| b.priority.cmp(&a.priority));

    for goal in goals {
        let min_session = goal.min_session_minutes();
        let max_session = goal.max_session_minutes();
        let mut remaining = goal.weekly_minutes();

        for day in Weekday::ALL {
            if remaining <= 0.0 {
                break;
            }

            let session = free_gaps(plan.day(day), window).find_map(|gap| {
                if gap.duration_minutes() < min_session {
                    return None;
                }
                let len = (gap.duration_minutes() as f64)
                    .min(max_session as f64)
                    .min(remaining) as u32;
                (len >= min_session).then_some((gap.start, len))
            });

            // One session per goal per day, placed or not; leftover gaps
            // stay open for lower-priority goals and leisure.
            if let Some((start, len)) = session {
                plan.day_mut(day).push(Interval::new(
                    start,
                    start + len,
                    goal.name.clone(),
                    IntervalKind::Learning,
                ));
                remaining -= len as f64;
            }
        }
    }
}
