//! Fixed-commitment placement: sleep, cooking and dinner, appointments.
//!
//! Runs first in the pipeline; everything placed here is an obstacle for
//! the flexible phases. No collision detection happens between fixed
//! commitments themselves -- non-conflicting input is the caller's
//! responsibility, checked (to the extent possible) during validation.

use crate::error::CoreError;
use crate::plan::{Interval, IntervalKind, WeekPlan, Weekday};
use crate::prefs::UserPreferences;
use crate::time::{parse_time, MINUTES_PER_DAY};

/// Cooking is anchored at 18:00 on every cooking day, regardless of other
/// commitments. Not configurable.
const DINNER_ANCHOR: u32 = 18 * 60;
/// Dinner itself always takes one hour, straight after cooking.
const DINNER_MINUTES: u32 = 60;
/// The pre-midnight half of a split sleep block stops at 23:59.
const LAST_MINUTE: u32 = MINUTES_PER_DAY - 1;

pub(super) fn place(plan: &mut WeekPlan, prefs: &UserPreferences) -> Result<(), CoreError> {
    let wake = parse_time(&prefs.wake_time)?;
    let sleep_minutes = (prefs.sleep_hours * 60.0) as u32;
    let sleep_start =
        (wake as i64 - sleep_minutes as i64).rem_euclid(MINUTES_PER_DAY as i64) as u32;
    let cooking_minutes = (prefs.cooking_hours * 60.0) as u32;

    for day in Weekday::ALL {
        let plan_day = plan.day_mut(day);

        if sleep_start < wake {
            plan_day.push(Interval::new(sleep_start, wake, "Sleep", IntervalKind::Fixed));
        } else {
            // Sleep crosses midnight: split so both halves stay inside one
            // 0..1440 day.
            plan_day.push(Interval::new(
                sleep_start,
                LAST_MINUTE,
                "Sleep",
                IntervalKind::Fixed,
            ));
            plan_day.push(Interval::new(0, wake, "Sleep", IntervalKind::Fixed));
        }

        if prefs.cook_dinner {
            let dinner_start = DINNER_ANCHOR + cooking_minutes;
            plan_day.push(Interval::new(
                DINNER_ANCHOR,
                dinner_start,
                "Cooking",
                IntervalKind::Fixed,
            ));
            plan_day.push(Interval::new(
                dinner_start,
                dinner_start + DINNER_MINUTES,
                "Dinner",
                IntervalKind::Fixed,
            ));
        }
    }

    for appt in &prefs.appointments {
        let start = parse_time(&appt.start)?;
        let end = parse_time(&appt.end)?;
        let prep_minutes = (appt.prep_hours * 60.0) as u32;
        let recovery_minutes = (appt.recovery_hours * 60.0) as u32;

        for &day in &appt.weekdays {
            let plan_day = plan.day_mut(day);
            if prep_minutes > 0 {
                plan_day.push(Interval::new(
                    start.saturating_sub(prep_minutes),
                    start,
                    format!("{} (preparation)", appt.name),
                    IntervalKind::Fixed,
                ));
            }
            plan_day.push(Interval::new(
                start,
                end,
                appt.name.clone(),
                IntervalKind::Fixed,
            ));
            if recovery_minutes > 0 {
                plan_day.push(Interval::new(
                    end,
                    end + recovery_minutes,
                    format!("{} (recovery)", appt.name),
                    IntervalKind::Fixed,
                ));
            }
        }
    }

    Ok(())
}
