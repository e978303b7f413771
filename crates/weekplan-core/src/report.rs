//! Scheduled-versus-target reporting over a finished plan.
//!
//! The engine drops goals and leisure silently when the week has no room,
//! so the numbers here are how a caller notices. [`render_report`] is the
//! flattened plain-text view the persistence collaborator writes out.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::plan::{IntervalKind, WeekPlan, Weekday};
use crate::prefs::UserPreferences;
use crate::time::format_time;

/// How much of a goal's weekly target actually landed on the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalFulfillment {
    pub goal: String,
    pub target_minutes: f64,
    pub scheduled_minutes: u32,
}

impl GoalFulfillment {
    pub fn is_met(&self) -> bool {
        self.scheduled_minutes as f64 >= self.target_minutes
    }

    pub fn shortfall_minutes(&self) -> f64 {
        (self.target_minutes - self.scheduled_minutes as f64).max(0.0)
    }
}

/// Per-goal fulfillment, in the goal order of `prefs`.
///
/// Scheduled time is the sum of placed Learning intervals carrying the
/// goal's name.
pub fn fulfillment(prefs: &UserPreferences, plan: &WeekPlan) -> Vec<GoalFulfillment> {
    prefs
        .goals
        .iter()
        .map(|goal| {
            let scheduled = plan
                .iter()
                .flat_map(|(_, day)| day.intervals().iter())
                .filter(|i| i.kind == IntervalKind::Learning && i.label == goal.name)
                .map(|i| i.duration_minutes())
                .sum();
            GoalFulfillment {
                goal: goal.name.clone(),
                target_minutes: goal.weekly_minutes(),
                scheduled_minutes: scheduled,
            }
        })
        .collect()
}

const RULE: &str = "==================================================";
const DAY_RULE: &str = "------------------------------";

/// Render the plain-text report: seven day tables followed by the weekly
/// summary and per-goal fulfillment.
pub fn render_report(prefs: &UserPreferences, plan: &WeekPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "WEEKLY SCHEDULE");
    let _ = writeln!(out, "{RULE}");

    for day in Weekday::ALL {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", day.name().to_uppercase());
        let _ = writeln!(out, "{DAY_RULE}");

        let mut intervals = plan.day(day).intervals().to_vec();
        intervals.sort_by_key(|i| i.start);
        for interval in &intervals {
            let _ = writeln!(
                out,
                "{}-{} | {}",
                format_time(interval.start),
                format_time(interval.end),
                interval.label
            );
        }
    }

    let learning_target: f64 = prefs.goals.iter().map(|g| g.weekly_hours).sum();
    let cooking_weekly = if prefs.cook_dinner {
        prefs.cooking_hours * 7.0
    } else {
        0.0
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Sleep per night: {:.1}h", prefs.sleep_hours);
    let _ = writeln!(out, "Cooking per week: {cooking_weekly:.1}h");
    let _ = writeln!(
        out,
        "Entertainment budget: {:.1}h/week",
        prefs.entertainment_hours
    );
    let _ = writeln!(out, "Learning target: {learning_target:.1}h/week");

    let rows = fulfillment(prefs, plan);
    if !rows.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Goal fulfillment:");
        for row in rows {
            let scheduled_h = row.scheduled_minutes as f64 / 60.0;
            let target_h = row.target_minutes / 60.0;
            if row.is_met() {
                let _ = writeln!(out, "  {}: {scheduled_h:.1}h of {target_h:.1}h", row.goal);
            } else {
                let _ = writeln!(
                    out,
                    "  {}: {scheduled_h:.1}h of {target_h:.1}h (short {:.1}h)",
                    row.goal,
                    row.shortfall_minutes() / 60.0
                );
            }
        }
    }

    out
}
