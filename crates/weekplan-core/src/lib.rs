//! # Weekplan Core Library
//!
//! Turns one user's weekly constraints -- sleep need, wake time, fixed
//! appointments, weighted learning goals, a free-time budget -- into a
//! concrete seven-day timetable.
//!
//! ## Architecture
//!
//! - **Engine**: a single-pass greedy pipeline ([`WeekScheduler`]) that
//!   places fixed commitments, then learning sessions, then breaks and
//!   free time into each day's remaining gaps; no backtracking, no global
//!   optimality
//! - **Data model**: minute-of-day intervals grouped per weekday
//!   ([`WeekPlan`]); preferences ([`UserPreferences`]) are borrowed
//!   read-only for one run
//! - **Reporting**: scheduled-versus-target numbers ([`GoalFulfillment`])
//!   and a flattened plain-text report
//! - **Storage**: TOML persistence for the `{preferences, schedule}`
//!   document ([`PlanDocument`])
//!
//! The interactive layer that collects preferences is deliberately a thin
//! external collaborator; the engine itself never performs IO.

pub mod error;
pub mod plan;
pub mod prefs;
pub mod report;
pub mod scheduler;
pub mod storage;
pub mod time;

pub use error::{ConfigError, CoreError, TimeError, ValidationError};
pub use plan::{
    free_gaps, ActiveWindow, DayPlan, FreeGap, Interval, IntervalKind, WeekPlan, Weekday,
};
pub use prefs::{FixedAppointment, LearningGoal, PreferredTime, UserPreferences};
pub use report::{fulfillment, render_report, GoalFulfillment};
pub use scheduler::{generate_week, WeekScheduler};
pub use storage::{data_dir, PlanDocument};
pub use time::{format_time, parse_time};
