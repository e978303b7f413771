//! Week and day plan types.
//!
//! A [`WeekPlan`] holds one [`DayPlan`] per weekday; a [`DayPlan`] is the
//! collection of intervals placed so far. Interval bounds are minutes since
//! midnight of the day they belong to, with ends past 1440 representing
//! spill past midnight.

mod gap;

pub use gap::{free_gaps, ActiveWindow, FreeGap, FreeGaps};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Day of week, Monday-first. Scheduling always walks days in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in scheduling order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    /// Accepts full names and three-letter abbreviations, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            "saturday" | "sat" => Ok(Weekday::Saturday),
            "sunday" | "sun" => Ok(Weekday::Sunday),
            _ => Err(ValidationError::InvalidValue {
                field: "weekday".to_string(),
                message: format!("unrecognized weekday '{s}'"),
            }),
        }
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// What an interval on the timetable represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    /// Non-negotiable block: sleep, cooking, an appointment or its buffers
    Fixed,
    /// A session allocated to one learning goal
    Learning,
    /// A routine break (lunch)
    Break,
    /// Free time
    Entertainment,
}

/// A placed block of time on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Minutes since midnight
    pub start: u32,
    /// Minutes since midnight; may exceed 1440 for blocks spilling past it
    pub end: u32,
    pub label: String,
    pub kind: IntervalKind,
}

impl Interval {
    /// Create a new interval. `start < end` for every placed interval.
    pub fn new(start: u32, end: u32, label: impl Into<String>, kind: IntervalKind) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            kind,
        }
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end - self.start
    }

    /// Check if this interval overlaps a half-open minute range.
    pub fn overlaps(&self, start: u32, end: u32) -> bool {
        self.start < end && self.end > start
    }
}

/// The intervals placed on one day.
///
/// Unordered while the pipeline runs; [`DayPlan::sort_by_start`] fixes the
/// presentation order once placement is done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayPlan {
    intervals: Vec<Interval>,
}

impl DayPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Stable sort by start minute.
    pub fn sort_by_start(&mut self) {
        self.intervals.sort_by_key(|i| i.start);
    }

    /// Total placed minutes of one kind.
    pub fn minutes_of(&self, kind: IntervalKind) -> u32 {
        self.intervals
            .iter()
            .filter(|i| i.kind == kind)
            .map(Interval::duration_minutes)
            .sum()
    }
}

static EMPTY_DAY: DayPlan = DayPlan {
    intervals: Vec::new(),
};

/// A seven-day timetable, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: BTreeMap<Weekday, DayPlan>,
}

impl WeekPlan {
    /// Create an empty plan with all seven days present.
    pub fn new() -> Self {
        Self {
            days: Weekday::ALL.iter().map(|&d| (d, DayPlan::new())).collect(),
        }
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        self.days.get(&day).unwrap_or(&EMPTY_DAY)
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayPlan {
        self.days.entry(day).or_default()
    }

    /// Days in Monday-to-Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        self.days.iter().map(|(d, p)| (*d, p))
    }

    /// Sort every day by start minute for presentation.
    pub fn sort_days(&mut self) {
        for plan in self.days.values_mut() {
            plan.sort_by_start();
        }
    }
}

impl Default for WeekPlan {
    fn default() -> Self {
        Self::new()
    }
}
