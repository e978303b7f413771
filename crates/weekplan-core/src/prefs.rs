//! User preference types and validation.
//!
//! The preference record is the engine's single input. Whatever collects it
//! (a CLI, a form, a file) must validate before the pipeline runs;
//! [`UserPreferences::validate`] is that check. The engine borrows the
//! record read-only for one run and keeps no reference afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::plan::Weekday;
use crate::time::parse_time;

/// Advisory daypart preference on a learning goal.
///
/// Collected and stored, but placement does not consult it: sessions land
/// in the earliest eligible gap regardless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Anytime,
}

/// One weighted learning goal with session-length bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningGoal {
    pub name: String,
    /// Weekly target in hours
    pub weekly_hours: f64,
    /// 1-10, 10 highest; ties keep input order
    pub priority: u8,
    #[serde(default)]
    pub preferred_time: PreferredTime,
    pub min_session_hours: f64,
    pub max_session_hours: f64,
}

impl LearningGoal {
    pub fn weekly_minutes(&self) -> f64 {
        self.weekly_hours * 60.0
    }

    pub fn min_session_minutes(&self) -> u32 {
        (self.min_session_hours * 60.0) as u32
    }

    pub fn max_session_minutes(&self) -> u32 {
        (self.max_session_hours * 60.0) as u32
    }
}

/// A fixed commitment on specific weekdays, with optional preparation and
/// recovery buffers around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedAppointment {
    pub name: String,
    /// Wall-clock start, "HH:MM" or bare hour
    pub start: String,
    /// Wall-clock end
    pub end: String,
    #[serde(default)]
    pub prep_hours: f64,
    #[serde(default)]
    pub recovery_hours: f64,
    pub weekdays: Vec<Weekday>,
}

/// Everything the engine needs to build a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Nightly sleep in hours
    pub sleep_hours: f64,
    /// Wake-up time, "HH:MM" or bare hour
    pub wake_time: String,
    #[serde(default)]
    pub cook_dinner: bool,
    #[serde(default)]
    pub cooking_hours: f64,
    /// Weekly free-time budget in hours
    #[serde(default)]
    pub entertainment_hours: f64,
    #[serde(default)]
    pub appointments: Vec<FixedAppointment>,
    #[serde(default)]
    pub goals: Vec<LearningGoal>,
}

impl UserPreferences {
    /// Stable-sort goals by descending priority; ties keep input order.
    pub fn normalize(&mut self) {
        self.goals.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Range and sanity checks that must pass before the pipeline runs.
    /// The first violation wins.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.sleep_hours > 0.0 && self.sleep_hours <= 24.0) {
            return Err(invalid("sleep_hours", "must be between 0 and 24"));
        }
        parse_time(&self.wake_time).map_err(|e| ValidationError::InvalidValue {
            field: "wake_time".to_string(),
            message: e.to_string(),
        })?;
        if self.cook_dinner && self.cooking_hours <= 0.0 {
            return Err(invalid("cooking_hours", "must be positive when cooking dinner"));
        }
        if self.cooking_hours < 0.0 {
            return Err(invalid("cooking_hours", "must not be negative"));
        }
        if self.entertainment_hours < 0.0 {
            return Err(invalid("entertainment_hours", "must not be negative"));
        }

        for (idx, appt) in self.appointments.iter().enumerate() {
            let field = |name: &str| format!("appointments[{idx}].{name}");
            if appt.name.trim().is_empty() {
                return Err(ValidationError::MissingField(field("name")));
            }
            if appt.weekdays.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: field("weekdays"),
                    message: "at least one weekday is required".to_string(),
                });
            }
            let start = parse_time(&appt.start).map_err(|e| ValidationError::InvalidValue {
                field: field("start"),
                message: e.to_string(),
            })?;
            let end = parse_time(&appt.end).map_err(|e| ValidationError::InvalidValue {
                field: field("end"),
                message: e.to_string(),
            })?;
            if start >= end {
                return Err(ValidationError::InvalidValue {
                    field: field("end"),
                    message: "must be after the start time".to_string(),
                });
            }
            if appt.prep_hours < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field("prep_hours"),
                    message: "must not be negative".to_string(),
                });
            }
            if appt.recovery_hours < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field("recovery_hours"),
                    message: "must not be negative".to_string(),
                });
            }
        }

        for (idx, goal) in self.goals.iter().enumerate() {
            let field = |name: &str| format!("goals[{idx}].{name}");
            if goal.name.trim().is_empty() {
                return Err(ValidationError::MissingField(field("name")));
            }
            if goal.weekly_hours <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field("weekly_hours"),
                    message: "must be positive".to_string(),
                });
            }
            if !(1..=10).contains(&goal.priority) {
                return Err(ValidationError::InvalidValue {
                    field: field("priority"),
                    message: "must be between 1 and 10".to_string(),
                });
            }
            if goal.min_session_hours <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field("min_session_hours"),
                    message: "must be positive".to_string(),
                });
            }
            if goal.min_session_hours > goal.max_session_hours {
                return Err(ValidationError::InvalidValue {
                    field: field("max_session_hours"),
                    message: "must be at least the minimum session length".to_string(),
                });
            }
        }

        let committed = self.committed_hours();
        if committed > 168.0 {
            return Err(ValidationError::WeekOvercommitted {
                committed_hours: committed,
            });
        }

        Ok(())
    }

    /// Hours of the week already spoken for. Used by the <= 168h check;
    /// relies on the per-field checks above having parsed the times.
    fn committed_hours(&self) -> f64 {
        let mut total = self.sleep_hours * 7.0;
        if self.cook_dinner {
            // Cooking plus the fixed one-hour dinner, every day.
            total += (self.cooking_hours + 1.0) * 7.0;
        }
        for appt in &self.appointments {
            if let (Ok(start), Ok(end)) = (parse_time(&appt.start), parse_time(&appt.end)) {
                let per_day = (end - start) as f64 / 60.0 + appt.prep_hours + appt.recovery_hours;
                total += per_day * appt.weekdays.len() as f64;
            }
        }
        total += self.goals.iter().map(|g| g.weekly_hours).sum::<f64>();
        total += self.entertainment_hours;
        total
    }
}

fn invalid(field: &str, message: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(name: &str, priority: u8) -> LearningGoal {
        LearningGoal {
            name: name.to_string(),
            weekly_hours: 2.0,
            priority,
            preferred_time: PreferredTime::Anytime,
            min_session_hours: 0.5,
            max_session_hours: 2.0,
        }
    }

    fn valid_prefs() -> UserPreferences {
        UserPreferences {
            sleep_hours: 8.0,
            wake_time: "07:00".to_string(),
            cook_dinner: true,
            cooking_hours: 1.0,
            entertainment_hours: 7.0,
            appointments: vec![FixedAppointment {
                name: "Lecture".to_string(),
                start: "16:00".to_string(),
                end: "17:00".to_string(),
                prep_hours: 0.5,
                recovery_hours: 0.5,
                weekdays: vec![Weekday::Wednesday],
            }],
            goals: vec![goal("Rust", 8), goal("Guitar", 3)],
        }
    }

    #[test]
    fn valid_preferences_pass() {
        assert!(valid_prefs().validate().is_ok());
    }

    #[test]
    fn normalize_sorts_by_descending_priority_keeping_ties_stable() {
        let mut prefs = valid_prefs();
        prefs.goals = vec![goal("a", 3), goal("b", 9), goal("c", 3), goal("d", 9)];
        prefs.normalize();
        let names: Vec<&str> = prefs.goals.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn rejects_bad_sleep_hours() {
        let mut prefs = valid_prefs();
        prefs.sleep_hours = 0.0;
        assert!(prefs.validate().is_err());
        prefs.sleep_hours = 25.0;
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn rejects_malformed_wake_time() {
        let mut prefs = valid_prefs();
        prefs.wake_time = "25:00".to_string();
        assert!(matches!(
            prefs.validate(),
            Err(ValidationError::InvalidValue { field, .. }) if field == "wake_time"
        ));
    }

    #[test]
    fn rejects_appointment_ending_before_it_starts() {
        let mut prefs = valid_prefs();
        prefs.appointments[0].end = "15:00".to_string();
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn rejects_priority_out_of_range() {
        let mut prefs = valid_prefs();
        prefs.goals[0].priority = 0;
        assert!(prefs.validate().is_err());
        prefs.goals[0].priority = 11;
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn rejects_session_bounds_inversion() {
        let mut prefs = valid_prefs();
        prefs.goals[0].min_session_hours = 3.0;
        prefs.goals[0].max_session_hours = 1.0;
        assert!(prefs.validate().is_err());
    }

    #[test]
    fn rejects_overcommitted_week() {
        let mut prefs = valid_prefs();
        prefs.goals[0].weekly_hours = 200.0;
        assert!(matches!(
            prefs.validate(),
            Err(ValidationError::WeekOvercommitted { .. })
        ));
    }

    #[test]
    fn preferred_time_defaults_to_anytime() {
        let parsed: LearningGoal = toml::from_str(
            r#"
            name = "Rust"
            weekly_hours = 4.0
            priority = 7
            min_session_hours = 1.0
            max_session_hours = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(parsed.preferred_time, PreferredTime::Anytime);
    }
}
