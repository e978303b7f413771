//! The saved `{preferences, schedule}` TOML document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::plan::WeekPlan;
use crate::prefs::UserPreferences;

/// A generated schedule together with the preferences that produced it.
///
/// Serialized as pretty TOML so users can read and hand-edit the file;
/// edited copies load back as long as the structure is intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub preferences: UserPreferences,
    pub schedule: WeekPlan,
}

impl PlanDocument {
    pub fn new(preferences: UserPreferences, schedule: WeekPlan) -> Self {
        Self {
            preferences,
            schedule,
        }
    }

    /// Default save location under [`super::data_dir`].
    pub fn default_path() -> Result<PathBuf> {
        Ok(super::data_dir()?.join("schedule.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let doc = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(doc)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn load_reports_the_missing_path() {
        let err = PlanDocument::load(Path::new("/nonexistent/schedule.toml")).unwrap_err();
        match err {
            CoreError::Config(ConfigError::LoadFailed { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/schedule.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
