//! Persistence for preferences and finished schedules.
//!
//! The engine itself never touches disk; this module owns the config
//! directory and the saved `{preferences, schedule}` document.

mod document;

pub use document::PlanDocument;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/weekplan[-dev]/` based on WEEKPLAN_ENV.
///
/// Set WEEKPLAN_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("WEEKPLAN_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("weekplan-dev")
    } else {
        base_dir.join("weekplan")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
