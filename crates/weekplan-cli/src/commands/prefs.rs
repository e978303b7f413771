//! Preference file management commands.

use std::path::PathBuf;

use clap::Subcommand;
use weekplan_core::{storage, UserPreferences};

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Write an example preferences file to edit
    Init {
        /// Destination (defaults to the config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the stored preferences
    Show {
        /// Preferences file (defaults to the config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Validate the stored preferences
    Check {
        /// Preferences file (defaults to the config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PrefsAction::Init { path, force } => {
            let path = prefs_path(path)?;
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            std::fs::write(&path, EXAMPLE_PREFS)?;
            println!("Wrote example preferences to {}", path.display());
            println!("Edit the file, then run 'plan generate'.");
        }
        PrefsAction::Show { path, json } => {
            let prefs = load_prefs(path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&prefs)?);
            } else {
                print!("{}", toml::to_string_pretty(&prefs)?);
            }
        }
        PrefsAction::Check { path } => {
            let prefs = load_prefs(path)?;
            prefs.validate()?;
            println!("Preferences look valid.");
        }
    }
    Ok(())
}

pub(crate) fn prefs_path(path: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(p) => p,
        None => storage::data_dir()?.join("preferences.toml"),
    })
}

pub(crate) fn load_prefs(
    path: Option<PathBuf>,
) -> Result<UserPreferences, Box<dyn std::error::Error>> {
    let path = prefs_path(path)?;
    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("cannot read {}: {e} (run 'prefs init' first?)", path.display()))?;
    Ok(toml::from_str(&content)?)
}

const EXAMPLE_PREFS: &str = r#"# Weekly constraints for the schedule generator.
# Times accept "07:30", "7:30" or a bare hour like "7".

sleep_hours = 8.0
wake_time = "07:00"
cook_dinner = true
cooking_hours = 1.0
entertainment_hours = 10.0

# Fixed classes and appointments, with optional prep/recovery buffers.
[[appointments]]
name = "Rust course"
start = "16:00"
end = "17:30"
prep_hours = 0.5
recovery_hours = 0.0
weekdays = ["Monday", "Wednesday"]

# Learning goals, highest priority scheduled first (1-10).
[[goals]]
name = "Linear algebra"
weekly_hours = 6.0
priority = 8
preferred_time = "morning"
min_session_hours = 1.0
max_session_hours = 2.0

[[goals]]
name = "Guitar practice"
weekly_hours = 3.0
priority = 5
preferred_time = "evening"
min_session_hours = 0.5
max_session_hours = 1.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_preferences_parse_and_validate() {
        let prefs: UserPreferences = toml::from_str(EXAMPLE_PREFS).unwrap();
        prefs.validate().unwrap();
        assert_eq!(prefs.goals.len(), 2);
        assert_eq!(prefs.appointments.len(), 1);
    }
}
