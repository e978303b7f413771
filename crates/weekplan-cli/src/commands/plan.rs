//! Schedule generation and inspection commands.

use std::path::PathBuf;

use clap::Subcommand;
use weekplan_core::{generate_week, report, PlanDocument};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate the week from stored preferences
    Generate {
        /// Preferences file (defaults to the config directory)
        #[arg(long)]
        prefs: Option<PathBuf>,
        /// Where to save the resulting document
        #[arg(long)]
        out: Option<PathBuf>,
        /// Skip saving the document
        #[arg(long)]
        no_save: bool,
        /// Print the plan as JSON instead of the report
        #[arg(long)]
        json: bool,
    },
    /// Print the report for the saved schedule
    Show {
        /// Document file (defaults to the config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print scheduled-versus-target numbers per goal
    Fulfillment {
        /// Document file (defaults to the config directory)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            prefs,
            out,
            no_save,
            json,
        } => {
            let mut preferences = super::prefs::load_prefs(prefs)?;
            preferences.validate()?;
            preferences.normalize();

            let plan = generate_week(&preferences)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", report::render_report(&preferences, &plan));
            }

            if !no_save {
                let path = match out {
                    Some(p) => p,
                    None => PlanDocument::default_path()?,
                };
                let doc = PlanDocument::new(preferences, plan);
                doc.save(&path)?;
                println!("\nSaved schedule to {}", path.display());
            }
        }
        PlanAction::Show { path, json } => {
            let doc = load_document(path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&doc.schedule)?);
            } else {
                print!("{}", report::render_report(&doc.preferences, &doc.schedule));
            }
        }
        PlanAction::Fulfillment { path, json } => {
            let doc = load_document(path)?;
            let rows = report::fulfillment(&doc.preferences, &doc.schedule);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                println!("No learning goals in the saved document.");
            } else {
                for row in rows {
                    let scheduled_h = row.scheduled_minutes as f64 / 60.0;
                    let target_h = row.target_minutes / 60.0;
                    if row.is_met() {
                        println!("{}: {scheduled_h:.1}h of {target_h:.1}h", row.goal);
                    } else {
                        println!(
                            "{}: {scheduled_h:.1}h of {target_h:.1}h (short {:.1}h)",
                            row.goal,
                            row.shortfall_minutes() / 60.0
                        );
                    }
                }
            }
        }
    }
    Ok(())
}

fn load_document(path: Option<PathBuf>) -> Result<PlanDocument, Box<dyn std::error::Error>> {
    let path = match path {
        Some(p) => p,
        None => PlanDocument::default_path()?,
    };
    Ok(PlanDocument::load(&path)?)
}
