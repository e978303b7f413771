use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "weekplan-cli", version, about = "Weekly schedule generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preference file management
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Schedule generation and inspection
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Plan { action } => commands::plan::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
