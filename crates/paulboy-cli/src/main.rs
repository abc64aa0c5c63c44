use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "paulboy", version, about = "Paulboy kiosk")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the kiosk event loop in the terminal
    Run,
    /// Habit ledger
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Playlist inspection
    Radio {
        #[command(subcommand)]
        action: commands::radio::RadioAction,
    },
    /// Channel statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run => commands::run::run(),
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Radio { action } => commands::radio::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
