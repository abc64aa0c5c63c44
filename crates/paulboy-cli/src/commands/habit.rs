use clap::Subcommand;
use paulboy_core::{ClockSource, Habit, HabitLedger, JsonHabitStore, SystemClock};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Print the habit record as JSON
    List,
    /// Check off a habit for today
    Check {
        /// Habit name (body, mind, spiritual, skill, social)
        name: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let today = SystemClock.now().date;
    let store = JsonHabitStore::new(JsonHabitStore::default_path()?);
    let mut ledger = HabitLedger::load(Box::new(store), today)?;

    match action {
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(ledger.record())?);
        }
        HabitAction::Check { name } => {
            let Some(habit) = Habit::from_name(&name) else {
                eprintln!("unknown habit: {name}");
                std::process::exit(1);
            };
            match ledger.increment(habit)? {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("'{name}' is already checked for today"),
            }
        }
    }
    Ok(())
}
