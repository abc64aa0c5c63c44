mod ledger;
mod record;
mod store;

pub use ledger::HabitLedger;
pub use record::{days_in_month, Habit, HabitEntry, HabitRecord};
pub use store::{HabitStore, JsonHabitStore};
