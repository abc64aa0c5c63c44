mod dial;
mod scheduler;

pub use dial::DialState;
pub use scheduler::{AlarmScheduler, AlarmState};
