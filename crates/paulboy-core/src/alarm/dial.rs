use serde::{Deserialize, Serialize};

/// Uncommitted alarm time shown while the user is dialing.
///
/// Values wrap 23→0 and 59→0 on increment and only reach the armed alarm
/// through an explicit set action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialState {
    pub hour: u8,
    pub minute: u8,
}

impl DialState {
    pub fn increment_hour(&mut self) {
        self.hour = if self.hour >= 23 { 0 } else { self.hour + 1 };
    }

    pub fn increment_minute(&mut self) {
        self.minute = if self.minute >= 59 { 0 } else { self.minute + 1 };
    }
}
