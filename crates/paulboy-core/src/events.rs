use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::router::Tab;

/// Every state change of interest produces an Event.
/// The event loop prints them; frontends could poll them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TabChanged {
        tab: Tab,
        at: DateTime<Utc>,
    },
    AlarmSet {
        hour: u8,
        minute: u8,
        at: DateTime<Utc>,
    },
    /// The armed minute arrived; fires once per matching minute.
    AlarmTriggered {
        hour: u8,
        minute: u8,
        at: DateTime<Utc>,
    },
    AlarmSnoozed {
        at: DateTime<Utc>,
    },
    HabitChecked {
        habit: Habit,
        count: u32,
        at: DateTime<Utc>,
    },
    TrackStarted {
        index: usize,
        track: String,
        at: DateTime<Utc>,
    },
    PlaybackPaused {
        at: DateTime<Utc>,
    },
    PlaybackResumed {
        at: DateTime<Utc>,
    },
    PlaybackStopped {
        at: DateTime<Utc>,
    },
}
