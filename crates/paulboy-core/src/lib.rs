//! # Paulboy Core Library
//!
//! Coordination core for the paulboy kiosk: a single-screen app that cycles
//! through five tabs (date, alarm, radio, habit, youtube) and reacts to
//! clicks, right-clicks and scrolls. The CLI binary is a thin shell over
//! this crate - it hosts the event loop and the plain-text render, while
//! every state machine and every collaborator seam lives here.
//!
//! ## Architecture
//!
//! - **Tab Router**: top-level state machine selecting the active tab and
//!   routing raw input to the active tab's component
//! - **Alarm Scheduler**: wall-clock alarm with edge-triggered evaluation,
//!   snooze, and a detached audio alert
//! - **Habit Ledger**: five daily-checkable counters persisted as a single
//!   JSON record with day-rollover reconciliation
//! - **Playlist Navigator**: track list, sentinel cursor (scrolling past
//!   either end is the pause/resume gesture) and waveform visualizer
//!
//! Nothing here owns a thread or reads the system clock directly: the
//! caller drives `tick(now)` once per frame, and the only concurrency is
//! the detached audio child processes.
//!
//! ## Key Components
//!
//! - [`TabRouter`]: input routing and tab state
//! - [`AlarmScheduler`]: alarm state machine
//! - [`HabitLedger`]: persisted habit counters
//! - [`PlaylistNavigator`]: playlist cursor and transport
//! - [`Config`]: application configuration management

pub mod alarm;
pub mod audio;
pub mod clock;
pub mod error;
pub mod events;
pub mod habit;
pub mod playlist;
pub mod router;
pub mod storage;
pub mod youtube;

pub use alarm::{AlarmScheduler, AlarmState, DialState};
pub use audio::{AudioAlert, ProcessSound, SoundEffects};
pub use clock::{ClockSource, SystemClock, WallTime};
pub use error::{ConfigError, CoreError, FetchError, PlaybackError, StoreError};
pub use events::Event;
pub use habit::{days_in_month, Habit, HabitEntry, HabitLedger, HabitRecord, HabitStore, JsonHabitStore};
pub use playlist::{
    scan_audio_files, CursorPosition, Playback, PlaylistNavigator, ProcessPlayer, TrackRef,
    Waveform,
};
pub use router::{AlarmOption, Button, InputEvent, Tab, TabRouter};
pub use storage::{data_dir, Config};
pub use youtube::{ChannelStats, StatsFetch, StatsPanel, YouTubeClient};
