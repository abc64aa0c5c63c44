//! Top-level tab state machine and input routing.
//!
//! The router owns the active tab, the in-tab option cursor and the three
//! sub-components, and routes the raw input vocabulary (click, right-click,
//! scroll) to whichever of them the active tab selects. A ringing alarm
//! pre-empts clicks on every tab; `tick` evaluates the alarm each frame no
//! matter which tab is showing.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::alarm::AlarmScheduler;
use crate::audio::SoundEffects;
use crate::clock::WallTime;
use crate::error::Result;
use crate::events::Event;
use crate::habit::{Habit, HabitLedger};
use crate::playlist::PlaylistNavigator;

/// The five mutually exclusive top-level views, in right-click cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Date,
    Alarm,
    Radio,
    Habit,
    Youtube,
}

impl Tab {
    pub const CYCLE: [Self; 5] = [
        Self::Date,
        Self::Alarm,
        Self::Radio,
        Self::Habit,
        Self::Youtube,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Alarm,
            Self::Alarm => Self::Radio,
            Self::Radio => Self::Habit,
            Self::Habit => Self::Youtube,
            Self::Youtube => Self::Date,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Alarm => "ALARM",
            Self::Radio => "RADIO",
            Self::Habit => "HABIT",
            Self::Youtube => "YOUTUBE",
        }
    }
}

/// Option slots on the alarm tab, scroll-cycled with wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmOption {
    Blank,
    Hour,
    Minute,
    SetAlarm,
}

impl AlarmOption {
    pub const COUNT: i32 = 4;

    pub fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Hour,
            2 => Self::Minute,
            3 => Self::SetAlarm,
            _ => Self::Blank,
        }
    }
}

/// Highest habit slot index (five slots, no wraparound).
const HABIT_MAX_INDEX: i32 = 4;

/// Mouse buttons in the input vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

/// The whole input vocabulary the router consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Click(Button),
    Scroll(i32),
}

/// Top-level state machine: active tab, option cursor, and ownership of
/// the alarm scheduler, habit ledger and playlist navigator.
pub struct TabRouter {
    tab: Tab,
    option_index: i32,
    alarm: AlarmScheduler,
    habits: HabitLedger,
    playlist: PlaylistNavigator,
    sounds: Box<dyn SoundEffects>,
}

impl TabRouter {
    /// Starts on the Date tab with the option cursor at 0.
    pub fn new(
        alarm: AlarmScheduler,
        habits: HabitLedger,
        playlist: PlaylistNavigator,
        sounds: Box<dyn SoundEffects>,
    ) -> Self {
        Self {
            tab: Tab::Date,
            option_index: 0,
            alarm,
            habits,
            playlist,
            sounds,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    pub fn option_index(&self) -> i32 {
        self.option_index
    }

    pub fn alarm(&self) -> &AlarmScheduler {
        &self.alarm
    }

    pub fn habits(&self) -> &HabitLedger {
        &self.habits
    }

    pub fn playlist(&self) -> &PlaylistNavigator {
        &self.playlist
    }

    /// Alarm tab option under the cursor.
    pub fn alarm_option(&self) -> AlarmOption {
        AlarmOption::from_index(self.option_index)
    }

    /// Habit under the cursor (meaningful on the habit tab).
    pub fn selected_habit(&self) -> Option<Habit> {
        Habit::from_index(self.option_index as usize)
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Route one raw input event. Right clicks always switch tabs;
    /// everything else dispatches by the active tab.
    pub fn handle(&mut self, input: InputEvent) -> Result<Vec<Event>> {
        match input {
            InputEvent::Click(Button::Right) => Ok(vec![self.on_right_click()]),
            InputEvent::Click(button) => self.on_click(button),
            InputEvent::Scroll(delta) => Ok(self.on_scroll(delta).into_iter().collect()),
        }
    }

    /// Advance to the next tab, reset the option cursor and fire the
    /// transition sound.
    pub fn on_right_click(&mut self) -> Event {
        self.tab = self.tab.next();
        self.option_index = 0;
        self.sounds.tab_transition();
        Event::TabChanged {
            tab: self.tab,
            at: Utc::now(),
        }
    }

    /// Move the option cursor. The alarm tab wraps over its four options,
    /// the habit tab clamps over its five slots, the radio tab forwards to
    /// the playlist cursor, and the rest ignore scrolling.
    pub fn on_scroll(&mut self, delta: i32) -> Option<Event> {
        match self.tab {
            Tab::Alarm => {
                self.option_index = (self.option_index - delta).rem_euclid(AlarmOption::COUNT);
                None
            }
            Tab::Radio => match delta.signum() {
                1 => self.playlist.move_up(),
                -1 => self.playlist.move_down(),
                _ => None,
            },
            Tab::Habit => {
                self.option_index =
                    (self.option_index - delta.signum()).clamp(0, HABIT_MAX_INDEX);
                None
            }
            Tab::Date | Tab::Youtube => None,
        }
    }

    /// Handle a click on the active tab. While the alarm is ringing, any
    /// click on any tab first pauses playback and snoozes the alarm; the
    /// per-tab action still runs afterwards.
    ///
    /// Callers normally reach this through [`handle`](Self::handle), which
    /// peels off right clicks for tab cycling first.
    pub fn on_click(&mut self, _button: Button) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        if self.alarm.is_triggered() {
            events.extend(self.playlist.pause());
            events.extend(self.alarm.snooze());
        }
        match self.tab {
            Tab::Alarm => match self.alarm_option() {
                AlarmOption::Hour => self.alarm.dial_hour(),
                AlarmOption::Minute => self.alarm.dial_minute(),
                AlarmOption::SetAlarm => {
                    events.push(self.alarm.set_alarm());
                    self.tab = Tab::Date;
                    self.option_index = 0;
                    events.push(Event::TabChanged {
                        tab: self.tab,
                        at: Utc::now(),
                    });
                }
                AlarmOption::Blank => {}
            },
            Tab::Radio => events.extend(self.playlist.select_and_play()?),
            Tab::Habit => {
                if let Some(habit) = self.selected_habit() {
                    events.extend(self.habits.increment(habit)?);
                }
            }
            Tab::Date | Tab::Youtube => {}
        }
        Ok(events)
    }

    /// Per-frame update. The alarm is evaluated on every tab - and, within
    /// a frame, before any input is handled - so a trigger and its
    /// acknowledging click are always observed in that order. The radio
    /// waveform advances here too.
    pub fn tick(&mut self, now: WallTime) -> Option<Event> {
        let event = self.alarm.evaluate(now);
        self.playlist.tick();
        event
    }
}
