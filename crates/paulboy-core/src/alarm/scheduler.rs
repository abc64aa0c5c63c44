//! Alarm scheduler implementation.
//!
//! The scheduler is a wall-clock state machine. It does not use internal
//! threads or timers - the caller passes the current time into `evaluate`
//! at least once per second-equivalent tick.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Armed -> Triggered -> Snoozed -> Armed (next set)
//!           ^__________|
//! ```
//!
//! `Triggered -> Armed` happens on its own once the matching minute passes
//! without a snooze, so the alarm fires again the next day. `Snoozed` only
//! clears on the next set - there is no snooze timer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::dial::DialState;
use crate::audio::AudioAlert;
use crate::clock::WallTime;
use crate::events::Event;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Committed alarm state.
///
/// Invariants: `triggered` and `snoozed` are never both true, and
/// `triggered` implies `armed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmState {
    pub hour: u8,
    pub minute: u8,
    pub armed: bool,
    pub triggered: bool,
    pub snoozed: bool,
}

/// Arms, evaluates and snoozes the wall-clock alarm, driving the injected
/// audio alert on the trigger edges.
pub struct AlarmScheduler {
    state: AlarmState,
    dial: DialState,
    alert: Box<dyn AudioAlert>,
}

impl AlarmScheduler {
    /// Starts idle (unarmed) with the dial at 00:00.
    pub fn new(alert: Box<dyn AudioAlert>) -> Self {
        Self {
            state: AlarmState::default(),
            dial: DialState::default(),
            alert,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn dial(&self) -> DialState {
        self.dial
    }

    pub fn is_triggered(&self) -> bool {
        self.state.triggered
    }

    /// Hours and minutes until the *pending dial* time, wrapping across
    /// midnight. Display only; the armed alarm is not consulted.
    pub fn remaining_time(&self, now: WallTime) -> (u32, u32) {
        let dial_minutes = i32::from(self.dial.hour) * 60 + i32::from(self.dial.minute);
        let diff = (dial_minutes - now.minute_of_day() as i32).rem_euclid(MINUTES_PER_DAY) as u32;
        (diff / 60, diff % 60)
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn dial_hour(&mut self) {
        self.dial.increment_hour();
    }

    pub fn dial_minute(&mut self) {
        self.dial.increment_minute();
    }

    /// Commit the dial into the armed alarm, clearing any trigger or
    /// snooze left over from the previous arming.
    pub fn set_alarm(&mut self) -> Event {
        self.state.hour = self.dial.hour;
        self.state.minute = self.dial.minute;
        self.state.armed = true;
        self.state.triggered = false;
        self.state.snoozed = false;
        Event::AlarmSet {
            hour: self.state.hour,
            minute: self.state.minute,
            at: Utc::now(),
        }
    }

    /// Re-evaluate against the current time. Edge-triggered: the alarm
    /// fires once when its minute arrives and will not re-fire within the
    /// same minute. Once the minute passes unsnoozed, the trigger clears
    /// and the alarm is armed for the next day. No-op while snoozed.
    pub fn evaluate(&mut self, now: WallTime) -> Option<Event> {
        if !self.state.armed || self.state.snoozed {
            return None;
        }
        let matches = now.hour == self.state.hour && now.minute == self.state.minute;
        if matches && !self.state.triggered {
            self.state.triggered = true;
            self.alert.start();
            return Some(Event::AlarmTriggered {
                hour: self.state.hour,
                minute: self.state.minute,
                at: Utc::now(),
            });
        }
        if !matches && self.state.triggered {
            self.state.triggered = false;
        }
        None
    }

    /// Silence a ringing alarm. Clears `triggered`, sets `snoozed` and
    /// stops the alert exactly once; a second call is a no-op. `snoozed`
    /// stays set until the next [`set_alarm`](Self::set_alarm).
    pub fn snooze(&mut self) -> Option<Event> {
        if !self.state.triggered {
            return None;
        }
        self.state.triggered = false;
        self.state.snoozed = true;
        self.alert.stop();
        Some(Event::AlarmSnoozed { at: Utc::now() })
    }

    /// Acknowledging and snoozing are the same transition.
    pub fn acknowledge(&mut self) -> Option<Event> {
        self.snooze()
    }
}
