//! Shared test doubles for the collaborator seams.

use std::cell::RefCell;
use std::rc::Rc;

use paulboy_core::error::{PlaybackError, StoreError};
use paulboy_core::{AudioAlert, HabitRecord, HabitStore, Playback, SoundEffects, TrackRef};

/// Records alert start/stop calls.
#[derive(Default)]
pub struct AlertLog {
    pub starts: u32,
    pub stops: u32,
}

pub struct RecordingAlert(pub Rc<RefCell<AlertLog>>);

impl RecordingAlert {
    pub fn new() -> (Self, Rc<RefCell<AlertLog>>) {
        let log = Rc::new(RefCell::new(AlertLog::default()));
        (Self(Rc::clone(&log)), log)
    }
}

impl AudioAlert for RecordingAlert {
    fn start(&mut self) {
        self.0.borrow_mut().starts += 1;
    }

    fn stop(&mut self) {
        self.0.borrow_mut().stops += 1;
    }
}

/// Transition sound double; counts firings.
pub struct CountingSounds(pub Rc<RefCell<u32>>);

impl CountingSounds {
    pub fn new() -> (Self, Rc<RefCell<u32>>) {
        let count = Rc::new(RefCell::new(0));
        (Self(Rc::clone(&count)), count)
    }
}

impl SoundEffects for CountingSounds {
    fn tab_transition(&mut self) {
        *self.0.borrow_mut() += 1;
    }
}

/// Transport double tracking busy state and call order.
#[derive(Default)]
pub struct PlayerLog {
    pub calls: Vec<String>,
    pub busy: bool,
}

pub struct RecordingPlayer(pub Rc<RefCell<PlayerLog>>);

impl RecordingPlayer {
    pub fn new() -> (Self, Rc<RefCell<PlayerLog>>) {
        let log = Rc::new(RefCell::new(PlayerLog::default()));
        (Self(Rc::clone(&log)), log)
    }
}

impl Playback for RecordingPlayer {
    fn load(&mut self, track: &TrackRef) -> Result<(), PlaybackError> {
        self.0
            .borrow_mut()
            .calls
            .push(format!("load {}", track.display_name()));
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let mut log = self.0.borrow_mut();
        log.calls.push("play".into());
        log.busy = true;
        Ok(())
    }

    fn pause(&mut self) {
        let mut log = self.0.borrow_mut();
        log.calls.push("pause".into());
        log.busy = false;
    }

    fn unpause(&mut self) {
        let mut log = self.0.borrow_mut();
        log.calls.push("unpause".into());
        log.busy = true;
    }

    fn stop(&mut self) {
        let mut log = self.0.borrow_mut();
        log.calls.push("stop".into());
        log.busy = false;
    }

    fn is_busy(&mut self) -> bool {
        self.0.borrow().busy
    }
}

/// In-memory record store.
#[derive(Default)]
pub struct MemStore(pub RefCell<Option<HabitRecord>>);

impl HabitStore for MemStore {
    fn read(&self) -> Result<Option<HabitRecord>, StoreError> {
        Ok(self.0.borrow().clone())
    }

    fn write(&self, record: &HabitRecord) -> Result<(), StoreError> {
        *self.0.borrow_mut() = Some(record.clone());
        Ok(())
    }
}
