//! Playlist cursor and transport state machine.

use std::io;
use std::path::Path;

use chrono::Utc;

use super::track::{scan_audio_files, TrackRef};
use super::transport::Playback;
use super::waveform::Waveform;
use crate::error::PlaybackError;
use crate::events::Event;

/// Where the cursor sits. Both out-of-range positions encode a transport
/// command rather than a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    /// Above the first track; reaching it resumes playback.
    AboveTop,
    /// On a selectable track row.
    Track(usize),
    /// Below the last track; reaching it pauses playback.
    BelowBottom,
}

/// Ordered track list, selection cursor and play state, decoupled from
/// audio decoding. With an empty playlist every operation is a no-op.
pub struct PlaylistNavigator {
    tracks: Vec<TrackRef>,
    cursor: i32,
    playing: bool,
    currently_playing: Option<usize>,
    waveform: Waveform,
    player: Box<dyn Playback>,
}

impl PlaylistNavigator {
    pub fn new(player: Box<dyn Playback>) -> Self {
        Self {
            tracks: Vec::new(),
            cursor: 0,
            playing: false,
            currently_playing: None,
            waveform: Waveform::default(),
            player,
        }
    }

    /// Replace the playlist; cursor and transport state reset.
    pub fn set_tracks(&mut self, tracks: Vec<TrackRef>) {
        self.tracks = tracks;
        self.cursor = 0;
        self.playing = false;
        self.currently_playing = None;
    }

    /// Rebuild the playlist from a directory scan. Returns the track count.
    pub fn scan(&mut self, folder: &Path) -> io::Result<usize> {
        let tracks = scan_audio_files(folder)?;
        let count = tracks.len();
        self.set_tracks(tracks);
        Ok(count)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn tracks(&self) -> &[TrackRef] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn cursor_position(&self) -> CursorPosition {
        if self.cursor < 0 {
            CursorPosition::AboveTop
        } else if (self.cursor as usize) < self.tracks.len() {
            CursorPosition::Track(self.cursor as usize)
        } else {
            CursorPosition::BelowBottom
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn currently_playing(&self) -> Option<usize> {
        self.currently_playing
    }

    pub fn waveform(&self) -> &Waveform {
        &self.waveform
    }

    // ── Cursor ───────────────────────────────────────────────────────

    /// Move the cursor up one row. Crossing the top edge is the resume
    /// gesture; at the sentinel the cursor stays put.
    pub fn move_up(&mut self) -> Option<Event> {
        if self.tracks.is_empty() || self.cursor <= -1 {
            return None;
        }
        self.cursor -= 1;
        if self.cursor == -1 {
            return self.resume();
        }
        None
    }

    /// Move the cursor down one row. Crossing the bottom edge is the pause
    /// gesture; at the sentinel the cursor stays put.
    pub fn move_down(&mut self) -> Option<Event> {
        let len = self.tracks.len() as i32;
        if self.tracks.is_empty() || self.cursor >= len {
            return None;
        }
        self.cursor += 1;
        if self.cursor == len {
            return self.pause();
        }
        None
    }

    // ── Transport ────────────────────────────────────────────────────

    /// Load and play the cursor track. Valid only on a track row; on a
    /// sentinel this is a no-op.
    pub fn select_and_play(&mut self) -> Result<Option<Event>, PlaybackError> {
        let CursorPosition::Track(index) = self.cursor_position() else {
            return Ok(None);
        };
        let track = self.tracks[index].clone();
        self.player.load(&track)?;
        self.player.play()?;
        self.playing = true;
        self.currently_playing = Some(index);
        Ok(Some(Event::TrackStarted {
            index,
            track: track.display_name(),
            at: Utc::now(),
        }))
    }

    /// No-op when nothing is actively playing.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.player.is_busy() {
            return None;
        }
        self.player.pause();
        self.playing = false;
        Some(Event::PlaybackPaused { at: Utc::now() })
    }

    pub fn resume(&mut self) -> Option<Event> {
        if self.tracks.is_empty() {
            return None;
        }
        self.player.unpause();
        self.playing = true;
        Some(Event::PlaybackResumed { at: Utc::now() })
    }

    pub fn stop(&mut self) -> Option<Event> {
        if !self.playing && !self.player.is_busy() {
            return None;
        }
        self.player.stop();
        self.playing = false;
        Some(Event::PlaybackStopped { at: Utc::now() })
    }

    /// Per-frame visual update; the waveform moves only while playing.
    pub fn tick(&mut self) {
        if self.playing {
            self.waveform.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct PlayerLog {
        calls: Vec<String>,
        busy: bool,
    }

    struct RecordingPlayer(Rc<RefCell<PlayerLog>>);

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

    fn navigator(track_count: usize) -> (PlaylistNavigator, Rc<RefCell<PlayerLog>>) {
        let log = Rc::new(RefCell::new(PlayerLog::default()));
        let mut nav = PlaylistNavigator::new(Box::new(RecordingPlayer(Rc::clone(&log))));
        nav.set_tracks(
            (0..track_count)
                .map(|i| TrackRef::new(format!("/music/song{i}.mp3")))
                .collect(),
        );
        (nav, log)
    }

    #[test]
    fn empty_playlist_makes_everything_a_noop() {
        let (mut nav, log) = navigator(0);
        assert!(nav.move_up().is_none());
        assert!(nav.move_down().is_none());
        assert!(nav.select_and_play().unwrap().is_none());
        assert!(nav.pause().is_none());
        assert!(nav.resume().is_none());
        assert!(nav.stop().is_none());
        assert!(log.borrow().calls.is_empty());
    }

    #[test]
    fn select_and_play_loads_and_records_index() {
        let (mut nav, log) = navigator(3);
        nav.move_down();
        let event = nav.select_and_play().unwrap();
        assert!(matches!(event, Some(Event::TrackStarted { index: 1, .. })));
        assert!(nav.is_playing());
        assert_eq!(nav.currently_playing(), Some(1));
        assert_eq!(log.borrow().calls, vec!["load song1", "play"]);
    }

    #[test]
    fn cursor_round_trip_through_top_sentinel() {
        let (mut nav, log) = navigator(2);
        nav.select_and_play().unwrap();
        nav.pause();

        let event = nav.move_up();
        assert!(matches!(event, Some(Event::PlaybackResumed { .. })));
        assert_eq!(nav.cursor_position(), CursorPosition::AboveTop);
        assert!(nav.is_playing());
        assert!(log.borrow().calls.contains(&"unpause".to_string()));

        // Back down lands on the first track again.
        assert!(nav.move_down().is_none());
        assert_eq!(nav.cursor_position(), CursorPosition::Track(0));

        // At the sentinel, further up-moves stay put.
        nav.move_up();
        assert!(nav.move_up().is_none());
        assert_eq!(nav.cursor_position(), CursorPosition::AboveTop);
    }

    #[test]
    fn bottom_sentinel_pauses_playback() {
        let (mut nav, _log) = navigator(2);
        nav.select_and_play().unwrap();
        nav.move_down();
        let event = nav.move_down();
        assert!(matches!(event, Some(Event::PlaybackPaused { .. })));
        assert_eq!(nav.cursor_position(), CursorPosition::BelowBottom);
        assert!(!nav.is_playing());
        assert!(nav.move_down().is_none());
    }

    #[test]
    fn pause_is_a_noop_when_idle() {
        let (mut nav, log) = navigator(2);
        assert!(nav.pause().is_none());
        assert!(log.borrow().calls.is_empty());
    }

    #[test]
    fn waveform_advances_only_while_playing() {
        let (mut nav, _log) = navigator(1);
        nav.tick();
        assert_eq!(nav.waveform().phase(), 0.0);

        nav.select_and_play().unwrap();
        nav.tick();
        nav.tick();
        let moving = nav.waveform().phase();
        assert!(moving > 0.0);

        nav.move_down(); // bottom sentinel pauses
        nav.tick();
        assert_eq!(nav.waveform().phase(), moving);
    }

    #[test]
    fn scan_resets_cursor_and_state() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one.mp3"), b"").unwrap();
        let (mut nav, _log) = navigator(3);
        nav.select_and_play().unwrap();

        let count = nav.scan(dir.path()).unwrap();
        assert_eq!(count, 1);
        assert_eq!(nav.cursor_position(), CursorPosition::Track(0));
        assert!(!nav.is_playing());
        assert_eq!(nav.currently_playing(), None);
    }
}
