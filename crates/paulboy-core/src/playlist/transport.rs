use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use super::track::TrackRef;
use crate::error::PlaybackError;

/// Narrow transport interface the navigator drives. Production playback is
/// an external player process; tests substitute a recording double.
pub trait Playback {
    fn load(&mut self, track: &TrackRef) -> Result<(), PlaybackError>;
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn unpause(&mut self);
    fn stop(&mut self);
    /// Whether audio is actively playing right now (false while paused).
    fn is_busy(&mut self) -> bool;
}

/// Drives an external audio player as a child process.
///
/// Pause/resume use SIGSTOP/SIGCONT on unix; elsewhere pause degrades to
/// stopping the child.
pub struct ProcessPlayer {
    command: String,
    loaded: Option<PathBuf>,
    child: Option<Child>,
    paused: bool,
}

impl ProcessPlayer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            loaded: None,
            child: None,
            paused: false,
        }
    }

    fn child_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    #[cfg(unix)]
    fn suspend_child(&mut self) {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;
        if let Some(child) = &self.child {
            let _ = kill(Pid::from_raw(child.id() as i32), Signal::SIGSTOP);
        }
    }

    #[cfg(not(unix))]
    fn suspend_child(&mut self) {
        self.kill_child();
    }

    #[cfg(unix)]
    fn resume_child(&mut self) {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;
        if let Some(child) = &self.child {
            let _ = kill(Pid::from_raw(child.id() as i32), Signal::SIGCONT);
        }
    }

    #[cfg(not(unix))]
    fn resume_child(&mut self) {}

    fn kill_child(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Playback for ProcessPlayer {
    fn load(&mut self, track: &TrackRef) -> Result<(), PlaybackError> {
        if !track.path.is_file() {
            return Err(PlaybackError::MissingTrack(track.path.clone()));
        }
        self.loaded = Some(track.path.clone());
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        let Some(path) = self.loaded.clone() else {
            return Ok(());
        };
        self.kill_child();
        let child = Command::new(&self.command)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PlaybackError::Spawn {
                command: self.command.clone(),
                source,
            })?;
        self.child = Some(child);
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        if self.paused || !self.child_running() {
            return;
        }
        self.suspend_child();
        self.paused = true;
    }

    fn unpause(&mut self) {
        if !self.paused {
            return;
        }
        self.resume_child();
        self.paused = false;
    }

    fn stop(&mut self) {
        self.kill_child();
        self.paused = false;
    }

    fn is_busy(&mut self) -> bool {
        !self.paused && self.child_running()
    }
}

impl Drop for ProcessPlayer {
    fn drop(&mut self) {
        self.kill_child();
    }
}
