//! Audio side effects as detached child processes.
//!
//! Alert and transition sounds run outside the event loop; the core only
//! starts and stops them and never reads anything back (fire-and-forget,
//! plus an explicit kill from snooze).

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Background alert playback. `start` is fire-and-forget; `stop` must kill
/// whatever `start` launched.
pub trait AudioAlert {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Short one-shot UI sounds.
pub trait SoundEffects {
    fn tab_transition(&mut self);
}

/// Plays a sound file by spawning an external player process.
///
/// At most one child is alive per instance: a new start kills the previous
/// one first. Spawn failures degrade to silence.
pub struct ProcessSound {
    player: String,
    sound: PathBuf,
    child: Option<Child>,
}

impl ProcessSound {
    pub fn new(player: impl Into<String>, sound: impl Into<PathBuf>) -> Self {
        Self {
            player: player.into(),
            sound: sound.into(),
            child: None,
        }
    }

    fn spawn(&mut self) {
        self.kill();
        self.child = Command::new(&self.player)
            .arg(&self.sound)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .ok();
    }

    fn kill(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl AudioAlert for ProcessSound {
    fn start(&mut self) {
        self.spawn();
    }

    fn stop(&mut self) {
        self.kill();
    }
}

impl SoundEffects for ProcessSound {
    fn tab_transition(&mut self) {
        self.spawn();
    }
}

impl Drop for ProcessSound {
    fn drop(&mut self) {
        self.kill();
    }
}
