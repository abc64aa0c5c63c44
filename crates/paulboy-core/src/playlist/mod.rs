//! Playlist navigation and playback transport.
//!
//! The navigator owns an ordered track list and a selection cursor whose
//! out-of-range positions double as transport gestures: scrolling past the
//! top resumes playback, past the bottom pauses it. Actual audio decoding
//! lives behind the [`Playback`] trait.

mod navigator;
mod track;
mod transport;
mod waveform;

pub use navigator::{CursorPosition, PlaylistNavigator};
pub use track::{scan_audio_files, TrackRef, AUDIO_EXTENSIONS};
pub use transport::{Playback, ProcessPlayer};
pub use waveform::Waveform;
