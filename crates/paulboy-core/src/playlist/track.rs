use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Extensions the directory scan accepts.
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "ogg", "flac", "wav"];

const DISPLAY_NAME_MAX: usize = 21;

/// Reference to one playable file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    pub path: PathBuf,
}

impl TrackRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File stem shown in the playlist, truncated with an ellipsis past 21
    /// characters.
    pub fn display_name(&self) -> String {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if stem.chars().count() > DISPLAY_NAME_MAX {
            let head: String = stem.chars().take(DISPLAY_NAME_MAX - 2).collect();
            format!("{head}...")
        } else {
            stem
        }
    }
}

/// Every audio file in `folder`, in directory-listing order. No sort: the
/// playlist preserves whatever order the filesystem yields.
pub fn scan_audio_files(folder: &Path) -> io::Result<Vec<TrackRef>> {
    let mut tracks = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        let is_audio = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| AUDIO_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(e)));
        if is_audio && path.is_file() {
            tracks.push(TrackRef::new(path));
        }
    }
    Ok(tracks)
}
