use std::path::PathBuf;

use clap::Subcommand;
use paulboy_core::{scan_audio_files, Config};

#[derive(Subcommand)]
pub enum RadioAction {
    /// List audio files found in the music folder, in playlist order
    Scan {
        /// Folder override (defaults to radio.music_folder)
        #[arg(long)]
        folder: Option<PathBuf>,
    },
}

pub fn run(action: RadioAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RadioAction::Scan { folder } => {
            let folder = match folder {
                Some(folder) => folder,
                None => Config::load_or_default().radio.music_folder,
            };
            let tracks = scan_audio_files(&folder)?;
            if tracks.is_empty() {
                println!("no audio files in {}", folder.display());
            }
            for (index, track) in tracks.iter().enumerate() {
                println!("{index:>3}  {}", track.display_name());
            }
        }
    }
    Ok(())
}
