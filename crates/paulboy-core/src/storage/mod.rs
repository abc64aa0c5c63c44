mod config;

pub use config::{AlarmConfig, Config, RadioConfig, UiConfig, YoutubeConfig};

use std::io;
use std::path::PathBuf;

/// Returns `~/.config/paulboy[-dev]/` based on PAULBOY_ENV.
///
/// Set PAULBOY_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("PAULBOY_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("paulboy-dev")
    } else {
        base_dir.join("paulboy")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
