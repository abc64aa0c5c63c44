//! TOML-based application configuration.
//!
//! Stores kiosk settings:
//! - Alarm sound and the player command that renders it
//! - Music folder and playback player for the radio tab
//! - YouTube channel id and API key for the stats tab
//! - Event-loop tick interval and the tab transition sound
//!
//! Configuration is stored at `~/.config/paulboy/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

/// Alarm alert configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmConfig {
    /// External player command used for the alert sound.
    #[serde(default = "default_player")]
    pub player: String,
    /// Sound file played while the alarm rings.
    #[serde(default = "default_alarm_sound")]
    pub sound: PathBuf,
}

/// Radio tab configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioConfig {
    /// External player command for playlist tracks.
    #[serde(default = "default_player")]
    pub player: String,
    /// Folder scanned for audio files at startup.
    #[serde(default = "default_music_folder")]
    pub music_folder: PathBuf,
}

/// Youtube tab configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoutubeConfig {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub api_key: String,
}

/// Event loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Fixed sleep per loop iteration, in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Short sound fired on every tab transition.
    #[serde(default = "default_transition_sound")]
    pub transition_sound: PathBuf,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/paulboy/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub alarm: AlarmConfig,
    #[serde(default)]
    pub radio: RadioConfig,
    #[serde(default)]
    pub youtube: YoutubeConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

// Default functions
fn default_player() -> String {
    "mpg123".into()
}
fn default_alarm_sound() -> PathBuf {
    PathBuf::from("media/alarm.mp3")
}
fn default_music_folder() -> PathBuf {
    dirs::audio_dir().unwrap_or_else(|| PathBuf::from("media/music"))
}
fn default_tick_ms() -> u64 {
    100
}
fn default_transition_sound() -> PathBuf {
    PathBuf::from("media/tab_click.mp3")
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            sound: default_alarm_sound(),
        }
    }
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            music_folder: default_music_folder(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            transition_sound: default_transition_sound(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alarm: AlarmConfig::default(),
            radio: RadioConfig::default(),
            youtube: YoutubeConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/paulboy"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing defaults on a first run.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be parsed, or if the
    /// default config cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let value = lookup(&json, key)?;
        match value {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// into the field's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
                key: key.into(),
                message: e.to_string(),
            })?;
        assign(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.into(),
            message: e.to_string(),
        })?;
        self.save()
    }
}

fn lookup<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
    if key.is_empty() {
        return None;
    }
    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn assign(root: &mut serde_json::Value, key: &str, value: &str) -> Result<(), ConfigError> {
    let Some((section, field)) = key.rsplit_once('.') else {
        // Top-level keys are all tables; assigning one directly is a
        // mistake, not a value update.
        return Err(ConfigError::UnknownKey(key.into()));
    };
    let parent = lookup_mut(root, section).ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
    let object = parent
        .as_object_mut()
        .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;
    let existing = object
        .get(field)
        .ok_or_else(|| ConfigError::UnknownKey(key.into()))?;

    let new_value = match existing {
        serde_json::Value::Bool(_) => {
            let parsed = value.parse::<bool>().map_err(|_| ConfigError::InvalidValue {
                key: key.into(),
                message: format!("cannot parse '{value}' as bool"),
            })?;
            serde_json::Value::Bool(parsed)
        }
        serde_json::Value::Number(_) => {
            let parsed = value.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: key.into(),
                message: format!("cannot parse '{value}' as number"),
            })?;
            serde_json::Value::Number(parsed.into())
        }
        _ => serde_json::Value::String(value.into()),
    };
    object.insert(field.to_string(), new_value);
    Ok(())
}

fn lookup_mut<'a>(
    root: &'a mut serde_json::Value,
    key: &str,
) -> Option<&'a mut serde_json::Value> {
    let mut current = root;
    for part in key.split('.') {
        current = current.get_mut(part)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrips_through_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.ui.tick_ms, 100);
        assert_eq!(parsed.alarm.player, "mpg123");
        assert!(parsed.youtube.channel_id.is_empty());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let config = Config::default();
        assert_eq!(config.get("ui.tick_ms").as_deref(), Some("100"));
        assert_eq!(config.get("alarm.player").as_deref(), Some("mpg123"));
        assert!(config.get("ui.missing_key").is_none());
        assert!(config.get("").is_none());
    }

    #[test]
    fn assign_updates_nested_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assign(&mut json, "ui.tick_ms", "250").unwrap();
        assert_eq!(lookup(&json, "ui.tick_ms").unwrap(), &serde_json::json!(250));
    }

    #[test]
    fn assign_updates_nested_string() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assign(&mut json, "youtube.channel_id", "UC123").unwrap();
        assert_eq!(
            lookup(&json, "youtube.channel_id").unwrap(),
            &serde_json::json!("UC123")
        );
    }

    #[test]
    fn assign_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            assign(&mut json, "ui.nonexistent", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            assign(&mut json, "toplevel", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn assign_rejects_bad_number() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            assign(&mut json, "ui.tick_ms", "fast"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
