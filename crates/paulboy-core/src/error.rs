//! Core error types for paulboy-core.
//!
//! One hierarchy per collaborator seam, tied together by [`CoreError`]
//! so the event loop can propagate any of them with `?`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for paulboy-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Habit record store errors
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Channel statistics fetch errors
    #[error("stats fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Playback transport errors
    #[error("playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Habit record store errors.
///
/// A missing record is not an error (first run); everything here is a
/// real failure the caller must see, so user progress is never zeroed
/// silently.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The record file exists but could not be read
    #[error("failed to read habit record at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record file exists but does not parse
    #[error("corrupt habit record at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the replacement record failed
    #[error("failed to write habit record at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding the record to JSON failed
    #[error("failed to encode habit record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name an existing configuration field
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed into the field's type
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Channel statistics fetch errors.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("stats API error: HTTP {status}")]
    Api { status: u16 },

    /// The response body is missing expected fields
    #[error("malformed stats response: {0}")]
    Malformed(String),

    /// The blocking runtime for the fetch could not be built
    #[error("fetch runtime error: {0}")]
    Runtime(#[from] io::Error),
}

/// Playback transport errors.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// The selected track is gone from disk
    #[error("track not found: {0}")]
    MissingTrack(PathBuf),

    /// The external player process could not be started
    #[error("failed to spawn player '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
