//! Core types for the playback session

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Track reference held by the playback queue
///
/// Carries the metadata needed for playback and display, already
/// resolved by the catalog. The session stores and reorders these
/// values but never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Opaque track identifier from the catalog
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Cover artwork reference (optional)
    pub artwork_url: Option<String>,

    /// Track duration
    pub duration: Duration,

    /// Audio source reference for the output layer
    pub audio_url: String,
}

/// Repeat mode
///
/// Governs what happens when the queue's end is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the queue ends
    #[default]
    Off,

    /// Replay the current track indefinitely
    ///
    /// Honored by the completion signal (replay via `play`), not by
    /// `next`, which always means "advance to a different slot".
    One,

    /// Wrap around to the start of the queue
    All,
}

impl RepeatMode {
    /// Next mode in the `Off -> One -> All -> Off` cycle
    pub fn cycled(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::One,
            RepeatMode::One => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }
}

/// Listening settings that survive application restarts
///
/// This is the only persisted part of the session. The queue, current
/// track, transport flag, and position always reset on a fresh start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Output volume in `[0.0, 1.0]`
    pub volume: f32,

    /// Repeat mode
    pub repeat: RepeatMode,

    /// Whether shuffle is enabled
    pub shuffle: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            repeat: RepeatMode::Off,
            shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = PlayerSettings::default();
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.repeat, RepeatMode::Off);
        assert!(!settings.shuffle);
    }

    #[test]
    fn repeat_mode_cycle() {
        assert_eq!(RepeatMode::Off.cycled(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycled(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycled(), RepeatMode::Off);
    }

    #[test]
    fn repeat_mode_cycle_returns_to_start() {
        let mode = RepeatMode::Off;
        assert_eq!(mode.cycled().cycled().cycled(), RepeatMode::Off);
    }

    #[test]
    fn track_creation() {
        let track = Track {
            id: "track1".to_string(),
            title: "Test Song".to_string(),
            artist: "Test Artist".to_string(),
            artwork_url: Some("https://cdn.example.com/art/track1.jpg".to_string()),
            duration: Duration::from_secs(180),
            audio_url: "https://cdn.example.com/audio/track1.mp3".to_string(),
        };

        assert_eq!(track.id, "track1");
        assert_eq!(track.title, "Test Song");
    }
}
