//! Muse Player - Playback Session
//!
//! Platform-agnostic playback session management for Muse Player.
//!
//! This crate provides:
//! - The playback queue (ordered, duplicates allowed)
//! - Advancement rules (sequential, shuffle, repeat off/one/all)
//! - Transport state (playing/paused, elapsed position)
//! - Volume control (linear, `0.0`-`1.0`)
//! - The persisted settings subset (`volume`, `repeat`, `shuffle`)
//! - Playback events for observer layers
//!
//! # Architecture
//!
//! `muse-playback` is completely platform-agnostic:
//! - No dependency on the catalog service (tracks arrive resolved)
//! - No dependency on muse-storage (persistence is snapshot + save,
//!   driven by the embedding layer)
//! - No audio decoding or device calls (the output layer observes
//!   the session and reacts)
//!
//! Every operation is a synchronous, total state transition: empty
//! queues, out-of-range indices, and repeated pause/resume are defined
//! no-ops rather than errors.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use muse_playback::{PlaybackSession, Track};
//! use std::time::Duration;
//!
//! let mut session = PlaybackSession::new();
//! session.set_volume(0.8);
//!
//! let track = Track {
//!     id: "track1".to_string(),
//!     title: "My Song".to_string(),
//!     artist: "Artist Name".to_string(),
//!     artwork_url: None,
//!     duration: Duration::from_secs(180),
//!     audio_url: "https://cdn.example.com/audio/track1.mp3".to_string(),
//! };
//!
//! session.play(track);
//! assert!(session.is_playing());
//!
//! session.pause();
//! assert!(!session.is_playing());
//! ```
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use muse_playback::{PlaybackSession, Track};
//! use std::time::Duration;
//!
//! fn track(id: &str) -> Track {
//!     Track {
//!         id: id.to_string(),
//!         title: id.to_string(),
//!         artist: "Artist".to_string(),
//!         artwork_url: None,
//!         duration: Duration::from_secs(180),
//!         audio_url: format!("https://cdn.example.com/audio/{id}.mp3"),
//!     }
//! }
//!
//! let mut session = PlaybackSession::new();
//! session.append_to_queue(vec![track("a"), track("b"), track("c")]);
//!
//! session.next();
//! assert_eq!(session.current_track().unwrap().id, "a");
//!
//! session.next();
//! assert_eq!(session.current_track().unwrap().id, "b");
//!
//! session.previous();
//! assert_eq!(session.current_track().unwrap().id, "a");
//! ```
//!
//! # Example: Restoring Persisted Settings
//!
//! ```rust
//! use muse_playback::{PlaybackSession, PlayerSettings, RepeatMode};
//!
//! // Settings loaded by the embedding layer (e.g. via muse-storage).
//! let settings = PlayerSettings {
//!     volume: 0.3,
//!     repeat: RepeatMode::One,
//!     shuffle: true,
//! };
//!
//! let session = PlaybackSession::with_settings(settings);
//! assert_eq!(session.volume(), 0.3);
//! // The queue never survives a restart.
//! assert!(session.queue().is_empty());
//! assert!(session.current_track().is_none());
//! ```

mod events;
mod queue;
mod session;
mod shuffle;
pub mod types;

// Public exports
pub use events::PlaybackEvent;
pub use session::PlaybackSession;
pub use types::{PlayerSettings, RepeatMode, Track};
