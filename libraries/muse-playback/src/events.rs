//! Playback events
//!
//! Notification surface for the layers observing the session (UI,
//! audio output). Events report transitions that actually happened;
//! the session state itself stays the source of truth, so observers
//! that miss a drain can always re-read it.

use serde::{Deserialize, Serialize};

use crate::types::RepeatMode;

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport flag flipped between playing and paused
    StateChanged {
        /// Whether playback is now active
        playing: bool,
    },

    /// A different track became current, or the current track was
    /// dropped (`track_id` is `None` when nothing is loaded anymore)
    TrackChanged {
        /// Identifier of the new current track
        track_id: Option<String>,
        /// Identifier of the track that was current before
        previous_track_id: Option<String>,
    },

    /// Queue membership changed (tracks added, removed, or cleared)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume in `[0.0, 1.0]`
        volume: f32,
    },

    /// Repeat mode cycled
    RepeatModeChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// Shuffle flag flipped
    ShuffleChanged {
        /// Whether shuffle is now enabled
        enabled: bool,
    },
}
