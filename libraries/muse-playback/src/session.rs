//! Playback session - core state machine
//!
//! Owns "what is playing now": the current track, the upcoming queue,
//! the transport flag, and the listening settings. Every operation is
//! a synchronous, total state transition; edge cases (empty queue,
//! out-of-range index, repeated pause/resume) are defined no-ops, not
//! errors. The session performs no I/O and issues no device calls;
//! the audio layer observes it and reacts.

use std::time::Duration;

use crate::events::PlaybackEvent;
use crate::queue::{Queue, RemoveOutcome};
use crate::shuffle;
use crate::types::{PlayerSettings, RepeatMode, Track};

/// Playback session state machine
///
/// One instance per running client. Hosts dispatching events from
/// several threads must serialize access behind their own lock; the
/// session assumes at most one in-flight transition at a time.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    // Queue and selection
    queue: Queue,

    // Transport
    playing: bool,
    position: Duration,

    // Listening settings (the persisted subset)
    volume: f32,
    repeat: RepeatMode,
    shuffle: bool,

    // Event queue for observer synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackSession {
    /// Create a fresh session with an empty queue and default settings
    pub fn new() -> Self {
        Self::with_settings(PlayerSettings::default())
    }

    /// Create a session restoring previously persisted settings
    ///
    /// Only `volume`, `repeat`, and `shuffle` carry over; the queue,
    /// current track, transport flag, and position always start at
    /// their defaults. Out-of-range volume from a hand-edited settings
    /// file is clamped back into `[0.0, 1.0]`.
    pub fn with_settings(settings: PlayerSettings) -> Self {
        Self {
            queue: Queue::new(),
            playing: false,
            position: Duration::ZERO,
            volume: settings.volume.clamp(0.0, 1.0),
            repeat: settings.repeat,
            shuffle: settings.shuffle,
            pending_events: Vec::new(),
        }
    }

    // ===== Playback Control =====

    /// Start playing a track
    ///
    /// A track with a new identifier replaces the whole queue with just
    /// that track. Playing the track that is already current only flips
    /// the transport flag back on, leaving queue and position alone, so
    /// re-starting "the same song" resumes in place.
    pub fn play(&mut self, track: Track) {
        let same = self
            .queue
            .current_track()
            .is_some_and(|cur| cur.id == track.id);

        if same {
            self.set_playing(true);
            return;
        }

        let previous_id = self.current_track_id();
        self.queue.replace_with(track);
        self.position = Duration::ZERO;
        self.emit_queue_changed();
        self.emit_track_changed(previous_id);
        self.set_playing(true);
    }

    /// Pause playback
    ///
    /// No-op when already paused. Queue and position are untouched.
    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    /// Resume playback
    ///
    /// No-op when already playing.
    pub fn resume(&mut self) {
        self.set_playing(true);
    }

    /// Advance to another queue slot
    ///
    /// With an empty queue this is a no-op that leaves the transport
    /// flag alone. Under shuffle the target slot is picked at random
    /// (never the slot just left, unless it is the only one). Otherwise
    /// advancement is sequential; past the end the session wraps to
    /// slot 0 under repeat-all, or stops in place with the last track
    /// still loaded.
    ///
    /// Repeat-one is deliberately not handled here: the completion
    /// signal replays the same track via [`play`](Self::play) instead
    /// of calling `next`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let len = self.queue.len();
        if len == 0 {
            return;
        }

        let next_index = if self.shuffle {
            shuffle::pick_slot(&mut rand::thread_rng(), len, self.queue.current_index())
        } else {
            let candidate = self.queue.current_index().map_or(0, |i| i + 1);
            if candidate >= len {
                if self.repeat == RepeatMode::All {
                    0
                } else {
                    // Queue exhausted: stop, keep the last track loaded.
                    self.set_playing(false);
                    return;
                }
            } else {
                candidate
            }
        };

        self.select(next_index);
    }

    /// Step back to the queue slot immediately before the current one
    ///
    /// No wraparound and no shuffle-awareness: stepping back is always
    /// predictable, even mid-shuffle. No-op at slot 0 or with nothing
    /// loaded.
    pub fn previous(&mut self) {
        if let Some(index) = self.queue.current_index() {
            if index > 0 {
                self.select(index - 1);
            }
        }
    }

    // ===== Queue Management =====

    /// Append a track to the end of the queue
    ///
    /// Never touches the current track or the transport flag; starting
    /// playback on a previously empty queue is a separate explicit
    /// action.
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push(track);
        self.emit_queue_changed();
    }

    /// Append several tracks to the end of the queue, preserving order
    pub fn append_to_queue(&mut self, tracks: Vec<Track>) {
        if tracks.is_empty() {
            return;
        }
        self.queue.extend(tracks);
        self.emit_queue_changed();
    }

    /// Empty the queue and drop the current track
    ///
    /// The transport flag, volume, repeat mode, and shuffle flag are
    /// untouched; callers wanting a full stop also call
    /// [`pause`](Self::pause).
    pub fn clear_queue(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let previous_id = self.current_track_id();
        self.queue.clear();
        self.position = Duration::ZERO;
        self.emit_queue_changed();
        if previous_id.is_some() {
            self.emit_track_changed(previous_id);
        }
    }

    /// Remove the queue slot at `index`
    ///
    /// Out-of-range indices are tolerated as a no-op. Removing a slot
    /// other than the current one never moves the current track.
    /// Removing the current slot hands playback to the track that
    /// slides into it; when the removed slot was the last, the session
    /// drops the current track and stops, the same outcome as running
    /// off the end of the queue.
    pub fn remove_from_queue(&mut self, index: usize) {
        let previous_id = self.current_track_id();

        match self.queue.remove(index) {
            RemoveOutcome::OutOfRange => {}
            RemoveOutcome::SelectionKept => {
                self.emit_queue_changed();
            }
            RemoveOutcome::SelectionAdvanced => {
                self.position = Duration::ZERO;
                self.emit_queue_changed();
                self.emit_track_changed(previous_id);
            }
            RemoveOutcome::SelectionCleared => {
                self.position = Duration::ZERO;
                self.emit_queue_changed();
                self.emit_track_changed(previous_id);
                self.set_playing(false);
            }
        }
    }

    // ===== Settings & Position =====

    /// Set the output volume, clamped to `[0.0, 1.0]`
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if self.volume != volume {
            self.volume = volume;
            self.pending_events
                .push(PlaybackEvent::VolumeChanged { volume });
        }
    }

    /// Record the elapsed time reported by the audio layer
    ///
    /// Ignored while nothing is loaded, so the position can only ever
    /// be nonzero with a current track.
    pub fn set_position(&mut self, position: Duration) {
        if self.queue.current_track().is_some() {
            self.position = position;
        }
    }

    /// Cycle the repeat mode: off, one, all, then off again
    pub fn toggle_repeat(&mut self) {
        self.repeat = self.repeat.cycled();
        self.pending_events
            .push(PlaybackEvent::RepeatModeChanged { mode: self.repeat });
    }

    /// Flip the shuffle flag
    ///
    /// The queue order is never physically reshuffled; shuffle only
    /// changes how [`next`](Self::next) picks its target slot.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.pending_events.push(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
    }

    // ===== State Queries =====

    /// All queued tracks in order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Number of tracks in the queue
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Index of the current track within the queue, if any
    pub fn current_index(&self) -> Option<usize> {
        self.queue.current_index()
    }

    /// The track currently loaded for output, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current_track()
    }

    /// Whether playback is active
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Elapsed time within the current track
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Output volume in `[0.0, 1.0]`
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether shuffle is enabled
    pub fn shuffle_enabled(&self) -> bool {
        self.shuffle
    }

    /// Snapshot of the persisted settings subset
    ///
    /// The embedding layer saves this after a batch of transitions; the
    /// session itself never writes anywhere.
    pub fn settings(&self) -> PlayerSettings {
        PlayerSettings {
            volume: self.volume,
            repeat: self.repeat,
            shuffle: self.shuffle,
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain. Observers call
    /// this after dispatching user or device input.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// Make `index` current: reset position, flag playing, notify
    fn select(&mut self, index: usize) {
        let previous_id = self.current_track_id();
        self.queue.select(index);
        self.position = Duration::ZERO;
        self.emit_track_changed(previous_id);
        self.set_playing(true);
    }

    fn current_track_id(&self) -> Option<String> {
        self.queue.current_track().map(|t| t.id.clone())
    }

    /// Flip the transport flag, notifying only on an actual change
    fn set_playing(&mut self, playing: bool) {
        if self.playing != playing {
            self.playing = playing;
            self.pending_events
                .push(PlaybackEvent::StateChanged { playing });
        }
    }

    /// Emit a track changed event unless the current id is unchanged
    ///
    /// Duplicate tracks in adjacent slots advance without a
    /// notification; observers keyed on the id have nothing to reload.
    fn emit_track_changed(&mut self, previous_track_id: Option<String>) {
        let track_id = self.current_track_id();
        if track_id != previous_track_id {
            self.pending_events.push(PlaybackEvent::TrackChanged {
                track_id,
                previous_track_id,
            });
        }
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}
