//! Muse Player Storage
//!
//! Client-side persistence layer for Muse Player's playback core.
//!
//! Only the listening settings survive a restart (`volume`, `repeat`,
//! `shuffle`), stored as a JSON document under the fixed
//! [`settings::SETTINGS_KEY`] storage key. Track and playlist data
//! live in the catalog service and are never written here.
//!
//! # Example
//!
//! ```rust,no_run
//! use muse_playback::PlaybackSession;
//! use muse_storage::SettingsStore;
//!
//! # fn example() -> Result<(), muse_storage::StorageError> {
//! let store = SettingsStore::new("/home/user/.local/state/muse");
//!
//! // On startup: restore the persisted subset.
//! let mut session = PlaybackSession::with_settings(store.load()?);
//!
//! // After a batch of transitions: snapshot and save, best-effort.
//! session.set_volume(0.8);
//! store.save_best_effort(&session.settings());
//! # Ok(())
//! # }
//! ```

mod error;

pub mod settings;

pub use error::StorageError;
pub use settings::SettingsStore;
