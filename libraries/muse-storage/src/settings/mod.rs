//! Persisted listening settings
//!
//! Stores the restart-surviving subset of the playback session
//! (`volume`, `repeat`, `shuffle`) as a JSON document under a fixed
//! storage key. Nothing else about the session is persisted: the
//! queue, current track, transport flag, and position always reset on
//! a fresh start.
//!
//! Writes are best-effort by design: the embedding layer snapshots the
//! session after a batch of transitions and calls
//! [`SettingsStore::save_best_effort`], and a failed write must never
//! fail the playback transition that triggered it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use muse_playback::PlayerSettings;

use crate::error::Result;

/// Fixed storage key for the player settings document
///
/// The on-disk file is `<dir>/<SETTINGS_KEY>.json`.
pub const SETTINGS_KEY: &str = "muse.player.settings";

/// File-backed store for [`PlayerSettings`]
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store rooted at `dir`
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{SETTINGS_KEY}.json")),
        }
    }

    /// Path of the settings document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted settings
    ///
    /// A missing document is not an error: a client that has never
    /// saved anything starts from [`PlayerSettings::default`].
    /// Unreadable or malformed content is reported so the caller can
    /// decide whether to fall back.
    pub fn load(&self) -> Result<PlayerSettings> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(PlayerSettings::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the settings document, creating the directory if needed
    pub fn save(&self, settings: &PlayerSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Write the settings document, logging instead of failing
    ///
    /// Persistence failures must not surface to playback callers; the
    /// in-memory session stays authoritative either way.
    pub fn save_best_effort(&self, settings: &PlayerSettings) {
        if let Err(e) = self.save(settings) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to persist player settings"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muse_playback::RepeatMode;

    #[test]
    fn load_without_document_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());

        let settings = store.load().unwrap();
        assert_eq!(settings, PlayerSettings::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());

        let settings = PlayerSettings {
            volume: 0.3,
            repeat: RepeatMode::One,
            shuffle: true,
        };

        store.save(&settings).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("nested").join("state"));

        store.save(&PlayerSettings::default()).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn document_lives_under_the_fixed_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());

        assert_eq!(
            store.path().file_name().unwrap().to_str().unwrap(),
            "muse.player.settings.json"
        );
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());

        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn best_effort_save_never_panics() {
        // A directory where the document path itself is a directory, so
        // the write fails.
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        fs::create_dir_all(store.path()).unwrap();

        store.save_best_effort(&PlayerSettings::default());

        // The failure was swallowed; loading still reports it.
        assert!(store.load().is_err());
    }
}
