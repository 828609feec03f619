//! Key-value persistence.
//!
//! The app persists exactly two values: the last selected mood and the
//! serialized favorites list. `KeyValueStore` keeps the core logic free of
//! any filesystem assumptions; `FileStore` is the production implementation
//! with one file per key under the platform data directory.

use anyhow::Result;
use std::path::PathBuf;

/// Storage key for the last selected mood
pub const KEY_MOOD: &str = "current-mood";
/// Storage key for the serialized favorites list
pub const KEY_FAVORITES: &str = "favorites";

/// A string-valued key-value store that survives across sessions
pub trait KeyValueStore {
    /// Read a value. Missing keys and unreadable entries are both `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Get the store directory under the platform data dir
    pub fn default_dir() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "quip", "Quip")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Open the store at the default location
    pub fn open() -> Result<Self> {
        let dir = Self::default_dir()?;
        std::fs::create_dir_all(&dir)?;
        tracing::info!("Opened store at {:?}", dir);
        Ok(Self { dir })
    }

    /// Open a store rooted at an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.join(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path());

        assert_eq!(store.get(KEY_MOOD), None);
        store.set(KEY_MOOD, "chill").unwrap();
        assert_eq!(store.get(KEY_MOOD).as_deref(), Some("chill"));

        store.set(KEY_MOOD, "dark").unwrap();
        assert_eq!(store.get(KEY_MOOD).as_deref(), Some("dark"));
    }

    #[test]
    fn keys_are_independent_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::at(dir.path());

        store.set(KEY_MOOD, "sad").unwrap();
        store.set(KEY_FAVORITES, "[]").unwrap();

        assert_eq!(store.get(KEY_MOOD).as_deref(), Some("sad"));
        assert_eq!(store.get(KEY_FAVORITES).as_deref(), Some("[]"));
        assert!(dir.path().join(KEY_MOOD).is_file());
        assert!(dir.path().join(KEY_FAVORITES).is_file());
    }
}
