//! Persistence of the theme and preferred appearance
//!
//! A [`KeyValueStore`] is a plain byte store. [`ThemeStorage`] layers JSON
//! encoding on top and swallows failures: an unreadable value counts as
//! absent and a failed write only shows up in debug logs.

use crate::error::StorageError;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Storage keys
pub mod keys {
    pub const THEME: &str = "theming.theme.key";
    pub const PREFERRED_APPEARANCE: &str = "theming.preferredAppearance.key";
}

/// Byte-oriented key-value store
pub trait KeyValueStore: Send + Sync {
    /// Bytes stored under `key`, or `None` if nothing was stored
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `bytes` under `key`, replacing any previous value
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).write(key, bytes)
    }
}

/// JSON persistence adapter used by the theme provider
pub struct ThemeStorage {
    store: Box<dyn KeyValueStore>,
}

impl ThemeStorage {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Decode the value under `key`; absence and failures both yield `None`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.store.read(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(err) => {
                tracing::debug!("ThemeStorage::get - read of {} failed: {}", key, err);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!("ThemeStorage::get - {} is not decodable: {}", key, err);
                None
            }
        }
    }

    /// Encode and write `value`; failures are logged and dropped
    pub fn set<T: Serialize>(&self, value: &T, key: &str) {
        if let Err(err) = self.try_set(value, key) {
            tracing::debug!("ThemeStorage::set - write of {} failed: {}", key, err);
        }
    }

    fn try_set<T: Serialize>(&self, value: &T, key: &str) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.write(key, &bytes)
    }
}

impl std::fmt::Debug for ThemeStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStorage").finish_non_exhaustive()
    }
}

/// Shared in-memory store.
///
/// Clones share the same contents, so several providers can be built over
/// one store. Successful writes are counted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<FxHashMap<String, Vec<u8>>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw bytes under `key`
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Put raw bytes under `key` without counting a write
    pub fn insert_raw(&self, key: &str, bytes: impl Into<Vec<u8>>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), bytes.into());
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Io(std::io::Error::other("memory store poisoned")))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Io(std::io::Error::other("memory store poisoned")))?;
        entries.insert(key.to_string(), bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Directory store: one `<key>.json` file per key
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write to a sibling file and rename so readers never see a torn value.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
