//! Key/value persistence
//!
//! This module models the two storage tiers the session relies on: a durable
//! tier that survives restarts (a JSON file) and a session-scoped tier that
//! lives only as long as the process. Values are stored as serialized JSON.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn, error};

use crate::utils::errors::{CourseDeskError, Result};

/// Durable key holding the serialized current user
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Session key holding the authentication flag
pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";

/// Raw string key/value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: String) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

fn poisoned(what: &str) -> CourseDeskError {
    CourseDeskError::Storage(format!("{} lock poisoned", what))
}

/// In-memory store, used for the session tier
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned("memory store"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned("memory store"))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned("memory store"))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed store; the whole map is rewritten on every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                match serde_json::from_str::<HashMap<String, String>>(&content) {
                    Ok(entries) => entries,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Durable storage file is corrupted, starting empty");
                        HashMap::new()
                    }
                }
            }
        } else {
            HashMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened durable storage");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| poisoned("file store"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned("file store"))?;
        entries.insert(key.to_string(), value);
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned("file store"))?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

/// Which storage tier an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Durable,
    Session,
}

/// Typed get/set/remove over both tiers
#[derive(Clone)]
pub struct PersistenceAdapter {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, session }
    }

    /// Both tiers in memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    /// Durable tier from an optional file, session tier in memory
    pub fn from_path(durable_path: Option<&str>) -> Result<Self> {
        let durable: Arc<dyn KeyValueStore> = match durable_path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        Ok(Self::new(durable, Arc::new(MemoryStore::new())))
    }

    fn store(&self, tier: Tier) -> &dyn KeyValueStore {
        match tier {
            Tier::Durable => self.durable.as_ref(),
            Tier::Session => self.session.as_ref(),
        }
    }

    /// Serialize and store a value
    pub fn set<T: Serialize>(&self, tier: Tier, key: &str, value: &T) -> Result<()> {
        let serialized = serde_json::to_string(value)?;
        self.store(tier).set(key, serialized).map_err(|e| {
            error!(tier = ?tier, key = key, error = %e, "Failed to write storage entry");
            e
        })
    }

    /// Read a value; unreadable or corrupted entries read as absent
    pub fn get<T: DeserializeOwned>(&self, tier: Tier, key: &str) -> Option<T> {
        let raw = match self.store(tier).get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                error!(tier = ?tier, key = key, error = %e, "Failed to read storage entry");
                return None;
            }
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(tier = ?tier, key = key, error = %e, "Discarding unreadable storage entry");
                None
            }
        }
    }

    pub fn remove(&self, tier: Tier, key: &str) -> Result<()> {
        self.store(tier).remove(key)
    }

    pub fn set_durable<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set(Tier::Durable, key, value)
    }

    pub fn get_durable<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(Tier::Durable, key)
    }

    pub fn remove_durable(&self, key: &str) -> Result<()> {
        self.remove(Tier::Durable, key)
    }

    pub fn set_session<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set(Tier::Session, key, value)
    }

    pub fn get_session<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(Tier::Session, key)
    }

    pub fn remove_session(&self, key: &str) -> Result<()> {
        self.remove(Tier::Session, key)
    }
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter").finish_non_exhaustive()
    }
}
