//! Key/value persistence for the cart and its display flag.
//!
//! Storage is origin-scoped and last-write-wins: there is no locking and
//! no cross-instance coordination. The adapter absorbs every failure at
//! this boundary - a missing or corrupt value loads as the empty default,
//! and a failed write is logged and dropped, costing durability but never
//! correctness for the rest of the session.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::line::CartLine;

/// Storage key for the serialized cart lines.
pub const CART_KEY: &str = "hebe_cart";

/// Storage key for the minimized-display flag (`"1"`/`"0"`).
pub const MINIMIZED_KEY: &str = "hebe_cart_min";

/// Errors surfaced by a [`StorageBackend`].
///
/// These never cross the [`CartStorage`] boundary; the adapter logs and
/// recovers instead.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying medium failed (quota, permissions, missing dir).
    #[error("storage io error: {0}")]
    Io(#[from] io::Error),
}

/// A localStorage-shaped string key/value store.
pub trait StorageBackend {
    /// Read the value for a key, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the value for a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, bypassing the adapter (test setup).
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-per-key backend under a data directory.
///
/// The directory is created lazily on first write, so a fresh profile
/// reads as empty rather than erroring.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.dir.join(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}

/// The persistence adapter: cart and display-flag reads/writes with the
/// absorb-don't-propagate contract.
#[derive(Debug)]
pub struct CartStorage<B> {
    backend: B,
}

impl<B: StorageBackend> CartStorage<B> {
    /// Wrap a backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load the persisted cart, or an empty cart if the key is absent or
    /// the stored value does not parse.
    pub fn load_cart(&self) -> Vec<CartLine> {
        let raw = match self.backend.read(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("cart storage unreadable, starting empty: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("persisted cart is corrupt, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Persist the cart. Write failures are logged and dropped.
    pub fn save_cart(&mut self, lines: &[CartLine]) {
        let serialized = match serde_json::to_string(lines) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("failed to serialize cart: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.write(CART_KEY, &serialized) {
            tracing::warn!("cart not persisted (in-memory state unaffected): {e}");
        }
    }

    /// Load the minimized-display flag, `false` on absence or anything
    /// abnormal.
    pub fn load_minimized(&self) -> bool {
        match self.backend.read(MINIMIZED_KEY) {
            Ok(Some(raw)) => raw == "1",
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("display flag unreadable, defaulting to restored: {e}");
                false
            }
        }
    }

    /// Persist the minimized-display flag. Write failures are logged and
    /// dropped.
    pub fn save_minimized(&mut self, minimized: bool) {
        let marker = if minimized { "1" } else { "0" };
        if let Err(e) = self.backend.write(MINIMIZED_KEY, marker) {
            tracing::warn!("display flag not persisted: {e}");
        }
    }
}
