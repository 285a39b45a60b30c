//! Durable local storage for the cart.
//!
//! The cart persists through a synchronous string-valued key-value
//! contract, the shape of a namespaced local store a client platform
//! provides. Backends report failures precisely; the cart store absorbs
//! them so a shopping action never fails on persistence.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Errors reported by a [`CartStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying store failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The key cannot be used by this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Synchronous key-value persistence contract for cart state.
///
/// Implementations are single-writer and complete each call before
/// returning; the cart relies on a write being durable once `set`
/// returns.
pub trait CartStorage {
    /// Read the value stored at `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably store `value` at `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write fails; the prior value
    /// must remain intact in that case.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value at `key`. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the delete fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// File-backed storage: one file per key under a state directory.
///
/// Writes go to a temporary file in the same directory and are renamed
/// into place, so a crash mid-write leaves the previous value intact.
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a store writing under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the store writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys become file names; reject anything that would escape the
        // state directory.
        if key.is_empty() || key.contains(['/', '\\', '\0']) || key == "." || key == ".." {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl CartStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests and ephemeral carts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
