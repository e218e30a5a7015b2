//! The storage port: one named key in a key-value store.
//!
//! Browser local storage is the contract this port abstracts: a string
//! value under a single key, where an absent key means an empty cart.
//! [`MemorySlot`] backs tests and ephemeral sessions; [`FileSlot`] is the
//! local-storage analogue for the CLI, one JSON file on disk.
//!
//! Cross-tab consistency is a known gap carried over from the browser
//! implementation: no locking and no change subscription. The slot is
//! accessed serially within one session.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// The slot key used by browser-side storage adapters.
pub const SLOT_KEY: &str = "pj_cart";

/// Error from the storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure (disk full, permissions, quota).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backend is unavailable (e.g., poisoned lock).
    #[error("Storage backend unavailable")]
    Unavailable,
}

/// A single persistent key-value slot.
pub trait StorageSlot {
    /// Read the slot value. `None` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read at all;
    /// callers treat this the same as an absent key.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value cannot be written.
    fn write(&self, value: &str) -> Result<(), StorageError>;

    /// Remove the key entirely. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the removal itself fails.
    fn clear(&self) -> Result<(), StorageError>;
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a value, as if left by a prior session.
    #[must_use]
    pub fn seeded(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let guard = self.value.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(guard.clone())
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        let mut guard = self.value.lock().map_err(|_| StorageError::Unavailable)?;
        *guard = Some(value.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.value.lock().map_err(|_| StorageError::Unavailable)?;
        *guard = None;
        Ok(())
    }
}

/// File-backed slot: the value lives in one file, absent file ⇔ absent key.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at the given path. The file is not created until the
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_roundtrip() {
        let slot = MemorySlot::new();
        assert!(slot.read().expect("read").is_none());
        slot.write("[]").expect("write");
        assert_eq!(slot.read().expect("read").as_deref(), Some("[]"));
        slot.clear().expect("clear");
        assert!(slot.read().expect("read").is_none());
    }

    #[test]
    fn test_file_slot_absent_file_reads_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let slot = FileSlot::new(dir.path().join("cart.json"));
        assert!(slot.read().expect("read").is_none());
    }

    #[test]
    fn test_file_slot_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let slot = FileSlot::new(dir.path().join("cart.json"));
        slot.write(r#"[{"id":1}]"#).expect("write");
        assert_eq!(slot.read().expect("read").as_deref(), Some(r#"[{"id":1}]"#));
    }

    #[test]
    fn test_file_slot_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let slot = FileSlot::new(dir.path().join("nested/state/cart.json"));
        slot.write("[]").expect("write");
        assert_eq!(slot.read().expect("read").as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_slot_clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let slot = FileSlot::new(dir.path().join("cart.json"));
        slot.clear().expect("clear absent");
        slot.write("[]").expect("write");
        slot.clear().expect("clear");
        slot.clear().expect("clear again");
        assert!(slot.read().expect("read").is_none());
    }
}
