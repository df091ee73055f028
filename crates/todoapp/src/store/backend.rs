use crate::error::Result;

/// Text storage keyed by string, one value per key.
///
/// Backends only move bytes. Encoding, back-filling and recovering from bad
/// data live in [`super::Persistence`].
pub trait StorageBackend {
    /// `Ok(None)` when `key` was never written. An `Err` means the storage
    /// itself failed, not that the key is missing.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`. A reader never sees a half-written
    /// value, even if the process dies mid-write.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Whether this environment has durable storage at all.
    fn is_available(&self) -> bool;
}

impl<B: StorageBackend + ?Sized> StorageBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
