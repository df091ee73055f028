use super::backend::StorageBackend;
use crate::error::Result;

/// Backend for contexts without durable storage (headless rendering, tests
/// that must not persist). Reads find nothing and writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackend;

impl NullBackend {
    pub fn new() -> Self {
        Self
    }
}

impl StorageBackend for NullBackend {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}
