use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use super::Storage;

/// In-memory storage whose clones share one blob.
///
/// Cloning hands out another handle to the same bytes, which lets a test drop
/// an interpreter mid-command and start a new one against what the first one
/// left behind.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `bytes`.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::new(Mutex::new(bytes.into())),
        }
    }

    /// Copy of the current blob.
    pub fn snapshot(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> io::Result<Vec<u8>> {
        Ok(self.bytes.lock().clone())
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        let mut guard = self.bytes.lock();
        guard.clear();
        guard.extend_from_slice(bytes);
        Ok(())
    }
}
