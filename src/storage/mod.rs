//! Persistence medium for the journal
//!
//! A storage holds one opaque byte blob. It only knows how to hand the whole
//! blob back and how to overwrite it; composing appends out of those two
//! calls is the journal's job.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::io;

/// Read-all / overwrite-all byte store.
///
/// Each call must be durable before it returns: once `write` succeeds, a
/// later `read` (including one in a freshly started process) observes the
/// new bytes, and a `write` that fails leaves the previous bytes in place.
pub trait Storage {
    /// Current contents. A store that was never written returns an empty vector.
    fn read(&self) -> io::Result<Vec<u8>>;

    /// Replace the contents with `bytes`.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn read(&self) -> io::Result<Vec<u8>> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn read(&self) -> io::Result<Vec<u8>> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}
