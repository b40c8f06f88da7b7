//! In-memory sink.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Growable byte buffer usable as an output sink while the caller keeps a
/// handle to read the result back.
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.borrow().clone()
    }

    /// Contents decoded as UTF-8 (lossy).
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.buffer.borrow().len()
    }

    /// Check if nothing was written.
    pub fn is_empty(&self) -> bool {
        self.buffer.borrow().is_empty()
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
