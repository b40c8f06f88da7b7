//! Open/close lifecycle shared by every writer.

use std::ops::{Deref, DerefMut};

use crate::output::SharedOutput;
use crate::util::Result;

/// A writer that emits one element (a property, a packet, an interval list)
/// between an `open` and a `close`.
pub trait ElementWriter {
    /// Start the element on `output`. Fails if already open.
    fn open(&mut self, output: &SharedOutput) -> Result<()>;

    /// Finish the element. Fails if not open or if a writer opened inside
    /// this one is still open.
    fn close(&mut self) -> Result<()>;

    fn is_open(&self) -> bool;
}

/// An open writer that is closed when the guard goes out of scope.
///
/// Use [`Scoped::finish`] to close explicitly and observe the result; a guard
/// dropped on an error path closes the writer and logs any failure.
pub struct Scoped<'a, W: ElementWriter> {
    writer: &'a mut W,
    finished: bool,
}

impl<'a, W: ElementWriter> Scoped<'a, W> {
    /// Open `writer` on `output` and guard it.
    pub fn open(writer: &'a mut W, output: &SharedOutput) -> Result<Self> {
        writer.open(output)?;
        Ok(Self { writer, finished: false })
    }

    /// Guard a writer that is already open.
    pub fn adopt(writer: &'a mut W) -> Self {
        Self { writer, finished: false }
    }

    /// Close the writer.
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        self.writer.close()
    }
}

impl<W: ElementWriter> Deref for Scoped<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.writer
    }
}

impl<W: ElementWriter> DerefMut for Scoped<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        self.writer
    }
}

impl<W: ElementWriter> Drop for Scoped<'_, W> {
    fn drop(&mut self) {
        if self.finished || !self.writer.is_open() {
            return;
        }
        if let Err(err) = self.writer.close() {
            tracing::warn!(%err, "failed to close writer on scope exit");
        }
    }
}
