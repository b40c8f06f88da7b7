//! CZML output stream.
//!
//! A streaming JSON writer: objects, arrays, member names and scalar values are
//! emitted as they are written, with separators and optional indentation
//! handled here. The stream also keeps the stack of currently open element
//! writers so misuse (two siblings open at once, a parent closed before its
//! child) is caught at the call that causes it.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::rc::Rc;

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::WriterSettings;
use crate::util::{Error, Result};

/// Output stream shared by every writer of one document.
pub type SharedOutput = Rc<RefCell<CzmlOutputStream>>;

/// Identifies one open session of an element writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WriterToken(u64);

#[derive(Clone, Copy, Debug)]
enum Frame {
    Object { members: usize, pending_name: bool },
    Array { items: usize },
}

/// Streaming JSON output for CZML documents.
pub struct CzmlOutputStream {
    sink: Box<dyn Write>,
    settings: WriterSettings,
    frames: SmallVec<[Frame; 16]>,
    root_written: bool,
    writers: SmallVec<[WriterToken; 16]>,
    child_grant: Option<WriterToken>,
    next_token: u64,
}

impl fmt::Debug for CzmlOutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CzmlOutputStream")
            .field("settings", &self.settings)
            .field("depth", &self.frames.len())
            .field("open_writers", &self.writers.len())
            .finish_non_exhaustive()
    }
}

impl CzmlOutputStream {
    /// Create an output stream writing into `sink`.
    pub fn new(sink: impl Write + 'static, settings: WriterSettings) -> Self {
        Self {
            sink: Box::new(sink),
            settings,
            frames: SmallVec::new(),
            root_written: false,
            writers: SmallVec::new(),
            child_grant: None,
            next_token: 0,
        }
    }

    /// Wrap into the shared handle writers hold.
    pub fn into_shared(self) -> SharedOutput {
        Rc::new(RefCell::new(self))
    }

    /// Document settings.
    #[inline]
    pub fn settings(&self) -> &WriterSettings {
        &self.settings
    }

    /// Current JSON nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True when a member name has been written and its value is pending.
    pub fn is_value_pending(&self) -> bool {
        matches!(self.frames.last(), Some(Frame::Object { pending_name: true, .. }))
    }

    // === Open writer stack ===

    /// Let the innermost writer `parent` have one child opened inside it.
    pub fn grant_child(&mut self, parent: WriterToken) -> Result<()> {
        self.expect_active(parent)?;
        self.child_grant = Some(parent);
        Ok(())
    }

    /// Fail unless a writer may be opened now: either no writer is open, or
    /// the innermost one granted a child.
    pub fn expect_can_open(&self) -> Result<()> {
        match self.active_writer() {
            None => Ok(()),
            Some(active) if self.child_grant == Some(active) => Ok(()),
            Some(_) => Err(Error::invalid_operation(
                "cannot open a writer here: another writer is open; open it through its parent",
            )),
        }
    }

    /// Register a newly opened element writer, consuming the parent's grant.
    pub fn begin_writer(&mut self) -> Result<WriterToken> {
        self.expect_can_open()?;
        let token = WriterToken(self.next_token);
        self.next_token += 1;
        self.child_grant = None;
        self.writers.push(token);
        Ok(token)
    }

    /// Unregister an element writer; it must be the innermost open one.
    pub fn end_writer(&mut self, token: WriterToken) -> Result<()> {
        self.expect_active(token)?;
        self.writers.pop();
        self.child_grant = None;
        Ok(())
    }

    /// Innermost open element writer.
    #[inline]
    pub fn active_writer(&self) -> Option<WriterToken> {
        self.writers.last().copied()
    }

    /// Number of open element writers.
    #[inline]
    pub fn open_writers(&self) -> usize {
        self.writers.len()
    }

    /// Fail unless `token` is the innermost open writer.
    pub fn expect_active(&self, token: WriterToken) -> Result<()> {
        match self.active_writer() {
            Some(active) if active == token => Ok(()),
            Some(_) => Err(Error::invalid_operation(
                "another writer opened inside this one is still open; close it first",
            )),
            None => Err(Error::invalid_operation("writer is not open on this output")),
        }
    }

    // === JSON structure ===

    /// Write `{`.
    pub fn write_start_object(&mut self) -> Result<()> {
        self.begin_value()?;
        self.sink.write_all(b"{")?;
        self.frames.push(Frame::Object { members: 0, pending_name: false });
        Ok(())
    }

    /// Write `}`.
    pub fn write_end_object(&mut self) -> Result<()> {
        match self.frames.last() {
            Some(Frame::Object { pending_name: false, members }) => {
                let members = *members;
                self.frames.pop();
                if members > 0 {
                    self.newline()?;
                }
                self.sink.write_all(b"}")?;
                Ok(())
            }
            Some(Frame::Object { pending_name: true, .. }) => {
                Err(Error::invalid_operation("cannot end object: member value is missing"))
            }
            _ => Err(Error::invalid_operation("cannot end object: no object is open")),
        }
    }

    /// Write `[`.
    pub fn write_start_sequence(&mut self) -> Result<()> {
        self.begin_value()?;
        self.sink.write_all(b"[")?;
        self.frames.push(Frame::Array { items: 0 });
        Ok(())
    }

    /// Write `]`.
    pub fn write_end_sequence(&mut self) -> Result<()> {
        match self.frames.last() {
            Some(Frame::Array { items }) => {
                let items = *items;
                self.frames.pop();
                if items > 0 {
                    self.newline()?;
                }
                self.sink.write_all(b"]")?;
                Ok(())
            }
            _ => Err(Error::invalid_operation("cannot end sequence: no sequence is open")),
        }
    }

    /// Write a member name inside the current object.
    pub fn write_property_name(&mut self, name: &str) -> Result<()> {
        let members = match self.frames.last_mut() {
            Some(Frame::Object { members, pending_name }) => {
                if *pending_name {
                    return Err(Error::invalid_operation(format!(
                        "cannot write member '{name}': previous member has no value"
                    )));
                }
                *pending_name = true;
                *members += 1;
                *members
            }
            _ => {
                return Err(Error::invalid_operation(format!(
                    "cannot write member '{name}' outside an object"
                )))
            }
        };
        if members > 1 {
            self.sink.write_all(b",")?;
        }
        self.newline()?;
        serde_json::to_writer(&mut self.sink, name)?;
        if self.settings.pretty {
            self.sink.write_all(b": ")?;
        } else {
            self.sink.write_all(b":")?;
        }
        Ok(())
    }

    /// Write a scalar JSON value (number, string, boolean).
    pub fn write_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.begin_value()?;
        serde_json::to_writer(&mut self.sink, value)?;
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    fn begin_value(&mut self) -> Result<()> {
        let separator = match self.frames.last_mut() {
            Some(Frame::Object { pending_name, .. }) => {
                if !*pending_name {
                    return Err(Error::invalid_operation(
                        "cannot write a value inside an object without a member name",
                    ));
                }
                *pending_name = false;
                return Ok(());
            }
            Some(Frame::Array { items }) => {
                *items += 1;
                *items > 1
            }
            None => {
                if self.root_written {
                    return Err(Error::invalid_operation("document already has a root value"));
                }
                self.root_written = true;
                return Ok(());
            }
        };
        if separator {
            self.sink.write_all(b",")?;
        }
        self.newline()
    }

    fn newline(&mut self) -> Result<()> {
        if self.settings.pretty {
            let width = self.frames.len() * self.settings.indent;
            write!(self.sink, "\n{:width$}", "", width = width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::MemorySink;

    fn stream(pretty: bool) -> (CzmlOutputStream, MemorySink) {
        let sink = MemorySink::new();
        let settings = if pretty { WriterSettings::pretty() } else { WriterSettings::default() };
        (CzmlOutputStream::new(sink.clone(), settings), sink)
    }

    #[test]
    fn test_compact_nesting() -> Result<()> {
        let (mut out, sink) = stream(false);
        out.write_start_sequence()?;
        out.write_start_object()?;
        out.write_property_name("id")?;
        out.write_value("a\"b")?;
        out.write_property_name("values")?;
        out.write_start_sequence()?;
        out.write_value(&1)?;
        out.write_value(&2.5)?;
        out.write_end_sequence()?;
        out.write_end_object()?;
        out.write_start_object()?;
        out.write_end_object()?;
        out.write_end_sequence()?;
        assert_eq!(sink.contents(), r#"[{"id":"a\"b","values":[1,2.5]},{}]"#);
        assert_eq!(out.depth(), 0);
        Ok(())
    }

    #[test]
    fn test_pretty_output() -> Result<()> {
        let (mut out, sink) = stream(true);
        out.write_start_object()?;
        out.write_property_name("show")?;
        out.write_value(&true)?;
        out.write_end_object()?;
        assert_eq!(sink.contents(), "{\n  \"show\": true\n}");
        Ok(())
    }

    #[test]
    fn test_structure_errors() {
        let (mut out, _sink) = stream(false);
        assert!(out.write_property_name("x").unwrap_err().is_invalid_operation());
        out.write_start_object().unwrap();
        assert!(out.write_value(&1).unwrap_err().is_invalid_operation());
        out.write_property_name("x").unwrap();
        assert!(out.is_value_pending());
        assert!(out.write_property_name("y").unwrap_err().is_invalid_operation());
        assert!(out.write_end_object().unwrap_err().is_invalid_operation());
        assert!(out.write_end_sequence().unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_single_root() {
        let (mut out, _sink) = stream(false);
        out.write_value(&1).unwrap();
        assert!(out.write_value(&2).unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_writer_stack() {
        let (mut out, _sink) = stream(false);
        let outer = out.begin_writer().unwrap();
        assert!(out.begin_writer().unwrap_err().is_invalid_operation());
        out.grant_child(outer).unwrap();
        let inner = out.begin_writer().unwrap();
        assert_eq!(out.active_writer(), Some(inner));
        assert!(out.expect_can_open().is_err());
        assert!(out.end_writer(outer).unwrap_err().is_invalid_operation());
        out.end_writer(inner).unwrap();
        out.end_writer(outer).unwrap();
        assert_eq!(out.open_writers(), 0);
        assert!(out.expect_active(outer).is_err());
    }
}
