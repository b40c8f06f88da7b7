//! Document writer: the JSON array of packets.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::element::{ElementWriter, Scoped};
use super::packet::PacketWriter;
use crate::core::WriterSettings;
use crate::output::{CzmlOutputStream, SharedOutput};
use crate::util::{Error, Result};

/// CZML version written into the document packet.
pub const CZML_VERSION: &str = "1.0";

/// Writes a CZML document: `[`, one packet after another, `]`.
pub struct CzmlDocument {
    output: SharedOutput,
    packet: PacketWriter,
    packets: usize,
}

impl CzmlDocument {
    /// Start a document on `sink`.
    pub fn new(sink: impl Write + 'static, settings: WriterSettings) -> Result<Self> {
        let output = CzmlOutputStream::new(sink, settings).into_shared();
        output.borrow_mut().write_start_sequence()?;
        tracing::debug!("czml document started");
        Ok(Self {
            output,
            packet: PacketWriter::new(),
            packets: 0,
        })
    }

    /// Start a document in a new file at `path`.
    pub fn create(path: impl AsRef<Path>, settings: WriterSettings) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        tracing::debug!(path = %path.display(), "creating czml file");
        Self::new(BufWriter::new(file), settings)
    }

    /// The shared output, for writers opened directly by the caller.
    pub fn output(&self) -> &SharedOutput {
        &self.output
    }

    /// Open the next packet. The previous one must be closed.
    pub fn open_packet(&mut self) -> Result<&mut PacketWriter> {
        self.packet.open(&self.output)?;
        self.packets += 1;
        tracing::debug!(index = self.packets - 1, "packet opened");
        Ok(&mut self.packet)
    }

    /// Write the leading `document` packet with `name` and the CZML version.
    /// It must be the first packet of the document.
    pub fn write_document_packet(&mut self, name: &str) -> Result<()> {
        if self.packets > 0 {
            return Err(Error::invalid_operation(
                "the document packet must be the first packet",
            ));
        }
        let mut packet = Scoped::adopt(self.open_packet()?);
        packet.write_id("document")?;
        packet.write_name(name)?;
        packet.write_version(CZML_VERSION)?;
        packet.finish()
    }

    /// Number of packets opened so far.
    pub fn packet_count(&self) -> usize {
        self.packets
    }

    /// Close the document array and flush. Fails if a packet is still open.
    pub fn finish(self) -> Result<()> {
        let mut out = self.output.borrow_mut();
        if out.open_writers() > 0 {
            return Err(Error::invalid_operation(format!(
                "cannot finish document: {} writer(s) still open",
                out.open_writers()
            )));
        }
        out.write_end_sequence()?;
        out.flush()?;
        tracing::debug!(packets = self.packets, "czml document finished");
        Ok(())
    }
}
