//! Packet writer.
//!
//! A packet is one object of the document array, describing one entity by
//! `id`. Graphics and other properties are written through child writers.

use super::element::ElementWriter;
use super::schema::{BoxWriter, RectangleWriter};
use super::scope::PacketCore;
use crate::core::TimeInterval;
use crate::output::SharedOutput;
use crate::util::{Error, Result};

/// Writes one CZML packet.
#[derive(Clone, Debug, Default)]
pub struct PacketWriter {
    core: PacketCore,
    description: Option<super::StringWriter>,
    rectangle: Option<RectangleWriter>,
    box_graphics: Option<BoxWriter>,
}

impl PacketWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the `id` of the entity this packet describes.
    pub fn write_id(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::invalid_argument("packet id is empty"));
        }
        self.core.write_member("id", |out| out.write_value(id))
    }

    /// Write the display `name` of the entity.
    pub fn write_name(&mut self, name: &str) -> Result<()> {
        self.core.write_member("name", |out| out.write_value(name))
    }

    /// Write the `id` of the parent entity.
    pub fn write_parent(&mut self, parent: &str) -> Result<()> {
        self.core.write_member("parent", |out| out.write_value(parent))
    }

    /// Write the `delete` flag; a client removes the entity instead of
    /// updating it.
    pub fn write_delete(&mut self, delete: bool) -> Result<()> {
        self.core.write_member("delete", |out| out.write_value(&delete))
    }

    /// Write the interval during which the entity exists.
    pub fn write_availability(&mut self, interval: &TimeInterval) -> Result<()> {
        let text = interval.to_iso8601();
        self.core.write_member("availability", |out| out.write_value(&text))
    }

    /// Write the CZML `version`; only meaningful on the document packet.
    pub fn write_version(&mut self, version: &str) -> Result<()> {
        self.core.write_member("version", |out| out.write_value(version))
    }

    property_accessors! {
        properties {
            /// Write the `description` property, an HTML description of the
            /// entity.
            description("description"): String = None
                => description_writer, open_description_property,
                   write_description_property, write_description_property_reference;
        }
        composites {
            /// The rectangle graphics of the entity.
            rectangle("rectangle"): RectangleWriter => rectangle_writer, open_rectangle_property;
            /// The box graphics of the entity.
            box_graphics("box"): BoxWriter => box_writer, open_box_property;
        }
    }
}

impl ElementWriter for PacketWriter {
    fn open(&mut self, output: &SharedOutput) -> Result<()> {
        self.core.open(output)?;
        tracing::trace!("packet open");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.core.close()?;
        tracing::trace!("packet close");
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.core.is_open()
    }
}
