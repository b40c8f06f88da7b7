//! # CZML
//!
//! Streaming writer for CZML, the JSON format describing time-dynamic scenes
//! for a 3D globe client.
//!
//! A document is an array of packets; each packet describes one entity and
//! holds properties. Every property value is a literal, a set of time-tagged
//! samples, or a reference to another entity's property, optionally
//! restricted to time intervals.
//!
//! ## Modules
//!
//! - [`util`] - Errors and math re-exports
//! - [`core`] - Time values and writer settings
//! - [`output`] - Streaming JSON output shared by all writers
//! - [`value`] - Value kinds and their encodings
//! - [`writer`] - Document, packet, property and graphics writers
//!
//! ## Example
//!
//! ```ignore
//! use czml::prelude::*;
//!
//! let mut doc = CzmlDocument::create("scene.czml", WriterSettings::default())?;
//! doc.write_document_packet("scene")?;
//!
//! let packet = doc.open_packet()?;
//! packet.write_id("area")?;
//! let rect = packet.open_rectangle_property()?;
//! rect.write_coordinates_property_wsen_degrees(CartographicExtent::new(-10.0, 40.0, 5.0, 50.0))?;
//! rect.write_height_property(10.0)?;
//! rect.write_outline_color_property(Color::BLACK)?;
//! rect.close()?;
//! packet.close()?;
//!
//! doc.finish()?;
//! ```

pub mod util;
pub mod core;
pub mod output;
pub mod value;
pub mod writer;

// Re-export commonly used types
pub use util::{Error, Result};
pub use writer::{CzmlDocument, PacketWriter};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{DVec2, DVec3, Error, Result};
    pub use crate::core::{TimeEncoding, TimeInterval, Timestamp, WriterSettings};
    pub use crate::output::{CzmlOutputStream, MemorySink, SharedOutput};
    pub use crate::value::{
        Binding, Bounds, CartographicExtent, ClassificationType, Color, HeightReference,
        InterpolationAlgorithm, IntoReference, PassThroughUriResolver, Reference, ShadowMode,
        TimeSeries, Uri, UriResolver,
    };
    pub use crate::writer::{
        BoxWriter, CzmlDocument, ElementWriter, IntervalListWriter, MaterialWriter, PacketWriter,
        PropertyElement, PropertyWriter, RectangleWriter, Scoped,
    };
}
