//! CZML writers.
//!
//! - [`CzmlDocument`] - the packet array
//! - [`PacketWriter`] - one packet
//! - [`PropertyWriter`] - one property of a value kind, generic over the kind
//! - [`IntervalListWriter`] - a property split into several intervals
//! - [`schema`] - composite writers (rectangle, box, materials) generated from
//!   property tables
//!
//! Every writer follows the same discipline: `open`, write, `close`. Only the
//! innermost open writer may write; the convenience `write_*_property`
//! methods open, write and close a child in one call.

#[macro_use]
mod macros;
mod document;
mod element;
mod interval;
mod packet;
mod property;
mod scope;

pub mod schema;

pub use document::{CzmlDocument, CZML_VERSION};
pub use element::{ElementWriter, Scoped};
pub use interval::IntervalListWriter;
pub use macros::PropertyInfo;
pub use packet::PacketWriter;
pub use property::{
    BooleanWriter, Cartesian2Writer, CartesianWriter, ClassificationTypeWriter, ColorWriter,
    DistanceDisplayConditionWriter, DoubleWriter, HeightReferenceWriter, IntegerWriter,
    PropertyElement, PropertyWriter, RectangleCoordinatesWriter, ShadowModeWriter, StringWriter,
    UriWriter,
};
pub use schema::{
    BoxWriter, GridMaterialWriter, ImageMaterialWriter, MaterialWriter, RectangleWriter,
    SolidColorMaterialWriter,
};
pub use scope::{PacketCore, ParentScope, PropertyCore, ScopeState};
