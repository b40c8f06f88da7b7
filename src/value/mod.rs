//! Value encoding for CZML properties.
//!
//! Every property value kind implements [`CzmlValue`], which knows the member
//! key each of its encodings is written under and how to emit its components.
//! A literal of a single-component kind is written as that component; a
//! multi-component literal is written as an array; time-tagged samples
//! flatten to `[time, components..., time, components...]`.
//!
//! - [`Binding`] / [`TimeSeries`] - literal, sampled or referenced values
//! - [`Reference`] - references to properties of other objects
//! - [`Color`], [`CartographicExtent`], [`Bounds`] - composite values
//! - [`HeightReference`], [`ShadowMode`], [`ClassificationType`] - enum tokens
//! - [`UriResolver`] - rewriting of URIs before they are embedded

mod binding;
mod bounds;
mod color;
mod enums;
mod extent;
mod primitives;
mod reference;
mod uri;

pub use binding::{Binding, TimeSeries};
pub use bounds::Bounds;
pub use color::{Color, ColorEncoding};
pub use enums::{ClassificationType, HeightReference, InterpolationAlgorithm, ShadowMode};
pub use extent::{CartographicExtent, ExtentEncoding};
pub use primitives::integer_from_f64;
pub use reference::{IntoReference, Reference};
pub use uri::{PassThroughUriResolver, Uri, UriResolver};

use std::fmt;

use crate::output::CzmlOutputStream;
use crate::util::Result;

/// Semantic kind of a property value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Number,
    Integer,
    String,
    Uri,
    Color,
    Cartesian,
    Enum,
    Struct,
    IntervalBoundPair,
    /// A property made of named child properties.
    Composite,
}

/// Encoding of a kind that has only one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plain;

/// A value kind that can be written into a CZML property.
pub trait CzmlValue: Clone {
    /// Named encodings of this kind (`rgba` / `rgbaf` for colours).
    type Encoding: Copy + Default + PartialEq + fmt::Debug;

    /// Semantic kind.
    const KIND: ValueKind;

    /// Number of JSON scalars per value.
    const ARITY: usize;

    /// Whether a literal in the default encoding may be written bare, without
    /// an enclosing object. Only simple JSON types (number, string, boolean)
    /// qualify.
    const BARE: bool = false;

    /// Member key for `encoding`.
    fn key(encoding: Self::Encoding) -> &'static str;

    /// Reject values that cannot be encoded.
    fn validate(&self, _encoding: Self::Encoding) -> Result<()> {
        Ok(())
    }

    /// Emit the value's components, without enclosing array.
    fn write_components(&self, encoding: Self::Encoding, out: &mut CzmlOutputStream) -> Result<()>;

    /// Emit a literal: single component as-is, several as an array.
    fn write_literal(&self, encoding: Self::Encoding, out: &mut CzmlOutputStream) -> Result<()> {
        if Self::ARITY == 1 {
            self.write_components(encoding, out)
        } else {
            out.write_start_sequence()?;
            self.write_components(encoding, out)?;
            out.write_end_sequence()
        }
    }
}

/// Value kinds the client can interpolate between samples.
pub trait Interpolatable: CzmlValue {}
