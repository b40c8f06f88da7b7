//! Cartographic extents.

use super::{CzmlValue, Interpolatable, ValueKind};
use crate::output::CzmlOutputStream;
use crate::util::{all_finite, Error, Result};

/// Unit of a written extent. The member key tells the client which one it
/// receives, so no conversion happens on ingest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtentEncoding {
    /// `wsen`, radians.
    #[default]
    Wsen,
    /// `wsenDegrees`, degrees.
    WsenDegrees,
}

/// West/south/east/north bounds of a region on the globe.
///
/// The struct is unit-agnostic; the encoding chosen at write time names the
/// unit the components are in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CartographicExtent {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl CartographicExtent {
    /// Create an extent.
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north }
    }

    /// Components as `[west, south, east, north]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl CzmlValue for CartographicExtent {
    type Encoding = ExtentEncoding;
    const KIND: ValueKind = ValueKind::Struct;
    const ARITY: usize = 4;

    fn key(encoding: ExtentEncoding) -> &'static str {
        match encoding {
            ExtentEncoding::Wsen => "wsen",
            ExtentEncoding::WsenDegrees => "wsenDegrees",
        }
    }

    fn validate(&self, _: ExtentEncoding) -> Result<()> {
        if all_finite(&self.to_array()) {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!("extent {:?} is not finite", self.to_array())))
        }
    }

    fn write_components(&self, _: ExtentEncoding, out: &mut CzmlOutputStream) -> Result<()> {
        for v in self.to_array() {
            out.write_value(&v)?;
        }
        Ok(())
    }
}

impl Interpolatable for CartographicExtent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(CartographicExtent::key(ExtentEncoding::Wsen), "wsen");
        assert_eq!(CartographicExtent::key(ExtentEncoding::WsenDegrees), "wsenDegrees");
    }

    #[test]
    fn test_validate() {
        let bad = CartographicExtent::new(0.0, f64::NAN, 1.0, 1.0);
        assert!(bad.validate(ExtentEncoding::Wsen).unwrap_err().is_invalid_argument());
    }
}
