//! Scalar and cartesian value kinds.

use super::{CzmlValue, Interpolatable, Plain, ValueKind};
use crate::output::CzmlOutputStream;
use crate::util::{all_finite, DVec2, DVec3, Error, Result};

impl CzmlValue for bool {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::Boolean;
    const ARITY: usize = 1;
    const BARE: bool = true;

    fn key(_: Plain) -> &'static str {
        "boolean"
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(self)
    }
}

impl CzmlValue for f64 {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::Number;
    const ARITY: usize = 1;
    const BARE: bool = true;

    fn key(_: Plain) -> &'static str {
        "number"
    }

    fn validate(&self, _: Plain) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!("number {self} is not finite")))
        }
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(self)
    }
}

impl Interpolatable for f64 {}

impl CzmlValue for i32 {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::Integer;
    const ARITY: usize = 1;
    const BARE: bool = true;

    fn key(_: Plain) -> &'static str {
        "number"
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(self)
    }
}

impl Interpolatable for i32 {}

/// Convert a float offered for an integer property.
///
/// Fails with `InvalidArgument` if the value has a fractional part, is not
/// finite or does not fit in an `i32`.
pub fn integer_from_f64(value: f64) -> Result<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::invalid_argument(format!("{value} is not an integer")));
    }
    if value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(Error::invalid_argument(format!("{value} is out of integer range")));
    }
    Ok(value as i32)
}

impl CzmlValue for String {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::String;
    const ARITY: usize = 1;
    const BARE: bool = true;

    fn key(_: Plain) -> &'static str {
        "string"
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(self.as_str())
    }
}

impl CzmlValue for DVec2 {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::Cartesian;
    const ARITY: usize = 2;

    fn key(_: Plain) -> &'static str {
        "cartesian2"
    }

    fn validate(&self, _: Plain) -> Result<()> {
        if all_finite(&self.to_array()) {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!("cartesian2 {self} is not finite")))
        }
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(&self.x)?;
        out.write_value(&self.y)
    }
}

impl Interpolatable for DVec2 {}

impl CzmlValue for DVec3 {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::Cartesian;
    const ARITY: usize = 3;

    fn key(_: Plain) -> &'static str {
        "cartesian"
    }

    fn validate(&self, _: Plain) -> Result<()> {
        if all_finite(&self.to_array()) {
            Ok(())
        } else {
            Err(Error::invalid_argument(format!("cartesian {self} is not finite")))
        }
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(&self.x)?;
        out.write_value(&self.y)?;
        out.write_value(&self.z)
    }
}

impl Interpolatable for DVec3 {}
