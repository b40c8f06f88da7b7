//! Interval-bound pairs (distance display conditions).

use super::{CzmlValue, Interpolatable, Plain, ValueKind};
use crate::output::CzmlOutputStream;
use crate::util::{Error, Result};

/// Lower and upper bound, written as `[lower, upper]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// Create bounds; `lower` must not exceed `upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        let bounds = Self { lower, upper };
        bounds.check()?;
        Ok(bounds)
    }

    fn check(&self) -> Result<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(Error::invalid_argument(format!(
                "bounds [{}, {}] are not finite",
                self.lower, self.upper
            )));
        }
        if self.lower > self.upper {
            return Err(Error::invalid_argument(format!(
                "lower bound {} exceeds upper bound {}",
                self.lower, self.upper
            )));
        }
        Ok(())
    }
}

impl CzmlValue for Bounds {
    type Encoding = Plain;
    const KIND: ValueKind = ValueKind::IntervalBoundPair;
    const ARITY: usize = 2;

    fn key(_: Plain) -> &'static str {
        "distanceDisplayCondition"
    }

    fn validate(&self, _: Plain) -> Result<()> {
        self.check()
    }

    fn write_components(&self, _: Plain, out: &mut CzmlOutputStream) -> Result<()> {
        out.write_value(&self.lower)?;
        out.write_value(&self.upper)
    }
}

impl Interpolatable for Bounds {}
