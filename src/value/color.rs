//! Colour values.
//!
//! A colour is held as normalized channels and written either as `rgba`
//! (integers 0-255) or `rgbaf` (floats 0-1). Both encodings denote the same
//! colour; the caller picks one per write.

use super::{CzmlValue, Interpolatable, ValueKind};
use crate::output::CzmlOutputStream;
use crate::util::{Error, Result, Vec4};

/// Named colour encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorEncoding {
    /// Integer channels 0-255.
    #[default]
    Rgba,
    /// Float channels 0.0-1.0.
    Rgbaf,
}

/// RGBA colour with normalized channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    channels: Vec4,
}

impl Color {
    pub const BLACK: Self = Self { channels: Vec4::new(0.0, 0.0, 0.0, 1.0) };
    pub const WHITE: Self = Self { channels: Vec4::ONE };
    pub const TRANSPARENT: Self = Self { channels: Vec4::ZERO };

    /// Create from 8-bit channels.
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            channels: Vec4::new(
                red as f32 / 255.0,
                green as f32 / 255.0,
                blue as f32 / 255.0,
                alpha as f32 / 255.0,
            ),
        }
    }

    /// Create from integer channels; each must lie in 0..=255.
    pub fn from_rgba(red: i32, green: i32, blue: i32, alpha: i32) -> Result<Self> {
        let channel = |name: &str, v: i32| -> Result<u8> {
            u8::try_from(v).map_err(|_| {
                Error::invalid_argument(format!("{name} channel {v} is outside 0..=255"))
            })
        };
        Ok(Self::from_rgba8(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
            channel("alpha", alpha)?,
        ))
    }

    /// Create from float channels; each must lie in 0.0..=1.0.
    pub fn from_rgbaf(red: f32, green: f32, blue: f32, alpha: f32) -> Result<Self> {
        let channels = Vec4::new(red, green, blue, alpha);
        if !channels.is_finite() || channels.min_element() < 0.0 || channels.max_element() > 1.0 {
            return Err(Error::invalid_argument(format!(
                "colour channels {channels} are outside 0.0..=1.0"
            )));
        }
        Ok(Self { channels })
    }

    /// Channels as 8-bit integers.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = (self.channels * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
    }

    /// Channels as normalized floats.
    pub fn to_rgbaf(&self) -> [f32; 4] {
        self.channels.to_array()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl CzmlValue for Color {
    type Encoding = ColorEncoding;
    const KIND: ValueKind = ValueKind::Color;
    const ARITY: usize = 4;

    fn key(encoding: ColorEncoding) -> &'static str {
        match encoding {
            ColorEncoding::Rgba => "rgba",
            ColorEncoding::Rgbaf => "rgbaf",
        }
    }

    fn write_components(&self, encoding: ColorEncoding, out: &mut CzmlOutputStream) -> Result<()> {
        match encoding {
            ColorEncoding::Rgba => {
                for c in self.to_rgba8() {
                    out.write_value(&c)?;
                }
            }
            ColorEncoding::Rgbaf => {
                for c in self.to_rgbaf() {
                    out.write_value(&c)?;
                }
            }
        }
        Ok(())
    }
}

impl Interpolatable for Color {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_rgbaf_equivalence() {
        let a = Color::from_rgba(255, 0, 0, 255).unwrap();
        let b = Color::from_rgbaf(1.0, 0.0, 0.0, 1.0).unwrap();
        assert_eq!(a.to_rgbaf(), b.to_rgbaf());
        assert_eq!(a.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(b.to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_rgba8_roundtrip() {
        for v in [0u8, 1, 127, 128, 254, 255] {
            let c = Color::from_rgba8(v, v, v, v);
            assert_eq!(c.to_rgba8(), [v; 4]);
        }
    }

    #[test]
    fn test_channel_range() {
        assert!(Color::from_rgba(256, 0, 0, 0).unwrap_err().is_invalid_argument());
        assert!(Color::from_rgba(0, -1, 0, 0).unwrap_err().is_invalid_argument());
        assert!(Color::from_rgbaf(1.5, 0.0, 0.0, 1.0).unwrap_err().is_invalid_argument());
        assert!(Color::from_rgbaf(f32::NAN, 0.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_keys() {
        assert_eq!(Color::key(ColorEncoding::Rgba), "rgba");
        assert_eq!(Color::key(ColorEncoding::Rgbaf), "rgbaf");
        assert_eq!(Color::BLACK.to_rgba8(), [0, 0, 0, 255]);
    }
}
