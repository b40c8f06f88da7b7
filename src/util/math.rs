//! Math type re-exports and numeric checks.
//!
//! Cartesian values are written from `glam` double precision vectors, colour
//! channels are held in a single precision `Vec4`.

pub use glam::{DVec2, DVec3, Vec4};

/// Check that every component is finite.
#[inline]
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_finite() {
        assert!(all_finite(&[0.0, -1.5, 2.0]));
        assert!(!all_finite(&[0.0, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
    }
}
