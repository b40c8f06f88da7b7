//! Value bindings: a literal, time-tagged samples, or a reference.

use super::{
    Bounds, CartographicExtent, ClassificationType, Color, CzmlValue, HeightReference, Reference,
    ShadowMode, Uri,
};
use crate::core::Timestamp;
use crate::util::{DVec2, DVec3, Error, Result};

/// Time-tagged samples of one value kind.
///
/// Dates and values are parallel; dates must be non-decreasing. A window
/// (`start`, `len`) selects the contiguous range that gets written.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries<V> {
    dates: Vec<Timestamp>,
    values: Vec<V>,
    start: usize,
    len: usize,
}

impl<V> TimeSeries<V> {
    /// Create a series covering every sample.
    pub fn new(dates: Vec<Timestamp>, values: Vec<V>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(Error::invalid_argument(format!(
                "{} dates but {} values",
                dates.len(),
                values.len()
            )));
        }
        if let Some(i) = dates.windows(2).position(|w| w[1] < w[0]) {
            return Err(Error::invalid_argument(format!(
                "sample dates decrease at index {}",
                i + 1
            )));
        }
        let len = dates.len();
        Ok(Self { dates, values, start: 0, len })
    }

    /// Restrict to `len` samples starting at `start`, relative to the full
    /// series.
    pub fn slice(mut self, start: usize, len: usize) -> Result<Self> {
        let total = self.dates.len();
        match start.checked_add(len) {
            Some(end) if end <= total => {
                self.start = start;
                self.len = len;
                Ok(self)
            }
            _ => Err(Error::invalid_argument(format!(
                "range {start}+{len} exceeds {total} samples"
            ))),
        }
    }

    /// Number of samples in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First date in the window.
    pub fn first_date(&self) -> Option<Timestamp> {
        self.dates().first().copied()
    }

    /// Dates in the window.
    pub fn dates(&self) -> &[Timestamp] {
        &self.dates[self.start..self.start + self.len]
    }

    /// Values in the window.
    pub fn values(&self) -> &[V] {
        &self.values[self.start..self.start + self.len]
    }

    /// `(date, value)` pairs in the window.
    pub fn iter(&self) -> impl Iterator<Item = (Timestamp, &V)> + '_ {
        self.dates().iter().copied().zip(self.values())
    }
}

impl<V> TryFrom<Vec<(Timestamp, V)>> for TimeSeries<V> {
    type Error = Error;

    fn try_from(samples: Vec<(Timestamp, V)>) -> Result<Self> {
        let (dates, values) = samples.into_iter().unzip();
        Self::new(dates, values)
    }
}

/// How a property value is supplied.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding<V> {
    /// A constant value.
    Literal(V),
    /// Samples the client interpolates between.
    Samples(TimeSeries<V>),
    /// The value of another object's property.
    Reference(Reference),
}

impl<V: CzmlValue> Binding<V> {
    pub fn literal(value: V) -> Self {
        Self::Literal(value)
    }

    /// Build from samples; see [`TimeSeries::new`].
    pub fn samples(dates: Vec<Timestamp>, values: Vec<V>) -> Result<Self> {
        Ok(Self::Samples(TimeSeries::new(dates, values)?))
    }

    /// Build from a window of samples; see [`TimeSeries::slice`].
    pub fn samples_range(
        dates: Vec<Timestamp>,
        values: Vec<V>,
        start: usize,
        len: usize,
    ) -> Result<Self> {
        Ok(Self::Samples(TimeSeries::new(dates, values)?.slice(start, len)?))
    }

    pub fn reference(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl<V> From<Reference> for Binding<V> {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl<V> From<TimeSeries<V>> for Binding<V> {
    fn from(series: TimeSeries<V>) -> Self {
        Self::Samples(series)
    }
}

macro_rules! literal_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Binding<$ty> {
                fn from(value: $ty) -> Self {
                    Self::Literal(value)
                }
            }
        )+
    };
}

literal_from!(
    bool,
    f64,
    i32,
    String,
    Uri,
    Color,
    CartographicExtent,
    Bounds,
    DVec2,
    DVec3,
    HeightReference,
    ShadowMode,
    ClassificationType,
);

impl From<&str> for Binding<String> {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn dates(n: usize) -> Vec<Timestamp> {
        let t0 = Utc.with_ymd_and_hms(2012, 3, 15, 10, 0, 0).unwrap();
        (0..n).map(|i| t0 + Duration::seconds(i as i64 * 60)).collect()
    }

    #[test]
    fn test_series_window() {
        let d = dates(3);
        let s = TimeSeries::new(d.clone(), vec![1.0, 2.0, 3.0]).unwrap().slice(1, 2).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.first_date(), Some(d[1]));
        assert_eq!(s.values(), &[2.0, 3.0]);
        let pairs: Vec<_> = s.iter().collect();
        assert_eq!(pairs, vec![(d[1], &2.0), (d[2], &3.0)]);
    }

    #[test]
    fn test_series_errors() {
        assert!(TimeSeries::new(dates(2), vec![1.0]).unwrap_err().is_invalid_argument());
        let mut d = dates(3);
        d.swap(0, 2);
        assert!(TimeSeries::new(d, vec![1, 2, 3]).unwrap_err().is_invalid_argument());
        let s = TimeSeries::new(dates(3), vec![1, 2, 3]).unwrap();
        assert!(s.clone().slice(2, 2).unwrap_err().is_invalid_argument());
        assert!(s.clone().slice(usize::MAX, 2).is_err());
        assert!(s.slice(3, 0).unwrap().is_empty());
    }

    #[test]
    fn test_equal_dates_allowed() {
        let t = dates(1)[0];
        assert!(TimeSeries::new(vec![t, t], vec![true, false]).is_ok());
    }

    #[test]
    fn test_binding_conversions() {
        assert_eq!(Binding::<f64>::from(10.0), Binding::Literal(10.0));
        assert_eq!(Binding::<String>::from("x"), Binding::Literal("x".to_string()));
        let r = Reference::new("a", "b").unwrap();
        assert_eq!(Binding::<bool>::from(r.clone()), Binding::Reference(r));
        let series: TimeSeries<i32> = vec![(dates(1)[0], 4)].try_into().unwrap();
        assert!(matches!(Binding::<i32>::from(series), Binding::Samples(_)));
    }
}
