//! Time values for CZML.
//!
//! Timestamps are `chrono` UTC date-times. Sampled values carry their times
//! either as ISO 8601 strings or as seconds relative to an `epoch` member;
//! [`TimeEncoding`] selects which.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::{Error, Result};

/// A point in time.
pub type Timestamp = DateTime<Utc>;

/// How sample times are written into time-tagged arrays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEncoding {
    /// Absolute ISO 8601 strings, no `epoch` member.
    Iso8601,

    /// Seconds relative to an `epoch` member written next to the samples.
    /// The epoch is the document epoch if configured, otherwise the first
    /// written sample time.
    #[default]
    EpochSeconds,
}

impl TimeEncoding {
    /// Check if this is absolute (ISO 8601) encoding.
    #[inline]
    pub fn is_iso8601(&self) -> bool {
        matches!(self, Self::Iso8601)
    }

    /// Resolve the epoch to write for a sample set starting at `first`.
    ///
    /// Returns `None` when times are written as absolute strings.
    pub fn resolve_epoch(&self, document_epoch: Option<Timestamp>, first: Timestamp) -> Option<Timestamp> {
        match self {
            Self::Iso8601 => None,
            Self::EpochSeconds => Some(document_epoch.unwrap_or(first)),
        }
    }
}

/// Format a timestamp as CZML ISO 8601 (`2012-08-04T16:00:00Z`).
pub fn format_iso8601(time: &Timestamp) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Seconds from `epoch` to `time` (negative when `time` precedes the epoch).
pub fn seconds_since(epoch: &Timestamp, time: &Timestamp) -> f64 {
    let delta = time.signed_duration_since(*epoch);
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

/// Closed time interval `[start, stop]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeInterval {
    start: Timestamp,
    stop: Timestamp,
}

impl TimeInterval {
    /// Create an interval; `start` must not be after `stop`.
    pub fn new(start: Timestamp, stop: Timestamp) -> Result<Self> {
        if start > stop {
            return Err(Error::invalid_argument(format!(
                "interval start {} is after stop {}",
                format_iso8601(&start),
                format_iso8601(&stop)
            )));
        }
        Ok(Self { start, stop })
    }

    /// Interval start.
    #[inline]
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// Interval stop.
    #[inline]
    pub fn stop(&self) -> Timestamp {
        self.stop
    }

    /// ISO 8601 interval form `start/stop`.
    pub fn to_iso8601(&self) -> String {
        format!("{}/{}", format_iso8601(&self.start), format_iso8601(&self.stop))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(h: u32, m: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2012, 8, 4, h, m, s).unwrap()
    }

    #[test]
    fn test_format_iso8601() {
        assert_eq!(format_iso8601(&t(16, 0, 0)), "2012-08-04T16:00:00Z");
    }

    #[test]
    fn test_seconds_since() {
        assert_eq!(seconds_since(&t(16, 0, 0), &t(16, 1, 30)), 90.0);
        assert_eq!(seconds_since(&t(16, 1, 0), &t(16, 0, 0)), -60.0);

        let half = t(16, 0, 0) + chrono::Duration::milliseconds(500);
        assert!((seconds_since(&t(16, 0, 0), &half) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_interval() {
        let iv = TimeInterval::new(t(16, 0, 0), t(16, 20, 0)).unwrap();
        assert_eq!(iv.to_iso8601(), "2012-08-04T16:00:00Z/2012-08-04T16:20:00Z");

        let err = TimeInterval::new(t(17, 0, 0), t(16, 0, 0)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_resolve_epoch() {
        let first = t(16, 0, 0);
        assert_eq!(TimeEncoding::Iso8601.resolve_epoch(None, first), None);
        assert_eq!(TimeEncoding::EpochSeconds.resolve_epoch(None, first), Some(first));

        let doc = t(12, 0, 0);
        assert_eq!(TimeEncoding::EpochSeconds.resolve_epoch(Some(doc), first), Some(doc));
    }
}
