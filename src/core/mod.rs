//! Core layer - time values and document settings.
//!
//! This module provides:
//! - [`Timestamp`] / [`TimeInterval`] - Times and availability intervals
//! - [`TimeEncoding`] - How sample times are written
//! - [`WriterSettings`] - Document-wide configuration

mod time;
mod settings;

pub use time::{format_iso8601, seconds_since, TimeEncoding, TimeInterval, Timestamp};
pub use settings::WriterSettings;
