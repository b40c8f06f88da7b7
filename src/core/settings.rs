//! Document-wide writer settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::time::{TimeEncoding, Timestamp};
use crate::util::Result;

/// Settings shared by every writer of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterSettings {
    /// Indent output with newlines.
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set.
    pub indent: usize,
    /// How sample times are written.
    pub time_encoding: TimeEncoding,
    /// Document epoch for relative sample times. When unset, each sample set
    /// uses its first time as epoch.
    pub epoch: Option<Timestamp>,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            time_encoding: TimeEncoding::EpochSeconds,
            epoch: None,
        }
    }
}

impl WriterSettings {
    /// Compact output, default time encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true, ..Self::default() }
    }

    /// Set the sample time encoding.
    pub fn with_time_encoding(mut self, encoding: TimeEncoding) -> Self {
        self.time_encoding = encoding;
        self
    }

    /// Set the document epoch.
    pub fn with_epoch(mut self, epoch: Timestamp) -> Self {
        self.epoch = Some(epoch);
        self
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&text)?;
        tracing::debug!(?settings, "loaded writer settings");
        Ok(settings)
    }

    /// Resolve the epoch for a sample set starting at `first`.
    pub fn sample_epoch(&self, first: Timestamp) -> Option<Timestamp> {
        self.time_encoding.resolve_epoch(self.epoch, first)
    }
}
