//! JSON dumps of chronograph splits.
//!
//! Timestamps are written as RFC 3339 strings with nanosecond precision, so
//! parsing a dump gives back exactly the recorded instants.
use crate::chronograph::Chronograph;
use crate::split::{Split, TimingData};

impl Chronograph {
    /// Splits as a JSON array of `{"start", "stop", "label"}` objects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.splits())
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.splits())
    }
}

impl TimingData {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub fn splits_from_json(json: &str) -> Result<Vec<Split>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn timing_data_from_json(json: &str) -> Result<TimingData, serde_json::Error> {
    serde_json::from_str(json)
}
