//! Wire schema of the aggregate statistics endpoint.
//!
//! Every field is optional and wrapped in [`Lenient`], so a value of the
//! wrong JSON type degrades to "absent" instead of failing the whole
//! document. [`crate::document`] turns these into fully-defaulted types.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A value that is `None` when missing *or* when it fails to deserialize as `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lenient<T>(pub Option<T>);

impl<T> Default for Lenient<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Lenient<T> {
    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self(serde_json::from_value(value).ok()))
    }
}

pub type RawSection = IndexMap<String, Lenient<RawRecord>>;

#[derive(Debug, Default, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub company: Lenient<RawSection>,
    #[serde(default)]
    pub isotope: Lenient<RawSection>,
    #[serde(default)]
    pub target: Lenient<RawSection>,
    #[serde(default)]
    pub metadata: Lenient<RawMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMetadata {
    #[serde(default)]
    pub total_trials_processed: Lenient<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub total: Lenient<RawBucket>,
    #[serde(default)]
    pub phase_1: Lenient<RawBucket>,
    #[serde(default)]
    pub phase_2: Lenient<RawBucket>,
    #[serde(default)]
    pub phase_3: Lenient<RawBucket>,
    #[serde(default)]
    pub phase_other: Lenient<RawBucket>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawBucket {
    #[serde(default)]
    pub study_counts: Lenient<RawStudyCounts>,
    #[serde(default)]
    pub nct_ids: Lenient<RawCountedList>,
    #[serde(default)]
    pub diseases: Lenient<RawCountedList>,
    #[serde(default)]
    pub companies: Lenient<RawCountedList>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStudyCounts {
    #[serde(default)]
    pub all: Lenient<u64>,
    #[serde(default)]
    pub diagnostic: Lenient<u64>,
    #[serde(default)]
    pub therapy: Lenient<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCountedList {
    #[serde(default)]
    pub count: Lenient<u64>,
    #[serde(default)]
    pub list: Lenient<Vec<Lenient<String>>>,
}
