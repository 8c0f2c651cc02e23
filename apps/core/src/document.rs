use serde::Serialize;
use tracing::debug;

use crate::domain::{Phase, Section};
use crate::error::DataError;
use crate::schema::{Lenient, RawBucket, RawCountedList, RawDocument, RawRecord, RawSection, RawStudyCounts};

/// The aggregate statistics document after normalisation.
///
/// All fields are present; anything missing on the wire is zero or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateDocument {
    pub companies: Vec<Entity>,
    pub isotopes: Vec<Entity>,
    pub targets: Vec<Entity>,
    pub total_trials_processed: u64,
}

/// One named entry of a section, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    pub record: EntityRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntityRecord {
    pub total: PhaseBucket,
    pub phase_1: PhaseBucket,
    pub phase_2: PhaseBucket,
    pub phase_3: PhaseBucket,
    pub phase_other: PhaseBucket,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseBucket {
    pub study_counts: StudyCounts,
    pub nct_ids: CountedList,
    pub diseases: CountedList,
    pub companies: CountedList,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StudyCounts {
    pub all: u64,
    pub diagnostic: u64,
    pub therapy: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountedList {
    pub count: u64,
    pub list: Vec<String>,
}

impl AggregateDocument {
    /// Parses and normalises a response body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DataError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(DataError::NotAnObject);
        }

        let raw: RawDocument = serde_json::from_value(value)?;
        let document = Self::from(raw);
        debug!(
            companies = document.companies.len(),
            isotopes = document.isotopes.len(),
            targets = document.targets.len(),
            "normalised aggregate document"
        );
        Ok(document)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        Self::from_slice(json.as_bytes())
    }

    pub fn section(&self, section: Section) -> &[Entity] {
        match section {
            Section::Company => &self.companies,
            Section::Isotope => &self.isotopes,
            Section::Target => &self.targets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty() && self.isotopes.is_empty() && self.targets.is_empty()
    }
}

impl EntityRecord {
    pub const fn bucket(&self, phase: Phase) -> &PhaseBucket {
        match phase {
            Phase::Total => &self.total,
            Phase::Phase1 => &self.phase_1,
            Phase::Phase2 => &self.phase_2,
            Phase::Phase3 => &self.phase_3,
            Phase::Other => &self.phase_other,
        }
    }
}

impl From<RawDocument> for AggregateDocument {
    fn from(raw: RawDocument) -> Self {
        Self {
            companies: normalize_section(raw.company),
            isotopes: normalize_section(raw.isotope),
            targets: normalize_section(raw.target),
            total_trials_processed: raw
                .metadata
                .into_option()
                .and_then(|metadata| metadata.total_trials_processed.into_option())
                .unwrap_or(0),
        }
    }
}

fn normalize_section(raw: Lenient<RawSection>) -> Vec<Entity> {
    raw.into_option()
        .unwrap_or_default()
        .into_iter()
        .map(|(name, record)| Entity {
            name,
            record: record.into_option().map(EntityRecord::from).unwrap_or_default(),
        })
        .collect()
}

impl From<RawRecord> for EntityRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            total: normalize_bucket(raw.total),
            phase_1: normalize_bucket(raw.phase_1),
            phase_2: normalize_bucket(raw.phase_2),
            phase_3: normalize_bucket(raw.phase_3),
            phase_other: normalize_bucket(raw.phase_other),
        }
    }
}

fn normalize_bucket(raw: Lenient<RawBucket>) -> PhaseBucket {
    let Some(raw) = raw.into_option() else {
        return PhaseBucket::default();
    };

    PhaseBucket {
        study_counts: raw
            .study_counts
            .into_option()
            .map(StudyCounts::from)
            .unwrap_or_default(),
        nct_ids: normalize_list(raw.nct_ids),
        diseases: normalize_list(raw.diseases),
        companies: normalize_list(raw.companies),
    }
}

impl From<RawStudyCounts> for StudyCounts {
    fn from(raw: RawStudyCounts) -> Self {
        Self {
            all: raw.all.into_option().unwrap_or(0),
            diagnostic: raw.diagnostic.into_option().unwrap_or(0),
            therapy: raw.therapy.into_option().unwrap_or(0),
        }
    }
}

fn normalize_list(raw: Lenient<RawCountedList>) -> CountedList {
    let Some(raw) = raw.into_option() else {
        return CountedList::default();
    };

    let list: Vec<String> = raw
        .list
        .into_option()
        .unwrap_or_default()
        .into_iter()
        .filter_map(Lenient::into_option)
        .collect();
    // A count sent without a list is kept; a list sent without a count is counted.
    let count = raw.count.into_option().unwrap_or(list.len() as u64);

    CountedList { count, list }
}
