use serde::{Deserialize, Serialize};

/// Clinical-trial phase a bucket is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Total,
    #[serde(rename = "phase_1")]
    Phase1,
    #[serde(rename = "phase_2")]
    Phase2,
    #[serde(rename = "phase_3")]
    Phase3,
    #[serde(rename = "phase_other")]
    Other,
}

impl Phase {
    /// Phases offered as tabs, in display order.
    pub const TABS: [Self; 4] = [Self::Total, Self::Phase1, Self::Phase2, Self::Phase3];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Phase1 => "phase_1",
            Self::Phase2 => "phase_2",
            Self::Phase3 => "phase_3",
            Self::Other => "phase_other",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Total),
            1 => Some(Self::Phase1),
            2 => Some(Self::Phase2),
            3 => Some(Self::Phase3),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "total" | "all" => Some(Self::Total),
            "phase_1" | "phase1" | "1" => Some(Self::Phase1),
            "phase_2" | "phase2" | "2" => Some(Self::Phase2),
            "phase_3" | "phase3" | "3" => Some(Self::Phase3),
            "phase_other" | "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Total => "All Trials",
            Self::Phase1 => "Phase 1",
            Self::Phase2 => "Phase 2",
            Self::Phase3 => "Phase 3",
            Self::Other => "Other",
        }
    }
}

/// Top-level keys of the aggregate document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Company,
    Isotope,
    Target,
}

impl Section {
    pub const ALL: [Self; 3] = [Self::Company, Self::Isotope, Self::Target];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Isotope => "isotope",
            Self::Target => "target",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Companies",
            Self::Isotope => "Isotopes",
            Self::Target => "Targets",
        }
    }
}
