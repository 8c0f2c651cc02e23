//! Projections from the normalised document into display-ready lists.
//!
//! All functions here are pure: they borrow the document, never mutate it,
//! and return the same ordering for the same input.

use serde::Serialize;

use crate::datasets::glossary;
use crate::document::{AggregateDocument, Entity};
use crate::domain::{Phase, Section};

pub const COMPANY_TREEMAP_LIMIT: usize = 15;
pub const TARGET_GRID_LIMIT: usize = 12;
pub const ISOTOPE_GRID_LIMIT: usize = 15;

/// A company tile: counts come from the active phase bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyDatum {
    pub name: String,
    /// Trials in the active phase; drives tile area.
    pub value: u64,
    /// Trials across every phase.
    pub all_trials: u64,
    pub diagnostic_trials: u64,
    pub therapy_trials: u64,
    pub disease_count: u64,
    pub diseases: Vec<String>,
}

impl CompanyDatum {
    pub const fn is_diagnostic_led(&self) -> bool {
        self.diagnostic_trials > self.therapy_trials
    }
}

/// A target or isotope card in a grid view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridDatum {
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub clinical_trials: u64,
    pub phase1: u64,
    pub phase2: u64,
    pub phase3: u64,
    pub phase_other: u64,
    pub diagnostic_trials: u64,
    pub therapy_trials: u64,
    pub disease_count: u64,
    pub companies_count: u64,
    pub diseases: Vec<String>,
    pub companies: Vec<String>,
}

impl GridDatum {
    /// The count a grid is ordered by when `phase` is the active tab.
    pub const fn metric(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Total => self.clinical_trials,
            Phase::Phase1 => self.phase1,
            Phase::Phase2 => self.phase2,
            Phase::Phase3 => self.phase3,
            Phase::Other => self.phase_other,
        }
    }

    fn from_entity(section: Section, entity: &Entity) -> Self {
        let record = &entity.record;
        let total = &record.total;
        let (full_name, description) = glossary::lookup(section, &entity.name).map_or_else(
            || (entity.name.clone(), String::new()),
            |entry| (entry.full_name.to_string(), entry.description.to_string()),
        );

        Self {
            name: entity.name.clone(),
            full_name,
            description,
            clinical_trials: total.study_counts.all,
            phase1: record.phase_1.study_counts.all,
            phase2: record.phase_2.study_counts.all,
            phase3: record.phase_3.study_counts.all,
            phase_other: record.phase_other.study_counts.all,
            diagnostic_trials: total.study_counts.diagnostic,
            therapy_trials: total.study_counts.therapy,
            disease_count: total.diseases.count,
            companies_count: total.companies.count,
            diseases: total.diseases.list.clone(),
            companies: total.companies.list.clone(),
        }
    }
}

/// Companies with at least one trial in `phase`, most trials first.
pub fn company_view(document: &AggregateDocument, phase: Phase) -> Vec<CompanyDatum> {
    let mut data: Vec<CompanyDatum> = document
        .companies
        .iter()
        .map(|entity| {
            let bucket = entity.record.bucket(phase);
            CompanyDatum {
                name: entity.name.clone(),
                value: bucket.study_counts.all,
                all_trials: entity.record.total.study_counts.all,
                diagnostic_trials: bucket.study_counts.diagnostic,
                therapy_trials: bucket.study_counts.therapy,
                disease_count: bucket.diseases.count,
                diseases: bucket.diseases.list.clone(),
            }
        })
        .filter(|datum| datum.value > 0)
        .collect();

    // Stable: equal values keep document order.
    data.sort_by(|a, b| b.value.cmp(&a.value));
    data
}

/// The largest `limit` companies for the treemap.
pub fn company_treemap(document: &AggregateDocument, phase: Phase, limit: usize) -> Vec<CompanyDatum> {
    let mut data = company_view(document, phase);
    data.truncate(limit);
    data
}

/// Top `limit` entries chosen by total trials, then re-ordered by the active phase.
///
/// Unlike [`company_view`], entries with zero trials are kept.
///
/// The selection never depends on the active tab: an entry outside the total
/// top-N stays hidden even if it leads the selected phase.
pub fn top_n_grid(
    document: &AggregateDocument,
    section: Section,
    phase: Phase,
    limit: usize,
) -> Vec<GridDatum> {
    let mut data = build_grid(document, section);
    data.sort_by(|a, b| b.clinical_trials.cmp(&a.clinical_trials));
    data.truncate(limit);
    data.sort_by(|a, b| b.metric(phase).cmp(&a.metric(phase)));
    data
}

fn build_grid(document: &AggregateDocument, section: Section) -> Vec<GridDatum> {
    document
        .section(section)
        .iter()
        .map(|entity| GridDatum::from_entity(section, entity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{company_treemap, company_view, top_n_grid, GridDatum};
    use crate::document::AggregateDocument;
    use crate::domain::{Phase, Section};
    use crate::error::DataError;

    fn document(json: &str) -> Result<AggregateDocument, DataError> {
        AggregateDocument::from_json_str(json)
    }

    fn company_names(data: &[super::CompanyDatum]) -> Vec<&str> {
        data.iter().map(|datum| datum.name.as_str()).collect()
    }

    fn grid_names(data: &[GridDatum]) -> Vec<&str> {
        data.iter().map(|datum| datum.name.as_str()).collect()
    }

    const COMPANIES: &str = r#"{"company": {
        "Zero": {"total": {"study_counts": {"all": 0}}},
        "Small": {"total": {"study_counts": {"all": 3, "diagnostic": 2, "therapy": 1}},
                  "phase_2": {"study_counts": {"all": 9}}},
        "Large": {"total": {"study_counts": {"all": 30, "diagnostic": 5, "therapy": 25},
                            "diseases": {"count": 1, "list": ["Prostate cancer"]}},
                  "phase_2": {"study_counts": {"all": 4}}},
        "Tied": {"total": {"study_counts": {"all": 3}}}
    }}"#;

    #[test]
    fn zero_trial_companies_are_excluded() -> Result<(), DataError> {
        let data = company_view(&document(COMPANIES)?, Phase::Total);
        assert!(data.iter().all(|datum| datum.name != "Zero"));
        assert!(data.iter().all(|datum| datum.value > 0));
        Ok(())
    }

    #[test]
    fn company_view_sorts_by_value_and_keeps_ties_in_document_order() -> Result<(), DataError> {
        let data = company_view(&document(COMPANIES)?, Phase::Total);
        assert_eq!(company_names(&data), ["Large", "Small", "Tied"]);
        assert!(data.windows(2).all(|pair| pair[0].value >= pair[1].value));
        Ok(())
    }

    #[test]
    fn company_view_reads_the_active_phase_bucket() -> Result<(), DataError> {
        let data = company_view(&document(COMPANIES)?, Phase::Phase2);
        assert_eq!(company_names(&data), ["Small", "Large"]);
        assert_eq!(data[0].value, 9);
        assert_eq!(data[0].all_trials, 3);
        Ok(())
    }

    #[test]
    fn missing_phase_bucket_yields_no_companies() -> Result<(), DataError> {
        let data = company_view(&document(COMPANIES)?, Phase::Phase3);
        assert!(data.is_empty());
        Ok(())
    }

    #[test]
    fn treemap_truncates_after_sorting() -> Result<(), DataError> {
        let data = company_treemap(&document(COMPANIES)?, Phase::Total, 1);
        assert_eq!(company_names(&data), ["Large"]);
        assert!(!data[0].is_diagnostic_led());
        Ok(())
    }

    const TARGETS: &str = r#"{"target": {
        "C": {"total": {"study_counts": {"all": 10}}, "phase_1": {"study_counts": {"all": 99}}},
        "A": {"total": {"study_counts": {"all": 100}}, "phase_1": {"study_counts": {"all": 1}}},
        "B": {"total": {"study_counts": {"all": 90}}, "phase_1": {"study_counts": {"all": 50}}}
    }}"#;

    #[test]
    fn top_n_selects_by_total_then_reorders_by_phase() -> Result<(), DataError> {
        let data = top_n_grid(&document(TARGETS)?, Section::Target, Phase::Phase1, 2);
        assert_eq!(grid_names(&data), ["B", "A"]);
        Ok(())
    }

    #[test]
    fn top_n_on_total_tab_is_plain_total_order() -> Result<(), DataError> {
        let data = top_n_grid(&document(TARGETS)?, Section::Target, Phase::Total, 12);
        assert_eq!(grid_names(&data), ["A", "B", "C"]);
        Ok(())
    }

    #[test]
    fn grid_is_non_increasing_for_every_phase() {
        let doc = crate::datasets::sample_document();
        for section in [Section::Target, Section::Isotope] {
            for phase in Phase::TABS {
                let data = top_n_grid(&doc, section, phase, usize::MAX);
                assert!(data
                    .windows(2)
                    .all(|pair| pair[0].metric(phase) >= pair[1].metric(phase)));
            }
        }
    }

    #[test]
    fn grid_keeps_zero_trial_entries() -> Result<(), DataError> {
        let doc = document(r#"{"isotope": {"Tb-161": {}, "Lu-177": {"total": {"study_counts": {"all": 4}}}}}"#)?;
        let data = top_n_grid(&doc, Section::Isotope, Phase::Total, usize::MAX);
        assert_eq!(grid_names(&data), ["Lu-177", "Tb-161"]);
        assert_eq!(data[1], GridDatum {
            name: "Tb-161".to_string(),
            full_name: "Terbium-161".to_string(),
            description: data[1].description.clone(),
            clinical_trials: 0,
            phase1: 0,
            phase2: 0,
            phase3: 0,
            phase_other: 0,
            diagnostic_trials: 0,
            therapy_trials: 0,
            disease_count: 0,
            companies_count: 0,
            diseases: Vec::new(),
            companies: Vec::new(),
        });
        Ok(())
    }

    #[test]
    fn unknown_names_fall_back_to_raw_name() -> Result<(), DataError> {
        let data = top_n_grid(&document(TARGETS)?, Section::Target, Phase::Total, usize::MAX);
        assert_eq!(data[0].full_name, "A");
        assert!(data[0].description.is_empty());
        Ok(())
    }

    #[test]
    fn projections_are_idempotent() {
        let doc = crate::datasets::sample_document();
        let before = doc.clone();

        for phase in Phase::TABS {
            assert_eq!(company_view(&doc, phase), company_view(&doc, phase));
            assert_eq!(
                top_n_grid(&doc, Section::Target, phase, 12),
                top_n_grid(&doc, Section::Target, phase, 12)
            );
        }
        assert_eq!(doc, before);
    }
}
