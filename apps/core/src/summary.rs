use serde::Serialize;

use crate::document::AggregateDocument;
use crate::domain::Section;

pub const SUMMARY_LEADERS: usize = 5;

/// A compact overview of a loaded document, printed by headless runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub total_trials_processed: u64,
    pub sections: Vec<SectionSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub section: Section,
    pub entries: usize,
    /// `(name, total trials)`, most trials first.
    pub leaders: Vec<(String, u64)>,
}

impl DocumentSummary {
    pub fn from_document(document: &AggregateDocument) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let entities = document.section(section);
                let mut leaders: Vec<(String, u64)> = entities
                    .iter()
                    .map(|entity| (entity.name.clone(), entity.record.total.study_counts.all))
                    .collect();
                leaders.sort_by(|a, b| b.1.cmp(&a.1));
                leaders.truncate(SUMMARY_LEADERS);
                SectionSummary {
                    section,
                    entries: entities.len(),
                    leaders,
                }
            })
            .collect();

        Self {
            total_trials_processed: document.total_trials_processed,
            sections,
        }
    }

    pub fn section(&self, section: Section) -> Option<&SectionSummary> {
        self.sections.iter().find(|summary| summary.section == section)
    }
}
