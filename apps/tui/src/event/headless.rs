use color_eyre::Result;
use radiopharma_core::datasets::sample_document;
use radiopharma_core::projection::{
    company_treemap, top_n_grid, CompanyDatum, GridDatum, COMPANY_TREEMAP_LIMIT,
    ISOTOPE_GRID_LIMIT, TARGET_GRID_LIMIT,
};
use radiopharma_core::summary::DocumentSummary;
use radiopharma_core::{AggregateDocument, LoadState, Phase, Section};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{info, warn};

use crate::config::Settings;
use crate::fetch::{load_document, DataClient, DocumentSource};

/// Everything a headless run prints, for one phase.
#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub source: String,
    pub phase: Phase,
    /// Set when loading failed and the bundled sample was used instead.
    pub error: Option<String>,
    pub summary: DocumentSummary,
    pub companies: Vec<CompanyDatum>,
    pub targets: Vec<GridDatum>,
    pub isotopes: Vec<GridDatum>,
}

impl HeadlessReport {
    pub fn build(state: &LoadState<AggregateDocument>, source: &DocumentSource, phase: Phase) -> Self {
        let sample;
        let document = if let Some(document) = state.data() {
            document
        } else {
            sample = sample_document();
            &sample
        };

        Self {
            source: source.to_string(),
            phase,
            error: state.error().map(str::to_string),
            summary: DocumentSummary::from_document(document),
            companies: company_treemap(document, phase, COMPANY_TREEMAP_LIMIT),
            targets: top_n_grid(document, Section::Target, phase, TARGET_GRID_LIMIT),
            isotopes: top_n_grid(document, Section::Isotope, phase, ISOTOPE_GRID_LIMIT),
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let title = format!("Radiopharmaceutical Trials ({})", self.phase.label());
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{}", "=".repeat(title.len()));
        let _ = writeln!(out, "Source: {}", self.source);
        if let Some(error) = &self.error {
            let _ = writeln!(out, "{error} (showing sample data)");
        }
        let _ = writeln!(out, "Trials processed: {}", self.summary.total_trials_processed);

        for section in &self.summary.sections {
            let _ = writeln!(
                out,
                "\n{} ({} entries), most trials overall:",
                section.section.label(),
                section.entries
            );
            for (name, count) in &section.leaders {
                let _ = writeln!(out, "- {name}: {count}");
            }
        }

        let _ = writeln!(out, "\nCompanies by {} trials:", self.phase.label());
        for company in &self.companies {
            let _ = writeln!(
                out,
                "- {}: {} (diagnostic {}, therapy {})",
                company.name, company.value, company.diagnostic_trials, company.therapy_trials
            );
        }

        for (heading, grid) in [("Targets", &self.targets), ("Isotopes", &self.isotopes)] {
            let _ = writeln!(out, "\n{heading} by {} trials:", self.phase.label());
            for datum in grid {
                let _ = writeln!(out, "- {}: {}", datum.name, datum.metric(self.phase));
            }
        }

        out
    }
}

/// Load once, print the report, and exit.
pub async fn run_headless(
    settings: &Settings,
    source: &DocumentSource,
    phase: Phase,
    json: bool,
) -> Result<()> {
    info!(%source, phase = phase.as_str(), json, "headless run");
    let client = DataClient::new(settings.timeout)?;

    let result = load_document(&client, source).await;
    if let Err(error) = &result {
        warn!(%error, "document load failed, using sample data");
    }
    let state = LoadState::from_result(result, || Some(sample_document()));
    let report = HeadlessReport::build(&state, source, phase);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::HeadlessReport;
    use crate::fetch::DocumentSource;
    use radiopharma_core::datasets::sample_document;
    use radiopharma_core::{AggregateDocument, DataError, LoadState, Phase};

    #[test]
    fn text_report_lists_every_section() {
        let state = LoadState::Ready(sample_document());
        let report = HeadlessReport::build(&state, &DocumentSource::Sample, Phase::Total);
        let text = report.render_text();

        assert!(text.starts_with("Radiopharmaceutical Trials (All Trials)\n====="));
        assert!(text.contains("Source: bundled sample"));
        for heading in ["Companies (", "Isotopes (", "Targets (", "Targets by", "Isotopes by"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(!text.contains("showing sample data"));
    }

    #[test]
    fn failed_load_reports_the_banner_and_uses_the_sample() {
        let error = DataError::Status { status: 503 };
        let state: LoadState<AggregateDocument> = LoadState::failed(&error, None);
        let report = HeadlessReport::build(&state, &DocumentSource::Sample, Phase::Phase2);

        assert!(report.error.as_deref().is_some_and(|e| e.starts_with("Error Loading Data")));
        assert!(!report.companies.is_empty());
        assert!(report.render_text().contains("(showing sample data)"));
    }

    #[test]
    fn company_rows_follow_the_phase() {
        let state = LoadState::Ready(sample_document());
        let report = HeadlessReport::build(&state, &DocumentSource::Sample, Phase::Phase3);
        assert!(report.companies.iter().all(|company| company.value > 0));
        assert!(report.companies.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn json_report_uses_wire_phase_names() -> Result<(), serde_json::Error> {
        let state = LoadState::Ready(sample_document());
        let report = HeadlessReport::build(&state, &DocumentSource::Sample, Phase::Phase1);
        let json = serde_json::to_value(&report)?;
        assert_eq!(json["phase"], "phase_1");
        assert!(json["error"].is_null());
        Ok(())
    }
}
